//! Derives tonal color families (like a `50`..`950`
//! design-system scale) from a single input color.
//!
//! An input [Color] is matched against a set of
//! [References] by anything that [MatchesColors];
//! the matched family's shade progression is then
//! re-tinted with the input's hue and saturation by
//! [synthesize], yielding a [DerivedFamily].
extern crate alloc;

use codas::types::Text;

pub mod color;
pub mod family;
pub mod matcher;
pub mod synth;
pub mod theme;
pub mod tool;

pub use color::Color;
pub use family::{ColorFamily, References, Shade};
pub use matcher::{MatchResult, MatchesColors, Metric};
pub use synth::{DerivedFamily, DerivedShade, HueDirective, derive_family, synthesize};

/// An error that occurs while deriving color families.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A color string couldn't be parsed as a hex color.
    InvalidColor { value: Text },

    /// No reference family contained any shades.
    EmptyReferenceSet,

    /// A matched family contained no shades.
    EmptyFamily { family: Text },

    /// A family contained the same shade number twice.
    DuplicateShade { family: Text, number: u16 },

    /// A match named a shade that isn't part of its family.
    MissingAnchor { family: Text, number: u16 },
}

impl alloc::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidColor { value } => write!(f, "invalid color: {value:?}"),
            Error::EmptyReferenceSet => write!(f, "no reference family has any shades"),
            Error::EmptyFamily { family } => write!(f, "family `{family}` has no shades"),
            Error::DuplicateShade { family, number } => {
                write!(f, "family `{family}` repeats shade {number}")
            }
            Error::MissingAnchor { family, number } => {
                write!(f, "family `{family}` has no shade {number}")
            }
        }
    }
}

impl std::error::Error for Error {}
