//! Synthesizes a new color family by transplanting an input
//! color's hue and saturation onto a matched reference family.

use codas::types::Text;

use crate::{Color, Error, MatchResult, MatchesColors, References};

/// How a derived family's hues are set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HueDirective {
    /// Every shade takes exactly this hue, in degrees.
    Absolute(f32),

    /// Every shade's own hue is shifted by this many degrees.
    Delta(f32),
}

impl HueDirective {
    /// Returns the directive that moves `match_hue` onto `input_hue`.
    ///
    /// A zero difference pins every shade to `match_hue`.
    pub fn between(input_hue: f32, match_hue: f32) -> Self {
        let difference = input_hue - match_hue;
        if difference == 0.0 {
            HueDirective::Absolute(match_hue)
        } else {
            HueDirective::Delta(difference)
        }
    }

    /// Returns a copy of `color` with this directive's hue.
    ///
    /// Achromatic colors are shifted as if their hue was `0`.
    pub fn apply(&self, color: &Color) -> Color {
        match *self {
            HueDirective::Absolute(hue) => color.with_hue(hue),
            HueDirective::Delta(delta) => color.with_hue(color.hue().unwrap_or(0.0) + delta),
        }
    }
}

impl alloc::fmt::Display for HueDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HueDirective::Absolute(hue) => write!(f, "{hue:.2}"),
            HueDirective::Delta(delta) => write!(f, "{delta:+.2}"),
        }
    }
}

/// A shade of a [DerivedFamily].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedShade {
    /// The number of the reference shade this was derived from.
    pub number: u16,

    /// The derived color.
    pub color: Color,

    /// Lowercase `#rrggbb` encoding of `color`.
    pub hexcode: Text,

    /// Hue in whole degrees (`0` if achromatic).
    pub hue: u16,

    /// Saturation in whole percent.
    pub saturation: u8,

    /// Lightness in whole percent.
    pub lightness: u8,

    /// Relative luminance in whole percent.
    pub luminance: u8,
}

impl From<(u16, Color)> for DerivedShade {
    fn from((number, color): (u16, Color)) -> Self {
        let hsl = color.to_hsl();
        Self {
            number,
            color,
            hexcode: color.to_hex(),
            hue: color.hue().unwrap_or(0.0).round() as u16,
            saturation: (hsl.saturation * 100.0).round() as u8,
            lightness: (hsl.lightness * 100.0).round() as u8,
            luminance: (color.luminance() * 100.0).round() as u8,
        }
    }
}

/// A color family derived from an input color.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedFamily {
    /// Name of the reference family this was derived from.
    pub reference: Text,

    /// Number of the shade holding the input color.
    pub anchor: u16,

    /// The hue transform applied to the reference shades.
    pub hue: HueDirective,

    /// The saturation scale applied to the reference shades.
    pub saturation_ratio: f32,

    /// Derived shades, in the reference family's order.
    pub shades: Vec<DerivedShade>,
}

impl DerivedFamily {
    /// Returns the derived shade numbered `number`, if any.
    pub fn shade(&self, number: u16) -> Option<&DerivedShade> {
        self.shades.iter().find(|shade| shade.number == number)
    }
}

impl<'a> IntoIterator for &'a DerivedFamily {
    type Item = &'a DerivedShade;
    type IntoIter = core::slice::Iter<'a, DerivedShade>;

    /// Returns an iterator over the derived shades, in scale order.
    fn into_iter(self) -> Self::IntoIter {
        self.shades.iter()
    }
}

/// Returns a family derived from `color` by matching it
/// against `references` with `matcher` and [synthesize]-ing
/// the result.
pub fn derive_family(
    color: &Color,
    references: &References,
    matcher: &impl MatchesColors,
) -> Result<DerivedFamily, Error> {
    let matched = matcher.closest(color, references)?;
    synthesize(color, &matched)
}

/// Returns a family derived from `color` and the
/// reference family it `matched`.
///
/// Each of the matched family's shades is rescaled by the
/// ratio of `color`'s saturation to the matched shade's,
/// and rotated by the hue difference between them. The
/// matched shade itself is replaced by `color`.
pub fn synthesize(color: &Color, matched: &MatchResult<'_>) -> Result<DerivedFamily, Error> {
    let family = matched.family;
    let anchor = matched.shade;

    if family.is_empty() {
        return Err(Error::EmptyFamily {
            family: family.name().clone(),
        });
    }
    if family.shade(anchor.number).is_none() {
        return Err(Error::MissingAnchor {
            family: family.name().clone(),
            number: anchor.number,
        });
    }

    let hue = HueDirective::between(
        color.hue().unwrap_or(0.0),
        anchor.color.hue().unwrap_or(0.0),
    );
    let saturation_ratio = saturation_ratio(color, &anchor.color);

    tracing::debug!(
        "deriving {color} from {} {}: hue {hue}, saturation x{saturation_ratio:.3}",
        family.name(),
        anchor.number,
    );

    let shades = family
        .into_iter()
        .map(|shade| {
            if shade.number == anchor.number {
                return DerivedShade::from((shade.number, *color));
            }

            let saturation = scaled_saturation(&shade.color, saturation_ratio);
            let derived = hue.apply(&shade.color.with_saturation(saturation));
            tracing::trace!("{}: {} -> {derived}", shade.number, shade.color);

            DerivedShade::from((shade.number, derived))
        })
        .collect();

    Ok(DerivedFamily {
        reference: family.name().clone(),
        anchor: anchor.number,
        hue,
        saturation_ratio,
        shades,
    })
}

/// Returns the ratio of `color`'s saturation to `reference`'s,
/// or `1.0` if `reference` has no saturation to scale.
fn saturation_ratio(color: &Color, reference: &Color) -> f32 {
    let ratio = color.saturation() / reference.saturation();
    if ratio.is_finite() { ratio } else { 1.0 }
}

/// Returns `color`'s saturation scaled by `ratio`,
/// or full saturation if that scales to nothing.
fn scaled_saturation(color: &Color, ratio: f32) -> f32 {
    let saturation = color.saturation() * ratio;
    if saturation.is_finite() && saturation != 0.0 {
        saturation
    } else {
        1.0
    }
}
