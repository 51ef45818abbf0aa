//! sRGB colors with hexadecimal, HSL, and luminance views.
use codas::types::Text;
use palette::{FromColor, Hsl, Lab, LinSrgb, RgbHue, Srgb};

use crate::Error;

/// An immutable non-linear sRGB color with
/// 8-bit channels.
///
/// Every transform on a color (like [Color::with_saturation])
/// re-quantizes the result to 8-bit channels, so a color always
/// round-trips through its hexadecimal form unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Returns a color with the given 8-bit channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns a color from a packed `0xRRGGBB` value.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Return a color decoded from a hexadecimal
    /// string containing a non-linear sRGB color.
    ///
    /// Both `#rgb` and `#rrggbb` forms are accepted,
    /// with or without the leading `#`.
    pub fn try_from_hex(hex: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidColor {
            value: hex.to_string().into(),
        };

        // Only plain ASCII hex digits reach the parser.
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let srgb: Srgb<u8> = digits.parse().map_err(|_| invalid())?;

        Ok(srgb.into())
    }

    /// Returns a lowercase `#rrggbb` string
    /// containing this color.
    pub fn to_hex(&self) -> Text {
        format!("#{:x}", Srgb::<u8>::from(*self)).into()
    }

    /// Returns the `(red, green, blue)` channels of this color.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Returns this color in the HSL model.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_color(Srgb::<u8>::from(*self).into_format::<f32>())
    }

    /// Returns this color in the CIE L*a*b* model (D65).
    pub fn to_lab(&self) -> Lab {
        Lab::from_color(Srgb::<u8>::from(*self).into_format::<f32>())
    }

    /// Returns the color nearest to `hsl` in 8-bit sRGB.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Srgb::<f32>::from_color(hsl).into_format::<u8>().into()
    }

    /// Returns the HSL hue of this color in degrees `[0, 360)`,
    /// or `None` if the color is achromatic.
    pub fn hue(&self) -> Option<f32> {
        let hsl = self.to_hsl();
        if hsl.saturation == 0.0 {
            return None;
        }

        Some(hsl.hue.into_positive_degrees())
    }

    /// Returns the HSL saturation of this color, from `0.0` to `1.0`.
    pub fn saturation(&self) -> f32 {
        self.to_hsl().saturation
    }

    /// Returns the HSL lightness of this color, from `0.0` to `1.0`.
    pub fn lightness(&self) -> f32 {
        self.to_hsl().lightness
    }

    /// Returns the relative luminance of this color
    /// as defined by WCAG, from `0.0` to `1.0`.
    pub fn luminance(&self) -> f32 {
        let linear: LinSrgb = Srgb::<u8>::from(*self).into_format::<f32>().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// Returns a copy of this color with the given
    /// HSL `saturation`, clamped to `0.0..=1.0`.
    pub fn with_saturation(&self, saturation: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.saturation = saturation.clamp(0.0, 1.0);
        Self::from_hsl(hsl)
    }

    /// Returns a copy of this color with the given HSL
    /// `hue` in degrees, wrapped into `[0, 360)`.
    pub fn with_hue(&self, hue: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.hue = RgbHue::from_degrees(hue.rem_euclid(360.0));
        Self::from_hsl(hsl)
    }
}

impl alloc::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Srgb<u8>> for Color {
    fn from(value: Srgb<u8>) -> Self {
        Self::from_rgb(value.red, value.green, value.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(value: Color) -> Self {
        Srgb::new(value.red, value.green, value.blue)
    }
}
