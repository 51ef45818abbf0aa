//! Finds the reference [Shade] closest to an input [Color].

use palette::color_difference::Ciede2000;
use serde::Deserialize;

use crate::{Color, ColorFamily, Error, References, Shade};

/// A thing that matches [Color]s against [References].
pub trait MatchesColors {
    /// Returns the family in `references` closest to `color`,
    /// along with the shade in that family closest to `color`.
    ///
    /// The returned shade is always one of the family's shades.
    fn closest<'a>(
        &self,
        color: &Color,
        references: &'a References,
    ) -> Result<MatchResult<'a>, Error>;
}

/// The family and shade a [MatchesColors] found
/// closest to some input color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult<'a> {
    /// The family closest to the input color.
    pub family: &'a ColorFamily,

    /// The shade in `family` closest to the input color's lightness.
    pub shade: &'a Shade,

    /// The metric distance between the input color
    /// and the closest shade of `family`.
    pub distance: f32,
}

/// Matches colors by CIEDE2000 color difference in CIE L*a*b*.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeltaE;

impl MatchesColors for DeltaE {
    fn closest<'a>(
        &self,
        color: &Color,
        references: &'a References,
    ) -> Result<MatchResult<'a>, Error> {
        let lab = color.to_lab();
        closest_by(color, references, |shade| lab.difference(shade.to_lab()))
    }
}

/// Matches colors by Euclidean distance in the HSL cylinder.
///
/// Hue and saturation are treated as polar coordinates so that
/// hues wrap around, and achromatic colors (which have no hue)
/// sit on the cylinder's axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct HslDistance;

impl HslDistance {
    fn point(color: &Color) -> [f32; 3] {
        let hsl = color.to_hsl();
        let hue = hsl.hue.into_positive_degrees().to_radians();
        [
            hsl.saturation * hue.cos(),
            hsl.saturation * hue.sin(),
            hsl.lightness,
        ]
    }
}

impl MatchesColors for HslDistance {
    fn closest<'a>(
        &self,
        color: &Color,
        references: &'a References,
    ) -> Result<MatchResult<'a>, Error> {
        let [x, y, z] = Self::point(color);
        closest_by(color, references, |shade| {
            let [sx, sy, sz] = Self::point(shade);
            ((x - sx).powi(2) + (y - sy).powi(2) + (z - sz).powi(2)).sqrt()
        })
    }
}

/// A color similarity metric used to match colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// CIEDE2000 color difference ([DeltaE]).
    #[default]
    DeltaE,

    /// Euclidean distance in HSL ([HslDistance]).
    Hsl,
}

impl MatchesColors for Metric {
    fn closest<'a>(
        &self,
        color: &Color,
        references: &'a References,
    ) -> Result<MatchResult<'a>, Error> {
        match self {
            Metric::DeltaE => DeltaE.closest(color, references),
            Metric::Hsl => HslDistance.closest(color, references),
        }
    }
}

/// Returns the family owning the shade nearest to `color`
/// by `distance`, and the shade in that family nearest
/// to `color`'s lightness.
///
/// Ties resolve to the earliest family in `references`,
/// and then to the lowest shade number.
fn closest_by<'a>(
    color: &Color,
    references: &'a References,
    distance: impl Fn(&Color) -> f32,
) -> Result<MatchResult<'a>, Error> {
    let mut closest: Option<(&ColorFamily, f32)> = None;
    for family in references.families() {
        for shade in family {
            let d = distance(&shade.color);
            if closest.is_none_or(|(_, closest_d)| d < closest_d) {
                closest = Some((family, d));
            }
        }
    }

    let (family, distance) = closest.ok_or(Error::EmptyReferenceSet)?;

    let lightness = color.lightness();
    let mut shade = &family.shades()[0];
    let mut shade_d = (shade.color.lightness() - lightness).abs();
    for candidate in family {
        let d = (candidate.color.lightness() - lightness).abs();
        if d < shade_d || (d == shade_d && candidate.number < shade.number) {
            shade = candidate;
            shade_d = d;
        }
    }

    tracing::trace!(
        "closest to {color}: {} {} (distance {distance:.3})",
        family.name(),
        shade.number,
    );

    Ok(MatchResult {
        family,
        shade,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::hex_family;

    #[test]
    fn matches_exact_palette_colors() {
        let references = References::tailwind();
        let color = Color::try_from_hex("#2563eb").unwrap();

        for metric in [Metric::DeltaE, Metric::Hsl] {
            let result = metric.closest(&color, &references).unwrap();
            assert_eq!("blue", result.family.name().as_str(), "{metric:?}");
            assert_eq!(600, result.shade.number, "{metric:?}");
            assert_eq!(0.0, result.distance, "{metric:?}");
        }
    }

    #[test]
    fn matches_nearby_colors() {
        let references = References::tailwind();

        // A slightly shifted red-500.
        let color = Color::try_from_hex("#ee4646").unwrap();
        let result = DeltaE.closest(&color, &references).unwrap();
        assert_eq!("red", result.family.name().as_str());
        assert_eq!(500, result.shade.number);
    }

    #[test]
    fn picks_shade_by_lightness() {
        let references: References = vec![hex_family(
            "blue",
            &[(100, "#dbeafe"), (500, "#3b82f6"), (900, "#1e3a8a")],
        )]
        .into();

        // A dark, desaturated blue is closest to
        // the family's darkest shade by lightness.
        let color = Color::try_from_hex("#1c2640").unwrap();
        let result = DeltaE.closest(&color, &references).unwrap();
        assert_eq!(900, result.shade.number);
    }

    #[test]
    fn breaks_ties_by_order() {
        let references: References = vec![
            hex_family("first", &[(500, "#3b82f6")]),
            hex_family("second", &[(500, "#3b82f6")]),
        ]
        .into();
        let color = Color::try_from_hex("#3b82f6").unwrap();
        let result = HslDistance.closest(&color, &references).unwrap();
        assert_eq!("first", result.family.name().as_str());

        // Shades equally far in lightness resolve
        // to the lowest shade number.
        let references: References =
            vec![hex_family("twins", &[(700, "#606060"), (300, "#606060")])].into();
        let color = Color::try_from_hex("#404040").unwrap();
        let result = HslDistance.closest(&color, &references).unwrap();
        assert_eq!(300, result.shade.number);
    }

    #[test]
    fn rejects_empty_references() {
        let color = Color::try_from_hex("#3b82f6").unwrap();

        assert_eq!(
            Err(Error::EmptyReferenceSet),
            DeltaE.closest(&color, &References::default())
        );

        let references: References = vec![hex_family("empty", &[])].into();
        assert_eq!(
            Err(Error::EmptyReferenceSet),
            HslDistance.closest(&color, &references)
        );
    }

    #[test]
    fn skips_empty_families() {
        let references: References = vec![
            hex_family("empty", &[]),
            hex_family("green", &[(500, "#22c55e")]),
        ]
        .into();
        let color = Color::try_from_hex("#3b82f6").unwrap();
        let result = DeltaE.closest(&color, &references).unwrap();
        assert_eq!("green", result.family.name().as_str());
    }
}
