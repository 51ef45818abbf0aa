//! Reference color families, like the scales
//! of a design system's palette.

use std::collections::BTreeMap;

use codas::types::Text;

use crate::{Color, Error};

pub mod tailwind;

/// A single rung of a [ColorFamily]'s scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shade {
    /// The shade's key within its family (like `500`).
    pub number: u16,

    /// The shade's color.
    pub color: Color,
}

impl Shade {
    /// Returns the shade numbered `number` with `color`.
    pub const fn new(number: u16, color: Color) -> Self {
        Self { number, color }
    }
}

/// A named, ordered sequence of [Shade]s
/// of increasing nominal darkness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFamily {
    name: Text,
    shades: Vec<Shade>,
}

impl ColorFamily {
    /// Returns a new family named `name` with `shades`,
    /// kept in the order they're given.
    ///
    /// Fails if two shades share a number.
    pub fn try_new(name: Text, shades: Vec<Shade>) -> Result<Self, Error> {
        for (i, shade) in shades.iter().enumerate() {
            if shades[..i].iter().any(|s| s.number == shade.number) {
                return Err(Error::DuplicateShade {
                    family: name,
                    number: shade.number,
                });
            }
        }

        Ok(Self { name, shades })
    }

    /// Returns a new family named `name` from a table
    /// of shade numbers to hex colors, ordered by number.
    pub fn try_from_hex_table(name: Text, table: &BTreeMap<u16, String>) -> Result<Self, Error> {
        let shades = table
            .iter()
            .map(|(number, hex)| Ok(Shade::new(*number, Color::try_from_hex(hex)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        Self::try_new(name, shades)
    }

    /// Returns the family's name (like `blue`).
    pub fn name(&self) -> &Text {
        &self.name
    }

    /// Returns the family's shades, in scale order.
    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    /// Returns the shade numbered `number`, if any.
    pub fn shade(&self, number: u16) -> Option<&Shade> {
        self.shades.iter().find(|shade| shade.number == number)
    }

    /// Returns true if the family has no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColorFamily {
    type Item = &'a Shade;
    type IntoIter = core::slice::Iter<'a, Shade>;

    /// Returns an iterator over the family's shades, in scale order.
    fn into_iter(self) -> Self::IntoIter {
        self.shades.iter()
    }
}

/// An ordered, read-only set of reference [ColorFamily]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct References {
    families: Vec<ColorFamily>,
}

impl References {
    /// Returns the Tailwind CSS v3 palette.
    pub fn tailwind() -> Self {
        tailwind::references()
    }

    /// Returns every family, in reference order.
    pub fn families(&self) -> &[ColorFamily] {
        &self.families
    }

    /// Returns the family named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ColorFamily> {
        self.families
            .iter()
            .find(|family| family.name.as_str() == name)
    }

    /// Returns the number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns true if there are no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl From<Vec<ColorFamily>> for References {
    fn from(families: Vec<ColorFamily>) -> Self {
        Self { families }
    }
}

impl FromIterator<ColorFamily> for References {
    fn from_iter<I: IntoIterator<Item = ColorFamily>>(iter: I) -> Self {
        Self {
            families: iter.into_iter().collect(),
        }
    }
}

/// Returns a family named `name` from `(number, hex)` pairs.
#[cfg(test)]
pub(crate) fn hex_family(name: &str, shades: &[(u16, &str)]) -> ColorFamily {
    let shades = shades
        .iter()
        .map(|(number, hex)| Shade::new(*number, Color::try_from_hex(hex).unwrap()))
        .collect();

    ColorFamily::try_new(name.to_string().into(), shades).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shade(number: u16, hex: &str) -> Shade {
        Shade::new(number, Color::try_from_hex(hex).unwrap())
    }

    #[test]
    fn keeps_shade_order() {
        let family = ColorFamily::try_new(
            "gray".into(),
            vec![
                shade(900, "#111827"),
                shade(50, "#f9fafb"),
                shade(500, "#6b7280"),
            ],
        )
        .unwrap();

        let numbers = family.into_iter().map(|s| s.number).collect::<Vec<_>>();
        assert_eq!(vec![900, 50, 500], numbers);
        assert_eq!(Some(&shade(500, "#6b7280")), family.shade(500));
        assert_eq!(None, family.shade(100));
    }

    #[test]
    fn rejects_duplicate_shades() {
        let result = ColorFamily::try_new(
            "gray".into(),
            vec![shade(50, "#f9fafb"), shade(50, "#6b7280")],
        );

        assert_eq!(
            Err(Error::DuplicateShade {
                family: "gray".into(),
                number: 50
            }),
            result
        );
    }

    #[test]
    fn orders_hex_tables_by_number() {
        let table = BTreeMap::from([
            (900, "#111827".to_string()),
            (50, "#f9fafb".to_string()),
            (500, "#6b7280".to_string()),
        ]);
        let family = ColorFamily::try_from_hex_table("gray".into(), &table).unwrap();

        let numbers = family.into_iter().map(|s| s.number).collect::<Vec<_>>();
        assert_eq!(vec![50, 500, 900], numbers);
    }

    #[test]
    fn rejects_invalid_hex_tables() {
        let table = BTreeMap::from([(50, "#f9fafb".to_string()), (100, "nope".to_string())]);

        assert_eq!(
            Err(Error::InvalidColor {
                value: "nope".into()
            }),
            ColorFamily::try_from_hex_table("gray".into(), &table)
        );
    }

    #[test]
    fn finds_families_by_name() {
        let references: References = vec![
            ColorFamily::try_new("red".into(), vec![shade(500, "#ef4444")]).unwrap(),
            ColorFamily::try_new("blue".into(), vec![shade(500, "#3b82f6")]).unwrap(),
        ]
        .into();

        assert_eq!(2, references.len());
        assert_eq!("blue", references.get("blue").unwrap().name().as_str());
        assert!(references.get("green").is_none());
    }
}
