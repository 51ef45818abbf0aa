//! Prints the family derived from a single color.

use std::io::{self, Write};

use crate::{Color, DerivedFamily, Metric, References, derive_family};

/// Runs the family command, printing the family derived
/// from `hex` against the built-in palette to stdout.
pub fn run(hex: &str, metric: Metric) -> io::Result<()> {
    let color = Color::try_from_hex(hex)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let family = derive_family(&color, &References::tailwind(), &metric)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(table(&family).as_bytes())?;
    stdout.flush()
}

/// Returns `family` as a plain-text table.
fn table(family: &DerivedFamily) -> String {
    let mut table = format!(
        "matched {} {} (hue {}, saturation x{:.2})\n",
        family.reference, family.anchor, family.hue, family.saturation_ratio
    );
    table.push_str("number  hexcode  hue  sat  light  lum\n");

    for shade in family {
        let marker = if shade.number == family.anchor { " *" } else { "" };
        table.push_str(&format!(
            "{:>6}  {}  {:>3}  {:>3}  {:>5}  {:>3}{marker}\n",
            shade.number,
            shade.hexcode,
            shade.hue,
            shade.saturation,
            shade.lightness,
            shade.luminance,
        ));
    }

    table
}
