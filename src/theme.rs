//! Applies derived color families to a theme,
//! as named variables for a styling layer.

use serde::Deserialize;

use crate::{Color, DerivedShade, Error, MatchesColors, References, derive_family};

/// A thing that receives the shades of a theme.
pub trait ThemeSink {
    /// Sets the variable for `shade` of the color named `name`.
    fn set_shade(&mut self, name: &str, shade: &DerivedShade);

    /// Returns the rendered theme.
    fn render(&self) -> String;
}

/// Renders a theme as CSS custom properties
/// (`--{name}-{number}`) on `:root`.
#[derive(Debug, Default)]
pub struct CssProperties {
    properties: Vec<(String, String)>,
}

impl ThemeSink for CssProperties {
    fn set_shade(&mut self, name: &str, shade: &DerivedShade) {
        self.properties.push((
            format!("--{name}-{}", shade.number),
            shade.hexcode.to_string(),
        ));
    }

    fn render(&self) -> String {
        let mut css = String::from(":root {\n");
        for (property, value) in &self.properties {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

/// Renders a theme as SCSS variables (`${name}-{number}`).
#[derive(Debug, Default)]
pub struct ScssVariables {
    variables: Vec<(String, String)>,
}

impl ThemeSink for ScssVariables {
    fn set_shade(&mut self, name: &str, shade: &DerivedShade) {
        self.variables.push((
            format!("${name}-{}", shade.number),
            shade.hexcode.to_string(),
        ));
    }

    fn render(&self) -> String {
        self.variables
            .iter()
            .map(|(variable, value)| format!("{variable}: {value};\n"))
            .collect()
    }
}

/// The format a theme is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// CSS custom properties ([CssProperties]).
    #[default]
    Css,

    /// SCSS variables ([ScssVariables]).
    Scss,
}

impl OutputFormat {
    /// Returns an empty sink rendering this format.
    pub fn sink(&self) -> Box<dyn ThemeSink> {
        match self {
            OutputFormat::Css => Box::new(CssProperties::default()),
            OutputFormat::Scss => Box::new(ScssVariables::default()),
        }
    }

    /// Returns the preferred file extension of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::Scss => "scss",
        }
    }
}

/// Derives a family for each `(name, hex color)` in `colors`
/// and sets every derived shade on `sink`, in order.
///
/// Stops at the first color that can't be derived.
pub fn apply<'c>(
    colors: impl IntoIterator<Item = (&'c str, &'c str)>,
    references: &References,
    matcher: &impl MatchesColors,
    sink: &mut dyn ThemeSink,
) -> Result<(), Error> {
    for (name, hex) in colors {
        let color = Color::try_from_hex(hex)?;
        let family = derive_family(&color, references, matcher)?;
        tracing::info!(
            "{name}: {color} derived from {} {}",
            family.reference,
            family.anchor
        );

        for shade in &family {
            sink.set_shade(name, shade);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Metric;

    #[test_log::test]
    #[test_log(default_log_filter = "debug")]
    fn applies_css_properties() {
        let mut sink = CssProperties::default();
        apply(
            [("primary", "#2563eb")],
            &References::tailwind(),
            &Metric::DeltaE,
            &mut sink,
        )
        .unwrap();

        let css = sink.render();
        assert!(css.starts_with(":root {\n  --primary-50: #"), "{css}");
        assert!(css.contains("  --primary-600: #2563eb;\n"), "{css}");
        assert!(css.contains("  --primary-950: #"), "{css}");
        assert!(css.ends_with(";\n}\n"), "{css}");
        assert_eq!(13, css.lines().count());
    }

    #[test]
    fn applies_scss_variables() {
        let mut sink = ScssVariables::default();
        apply(
            [("accent", "#ef4444"), ("brand", "#3b82f6")],
            &References::tailwind(),
            &Metric::Hsl,
            &mut sink,
        )
        .unwrap();

        let scss = sink.render();
        let lines = scss.lines().collect::<Vec<_>>();
        assert_eq!(22, lines.len());
        assert_eq!("$accent-50: #fef2f2;", lines[0]);
        assert_eq!("$accent-500: #ef4444;", lines[5]);
        assert_eq!("$brand-500: #3b82f6;", lines[16]);
    }

    #[test]
    fn stops_at_invalid_colors() {
        let mut sink = OutputFormat::Css.sink();
        let result = apply(
            [("primary", "#2563eb"), ("broken", "#nope")],
            &References::tailwind(),
            &Metric::DeltaE,
            sink.as_mut(),
        );

        assert_eq!(
            Err(Error::InvalidColor {
                value: "#nope".into()
            }),
            result
        );
    }

    #[test]
    fn rejects_empty_references() {
        let mut sink = OutputFormat::Scss.sink();
        let result = apply(
            [("primary", "#2563eb")],
            &References::default(),
            &Metric::DeltaE,
            sink.as_mut(),
        );

        assert_eq!(Err(Error::EmptyReferenceSet), result);
        assert_eq!("", sink.render());
    }
}
