//! This module contains implementations for the command-line tools.

pub mod build;
pub mod family;

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::fs;

use crate::theme::OutputFormat;
use crate::{ColorFamily, Metric, References};

/// Default configuration profile.
const DEFAULT_CONFIG_PROFILE: &str = "default";

/// Default rendered theme path, relative to the configuration file.
const DEFAULT_OUTPUT_PATH: &str = "shades.css";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "Shades.toml";

/// Default configuration file contents.
pub const DEFAULT_CONFIG_TOML: &str = r##"# Shades theme configuration

[default]
# Color matching metric: "delta-e" or "hsl".
metric = "delta-e"
# Theme format: "css" or "scss".
format = "css"
output = "shades.css"

# Each color becomes a family of variables, like `--primary-500`.
[default.colors]
primary = "#3490dc"
accent = "#f6993f"

[production]
output = "dist/shades.css"

# Reference families replace the built-in Tailwind palette when present.
# [references.brand]
# 50 = "#f5f7ff"
# 500 = "#3b5bdb"
# 900 = "#1c2a6b"
"##;

/// Raw TOML structure of a `Shades.toml` file.
///
/// This is an internal representation used during deserialization.
/// External consumers should use [Config] (returned by [load_config]).
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    references: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(flatten)]
    profiles: BTreeMap<String, ConfigProfile>,
}

/// Profile-level configuration in a [Config].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigProfile {
    /// Theme colors, by name.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub metric: Option<Metric>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub output: Option<String>,
}

impl ConfigProfile {
    /// Merges this profile with another, with `other`
    /// taking precedence, and returning the merged profile.
    fn merge(&self, other: &ConfigProfile) -> ConfigProfile {
        let mut merged = self.clone();

        if other.metric.is_some() {
            merged.metric = other.metric;
        }
        if other.format.is_some() {
            merged.format = other.format;
        }
        if other.output.is_some() {
            merged.output = other.output.clone();
        }

        for (name, hex) in &other.colors {
            merged.colors.insert(name.clone(), hex.clone());
        }

        merged
    }

    pub fn metric(&self) -> Metric {
        self.metric.unwrap_or_default()
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

/// A loaded and resolved `Shades.toml` configuration.
#[derive(Debug)]
pub struct Config {
    pub profile: ConfigProfile,
    pub references: References,
    pub config_dir: PathBuf,
}

/// Loads, validates, and merges a `Shades.toml` configuration file.
///
/// Reads the file at `config_path`, then delegates to [load_config_from_str].
pub async fn load_config(config_path: &Path, profile: Option<&str>) -> io::Result<Config> {
    let config_dir = config_path.parent().unwrap_or(Path::new(".")).to_path_buf();
    let toml_str = fs::read_to_string(config_path).await?;
    load_config_from_str(&toml_str, config_dir, profile)
}

/// Parses, validates, and merges a `Shades.toml` configuration string.
///
/// Merges the selected profile over the default, and resolves
/// the reference families (falling back to the built-in palette).
fn load_config_from_str(
    toml_str: &str,
    config_dir: PathBuf,
    profile: Option<&str>,
) -> io::Result<Config> {
    let profile_name = profile.unwrap_or(DEFAULT_CONFIG_PROFILE);

    let raw: RawConfig = toml::from_str(toml_str)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid TOML: {}", e)))?;

    let default_profile = raw.profiles.get(DEFAULT_CONFIG_PROFILE).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("missing default profile: {}", DEFAULT_CONFIG_PROFILE),
        )
    })?;

    let merged = if profile_name == DEFAULT_CONFIG_PROFILE {
        default_profile.clone()
    } else {
        let selected = raw.profiles.get(profile_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("missing selected profile: {}", profile_name),
            )
        })?;
        default_profile.merge(selected)
    };

    let references = if raw.references.is_empty() {
        References::tailwind()
    } else {
        references_from_toml(&raw.references)?
    };

    Ok(Config {
        profile: merged,
        references,
        config_dir,
    })
}

/// Returns the reference families declared in a `[references]` table.
fn references_from_toml(
    tables: &BTreeMap<String, BTreeMap<String, String>>,
) -> io::Result<References> {
    let mut families = Vec::with_capacity(tables.len());

    for (name, table) in tables {
        let mut shades = BTreeMap::new();
        for (number, hex) in table {
            let number = number.parse::<u16>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid shade number in references.{}: {}", name, number),
                )
            })?;
            shades.insert(number, hex.clone());
        }

        let family = ColorFamily::try_from_hex_table(name.clone().into(), &shades)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        tracing::debug!("Loaded reference family `{}`", name);
        families.push(family);
    }

    Ok(families.into())
}

/// Creates a default configuration file in the current directory if one doesn't exist.
pub async fn init() -> io::Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);

    if fs::try_exists(config_path).await? {
        tracing::warn!("{} already exists", DEFAULT_CONFIG_FILE);
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG_TOML).await?;
    tracing::info!("Created {}", DEFAULT_CONFIG_FILE);

    Ok(())
}
