//! Renders a theme stylesheet from a `Shades.toml` configuration file.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::theme;
use crate::tool::{Config, DEFAULT_CONFIG_FILE};

/// Runs the build command with the given configuration file and optional profile.
///
/// If `config_file` is `None`, looks for `Shades.toml` in the current directory.
pub async fn run(config_file: Option<&Path>, profile: Option<&str>) -> io::Result<()> {
    let config_path = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let config = crate::tool::load_config(config_path, profile).await?;

    if config.profile.colors.is_empty() {
        tracing::warn!("No colors configured in {}", config_path.display());
    }

    let target = target_path(&config);
    let rendered = render(&config)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&target, rendered).await?;
    tracing::info!(
        "Wrote {} color families to {}",
        config.profile.colors.len(),
        target.display()
    );

    Ok(())
}

/// Returns the theme described by `config`, rendered in its format.
fn render(config: &Config) -> io::Result<String> {
    let profile = &config.profile;
    tracing::debug!(
        "Rendering {:?} with {:?} matching against {} reference families",
        profile.format(),
        profile.metric(),
        config.references.len()
    );

    let mut sink = profile.format().sink();
    theme::apply(
        profile
            .colors
            .iter()
            .map(|(name, hex)| (name.as_str(), hex.as_str())),
        &config.references,
        &profile.metric(),
        sink.as_mut(),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    Ok(sink.render())
}

/// Returns the output path of `config`, relative to its directory.
fn target_path(config: &Config) -> PathBuf {
    config.config_dir.join(config.profile.output())
}
