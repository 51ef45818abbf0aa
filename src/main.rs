use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shades::Metric;
use shades::tool;
use tracing_subscriber::EnvFilter;

/// Derives tonal color families from single colors.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Creates a default `Shades.toml` in the current directory.
    Init,

    /// Renders the theme described by a configuration file.
    Build {
        /// Path to the configuration file (defaults to `Shades.toml`).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Configuration profile merged over `default`.
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Prints the family derived from a single hex color.
    Family {
        /// The color, like `#3490dc`.
        color: String,

        /// Metric used to match the color against the built-in palette.
        #[arg(short, long, value_enum, default_value = "delta-e")]
        metric: Metric,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Init => tool::init().await,
        Command::Build { config, profile } => {
            tool::build::run(config.as_deref(), profile.as_deref()).await
        }
        Command::Family { color, metric } => tool::family::run(&color, metric),
    }
}
