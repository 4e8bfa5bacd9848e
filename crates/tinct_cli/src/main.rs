//! Tinct CLI
//!
//! Inspect theme resolution, export design tokens, and validate palette
//! assets.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CliAmbient, ReplayEvent, TokenFormat};
use config::TinctConfig;
use std::io::Write;
use std::path::PathBuf;
use tinct_theme::{SchemeKind, ThemeMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Theme resolution and design-token tooling", long_about = None)]
struct Cli {
    /// Configuration file or directory containing tinct.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (overrides the config file; RUST_LOG wins over both)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a mode and ambient preference to a scheme
    Resolve {
        /// system, light or dark (default: from config)
        #[arg(long)]
        mode: Option<ThemeMode>,

        /// Ambient preference (default: from config, detected if unset)
        #[arg(long, value_enum)]
        ambient: Option<CliAmbient>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export the tokens of one bundle
    Tokens {
        #[arg(long, value_enum, default_value_t = CliScheme::Light)]
        scheme: CliScheme,

        #[arg(long, value_enum, default_value_t = TokenFormat::Json)]
        format: TokenFormat,
    },

    /// Check that a palette asset assembles into both schemes
    Validate {
        /// Palette JSON file
        palette: PathBuf,
    },

    /// Feed mode and ambient changes through a live distributor
    Replay {
        /// Steps such as `ambient=dark` or `mode=light`
        #[arg(required = true)]
        events: Vec<ReplayEvent>,

        #[arg(long)]
        mode: Option<ThemeMode>,

        #[arg(long, value_enum)]
        ambient: Option<CliAmbient>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum CliScheme {
    Light,
    Dark,
}

impl From<CliScheme> for SchemeKind {
    fn from(s: CliScheme) -> Self {
        match s {
            CliScheme::Light => SchemeKind::Light,
            CliScheme::Dark => SchemeKind::Dark,
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TinctConfig::load_or_default(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log.level));
    tracing::debug!(
        mode = %config.theme.mode,
        ambient = ?config.ambient.source,
        palette = ?config.theme.palette,
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Resolve {
            mode,
            ambient,
            json,
        } => {
            let registry = commands::load_registry(&config)?;
            let mode = mode.map_or_else(|| config.mode(), Ok)?;
            let ambient = ambient.map_or_else(|| config.ambient(), Into::into);
            commands::resolve_command(&mut out, &registry, mode, ambient, json)?;
        }
        Commands::Tokens { scheme, format } => {
            let registry = commands::load_registry(&config)?;
            commands::tokens_command(&mut out, &registry, scheme.into(), format)?;
        }
        Commands::Validate { palette } => {
            commands::validate_command(&mut out, &palette)?;
        }
        Commands::Replay {
            events,
            mode,
            ambient,
        } => {
            let registry = commands::load_registry(&config)?;
            let mode = mode.map_or_else(|| config.mode(), Ok)?;
            let ambient = ambient.map_or_else(|| config.ambient(), Into::into);
            commands::replay_command(&mut out, registry, mode, ambient, &events)?;
        }
    }

    out.flush()?;
    Ok(())
}
