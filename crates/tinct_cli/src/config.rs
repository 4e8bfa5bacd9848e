//! Tinct configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tinct_theme::{detect_ambient_preference, AmbientPreference, ThemeMode};

/// Default configuration file name
pub const CONFIG_FILE: &str = "tinct.toml";

/// Top-level Tinct configuration (tinct.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TinctConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ambient: AmbientConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Startup theme settings
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Initial mode: system, light or dark
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Alternate generated palette asset (relative to the config file)
    #[serde(default)]
    pub palette: Option<PathBuf>,
}

fn default_mode() -> String {
    ThemeMode::System.as_str().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            palette: None,
        }
    }
}

/// Where the ambient preference comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientSetting {
    /// Ask the desktop environment
    #[default]
    Detect,
    Light,
    Dark,
    Unknown,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AmbientConfig {
    #[serde(default)]
    pub source: AmbientSetting,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl TinctConfig {
    /// Load configuration from a file or a directory containing tinct.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = Self::file_path(path);

        if !config_path.exists() {
            anyhow::bail!("No {CONFIG_FILE} found at {}", path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        // Palette paths are relative to the config file
        if let (Some(palette), Some(dir)) = (&config.theme.palette, config_path.parent()) {
            if palette.is_relative() {
                config.theme.palette = Some(dir.join(palette));
            }
        }

        Ok(config)
    }

    /// Load from `path` if given, else from ./tinct.toml when present, else
    /// defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TinctConfig = toml::from_str(content)?;
        config.mode()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// The configured startup mode
    pub fn mode(&self) -> Result<ThemeMode> {
        self.theme
            .mode
            .parse::<ThemeMode>()
            .with_context(|| format!("Invalid [theme] mode in {CONFIG_FILE}"))
    }

    /// The ambient preference to start from
    pub fn ambient(&self) -> AmbientPreference {
        match self.ambient.source {
            AmbientSetting::Detect => detect_ambient_preference(),
            AmbientSetting::Light => AmbientPreference::Light,
            AmbientSetting::Dark => AmbientPreference::Dark,
            AmbientSetting::Unknown => AmbientPreference::Unknown,
        }
    }

    fn file_path(path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        }
    }
}
