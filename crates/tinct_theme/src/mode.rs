//! Theme mode selection
//!
//! The mode is the user's explicit choice. `System` defers to the ambient
//! preference; `Light` and `Dark` pin a scheme regardless of it.

use crate::error::{Result, ThemeError};
use serde::Serialize;
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Explicit theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Holds the current explicit mode
///
/// Lives as long as the distributor that owns it; nothing is persisted.
#[derive(Debug, Default)]
pub struct ThemeModeStore {
    mode: Cell<ThemeMode>,
}

impl ThemeModeStore {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Cell::new(initial),
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Store `next`. Returns false when it equals the current mode.
    pub fn set(&self, next: ThemeMode) -> bool {
        self.mode.replace(next) != next
    }
}
