//! Generated palette asset
//!
//! The palette asset is produced at build time by a Material theme
//! generator and embedded in the binary. It carries two role schemes
//! (`light`, `dark`) keyed by camelCase role name, plus tonal palette
//! tables keyed by tone (0-100):
//!
//! ```json
//! {
//!   "schemes": {
//!     "light": { "primary": "#6750A4", "onPrimary": "#FFFFFF", ... },
//!     "dark":  { "primary": "#D0BCFF", "onPrimary": "#381E72", ... }
//!   },
//!   "palettes": {
//!     "primary": { "0": "#000000", "10": "#21005D", ... }
//!   }
//! }
//! ```
//!
//! Extra schemes (e.g. contrast variants) and unknown top-level keys are
//! ignored.

use crate::error::{Result, ThemeError};
use crate::tokens::SchemeKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tinct_core::Color;

/// The embedded default palette asset
pub const BUILTIN_PALETTE_JSON: &str = include_str!("../assets/material-theme.json");

/// One tonal palette: tone (0 = black .. 100 = white) to color
pub type TonalPalette = IndexMap<u8, Color>;

/// Raw tonal palette tables, carried unchanged into every bundle
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palettes {
    tables: IndexMap<String, TonalPalette>,
}

impl Palettes {
    /// Look up a palette by name (`primary`, `neutral`, ...)
    pub fn palette(&self, name: &str) -> Option<&TonalPalette> {
        self.tables.get(name)
    }

    /// Look up one tone of one palette
    pub fn tone(&self, name: &str, tone: u8) -> Option<Color> {
        self.tables.get(name)?.get(&tone).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[derive(Deserialize)]
struct RawAsset {
    schemes: IndexMap<String, IndexMap<String, String>>,
    #[serde(default)]
    palettes: Palettes,
}

/// A role scheme as read from the asset: role name to parsed color
#[derive(Clone, Debug, PartialEq)]
pub struct RawScheme {
    kind: SchemeKind,
    colors: IndexMap<String, Color>,
}

impl RawScheme {
    pub fn new(kind: SchemeKind, colors: IndexMap<String, Color>) -> Self {
        Self { kind, colors }
    }

    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    pub fn get(&self, role: &str) -> Option<Color> {
        self.colors.get(role).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}

/// Parsed palette asset
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedPalette {
    pub light: RawScheme,
    pub dark: RawScheme,
    pub palettes: Palettes,
}

impl GeneratedPalette {
    /// Parse the embedded asset
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PALETTE_JSON)
    }

    /// Parse a palette asset from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let mut raw: RawAsset = serde_json::from_str(json)?;

        let light = take_scheme(&mut raw.schemes, SchemeKind::Light)?;
        let dark = take_scheme(&mut raw.schemes, SchemeKind::Dark)?;
        for ignored in raw.schemes.keys() {
            tracing::debug!(scheme = %ignored, "palette asset: ignoring extra scheme");
        }

        Ok(Self {
            light,
            dark,
            palettes: raw.palettes,
        })
    }

    pub fn scheme(&self, kind: SchemeKind) -> &RawScheme {
        match kind {
            SchemeKind::Light => &self.light,
            SchemeKind::Dark => &self.dark,
        }
    }
}

fn take_scheme(
    schemes: &mut IndexMap<String, IndexMap<String, String>>,
    kind: SchemeKind,
) -> Result<RawScheme> {
    let entries = schemes
        .shift_remove(kind.as_str())
        .ok_or(ThemeError::MissingScheme(kind))?;

    let mut colors = IndexMap::with_capacity(entries.len());
    for (role, value) in entries {
        let color = value.parse::<Color>().map_err(|source| ThemeError::InvalidColor {
            token: format!("{kind}.{role}"),
            source,
        })?;
        colors.insert(role, color);
    }
    Ok(RawScheme::new(kind, colors))
}
