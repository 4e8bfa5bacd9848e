//! Color tokens for theming
//!
//! A [`ColorScheme`] is one complete set of semantic role colors generated
//! for a light or dark variant. [`ExtensionColors`] adds status roles that
//! do not depend on the variant, and [`AppColors`] is the overlay of the two
//! that consumers read.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use tinct_core::Color;

/// Light or dark scheme variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    #[default]
    Light,
    Dark,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 2] = [SchemeKind::Light, SchemeKind::Dark];

    /// Asset key for this variant
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite variant
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for SchemeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

macro_rules! color_roles {
    ($($variant:ident => $key:literal,)*) => {
        /// Semantic color roles every generated scheme must define
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        pub enum ColorRole {
            $($variant,)*
        }

        impl ColorRole {
            /// Every role, in asset order
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant,)*];

            /// Number of roles
            pub const COUNT: usize = Self::ALL.len();

            /// camelCase token name used by the palette asset and consumers
            pub fn key(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $key,)*
                }
            }

            /// Look a role up by its token name
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(ColorRole::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

color_roles! {
    Primary => "primary",
    OnPrimary => "onPrimary",
    PrimaryContainer => "primaryContainer",
    OnPrimaryContainer => "onPrimaryContainer",
    Secondary => "secondary",
    OnSecondary => "onSecondary",
    SecondaryContainer => "secondaryContainer",
    OnSecondaryContainer => "onSecondaryContainer",
    Tertiary => "tertiary",
    OnTertiary => "onTertiary",
    TertiaryContainer => "tertiaryContainer",
    OnTertiaryContainer => "onTertiaryContainer",
    Error => "error",
    OnError => "onError",
    ErrorContainer => "errorContainer",
    OnErrorContainer => "onErrorContainer",
    Background => "background",
    OnBackground => "onBackground",
    Surface => "surface",
    OnSurface => "onSurface",
    SurfaceVariant => "surfaceVariant",
    OnSurfaceVariant => "onSurfaceVariant",
    Outline => "outline",
    OutlineVariant => "outlineVariant",
    Shadow => "shadow",
    Scrim => "scrim",
    InverseSurface => "inverseSurface",
    InverseOnSurface => "inverseOnSurface",
    InversePrimary => "inversePrimary",
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.key())
    }
}

/// Complete set of role colors for one variant
///
/// Completeness is structural: there is one slot per [`ColorRole`], so a
/// light and a dark scheme always share the same key set.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    kind: SchemeKind,
    colors: [Color; ColorRole::COUNT],
}

impl ColorScheme {
    /// Build from a per-role lookup. Returns the first role the lookup
    /// cannot supply.
    pub fn try_from_fn<F>(kind: SchemeKind, mut lookup: F) -> Result<Self, ColorRole>
    where
        F: FnMut(ColorRole) -> Option<Color>,
    {
        let mut colors = [Color::TRANSPARENT; ColorRole::COUNT];
        for (slot, role) in colors.iter_mut().zip(ColorRole::ALL) {
            *slot = lookup(*role).ok_or(*role)?;
        }
        Ok(Self { kind, colors })
    }

    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        self.colors[role as usize]
    }

    /// `(role, color)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}

/// Status roles layered over every scheme
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StatusRole {
    Success,
    Info,
    Warning,
    /// Neutral/error fallback status
    Default,
}

impl StatusRole {
    pub const ALL: [StatusRole; 4] = [
        StatusRole::Success,
        StatusRole::Info,
        StatusRole::Warning,
        StatusRole::Default,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Default => "default",
        }
    }
}

/// Variant-independent status colors
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionColors {
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub default: Color,
}

impl ExtensionColors {
    /// Get a status color by role
    pub fn get(&self, role: StatusRole) -> Color {
        match role {
            StatusRole::Success => self.success,
            StatusRole::Info => self.info,
            StatusRole::Warning => self.warning,
            StatusRole::Default => self.default,
        }
    }

    /// `(name, color)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        StatusRole::ALL.iter().map(move |role| (role.key(), self.get(*role)))
    }
}

impl Default for ExtensionColors {
    fn default() -> Self {
        Self {
            success: Color::from_hex(0x2E7D32),
            info: Color::from_hex(0x0288D1),
            warning: Color::from_hex(0xED6C02),
            default: Color::from_hex(0xD32F2F),
        }
    }
}

/// Role and status colors merged into one lookup
///
/// Only produced by [`crate::assemble`], which guarantees every
/// [`ColorRole`] and [`StatusRole`] key is present.
#[derive(Clone, Debug, PartialEq)]
pub struct AppColors {
    entries: IndexMap<&'static str, Color>,
}

impl AppColors {
    pub(crate) fn from_entries(entries: IndexMap<&'static str, Color>) -> Self {
        Self { entries }
    }

    /// Get a role color
    pub fn role(&self, role: ColorRole) -> Color {
        self.entries[role.key()]
    }

    /// Get a status color
    pub fn status(&self, role: StatusRole) -> Color {
        self.entries[role.key()]
    }

    /// Get a color by token name
    pub fn get(&self, key: &str) -> Option<Color> {
        self.entries.get(key).copied()
    }

    /// Token names in stable order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(name, color)` pairs in stable order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSS custom properties, keyed by kebab-case variable name
    ///
    /// ```ignore
    /// let vars = theme.colors.to_css_variables();
    /// // vars["--on-surface-variant"] == "#49454f"
    /// ```
    pub fn to_css_variables(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(key, color)| (format!("--{}", kebab_case(key)), color.to_hex_string()))
            .collect()
    }
}

impl Serialize for AppColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, color) in &self.entries {
            map.serialize_entry(key, color)?;
        }
        map.end()
    }
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
