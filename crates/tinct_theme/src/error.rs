//! Theme error types

use crate::tokens::SchemeKind;
use thiserror::Error;

/// Theme-related errors
///
/// Every variant describes a structural defect rather than a transient
/// condition, so none of them are retried.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A generated scheme lacks a required semantic color role
    #[error("{scheme} scheme is missing required color role `{role}`")]
    MissingTokenRole { scheme: SchemeKind, role: &'static str },

    /// The palette asset has no scheme of the given kind
    #[error("palette asset has no `{0}` scheme")]
    MissingScheme(SchemeKind),

    /// A color value in the palette asset could not be parsed
    #[error("invalid color for `{token}`: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: tinct_core::ColorParseError,
    },

    /// Theme mode outside `system | light | dark`
    #[error("invalid theme mode `{0}` (expected system, light or dark)")]
    InvalidMode(String),

    /// A consumer asked for the theme without a distributor in scope
    #[error("no theme distributor in scope; mount a ThemeDistributor and provide its context")]
    NoProviderInScope,

    /// The palette asset is not valid JSON of the expected shape
    #[error("palette asset could not be parsed: {0}")]
    Asset(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
