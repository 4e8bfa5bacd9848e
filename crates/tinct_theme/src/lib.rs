//! Tinct Theme System
//!
//! Theme resolution and design-token distribution: two immutable theme
//! bundles (light and dark) assembled from a generated Material palette,
//! a user-selected mode, and the ambient preference of the environment.
//!
//! # Overview
//!
//! - **Assembly**: [`SchemeRegistry`] builds both bundles once from the
//!   palette asset and fails loudly on a missing color role
//! - **Resolution**: [`ThemeResolver`] maps `(mode, ambient)` to exactly one
//!   bundle
//! - **Distribution**: [`ThemeDistributor`] publishes every change to
//!   subscribers and hands consumers a [`ThemeContext`] through a
//!   [`tinct_core::Scope`]
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tinct_core::Scope;
//! use tinct_theme::{
//!     use_app_theme, use_theme_mode, AmbientPreference, ColorRole, ManualAmbient,
//!     SchemeRegistry, ThemeDistributor, ThemeMode,
//! };
//!
//! let registry = Arc::new(SchemeRegistry::builtin()?);
//! let ambient = ManualAmbient::new(AmbientPreference::Light);
//! let distributor = ThemeDistributor::mount(Arc::clone(&registry), &ambient);
//! let scope = distributor.provide(&Scope::root());
//!
//! // System mode follows the environment
//! ambient.emit(AmbientPreference::Dark);
//! assert!(use_app_theme(&scope)?.dark());
//!
//! // An explicit mode wins
//! use_theme_mode(&scope)?.set_theme_mode(ThemeMode::Light)?;
//! let theme = use_app_theme(&scope)?;
//! assert!(Arc::ptr_eq(&theme, registry.light_theme()));
//! let _primary = theme.color(ColorRole::Primary);
//! # Ok::<(), tinct_theme::ThemeError>(())
//! ```
//!
//! # Tokens
//!
//! - [`AppColors`]: the 29 Material roles plus success/info/warning/default
//! - [`SpacingScale`], [`RadiusScale`]: fixed pixel scales
//! - [`ElevationPresets`]: shadow parameters for levels 0 to 5
//! - [`FontWeights`]: regular, medium, semibold, bold

pub mod accessors;
pub mod ambient;
pub mod assemble;
pub mod distributor;
pub mod error;
pub mod mode;
pub mod palette;
pub mod platform;
pub mod registry;
pub mod resolver;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use accessors::{
    use_app_theme, use_border_radius, use_colors, use_elevation, use_fonts, use_spacing,
    use_theme_context, use_theme_mode, ThemeModeControl, TokenRef,
};
pub use ambient::{
    AmbientCallback, AmbientObserver, AmbientPreference, AmbientSource, AmbientSubscription,
    FixedAmbient, ManualAmbient,
};
pub use distributor::{ThemeContext, ThemeDistributor};
pub use error::{Result, ThemeError};
pub use mode::{ThemeMode, ThemeModeStore};
pub use palette::{GeneratedPalette, Palettes, RawScheme, TonalPalette, BUILTIN_PALETTE_JSON};
pub use platform::{detect_ambient_preference, parse_preference_name, system_ambient};
pub use registry::SchemeRegistry;
pub use resolver::{resolve, ResolvedTheme, ThemeResolver};
pub use theme::{AppTheme, MaterialSchemes};
pub use tokens::*;
