//! Scheme registry
//!
//! Holds the light and dark [`AppTheme`] bundles assembled once from the
//! generated palette asset. Built at startup and shared read-only for the
//! process lifetime; a malformed asset aborts construction instead of
//! producing a partial theme.

use crate::ambient::AmbientPreference;
use crate::assemble::assemble;
use crate::error::Result;
use crate::palette::GeneratedPalette;
use crate::theme::{AppTheme, MaterialSchemes};
use crate::tokens::{ExtensionColors, SchemeKind};
use std::sync::Arc;

/// The two assembled theme bundles
#[derive(Clone, Debug)]
pub struct SchemeRegistry {
    light: Arc<AppTheme>,
    dark: Arc<AppTheme>,
}

impl SchemeRegistry {
    /// Assemble from the embedded palette asset
    pub fn builtin() -> Result<Self> {
        Self::from_palette(&GeneratedPalette::builtin()?, &ExtensionColors::default())
    }

    /// Assemble from palette JSON with the default extension colors
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_palette(&GeneratedPalette::from_json(json)?, &ExtensionColors::default())
    }

    /// Assemble from an already parsed palette
    pub fn from_palette(palette: &GeneratedPalette, extension: &ExtensionColors) -> Result<Self> {
        let schemes = Arc::new(MaterialSchemes {
            light: assemble(&palette.light, extension)?,
            dark: assemble(&palette.dark, extension)?,
        });
        let palettes = Arc::new(palette.palettes.clone());

        tracing::debug!(
            roles = schemes.light.len(),
            palettes = palettes.len(),
            "scheme registry assembled"
        );

        Ok(Self {
            light: Arc::new(AppTheme::new(
                SchemeKind::Light,
                Arc::clone(&schemes),
                Arc::clone(&palettes),
            )),
            dark: Arc::new(AppTheme::new(SchemeKind::Dark, schemes, palettes)),
        })
    }

    pub fn light_theme(&self) -> &Arc<AppTheme> {
        &self.light
    }

    pub fn dark_theme(&self) -> &Arc<AppTheme> {
        &self.dark
    }

    pub fn for_scheme(&self, kind: SchemeKind) -> &Arc<AppTheme> {
        match kind {
            SchemeKind::Light => &self.light,
            SchemeKind::Dark => &self.dark,
        }
    }

    /// Bundle for a raw environment value. Total: anything other than the
    /// exact string `"dark"` selects the light bundle.
    pub fn theme_by_preference(&self, preference: Option<&str>) -> &Arc<AppTheme> {
        self.for_ambient(AmbientPreference::from_raw(preference))
    }

    /// Bundle for an ambient preference; unknown selects light
    pub fn for_ambient(&self, ambient: AmbientPreference) -> &Arc<AppTheme> {
        match ambient {
            AmbientPreference::Dark => &self.dark,
            AmbientPreference::Light | AmbientPreference::Unknown => &self.light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_preference_defaults_to_light() {
        let registry = SchemeRegistry::builtin().unwrap();

        assert!(Arc::ptr_eq(registry.theme_by_preference(Some("dark")), registry.dark_theme()));
        for other in [Some("light"), Some("DARK"), Some("no-preference"), None] {
            assert!(
                Arc::ptr_eq(registry.theme_by_preference(other), registry.light_theme()),
                "{other:?} should select light"
            );
        }
    }

    #[test]
    fn test_bundles_share_palettes_and_schemes() {
        let registry = SchemeRegistry::builtin().unwrap();
        let light = registry.light_theme();
        let dark = registry.dark_theme();

        assert!(!light.dark());
        assert!(dark.dark());
        assert_eq!(light.material_schemes(), dark.material_schemes());
        assert_eq!(light.palettes(), dark.palettes());
        assert_eq!(light.colors(), &light.material_schemes().light);
        assert_eq!(dark.colors(), &dark.material_schemes().dark);
    }
}
