//! The assembled theme bundle

use crate::palette::Palettes;
use crate::tokens::*;
use serde::Serialize;
use std::sync::Arc;

/// Both assembled color sets, carried by every bundle
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialSchemes {
    pub light: AppColors,
    pub dark: AppColors,
}

impl MaterialSchemes {
    pub fn for_scheme(&self, kind: SchemeKind) -> &AppColors {
        match kind {
            SchemeKind::Light => &self.light,
            SchemeKind::Dark => &self.dark,
        }
    }
}

/// One complete, immutable set of visual tokens
///
/// Exactly two exist per [`crate::SchemeRegistry`]; consumers share them
/// through `Arc` and never get mutable access.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTheme {
    dark: bool,
    colors: AppColors,
    spacing: SpacingScale,
    border_radius: RadiusScale,
    elevation: ElevationPresets,
    fonts: FontWeights,
    palettes: Arc<Palettes>,
    material_schemes: Arc<MaterialSchemes>,
}

impl AppTheme {
    pub(crate) fn new(
        kind: SchemeKind,
        schemes: Arc<MaterialSchemes>,
        palettes: Arc<Palettes>,
    ) -> Self {
        Self {
            dark: kind.is_dark(),
            colors: schemes.for_scheme(kind).clone(),
            spacing: SpacingScale::default(),
            border_radius: RadiusScale::default(),
            elevation: ElevationPresets::default(),
            fonts: FontWeights::default(),
            palettes,
            material_schemes: schemes,
        }
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    pub fn scheme_kind(&self) -> SchemeKind {
        if self.dark {
            SchemeKind::Dark
        } else {
            SchemeKind::Light
        }
    }

    pub fn colors(&self) -> &AppColors {
        &self.colors
    }

    pub fn spacing(&self) -> &SpacingScale {
        &self.spacing
    }

    pub fn border_radius(&self) -> &RadiusScale {
        &self.border_radius
    }

    pub fn elevation(&self) -> &ElevationPresets {
        &self.elevation
    }

    pub fn fonts(&self) -> &FontWeights {
        &self.fonts
    }

    /// Raw tonal palettes from the generated asset
    pub fn palettes(&self) -> &Palettes {
        &self.palettes
    }

    /// Light and dark color sets, regardless of which one this bundle uses
    pub fn material_schemes(&self) -> &MaterialSchemes {
        &self.material_schemes
    }

    /// Shortcut for `colors().role(role)`
    pub fn color(&self, role: ColorRole) -> tinct_core::Color {
        self.colors.role(role)
    }
}
