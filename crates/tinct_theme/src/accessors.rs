//! Consumer accessors
//!
//! Thin lookups over the [`ThemeContext`] provided in a [`Scope`]. Each
//! one fails with [`ThemeError::NoProviderInScope`] when no mounted
//! distributor is reachable, rather than falling back to a default theme.

use crate::distributor::ThemeContext;
use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::theme::AppTheme;
use crate::tokens::{AppColors, ElevationPresets, FontWeights, RadiusScale, SpacingScale};
use std::ops::Deref;
use std::sync::Arc;
use tinct_core::Scope;

/// The context provided by the nearest enclosing distributor
pub fn use_theme_context(scope: &Scope) -> Result<ThemeContext> {
    let context = scope
        .lookup::<ThemeContext>()
        .ok_or(ThemeError::NoProviderInScope)?;
    if !context.is_live() {
        return Err(ThemeError::NoProviderInScope);
    }
    Ok(ThemeContext::clone(&context))
}

/// Current mode plus a setter
#[derive(Clone, Debug)]
pub struct ThemeModeControl {
    pub theme_mode: ThemeMode,
    context: ThemeContext,
}

impl ThemeModeControl {
    pub fn set_theme_mode(&self, mode: ThemeMode) -> Result<()> {
        self.context.set_mode(mode)
    }

    /// Switch to the scheme opposite the one currently shown
    pub fn toggle(&self) -> Result<()> {
        self.context.toggle()
    }
}

pub fn use_theme_mode(scope: &Scope) -> Result<ThemeModeControl> {
    let context = use_theme_context(scope)?;
    Ok(ThemeModeControl {
        theme_mode: context.mode()?,
        context,
    })
}

/// The resolved bundle
pub fn use_app_theme(scope: &Scope) -> Result<Arc<AppTheme>> {
    use_theme_context(scope)?.theme()
}

/// Borrowed view into one token group of a shared bundle
///
/// Keeps the bundle alive; dereferences to the group.
#[derive(Clone)]
pub struct TokenRef<T> {
    theme: Arc<AppTheme>,
    project: fn(&AppTheme) -> &T,
}

impl<T> TokenRef<T> {
    fn new(theme: Arc<AppTheme>, project: fn(&AppTheme) -> &T) -> Self {
        Self { theme, project }
    }

    /// The bundle the group belongs to
    pub fn theme(&self) -> &Arc<AppTheme> {
        &self.theme
    }
}

impl<T> Deref for TokenRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        (self.project)(&self.theme)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TokenRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&**self, f)
    }
}

fn project<T>(scope: &Scope, project: fn(&AppTheme) -> &T) -> Result<TokenRef<T>> {
    Ok(TokenRef::new(use_app_theme(scope)?, project))
}

pub fn use_colors(scope: &Scope) -> Result<TokenRef<AppColors>> {
    project(scope, AppTheme::colors)
}

pub fn use_spacing(scope: &Scope) -> Result<TokenRef<SpacingScale>> {
    project(scope, AppTheme::spacing)
}

pub fn use_border_radius(scope: &Scope) -> Result<TokenRef<RadiusScale>> {
    project(scope, AppTheme::border_radius)
}

pub fn use_elevation(scope: &Scope) -> Result<TokenRef<ElevationPresets>> {
    project(scope, AppTheme::elevation)
}

pub fn use_fonts(scope: &Scope) -> Result<TokenRef<FontWeights>> {
    project(scope, AppTheme::fonts)
}
