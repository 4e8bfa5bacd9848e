//! Theme resolution
//!
//! Two independent inputs, one output:
//!
//! | mode     | ambient  | resolved |
//! |----------|----------|----------|
//! | `light`  | any      | light    |
//! | `dark`   | any      | dark     |
//! | `system` | `dark`   | dark     |
//! | `system` | other    | light    |
//!
//! Resolution is recomputed synchronously on every input change; there is
//! no pending state.

use crate::ambient::AmbientPreference;
use crate::mode::{ThemeMode, ThemeModeStore};
use crate::registry::SchemeRegistry;
use crate::theme::AppTheme;
use crate::tokens::SchemeKind;
use std::sync::Arc;

/// Pick the bundle for a mode/ambient pair
pub fn resolve(
    registry: &SchemeRegistry,
    mode: ThemeMode,
    ambient: AmbientPreference,
) -> &Arc<AppTheme> {
    match mode {
        ThemeMode::Light => registry.light_theme(),
        ThemeMode::Dark => registry.dark_theme(),
        ThemeMode::System => registry.for_ambient(ambient),
    }
}

/// Snapshot of the theme currently in effect
///
/// `theme` points at one of the registry's two bundles, so
/// [`ResolvedTheme::is_same_theme`] is a pointer comparison. `revision`
/// increases on every effective input change and gives each published
/// snapshot a fresh identity, even when the bundle did not change.
#[derive(Clone, Debug)]
pub struct ResolvedTheme {
    theme: Arc<AppTheme>,
    mode: ThemeMode,
    ambient: AmbientPreference,
    revision: u64,
}

impl ResolvedTheme {
    pub fn theme(&self) -> &Arc<AppTheme> {
        &self.theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn ambient(&self) -> AmbientPreference {
        self.ambient
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn scheme(&self) -> SchemeKind {
        self.theme.scheme_kind()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.dark()
    }

    /// Whether both snapshots resolve to the same bundle
    pub fn is_same_theme(&self, other: &ResolvedTheme) -> bool {
        Arc::ptr_eq(&self.theme, &other.theme)
    }
}

/// Mode + ambient state machine producing [`ResolvedTheme`] snapshots
#[derive(Debug)]
pub struct ThemeResolver {
    registry: Arc<SchemeRegistry>,
    mode: ThemeModeStore,
    ambient: AmbientPreference,
    current: ResolvedTheme,
}

impl ThemeResolver {
    pub fn new(registry: Arc<SchemeRegistry>, mode: ThemeMode, ambient: AmbientPreference) -> Self {
        let theme = Arc::clone(resolve(&registry, mode, ambient));
        Self {
            registry,
            mode: ThemeModeStore::new(mode),
            ambient,
            current: ResolvedTheme {
                theme,
                mode,
                ambient,
                revision: 0,
            },
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn ambient(&self) -> AmbientPreference {
        self.ambient
    }

    /// The snapshot in effect right now
    pub fn resolved(&self) -> &ResolvedTheme {
        &self.current
    }

    /// Apply a mode change. Returns the new snapshot, or `None` when the
    /// mode was already `mode`.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Option<&ResolvedTheme> {
        if !self.mode.set(mode) {
            return None;
        }
        Some(self.recompute())
    }

    /// Apply an ambient change. Returns the new snapshot, or `None` when
    /// the preference is unchanged.
    pub fn set_ambient(&mut self, ambient: AmbientPreference) -> Option<&ResolvedTheme> {
        if self.ambient == ambient {
            return None;
        }
        self.ambient = ambient;
        Some(self.recompute())
    }

    fn recompute(&mut self) -> &ResolvedTheme {
        let mode = self.mode.get();
        let theme = Arc::clone(resolve(&self.registry, mode, self.ambient));
        let previous = self.current.scheme();

        self.current = ResolvedTheme {
            theme,
            mode,
            ambient: self.ambient,
            revision: self.current.revision + 1,
        };
        tracing::debug!(
            %mode,
            ambient = %self.ambient,
            from = %previous,
            to = %self.current.scheme(),
            revision = self.current.revision,
            "theme resolved"
        );
        &self.current
    }
}
