//! Token assembly
//!
//! Turns a generated role scheme plus the fixed extension colors into the
//! [`AppColors`] consumers read. Pure and deterministic.

use crate::error::{Result, ThemeError};
use crate::palette::RawScheme;
use crate::tokens::{AppColors, ColorRole, ColorScheme, ExtensionColors};
use indexmap::IndexMap;
use tinct_core::Color;

/// Validate a raw scheme against the closed role set
///
/// Fails with [`ThemeError::MissingTokenRole`] on the first role the asset
/// does not define. Keys outside the role set are dropped.
pub fn complete_scheme(raw: &RawScheme) -> Result<ColorScheme> {
    let scheme = ColorScheme::try_from_fn(raw.kind(), |role| raw.get(role.key())).map_err(
        |role| ThemeError::MissingTokenRole {
            scheme: raw.kind(),
            role: role.key(),
        },
    )?;

    for extra in raw.keys().filter(|k| ColorRole::from_key(k).is_none()) {
        tracing::debug!(scheme = %raw.kind(), role = extra, "assemble: ignoring unknown role");
    }
    Ok(scheme)
}

/// Merge a raw scheme with extension colors
pub fn assemble(raw: &RawScheme, extension: &ExtensionColors) -> Result<AppColors> {
    let scheme = complete_scheme(raw)?;
    Ok(overlay_extension(&scheme, extension))
}

/// Overlay extension colors onto a complete scheme
pub fn overlay_extension(scheme: &ColorScheme, extension: &ExtensionColors) -> AppColors {
    overlay(
        scheme.iter().map(|(role, color)| (role.key(), color)),
        extension.iter(),
    )
}

/// Later entries win on key collision
fn overlay<B, E>(base: B, extension: E) -> AppColors
where
    B: IntoIterator<Item = (&'static str, Color)>,
    E: IntoIterator<Item = (&'static str, Color)>,
{
    let mut entries: IndexMap<&'static str, Color> = base.into_iter().collect();
    for (key, color) in extension {
        if let Some(generated) = entries.insert(key, color) {
            tracing::warn!(
                token = key,
                generated = %generated,
                extension = %color,
                "assemble: extension color overrides generated role"
            );
        }
    }
    AppColors::from_entries(entries)
}
