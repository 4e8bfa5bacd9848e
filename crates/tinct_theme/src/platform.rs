//! Desktop ambient preference detection
//!
//! One-shot queries of the host's light/dark setting. Detection order:
//!
//! 1. `TINCT_COLOR_SCHEME` environment variable (`light` / `dark`)
//! 2. With the `platform-detect` feature: the desktop setting as reported
//!    by [`dark_light`] (appearance on macOS and Windows, the XDG desktop
//!    portal and desktop config files on Linux)
//!
//! Anything that cannot be read or recognized yields
//! [`AmbientPreference::Unknown`]. Change notifications are not observed
//! here; hosts forward them into a [`ManualAmbient`].

use crate::ambient::{AmbientPreference, ManualAmbient};

/// Environment variable overriding detection
pub const COLOR_SCHEME_ENV: &str = "TINCT_COLOR_SCHEME";

/// Map a desktop setting value onto a preference
///
/// Accepts plain `light`/`dark` in any case, and GNOME-style values like
/// `'prefer-dark'` with or without quotes.
pub fn parse_preference_name(raw: &str) -> AmbientPreference {
    let value = raw.trim().trim_matches('\'').to_ascii_lowercase();
    match value.as_str() {
        "dark" | "prefer-dark" => AmbientPreference::Dark,
        "light" | "prefer-light" => AmbientPreference::Light,
        _ => AmbientPreference::Unknown,
    }
}

/// Query the host for its current preference
pub fn detect_ambient_preference() -> AmbientPreference {
    if let Ok(value) = std::env::var(COLOR_SCHEME_ENV) {
        let preference = parse_preference_name(&value);
        tracing::debug!(%preference, "ambient preference from {COLOR_SCHEME_ENV}");
        return preference;
    }

    let preference = detect_os();
    tracing::debug!(%preference, "detected ambient preference");
    preference
}

/// A host-driven source seeded with the detected preference
pub fn system_ambient() -> ManualAmbient {
    ManualAmbient::new(detect_ambient_preference())
}

#[cfg(feature = "platform-detect")]
impl From<dark_light::Mode> for AmbientPreference {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => AmbientPreference::Dark,
            dark_light::Mode::Light => AmbientPreference::Light,
            dark_light::Mode::Unspecified => AmbientPreference::Unknown,
        }
    }
}

#[cfg(feature = "platform-detect")]
fn detect_os() -> AmbientPreference {
    match dark_light::detect() {
        Ok(mode) => mode.into(),
        Err(err) => {
            tracing::warn!(%err, "ambient detection failed");
            AmbientPreference::Unknown
        }
    }
}

#[cfg(not(feature = "platform-detect"))]
fn detect_os() -> AmbientPreference {
    AmbientPreference::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference_name() {
        assert_eq!(parse_preference_name("dark"), AmbientPreference::Dark);
        assert_eq!(parse_preference_name("Dark\n"), AmbientPreference::Dark);
        assert_eq!(parse_preference_name("'prefer-dark'"), AmbientPreference::Dark);
        assert_eq!(parse_preference_name("'prefer-light'"), AmbientPreference::Light);
        assert_eq!(parse_preference_name("'default'"), AmbientPreference::Unknown);
        assert_eq!(parse_preference_name(""), AmbientPreference::Unknown);
    }

    #[cfg(feature = "platform-detect")]
    #[test]
    fn test_desktop_modes_map_to_preferences() {
        assert_eq!(AmbientPreference::from(dark_light::Mode::Dark), AmbientPreference::Dark);
        assert_eq!(AmbientPreference::from(dark_light::Mode::Light), AmbientPreference::Light);
        assert_eq!(
            AmbientPreference::from(dark_light::Mode::Unspecified),
            AmbientPreference::Unknown
        );
    }
}
