//! Subcommand implementations
//!
//! Each command writes to the given output so tests can capture it.

use crate::config::TinctConfig;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use tinct_theme::{
    resolve, AmbientPreference, AppColors, AppTheme, ColorRole, GeneratedPalette, ManualAmbient,
    ResolvedTheme, SchemeKind, SchemeRegistry, ThemeDistributor, ThemeMode,
};

/// Token export format
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenFormat {
    #[default]
    Json,
    Css,
}

/// Ambient preference as given on the command line
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliAmbient {
    Light,
    Dark,
    Unknown,
}

impl From<CliAmbient> for AmbientPreference {
    fn from(a: CliAmbient) -> Self {
        match a {
            CliAmbient::Light => AmbientPreference::Light,
            CliAmbient::Dark => AmbientPreference::Dark,
            CliAmbient::Unknown => AmbientPreference::Unknown,
        }
    }
}

/// Build the registry from the configured palette, or the embedded one
pub fn load_registry(config: &TinctConfig) -> Result<Arc<SchemeRegistry>> {
    let registry = match &config.theme.palette {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read palette {}", path.display()))?;
            SchemeRegistry::from_json(&json)
                .with_context(|| format!("Failed to assemble palette {}", path.display()))?
        }
        None => SchemeRegistry::builtin().context("Failed to assemble builtin palette")?,
    };
    Ok(Arc::new(registry))
}

const KEY_ROLES: [ColorRole; 6] = [
    ColorRole::Primary,
    ColorRole::OnPrimary,
    ColorRole::Secondary,
    ColorRole::Background,
    ColorRole::Surface,
    ColorRole::OnSurface,
];

#[derive(Serialize)]
struct ResolveReport<'a> {
    mode: ThemeMode,
    ambient: AmbientPreference,
    scheme: SchemeKind,
    colors: &'a AppColors,
}

/// `tinct resolve`
pub fn resolve_command<W: Write>(
    out: &mut W,
    registry: &SchemeRegistry,
    mode: ThemeMode,
    ambient: AmbientPreference,
    json: bool,
) -> Result<()> {
    let theme = resolve(registry, mode, ambient);
    if json {
        let report = ResolveReport {
            mode,
            ambient,
            scheme: theme.scheme_kind(),
            colors: theme.colors(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<12} {mode}", "mode")?;
    writeln!(out, "{:<12} {ambient}", "ambient")?;
    writeln!(out, "{:<12} {}", "scheme", theme.scheme_kind())?;
    for role in KEY_ROLES {
        writeln!(out, "{:<12} {}", role.key(), theme.color(role))?;
    }
    Ok(())
}

/// `tinct tokens`
pub fn tokens_command<W: Write>(
    out: &mut W,
    registry: &SchemeRegistry,
    scheme: SchemeKind,
    format: TokenFormat,
) -> Result<()> {
    let theme = registry.for_scheme(scheme);
    match format {
        TokenFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &**theme)?;
            writeln!(out)?;
        }
        TokenFormat::Css => write_css(out, theme)?,
    }
    Ok(())
}

fn write_css<W: Write>(out: &mut W, theme: &AppTheme) -> Result<()> {
    writeln!(out, ":root {{")?;
    for (name, value) in theme.colors().to_css_variables() {
        writeln!(out, "  {name}: {value};")?;
    }
    for (name, px) in theme.spacing().iter() {
        writeln!(out, "  --spacing-{name}: {px}px;")?;
    }
    for (name, px) in theme.border_radius().iter() {
        writeln!(out, "  --radius-{name}: {px}px;")?;
    }
    for (name, weight) in theme.fonts().iter() {
        writeln!(out, "  --font-weight-{name}: {};", weight.0)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// `tinct validate`
pub fn validate_command<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let palette = GeneratedPalette::from_json(&json)
        .with_context(|| format!("{} is not a valid palette asset", path.display()))?;
    let registry = SchemeRegistry::from_palette(&palette, &Default::default())
        .with_context(|| format!("{} does not assemble", path.display()))?;

    writeln!(
        out,
        "{}: ok ({} color tokens per scheme, {} tonal palettes)",
        path.display(),
        registry.light_theme().colors().len(),
        palette.palettes.len()
    )?;
    Ok(())
}

/// One replay step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayEvent {
    Mode(ThemeMode),
    Ambient(AmbientPreference),
}

impl std::str::FromStr for ReplayEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((key, value)) = s.split_once('=') else {
            bail!("expected `mode=<mode>` or `ambient=<preference>`, got `{s}`");
        };
        match key {
            "mode" => Ok(Self::Mode(value.parse()?)),
            // Raw environment values: anything but light/dark is unknown
            "ambient" => Ok(Self::Ambient(AmbientPreference::from_raw(Some(value)))),
            other => bail!("unknown replay input `{other}`"),
        }
    }
}

/// `tinct replay`
///
/// Mounts a distributor over a host-driven ambient source and feeds it the
/// events in order, printing every published resolution.
pub fn replay_command<W: Write>(
    out: &mut W,
    registry: Arc<SchemeRegistry>,
    mode: ThemeMode,
    ambient: AmbientPreference,
    events: &[ReplayEvent],
) -> Result<()> {
    let source = ManualAmbient::new(ambient);
    let distributor = ThemeDistributor::mount_with_mode(registry, &source, mode);
    let context = distributor.context();

    let published: Rc<RefCell<Vec<ResolvedTheme>>> = Rc::default();
    let sink = Rc::clone(&published);
    context.subscribe(move |resolved| sink.borrow_mut().push(resolved.clone()))?;

    write_resolution(out, "start", &distributor.resolved())?;
    for event in events {
        let label = match event {
            ReplayEvent::Mode(mode) => {
                context.set_mode(*mode)?;
                format!("mode={mode}")
            }
            ReplayEvent::Ambient(preference) => {
                source.emit(*preference);
                format!("ambient={preference}")
            }
        };

        let batch: Vec<_> = published.borrow_mut().drain(..).collect();
        if batch.is_empty() {
            writeln!(out, "{label:<16} unchanged")?;
        }
        for resolved in &batch {
            write_resolution(out, &label, resolved)?;
        }
    }
    Ok(())
}

fn write_resolution<W: Write>(out: &mut W, label: &str, resolved: &ResolvedTheme) -> Result<()> {
    writeln!(
        out,
        "{label:<16} mode={:<6} ambient={:<7} -> {} (revision {})",
        resolved.mode(),
        resolved.ambient(),
        resolved.scheme(),
        resolved.revision()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::{ThemeError, BUILTIN_PALETTE_JSON};

    fn registry() -> Arc<SchemeRegistry> {
        Arc::new(SchemeRegistry::builtin().unwrap())
    }

    fn run<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_resolve_text() {
        let registry = registry();
        let text = run(|out| {
            resolve_command(out, &registry, ThemeMode::System, AmbientPreference::Dark, false)
        });
        assert!(text.contains("scheme       dark"), "{text}");
        assert!(text.contains("primary      #d0bcff"), "{text}");
    }

    #[test]
    fn test_resolve_json() {
        let registry = registry();
        let text = run(|out| {
            resolve_command(out, &registry, ThemeMode::Light, AmbientPreference::Dark, true)
        });
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["scheme"], "light");
        assert_eq!(json["ambient"], "dark");
        assert_eq!(json["colors"]["primary"], "#6750a4");
    }

    #[test]
    fn test_tokens_css() {
        let registry = registry();
        let css = run(|out| tokens_command(out, &registry, SchemeKind::Light, TokenFormat::Css));
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --on-surface-variant: #49454f;"), "{css}");
        assert!(css.contains("  --spacing-m: 16px;"));
        assert!(css.contains("  --radius-full: 9999px;"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn test_replay_event_parsing() {
        assert_eq!(
            "mode=dark".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::Mode(ThemeMode::Dark)
        );
        assert_eq!(
            "ambient=null".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::Ambient(AmbientPreference::Unknown)
        );
        assert!("mode=auto".parse::<ReplayEvent>().is_err());
        assert!("dark".parse::<ReplayEvent>().is_err());
        assert!("contrast=high".parse::<ReplayEvent>().is_err());
    }

    #[test]
    fn test_replay_scenario() {
        let events = [
            ReplayEvent::Ambient(AmbientPreference::Dark),
            ReplayEvent::Mode(ThemeMode::Light),
            ReplayEvent::Mode(ThemeMode::Light),
            ReplayEvent::Mode(ThemeMode::System),
        ];
        let text = run(|out| {
            replay_command(
                out,
                registry(),
                ThemeMode::System,
                AmbientPreference::Light,
                &events,
            )
        });
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5, "{text}");
        assert!(lines[0].ends_with("-> light (revision 0)"), "{text}");
        assert!(lines[1].ends_with("-> dark (revision 1)"), "{text}");
        assert!(lines[2].ends_with("-> light (revision 2)"), "{text}");
        assert!(lines[3].ends_with("unchanged"), "{text}");
        assert!(lines[4].ends_with("-> dark (revision 3)"), "{text}");
    }

    fn write_asset(dir: &Path, edit: impl FnOnce(&mut serde_json::Value)) -> std::path::PathBuf {
        let mut asset: serde_json::Value = serde_json::from_str(BUILTIN_PALETTE_JSON).unwrap();
        edit(&mut asset);
        let path = dir.join("palette.json");
        fs::write(&path, asset.to_string()).unwrap();
        path
    }

    fn theme_error(err: &anyhow::Error) -> &ThemeError {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<ThemeError>())
            .unwrap_or_else(|| panic!("no theme error in {err:#}"))
    }

    #[test]
    fn test_validate_accepts_builtin_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_asset(dir.path(), |_| {});

        let text = run(|out| validate_command(out, &path));
        assert!(text.contains(": ok (33 color tokens per scheme"), "{text}");
    }

    #[test]
    fn test_validate_reports_missing_role() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_asset(dir.path(), |asset| {
            asset["schemes"]["light"]
                .as_object_mut()
                .unwrap()
                .remove("outlineVariant");
        });

        let err = validate_command(&mut Vec::new(), &path).unwrap_err();
        match theme_error(&err) {
            ThemeError::MissingTokenRole { scheme, role } => {
                assert_eq!(*scheme, SchemeKind::Light);
                assert_eq!(*role, "outlineVariant");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_reports_invalid_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_asset(dir.path(), |asset| {
            asset["schemes"]["dark"]["primary"] = "purple".into();
        });

        let err = validate_command(&mut Vec::new(), &path).unwrap_err();
        assert!(
            matches!(theme_error(&err), ThemeError::InvalidColor { .. }),
            "{err:#}"
        );
    }

    #[test]
    fn test_load_registry_from_configured_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_asset(dir.path(), |asset| {
            asset["schemes"]["light"]["primary"] = "#00677F".into();
        });
        let mut config = TinctConfig::default();
        config.theme.palette = Some(path);

        let registry = load_registry(&config).unwrap();
        assert_eq!(
            registry.light_theme().color(ColorRole::Primary).to_string(),
            "#00677f"
        );
    }

    #[test]
    fn test_load_registry_missing_palette_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = TinctConfig::default();
        config.theme.palette = Some(dir.path().join("absent.json"));

        let err = load_registry(&config).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"), "{err:#}");
    }
}
