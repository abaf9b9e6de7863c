//! Presentation helpers: download, clipboard, console summary.
//!
//! These sit on the host's interactive surface, which may be missing or may
//! refuse. Failures are logged and the call returns without effect; nothing
//! here reports back to the registry. Content always comes from
//! [`OutputFormat::render`], never from a second renderer.

use std::io::{self, Write};

use ghost_core::{GhostEntry, GhostMap};
use tabled::{settings::Style, Table, Tabled};

use crate::error::SurfaceError;
use crate::format::{ExportOptions, OutputFormat};

/// The host's interactive surface (browser window, desktop shell, …).
pub trait HostSurface {
    /// Offer `content` to the user as a file called `file_name`.
    fn save_file(&mut self, file_name: &str, mime_type: &str, content: &str) -> Result<(), SurfaceError>;

    /// Place `content` on the system clipboard.
    fn write_clipboard(&mut self, content: &str) -> Result<(), SurfaceError>;
}

/// Render `entries` and hand them to the surface as `ghost-ids.<ext>`.
pub fn download(
    surface: Option<&mut dyn HostSurface>,
    entries: &GhostMap,
    format: OutputFormat,
    options: &ExportOptions,
) {
    let Some(surface) = surface else {
        tracing::error!("{}", SurfaceError::Unsupported("file download"));
        return;
    };
    let content = match format.render(entries, options) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("failed to render {format} export: {err}");
            return;
        }
    };
    let file_name = format.default_file_name();
    match surface.save_file(&file_name, format.mime_type(), &content) {
        Ok(()) => tracing::info!("downloaded {file_name}"),
        Err(err) => tracing::error!("failed to download {file_name}: {err}"),
    }
}

/// Render `entries` and place them on the clipboard.
pub fn copy_to_clipboard(
    surface: Option<&mut dyn HostSurface>,
    entries: &GhostMap,
    format: OutputFormat,
    options: &ExportOptions,
) {
    let Some(surface) = surface else {
        tracing::error!("{}", SurfaceError::Unsupported("clipboard"));
        return;
    };
    let content = match format.render(entries, options) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("failed to render {format} export: {err}");
            return;
        }
    };
    match surface.write_clipboard(&content) {
        Ok(()) => tracing::info!("ghost ids copied to clipboard ({format} format)"),
        Err(err) => tracing::error!("failed to copy to clipboard: {err}"),
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "key")]
    key: String,
    #[tabled(rename = "component")]
    component: String,
    #[tabled(rename = "alias")]
    alias: String,
    #[tabled(rename = "render index")]
    render_index: u32,
    #[tabled(rename = "ghost id")]
    ghost_id: String,
}

/// Write a table of `details` followed by both encodings to `out`.
pub fn print_summary<W: Write>(
    details: &[GhostEntry],
    options: &ExportOptions,
    out: &mut W,
) -> io::Result<()> {
    let entries: GhostMap = details
        .iter()
        .map(|e| (e.composite_key(), e.ghost_id.clone()))
        .collect();

    writeln!(out, "Ghost Registry Export")?;
    writeln!(out, "=====================")?;
    writeln!(out)?;

    if details.is_empty() {
        writeln!(out, "No ghost ids registered.")?;
    } else {
        let rows: Vec<SummaryRow> = details
            .iter()
            .map(|e| SummaryRow {
                key: e.composite_key(),
                component: e.component_name.clone(),
                alias: e.alias.clone().unwrap_or_default(),
                render_index: e.render_index,
                ghost_id: e.ghost_id.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        writeln!(out, "{table}")?;
    }

    for format in OutputFormat::all() {
        let rendered = format
            .render(&entries, options)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out)?;
        writeln!(out, "{}:", format_label(*format))?;
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "JSON",
        OutputFormat::TypeScript => "TypeScript",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_core::{GhostRegistry, Mode};

    #[derive(Default)]
    struct RecordingSurface {
        files: Vec<(String, String, String)>,
        clipboard: Option<String>,
        deny: bool,
    }

    impl HostSurface for RecordingSurface {
        fn save_file(&mut self, file_name: &str, mime_type: &str, content: &str) -> Result<(), SurfaceError> {
            if self.deny {
                return Err(SurfaceError::Denied("user cancelled".to_string()));
            }
            self.files.push((file_name.to_string(), mime_type.to_string(), content.to_string()));
            Ok(())
        }

        fn write_clipboard(&mut self, content: &str) -> Result<(), SurfaceError> {
            if self.deny {
                return Err(SurfaceError::Denied("permission denied".to_string()));
            }
            self.clipboard = Some(content.to_string());
            Ok(())
        }
    }

    fn registry() -> GhostRegistry {
        let mut reg = GhostRegistry::new(Mode::Development);
        reg.get_or_create("LoginButton", None);
        reg.get_or_create("LoginForm", Some("submit"));
        reg
    }

    #[test]
    fn download_saves_rendered_json() {
        let reg = registry();
        let options = ExportOptions::default();
        let mut surface = RecordingSurface::default();
        download(Some(&mut surface), &reg.list(), OutputFormat::Json, &options);
        assert_eq!(surface.files.len(), 1);
        let (name, mime, content) = &surface.files[0];
        assert_eq!(name, "ghost-ids.json");
        assert_eq!(mime, "application/json");
        assert_eq!(content, &OutputFormat::Json.render(&reg.list(), &options).unwrap());
    }

    #[test]
    fn clipboard_gets_typed_module() {
        let reg = registry();
        let mut surface = RecordingSurface::default();
        copy_to_clipboard(Some(&mut surface), &reg.list(), OutputFormat::TypeScript, &ExportOptions::default());
        let copied = surface.clipboard.expect("clipboard written");
        assert!(copied.contains("'LoginForm-submit': 'gh-LoginForm-submit-"));
    }

    #[test]
    fn missing_or_denied_surface_is_not_fatal() {
        let reg = registry();
        let options = ExportOptions::default();
        download(None, &reg.list(), OutputFormat::Json, &options);
        copy_to_clipboard(None, &reg.list(), OutputFormat::Json, &options);

        let mut denied = RecordingSurface { deny: true, ..RecordingSurface::default() };
        download(Some(&mut denied), &reg.list(), OutputFormat::TypeScript, &options);
        copy_to_clipboard(Some(&mut denied), &reg.list(), OutputFormat::Json, &options);
        assert!(denied.files.is_empty());
        assert!(denied.clipboard.is_none());
    }

    #[test]
    fn unsupported_capability_names_itself() {
        assert_eq!(
            SurfaceError::Unsupported("clipboard").to_string(),
            "clipboard is not available in this environment"
        );
    }

    #[test]
    fn summary_lists_entries_and_both_encodings() {
        let reg = registry();
        let mut out = Vec::new();
        print_summary(&reg.details(), &ExportOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("render index"));
        assert!(text.contains("LoginForm-submit"));
        assert!(text.contains("JSON:"));
        assert!(text.contains("TypeScript:"));
        assert!(text.contains("export type GhostKey"));
    }

    #[test]
    fn summary_of_empty_registry() {
        let mut out = Vec::new();
        print_summary(&[], &ExportOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No ghost ids registered."));
        assert!(text.contains("{}"));
    }
}
