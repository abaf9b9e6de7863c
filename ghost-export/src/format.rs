//! Output formats and rendering options.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use ghost_core::config::DEFAULT_ATTRIBUTE;
use ghost_core::GhostMap;

use crate::error::RenderError;
use crate::json::export_as_json;
use crate::module::export_as_typed_module;

/// The two encodings a snapshot can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    TypeScript,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::TypeScript]
    }

    /// Render `entries`. Each variant calls exactly one renderer.
    pub fn render(self, entries: &GhostMap, options: &ExportOptions) -> Result<String, RenderError> {
        match self {
            OutputFormat::Json => export_as_json(entries, options.pretty),
            OutputFormat::TypeScript => export_as_typed_module(entries, options),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::TypeScript => "ts",
        }
    }

    /// `ghost-ids.json` / `ghost-ids.ts`
    pub fn default_file_name(self) -> String {
        format!("ghost-ids.{}", self.extension())
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::TypeScript => "text/typescript",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "ts" | "typescript" => Ok(OutputFormat::TypeScript),
            other => Err(format!(
                "unknown format '{other}'; expected: json, ts, typescript"
            )),
        }
    }
}

/// Which parts of the typed module to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleVariant {
    /// Header, constant table and key type only.
    Minimal,
    /// Minimal plus the exact and prefix selector accessors.
    #[default]
    Full,
}

/// Knobs shared by both renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Two-space indented JSON instead of compact.
    pub pretty: bool,
    pub variant: ModuleVariant,
    /// Element attribute targeted by the generated selectors.
    pub attribute: String,
    /// Fixed header timestamp; `None` stamps the current time.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            variant: ModuleVariant::Full,
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            generated_at: None,
        }
    }
}
