//! Typed-module encoding: a TypeScript source file rendered through Tera.
//!
//! Minimal output, byte for byte:
//!
//! ```text
//! /**
//!  * Auto-generated Ghost IDs
//!  * Generated at: <ISO-8601 timestamp>
//!  * DO NOT EDIT MANUALLY
//!  */
//!
//! export const GHOST_IDS = {
//!   '<key>': '<ghostId>',
//! } as const;
//!
//! export type GhostKey = keyof typeof GHOST_IDS;
//! ```
//!
//! The full variant appends `getGhostSelector` and `getGhostSelectorPartial`.
//! Output never ends with a newline.

use chrono::{SecondsFormat, Utc};
use ghost_core::GhostMap;
use serde::Serialize;
use tera::Tera;

use crate::error::RenderError;
use crate::format::{ExportOptions, ModuleVariant};

const TEMPLATE_NAME: &str = "typed_module.ts.tera";
const TEMPLATE: &str = include_str!("templates/typed_module.ts.tera");

#[derive(Debug, Serialize)]
struct ModuleContext {
    generated_at: String,
    entries: Vec<ModuleEntry>,
    with_selectors: bool,
    attribute: String,
}

#[derive(Debug, Serialize)]
struct ModuleEntry {
    key: String,
    ghost_id: String,
}

/// Tera-backed renderer for the typed module. Create once and reuse.
pub struct ModuleRenderer {
    tera: Tera,
}

impl ModuleRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, entries: &GhostMap, options: &ExportOptions) -> Result<String, RenderError> {
        let generated_at = options
            .generated_at
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let ctx = ModuleContext {
            generated_at,
            entries: entries
                .iter()
                .map(|(key, ghost_id)| ModuleEntry {
                    key: escape_single_quoted(key),
                    ghost_id: escape_single_quoted(ghost_id),
                })
                .collect(),
            with_selectors: options.variant == ModuleVariant::Full,
            attribute: options.attribute.clone(),
        };
        let tera_ctx = tera::Context::from_serialize(&ctx)?;
        let rendered = self.tera.render(TEMPLATE_NAME, &tera_ctx)?;
        Ok(rendered.replace("\r\n", "\n").trim_end_matches('\n').to_string())
    }
}

/// Render `entries` as a TypeScript module.
pub fn export_as_typed_module(entries: &GhostMap, options: &ExportOptions) -> Result<String, RenderError> {
    ModuleRenderer::new()?.render(entries, options)
}

/// Escape text for a single-quoted TypeScript string literal.
fn escape_single_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}
