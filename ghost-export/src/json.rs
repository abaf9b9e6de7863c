//! Structured-data encoding: a single JSON object, keys in snapshot order.

use ghost_core::GhostMap;

use crate::error::RenderError;

/// Render `entries` as a JSON object.
///
/// `pretty` selects two-space indentation; otherwise the output is compact.
/// Keys and values are emitted as-is, in insertion order.
pub fn export_as_json(entries: &GhostMap, pretty: bool) -> Result<String, RenderError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(rendered)
}
