//! `ghost-id scan`: rebuild ids from `useGhost` call sites in source files.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ghost_core::GhostMap;

use super::output::OutputArgs;

/// Arguments for `ghost-id scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory, file or glob to scan, e.g. "src/**/*.{ts,tsx}".
    pub pattern: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ScanArgs {
    pub fn run(self) -> Result<()> {
        let details = ghost_scan::scan_entries(&self.pattern)
            .with_context(|| format!("scan failed for '{}'", self.pattern))?;

        if details.is_empty() {
            tracing::warn!("no {} call sites found", ghost_scan::HOOK_NAME);
            println!(
                "{} no ghost ids found in '{}'; nothing written",
                "!".yellow(),
                self.pattern
            );
            return Ok(());
        }

        let config = self.output.load_config()?;
        if !config.exclude_render_index {
            tracing::info!(
                "static scan assumes render index 1; ids match only components mounted once"
            );
        }

        let entries: GhostMap = details
            .iter()
            .map(|e| (e.composite_key(), e.ghost_id.clone()))
            .collect();
        self.output.emit(&entries, Some(details.as_slice()))
    }
}
