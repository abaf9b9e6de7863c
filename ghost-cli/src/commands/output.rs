//! Output flags shared by `export` and `scan`, and the write step behind them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ghost_core::config::CONFIG_FILE_NAME;
use ghost_core::{GhostConfig, GhostEntry, GhostMap};
use ghost_export::{print_summary, ExportOptions, ModuleVariant, OutputFormat};
use ghost_write::{atomic_write, WriteResult};

/// Where and how to write the rendered ids.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format: json, ts or typescript.
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (default: ghost-ids.json or ghost-ids.ts in the working directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON.
    #[arg(long)]
    pub no_pretty: bool,

    /// Omit the selector helper functions from the TypeScript module.
    #[arg(long)]
    pub minimal: bool,

    /// Element attribute targeted by the generated selectors (overrides config).
    #[arg(long)]
    pub attribute: Option<String>,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a table of entries and both encodings to stdout.
    #[arg(long)]
    pub summary: bool,

    /// Path to the YAML config file [default: ghost-id.yaml].
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    pub fn load_config(&self) -> Result<GhostConfig> {
        load_config(self.config.as_deref())
    }

    /// Flags win over the config file.
    pub fn export_options(&self, config: &GhostConfig) -> ExportOptions {
        ExportOptions {
            pretty: !self.no_pretty,
            variant: if self.minimal {
                ModuleVariant::Minimal
            } else {
                ModuleVariant::Full
            },
            attribute: self
                .attribute
                .clone()
                .unwrap_or_else(|| config.attribute.clone()),
            generated_at: None,
        }
    }

    pub fn output_path(&self) -> Result<PathBuf> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()));
        if path.is_absolute() {
            return Ok(path);
        }
        let cwd = std::env::current_dir().context("could not determine working directory")?;
        Ok(cwd.join(path))
    }

    /// Render `entries`, write them and report the outcome.
    pub fn emit(&self, entries: &GhostMap, details: Option<&[GhostEntry]>) -> Result<()> {
        let config = self.load_config()?;
        let options = self.export_options(&config);
        let content = self
            .format
            .render(entries, &options)
            .with_context(|| format!("failed to render {} output", self.format))?;

        let path = self.output_path()?;
        let result = atomic_write(&path, &content, self.dry_run)
            .with_context(|| format!("failed to write {}", path.display()))?;
        print_result(&result, entries.len());

        if self.summary {
            match details {
                Some(details) => {
                    let mut stdout = std::io::stdout().lock();
                    print_summary(details, &options, &mut stdout)
                        .context("failed to print summary")?;
                }
                None => tracing::warn!("--summary needs per-entry details; input had only key/id pairs"),
            }
        }
        Ok(())
    }
}

/// `--config` when given, otherwise `ghost-id.yaml` in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<GhostConfig> {
    match path {
        Some(path) => GhostConfig::load_at(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => GhostConfig::load()
            .with_context(|| format!("failed to load config {CONFIG_FILE_NAME}")),
    }
}

fn print_result(result: &WriteResult, count: usize) {
    let path = result.path().display();
    match result {
        WriteResult::Written { .. } => {
            println!("{} Ghost IDs exported to: {path}", "✓".green());
        }
        WriteResult::Unchanged { .. } => {
            println!("{} {path} is up to date", "·".dimmed());
        }
        WriteResult::WouldWrite { .. } => {
            println!("[dry-run] {} would write {path}", "~".yellow());
        }
    }
    println!("  Total entries: {count}");
}
