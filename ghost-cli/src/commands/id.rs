//! `ghost-id id`: print the ghost id for one component.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ghost_core::ghost_id_for;

use super::output::load_config;

/// Arguments for `ghost-id id`.
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Component name, e.g. LoginForm.
    pub component: String,

    /// Alias distinguishing several ids within one component.
    #[arg(long)]
    pub alias: Option<String>,

    /// Ordinal of this request among the component's requests.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub render_index: u32,

    /// Path to the YAML config file [default: ghost-id.yaml].
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl IdArgs {
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        if !config.mode.is_enabled() {
            tracing::warn!("ghost ids are disabled in {} mode", config.mode);
            return Ok(());
        }

        let render_index = if config.exclude_render_index {
            1
        } else {
            self.render_index
        };
        println!(
            "{}",
            ghost_id_for(&self.component, self.alias.as_deref(), render_index)
        );
        Ok(())
    }
}
