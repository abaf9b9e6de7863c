//! ghost-id: export deterministic ghost ids for end-to-end tests.
//!
//! # Usage
//!
//! ```text
//! ghost-id export [--input FILE] [-f json|ts] [-o PATH] [--minimal] [--dry-run]
//! ghost-id scan <PATH|GLOB> [-f json|ts] [-o PATH] [--summary]
//! ghost-id id <COMPONENT> [--alias ALIAS] [--render-index N]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{export::ExportArgs, id::IdArgs, scan::ScanArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ghost-id",
    version,
    about = "Export deterministic ghost ids as JSON or a typed TypeScript module",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a registry snapshot captured from a running app.
    Export(ExportArgs),

    /// Statically scan source files for `useGhost` call sites.
    Scan(ScanArgs),

    /// Print the ghost id for a single component.
    Id(IdArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Export(args) => args.run(),
        Commands::Scan(args) => args.run(),
        Commands::Id(args) => args.run(),
    }
}

/// Diagnostics go to stderr so stdout stays pipeable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
