//! Error types for ghost-core.

use std::path::PathBuf;

use thiserror::Error;

/// Structural errors raised by the registry wiring layer.
///
/// These indicate a mistake in how the host set up its session, never bad
/// data, so callers are expected to surface them immediately.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An identifier was requested with no session in reach.
    #[error("{caller} must be used inside a ghost session; construct a GhostSession and pass it down")]
    MissingContext { caller: String },
}

/// All errors that can arise from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the config file.
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load, with file path and serde_yaml's line context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
