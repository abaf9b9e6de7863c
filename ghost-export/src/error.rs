//! Error types for ghost-export.

use thiserror::Error;

/// All errors that can arise from rendering a snapshot.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures reported by a host's interactive surface.
///
/// These never propagate past the presentation layer; they are logged.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The capability does not exist in the current environment.
    #[error("{0} is not available in this environment")]
    Unsupported(&'static str),

    /// The host refused the operation.
    #[error("denied by host: {0}")]
    Denied(String),
}
