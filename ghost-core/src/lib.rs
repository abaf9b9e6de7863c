//! Ghost ID core library: deterministic identifier registry, hashing, config.
//!
//! Public API surface:
//! - [`types`]: entries, composite keys, modes
//! - [`hash`]: the short fingerprint and the pure id function
//! - [`registry`]: [`GhostRegistry`]
//! - [`session`]: [`GhostSession`] and the [`use_ghost`] wiring contract
//! - [`config`]: [`GhostConfig`] loading
//! - [`error`]: [`RegistryError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod hash;
pub mod registry;
pub mod session;
pub mod types;

pub use config::GhostConfig;
pub use error::{ConfigError, RegistryError};
pub use hash::{ghost_id_for, short_hash};
pub use registry::GhostRegistry;
pub use session::{use_ghost, GhostSession};
pub use types::{composite_key, GhostEntry, GhostMap, Mode};
