//! Session-scoped registry ownership and the hook-layer wiring contract.
//!
//! A host builds exactly one [`GhostSession`] per logical session (one page
//! load, one top-level mount, one test run) and hands `&GhostSession` to
//! whatever assigns identifiers. The registry sits behind a mutex so the
//! read-check-insert in `get_or_create` stays atomic when a host shares the
//! session across threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::GhostConfig;
use crate::error::RegistryError;
use crate::registry::GhostRegistry;
use crate::types::{GhostEntry, GhostMap, Mode};

#[derive(Debug, Default)]
pub struct GhostSession {
    registry: Mutex<GhostRegistry>,
}

impl GhostSession {
    pub fn new(mode: Mode) -> Self {
        Self::from_registry(GhostRegistry::new(mode))
    }

    pub fn from_config(config: &GhostConfig) -> Self {
        Self::from_registry(GhostRegistry::from_config(config))
    }

    pub fn from_registry(registry: GhostRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    /// See [`GhostRegistry::get_or_create`].
    pub fn get_or_create(&self, component: &str, alias: Option<&str>) -> String {
        self.lock().get_or_create(component, alias)
    }

    pub fn snapshot(&self) -> GhostMap {
        self.lock().list()
    }

    pub fn details(&self) -> Vec<GhostEntry> {
        self.lock().details()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_dev_mode(&self) -> bool {
        self.lock().is_dev_mode()
    }

    fn lock(&self) -> MutexGuard<'_, GhostRegistry> {
        // No mutation can panic halfway, so a poisoned registry is still consistent.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Assign an identifier through whichever session the caller can reach.
///
/// `None` means the host never wired a session in and yields
/// [`RegistryError::MissingContext`].
pub fn use_ghost(
    session: Option<&GhostSession>,
    component: &str,
    alias: Option<&str>,
) -> Result<String, RegistryError> {
    let session = session.ok_or_else(|| RegistryError::MissingContext {
        caller: "use_ghost".to_string(),
    })?;
    Ok(session.get_or_create(component, alias))
}
