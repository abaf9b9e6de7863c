//! Deterministic ghost ID registry.
//!
//! # Assignment
//!
//! ```text
//! key          = component | component-alias
//! render_index = counters[component] + 1       (shared across aliases)
//! ghost_id     = ghost_id_for(component, alias, render_index)
//! ```
//!
//! Requests for a key that already exists are pure reads: no counter moves
//! and no entry is added. That is what makes repeated component
//! initialisation safe.
//!
//! A registry is scoped to one session. Hosts construct it explicitly (or via
//! [`GhostSession`](crate::GhostSession)) and pass it down; there is no global
//! instance.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::GhostConfig;
use crate::hash::ghost_id_for;
use crate::types::{composite_key, normalize_alias, GhostEntry, GhostMap, Mode};

/// In-memory table of assigned identifiers for one session.
#[derive(Debug, Clone, Default)]
pub struct GhostRegistry {
    entries: IndexMap<String, GhostEntry>,
    counters: HashMap<String, u32>,
    mode: Mode,
    exclude_render_index: bool,
}

impl GhostRegistry {
    /// An empty registry in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// An empty registry honouring `mode` and `exclude_render_index` from `config`.
    pub fn from_config(config: &GhostConfig) -> Self {
        Self {
            mode: config.mode,
            exclude_render_index: config.exclude_render_index,
            ..Self::default()
        }
    }

    /// Return the identifier for `(component, alias)`, minting it on first request.
    ///
    /// In production mode this returns an empty string and touches nothing.
    pub fn get_or_create(&mut self, component: &str, alias: Option<&str>) -> String {
        if !self.mode.is_enabled() {
            return String::new();
        }

        let alias = normalize_alias(alias);
        let key = composite_key(component, alias);
        if let Some(existing) = self.entries.get(&key) {
            return existing.ghost_id.clone();
        }

        let counter = self.counters.entry(component.to_string()).or_insert(0);
        *counter += 1;
        let render_index = *counter;

        let hashed_index = if self.exclude_render_index { 1 } else { render_index };
        let ghost_id = ghost_id_for(component, alias, hashed_index);

        tracing::debug!("ghost registered: {key} -> {ghost_id} (render index {render_index})");
        self.entries.insert(
            key,
            GhostEntry {
                component_name: component.to_string(),
                alias: alias.map(str::to_string),
                ghost_id: ghost_id.clone(),
                render_index,
            },
        );
        ghost_id
    }

    /// Snapshot of `compositeKey → ghostId` in first-request order.
    pub fn list(&self) -> GhostMap {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.ghost_id.clone()))
            .collect()
    }

    /// All entries with every field, in first-request order.
    pub fn details(&self) -> Vec<GhostEntry> {
        self.entries.values().cloned().collect()
    }

    /// Look up a single entry by composite key.
    pub fn get(&self, key: &str) -> Option<&GhostEntry> {
        self.entries.get(key)
    }

    /// Drop every entry and reset every counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counters.clear();
    }

    pub fn is_dev_mode(&self) -> bool {
        self.mode.is_enabled()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
