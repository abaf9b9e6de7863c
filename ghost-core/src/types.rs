//! Domain types for the ghost registry.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered `compositeKey → ghostId` snapshot.
///
/// This is the shape produced by [`GhostRegistry::list`](crate::GhostRegistry::list)
/// and consumed by every exporter.
pub type GhostMap = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether identifier generation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    /// Identifier generation is a no-op: empty strings, no entries.
    Production,
}

impl Mode {
    pub fn is_enabled(self) -> bool {
        matches!(self, Mode::Development)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostEntry {
    pub component_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub ghost_id: String,
    /// Ordinal among requests sharing `component_name`, starting at 1.
    pub render_index: u32,
}

impl GhostEntry {
    pub fn composite_key(&self) -> String {
        composite_key(&self.component_name, self.alias.as_deref())
    }
}

/// `component` alone, or `component-alias`.
///
/// An empty alias counts as no alias.
pub fn composite_key(component: &str, alias: Option<&str>) -> String {
    match normalize_alias(alias) {
        Some(alias) => format!("{component}-{alias}"),
        None => component.to_string(),
    }
}

pub(crate) fn normalize_alias(alias: Option<&str>) -> Option<&str> {
    alias.filter(|a| !a.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_with_and_without_alias() {
        assert_eq!(composite_key("LoginButton", None), "LoginButton");
        assert_eq!(composite_key("LoginForm", Some("submit")), "LoginForm-submit");
    }

    #[test]
    fn empty_alias_is_no_alias() {
        assert_eq!(composite_key("LoginForm", Some("")), "LoginForm");
    }

    #[test]
    fn mode_display_and_enabled() {
        assert_eq!(Mode::Production.to_string(), "production");
        assert!(Mode::Development.is_enabled());
        assert!(!Mode::Production.is_enabled());
    }

    #[test]
    fn entry_serializes_camel_case_and_skips_missing_alias() {
        let entry = GhostEntry {
            component_name: "LoginButton".to_string(),
            alias: None,
            ghost_id: "gh-LoginButton-5608gm".to_string(),
            render_index: 1,
        };
        let yaml = serde_yaml::to_string(&entry).expect("serialize");
        assert!(yaml.contains("componentName: LoginButton"));
        assert!(yaml.contains("renderIndex: 1"));
        assert!(!yaml.contains("alias"));
    }
}
