//! Attribute selectors matching the accessors emitted in the typed module.

use std::fmt;

/// A CSS attribute selector against the identifier attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[attr="gh-…-hash"]`: one exact identifier.
    Exact { attribute: String, value: String },
    /// `[attr^="gh-<key>-"]`: any identifier minted for a composite key,
    /// whatever its trailing hash.
    Prefix { attribute: String, prefix: String },
}

impl Selector {
    pub fn exact(attribute: &str, ghost_id: &str) -> Self {
        Selector::Exact {
            attribute: attribute.to_string(),
            value: ghost_id.to_string(),
        }
    }

    pub fn prefix_for_key(attribute: &str, key: &str) -> Self {
        Selector::Prefix {
            attribute: attribute.to_string(),
            prefix: format!("gh-{key}-"),
        }
    }

    /// Whether an element whose identifier attribute is `value` would match.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::Exact { value: expected, .. } => value == expected,
            Selector::Prefix { prefix, .. } => value.starts_with(prefix.as_str()),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Selector::Exact { attribute, value } => {
                format!("[{attribute}=\"{}\"]", escape_css_string(value))
            }
            Selector::Prefix { attribute, prefix } => {
                format!("[{attribute}^=\"{}\"]", escape_css_string(prefix))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn escape_css_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_forms() {
        assert_eq!(
            Selector::exact("data-gh", "gh-LoginButton-5608gm").to_css(),
            r#"[data-gh="gh-LoginButton-5608gm"]"#
        );
        assert_eq!(
            Selector::prefix_for_key("data-gh", "LoginForm-submit").to_string(),
            r#"[data-gh^="gh-LoginForm-submit-"]"#
        );
    }

    #[test]
    fn prefix_survives_hash_changes() {
        let sel = Selector::prefix_for_key("data-gh", "LoginForm-submit");
        assert!(sel.matches("gh-LoginForm-submit-vu3jz3"));
        assert!(sel.matches("gh-LoginForm-submit-0"));
        assert!(!sel.matches("gh-LoginForm-cancel-71qcse"));
    }

    #[test]
    fn exact_does_not_survive_hash_changes() {
        let sel = Selector::exact("data-gh", "gh-LoginForm-submit-vu3jz3");
        assert!(sel.matches("gh-LoginForm-submit-vu3jz3"));
        assert!(!sel.matches("gh-LoginForm-submit-vu3jz4"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(Selector::exact("data-gh", "a\"b").to_css(), r#"[data-gh="a\"b"]"#);
    }
}
