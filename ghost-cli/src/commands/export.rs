//! `ghost-id export`: format a registry snapshot captured in the browser.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ghost_core::{GhostEntry, GhostMap};
use serde::Deserialize;

use super::output::OutputArgs;

/// Arguments for `ghost-id export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Read the snapshot from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// What the app hands out: `GhostRegistry.list()` or `GhostRegistry.getDetails()`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Map(GhostMap),
    Details(Vec<GhostEntry>),
}

impl Snapshot {
    fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context(
            "expected a JSON object of key to ghost id strings (GhostRegistry.list()) \
             or an array of entries (GhostRegistry.getDetails())",
        )
    }

    fn into_parts(self) -> (GhostMap, Option<Vec<GhostEntry>>) {
        match self {
            Snapshot::Map(map) => (map, None),
            Snapshot::Details(details) => {
                let map = details
                    .iter()
                    .map(|e| (e.composite_key(), e.ghost_id.clone()))
                    .collect();
                (map, Some(details))
            }
        }
    }
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let raw = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    print_manual_instructions();
                    return Ok(());
                }
                let mut raw = String::new();
                stdin
                    .lock()
                    .read_to_string(&mut raw)
                    .context("failed to read snapshot from stdin")?;
                raw
            }
        };

        let source = self
            .input
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        let snapshot =
            Snapshot::parse(&raw).with_context(|| format!("failed to parse snapshot from {source}"))?;
        let (entries, details) = snapshot.into_parts();
        tracing::debug!("read {} entries from {source}", entries.len());

        self.output.emit(&entries, details.as_deref())
    }
}

fn print_manual_instructions() {
    println!(
        r#"Manual export:

1. Run your app in development mode and open it in a browser.

2. In the browser console, copy the registry:
   copy(JSON.stringify(GhostRegistry.list()))

3. Save the copied data to a file, e.g. ghost-data.json.

4. Pipe it to this command:
   ghost-id export --format ts --output ./ghost-ids.ts < ghost-data.json

   or pass the file directly:
   ghost-id export --input ghost-data.json --format ts"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_snapshot_keeps_order() {
        let (map, details) = Snapshot::parse(r#"{"b":"gh-b-1","a":"gh-a-2"}"#)
            .unwrap()
            .into_parts();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert!(details.is_none());
    }

    #[test]
    fn details_snapshot_builds_keys() {
        let raw = r#"[
            {"componentName":"LoginForm","ghostId":"gh-LoginForm-dkbpz0","renderIndex":1},
            {"componentName":"LoginForm","alias":"username","ghostId":"gh-LoginForm-username-hoyq5h","renderIndex":2}
        ]"#;
        let (map, details) = Snapshot::parse(raw).unwrap().into_parts();
        assert_eq!(map["LoginForm"], "gh-LoginForm-dkbpz0");
        assert_eq!(map["LoginForm-username"], "gh-LoginForm-username-hoyq5h");
        assert_eq!(details.map(|d| d.len()), Some(2));
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(Snapshot::parse(r#"{"LoginButton": 42}"#).is_err());
        assert!(Snapshot::parse("not json").is_err());
        assert!(Snapshot::parse(r#""just a string""#).is_err());
    }
}
