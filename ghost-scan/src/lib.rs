//! Best-effort static scan for ghost id call sites.
//!
//! `scan_at(root, pattern)` parses source files, finds `useGhost(…)` calls and
//! rebuilds the identifiers they would receive with a render index of 1.
//! That is only correct for components mounted exactly once (or when the
//! runtime registry hashes with `exclude_render_index`); the scanner cannot
//! observe real render order.
//!
//! `pattern` is either a directory (walked for `*.{ts,tsx,js,jsx}`), a single
//! file, or a glob relative to `root`. `node_modules`, `tests` and
//! `__tests__` are never entered.

pub mod sites;

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use thiserror::Error;

use ghost_core::{composite_key, ghost_id_for, GhostEntry, GhostMap};
use indexmap::IndexMap;

pub use sites::{CallSite, Dialect, SiteFinder, HOOK_NAME, UNKNOWN_COMPONENT};

/// Glob applied when the pattern names a directory.
pub const DEFAULT_SOURCE_GLOB: &str = "**/*.{ts,tsx,js,jsx}";

/// Directory names that are never scanned.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "tests", "__tests__"];

/// Render index assumed for every scanned call site.
const STATIC_RENDER_INDEX: u32 = 1;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors from scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scan pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("scan path '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to load source grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("failed to parse {path}")]
    Parse { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// [`scan_entries_at`] relative to the current working directory.
pub fn scan_entries(pattern: &str) -> Result<Vec<GhostEntry>, ScanError> {
    let cwd = std::env::current_dir().map_err(|e| io_err(".", e))?;
    scan_entries_at(&cwd, pattern)
}

/// Scan the files selected by `pattern` under `root` and return
/// `compositeKey → ghostId` in file-then-source order.
pub fn scan_at(root: &Path, pattern: &str) -> Result<GhostMap, ScanError> {
    Ok(scan_entries_at(root, pattern)?
        .into_iter()
        .map(|entry| (entry.composite_key(), entry.ghost_id))
        .collect())
}

/// Like [`scan_at`], keeping component, alias and render index per entry.
///
/// A key seen twice keeps its first position and takes the last id.
pub fn scan_entries_at(root: &Path, pattern: &str) -> Result<Vec<GhostEntry>, ScanError> {
    let files = collect_files(root, pattern)?;
    tracing::debug!("scanning {} files for {pattern}", files.len());

    let mut finder = SiteFinder::new()?;
    let mut entries: IndexMap<String, GhostEntry> = IndexMap::new();
    for file in files {
        let bytes = std::fs::read(&file).map_err(|e| io_err(&file, e))?;
        let Ok(source) = String::from_utf8(bytes) else {
            tracing::warn!("skipping non-UTF-8 file {}", file.display());
            continue;
        };
        let sites = finder
            .find(&source, Dialect::for_path(&file))
            .ok_or_else(|| ScanError::Parse { path: file.clone() })?;
        for site in sites {
            let alias = site.alias.as_deref();
            let key = composite_key(&site.component, alias);
            let ghost_id = ghost_id_for(&site.component, alias, STATIC_RENDER_INDEX);
            tracing::debug!("{}:{}: {key} -> {ghost_id}", file.display(), site.line);
            entries.insert(
                key,
                GhostEntry {
                    component_name: site.component,
                    alias: site.alias,
                    ghost_id,
                    render_index: STATIC_RENDER_INDEX,
                },
            );
        }
    }
    Ok(entries.into_values().collect())
}

/// Resolve `pattern` under `root` into a sorted list of files.
pub fn collect_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let (base, glob) = split_pattern(pattern);
    let base = root.join(base);
    if !base.exists() {
        return Err(ScanError::NotFound { path: base });
    }
    if base.is_file() && glob.is_none() {
        return Ok(vec![base]);
    }

    let glob = glob.unwrap_or_else(|| DEFAULT_SOURCE_GLOB.to_string());
    let matcher = compile(&glob)?;

    let mut walker = WalkBuilder::new(&base);
    walker
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|t| t.is_dir())
                && EXCLUDED_DIRS.iter().any(|d| entry.file_name() == *d))
        });

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: base.clone(),
            source,
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let rel = path.strip_prefix(&base).unwrap_or(path.as_path());
        if matcher.is_match(rel) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScanError {
    ScanError::Io {
        path: path.into(),
        source,
    }
}

fn compile(glob: &str) -> Result<GlobMatcher, ScanError> {
    Glob::new(glob)
        .map(|g| g.compile_matcher())
        .map_err(|source| ScanError::Pattern {
            pattern: glob.to_string(),
            source,
        })
}

/// Split into the literal leading directory and the glob remainder, if any.
///
/// `src/**/*.tsx` → (`src`, `**/*.tsx`); `src/components` → (`src/components`, none).
fn split_pattern(pattern: &str) -> (PathBuf, Option<String>) {
    let path = Path::new(pattern);
    let mut base = PathBuf::new();
    let mut rest: Vec<String> = Vec::new();
    for component in path.components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !has_glob_meta(&text) {
            match component {
                Component::CurDir => {}
                other => base.push(other.as_os_str()),
            }
        } else {
            rest.push(text.into_owned());
        }
    }
    if rest.is_empty() {
        (base, None)
    } else {
        (base, Some(rest.join("/")))
    }
}

fn has_glob_meta(text: &str) -> bool {
    text.contains(['*', '?', '[', '{'])
}
