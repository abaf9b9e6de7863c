//! # ghost-export
//!
//! Renders a registry snapshot as a JSON object or as a TypeScript module of
//! typed selectors, plus the presentation helpers layered on top of them.
//!
//! ## Usage
//!
//! ```rust
//! use ghost_core::{GhostRegistry, Mode};
//! use ghost_export::{ExportOptions, OutputFormat};
//!
//! let mut registry = GhostRegistry::new(Mode::Development);
//! registry.get_or_create("LoginButton", None);
//!
//! let json = OutputFormat::Json
//!     .render(&registry.list(), &ExportOptions::default())
//!     .unwrap();
//! assert!(json.contains("gh-LoginButton-"));
//! ```

pub mod error;
pub mod format;
pub mod json;
pub mod module;
pub mod present;
pub mod selector;

pub use error::{RenderError, SurfaceError};
pub use format::{ExportOptions, ModuleVariant, OutputFormat};
pub use json::export_as_json;
pub use module::{export_as_typed_module, ModuleRenderer};
pub use present::{copy_to_clipboard, download, print_summary, HostSurface};
pub use selector::Selector;
