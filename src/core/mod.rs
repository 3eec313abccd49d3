//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `classnames`: Class token splitting and negative arbitrary value classification
//! - `context`: Run-scoped state (config, settings, scanned and parsed files)
//! - `data`: Source location types
//! - `directives`: Inline suppression comments
//! - `extract`: Class value extraction from the AST
//! - `file_scanner`: Source tree walking
//! - `parsers`: swc parsing
//! - `settings`: Rule settings and their defaults

pub mod classnames;
pub mod context;
pub mod data;
pub mod directives;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod settings;

pub use context::CheckContext;
pub use data::{SourceContext, SourceLocation};
pub use settings::RuleSettings;
