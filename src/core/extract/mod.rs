//! Class value extraction.
//!
//! - `value_source`: expression shapes and the recursive string-leaf walk
//! - `site`: extraction sites and the extract → split → classify pipeline
//! - `class_visitor`: AST traversal that registers the entry points

pub mod class_visitor;
pub mod site;
pub mod value_source;

pub use class_visitor::ClassNameVisitor;
pub use site::{Diagnostic, ExtractionSite, SiteKind, check_site, extract};
pub use value_source::{RawValue, ValueNode, extract_raw_values};
