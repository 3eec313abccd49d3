//! Source file parsing (swc).

pub mod source;

pub use source::{ExtractedComments, ParsedSource, parse_source};
