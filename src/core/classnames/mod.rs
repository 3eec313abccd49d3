//! Class token splitting and negative arbitrary value classification.
//!
//! ## Module Structure
//!
//! - `catalog`: Property-prefix families and the compiled pattern
//! - `splitter`: Whitespace tokenization of raw class strings
//! - `classifier`: Variant stripping and pattern matching per token

pub mod catalog;
pub mod classifier;
pub mod splitter;

pub use catalog::{PREFIX_CATALOG, PREFIX_PATTERN, PrefixFamily};
pub use classifier::{class_suffix, classify, is_negative_arbitrary};
pub use splitter::split_class_tokens;
