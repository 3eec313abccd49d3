//! Rule implementations.
//!
//! - `negative_arbitrary`: Negative prefix combined with an arbitrary value

pub mod negative_arbitrary;

pub use negative_arbitrary::check_negative_arbitrary_issues;
