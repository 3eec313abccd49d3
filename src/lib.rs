//! twcheck - Tailwind CSS negative arbitrary value checker
//!
//! Finds class names that put the negative dash in front of an arbitrary
//! value (`-top-[1px]`) instead of inside it (`top-[-1px]`) in JSX/TSX
//! class attributes, class-building calls such as `clsx(...)` and tagged
//! templates.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, splitting and classification
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
