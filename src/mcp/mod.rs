//! Model Context Protocol (MCP) server.
//!
//! Exposes configuration lookup and scanning to AI coding agents over stdio.
//!
//! - `server`: tool router and entry point
//! - `types`: tool parameter and result types

mod server;
pub mod types;

pub use server::{TwcheckMcpServer, run_server};
