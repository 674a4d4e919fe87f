//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes page scanning and comment classification to AI assistants over
//! stdio. Logs go to stderr; stdout carries only the protocol.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and its tools
//! - `types`: tool parameter and result types

mod server;
pub mod types;

pub use server::{RemarksMcpServer, run_server};
