//! Remarks - find the comments a web page ships to its visitors
//!
//! Remarks loads a page, collects the comments left in its HTML, its
//! stylesheets and its scripts, and drops the ones that are really
//! commented-out code. What remains is the prose developers forgot to strip:
//! TODOs, notes, credentials hints, internal URLs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, classification and page scanning
//! - `logging`: tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `messaging`: Typed messages between the page, background and popup contexts
//! - `session`: One page visit from load to popup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod messaging;
pub mod session;
