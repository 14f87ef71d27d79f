//! MCP (Model Context Protocol) server for keyword search.
//!
//! This module exposes the single-file keyword scanner as the `search_keyword`
//! tool, allowing AI agents to locate lines and offsets of a term in a file.

mod server;
mod tools;

pub use server::run_server;
