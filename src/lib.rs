//! MCP server that answers questions about YouTube videos.
//!
//! Speaks newline-delimited JSON-RPC 2.0 over stdio and exposes a single
//! `analyze_youtube` tool through `tools/call`, backed by the Gemini API.

pub mod config;
pub mod dispatch;
pub mod framing;
pub mod gemini;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod tools;

pub mod schema;
