use serde_json::Value;

use super::HandlerError;

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub const SERVER_NAME: &str = "ask-youtube-transcript";

pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle `initialize`. Params are ignored; the result is always the same.
pub fn handle(_params: &Value) -> Result<Value, HandlerError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    }))
}
