use serde_json::Value;

use super::HandlerError;
use crate::tools::{ToolCatalog, ToolDescriptor};

/// Handle `tools/list`. Params are ignored.
pub fn handle(_params: &Value, catalog: &ToolCatalog) -> Result<Value, HandlerError> {
    let tools: Vec<&ToolDescriptor> = catalog.descriptors().collect();
    Ok(serde_json::json!({ "tools": serde_json::to_value(tools)? }))
}
