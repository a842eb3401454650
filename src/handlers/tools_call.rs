use serde_json::Value;

use super::{analyze_youtube, HandlerContext, HandlerError};
use crate::protocol::{ToolCallParams, ToolResult};
use crate::tools::ANALYZE_YOUTUBE;

/// Handle `tools/call`.
///
/// A malformed envelope (no string `name`) is a handler failure. Everything
/// that goes wrong inside the tool itself, including unknown tool names, is
/// reported as a successful response carrying an error [`ToolResult`].
pub async fn handle(params: &Value, ctx: &HandlerContext) -> Result<Value, HandlerError> {
    let params: ToolCallParams =
        serde_json::from_value(params.clone()).map_err(|e| HandlerError::InvalidParams {
            method: "tools/call",
            detail: e.to_string(),
        })?;

    let tool_result = dispatch_tool_call(&params, ctx).await;
    Ok(serde_json::to_value(&tool_result)?)
}

async fn dispatch_tool_call(params: &ToolCallParams, ctx: &HandlerContext) -> ToolResult {
    let Some(entry) = ctx.catalog.get(&params.name) else {
        tracing::warn!(tool = %params.name, "unknown tool");
        return ToolResult::error(format!("Unknown tool: {}", params.name));
    };

    let arguments = params
        .arguments
        .clone()
        .unwrap_or_else(|| Value::Object(Default::default()));

    match entry.descriptor.name.as_str() {
        ANALYZE_YOUTUBE => {
            analyze_youtube::handle(&arguments, &entry.validator, ctx.analyzer.as_ref()).await
        }
        other => ToolResult::error(format!("Unknown tool: {other}")),
    }
}
