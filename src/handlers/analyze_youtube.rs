use serde_json::Value;

use crate::gemini::VideoAnalyzer;
use crate::protocol::{AnalyzeYoutubeParams, ToolResult};
use crate::schema::{ArgumentValidator, SchemaValidationError};

/// Handle an `analyze_youtube` tool call.
///
/// Arguments are checked against the tool's input schema before the
/// analyzer is contacted. Analyzer failures become `Error: ...` text.
pub async fn handle(
    arguments: &Value,
    validator: &ArgumentValidator,
    analyzer: &dyn VideoAnalyzer,
) -> ToolResult {
    match validator.validate(arguments) {
        Ok(()) => {}
        Err(SchemaValidationError::MissingRequired(missing)) => {
            tracing::warn!(?missing, "analyze_youtube called without required arguments");
            return ToolResult::error("Error: Both youtube_url and prompt are required");
        }
        Err(e) => {
            return ToolResult::error(format!("Error: Invalid arguments for analyze_youtube: {e}"));
        }
    }

    let params: AnalyzeYoutubeParams = match serde_json::from_value(arguments.clone()) {
        Ok(p) => p,
        Err(e) => {
            return ToolResult::error(format!("Error: Invalid arguments for analyze_youtube: {e}"));
        }
    };

    tracing::info!(url = %params.youtube_url, "analyze_youtube called");

    match analyzer.analyze(&params.youtube_url, &params.prompt).await {
        Ok(text) => ToolResult::text(text),
        Err(e) => {
            tracing::error!(error = %e, "video analysis failed");
            ToolResult::error(format!("Error: {e}"))
        }
    }
}
