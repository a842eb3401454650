pub mod analyze_youtube;
pub mod initialize;
pub mod tools_call;
pub mod tools_list;

use std::sync::Arc;

use serde_json::Value;

use crate::gemini::VideoAnalyzer;
use crate::registry::Method;
use crate::tools::ToolCatalog;

/// Failure of a protocol method handler.
///
/// Every variant becomes a `-32603` JSON-RPC error in the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Invalid {method} params: {detail}")]
    InvalidParams { method: &'static str, detail: String },
    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything the method handlers need: the tool catalog and the
/// capability backing `analyze_youtube`.
pub struct HandlerContext {
    pub catalog: ToolCatalog,
    pub analyzer: Arc<dyn VideoAnalyzer>,
}

impl HandlerContext {
    pub fn new(catalog: ToolCatalog, analyzer: Arc<dyn VideoAnalyzer>) -> Self {
        Self { catalog, analyzer }
    }
}

/// Run the handler for `method` with the request's params.
pub async fn invoke(
    method: Method,
    params: &Value,
    ctx: &HandlerContext,
) -> Result<Value, HandlerError> {
    match method {
        Method::Initialize => initialize::handle(params),
        Method::ToolsList => tools_list::handle(params, &ctx.catalog),
        Method::ToolsCall => tools_call::handle(params, ctx).await,
    }
}
