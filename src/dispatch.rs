use crate::handlers::{self, HandlerContext};
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
use crate::registry::MethodRegistry;

/// Routes decoded requests to their handlers and builds the response.
pub struct Dispatcher {
    registry: MethodRegistry,
    context: HandlerContext,
}

impl Dispatcher {
    pub fn new(registry: MethodRegistry, context: HandlerContext) -> Self {
        Self { registry, context }
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Dispatch one request. Always produces a response carrying the
    /// request's id (`null` for notifications, whose response the caller
    /// drops). Handler failures are converted here and never escape.
    pub async fn dispatch(&self, req: &JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id.clone().unwrap_or(RpcId::Null);

        let Some(method) = self.registry.lookup(&req.method) else {
            tracing::warn!(method = %req.method, "Method not found");
            return JsonRpcResponse::error(id, JsonRpcError::method_not_found(&req.method));
        };

        match handlers::invoke(method, &req.params, &self.context).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                tracing::error!(method = %req.method, error = %e, "handler failed");
                JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
            }
        }
    }
}
