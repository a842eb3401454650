pub mod request;
pub mod response;

pub use request::{AnalyzeYoutubeParams, JsonRpcRequest, RpcId, ToolCallParams};
pub use response::{
    JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent, INTERNAL_ERROR,
    INVALID_REQUEST, METHOD_NOT_FOUND,
};
