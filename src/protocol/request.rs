use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 ID — a number, string, or explicit `null`.
///
/// Echoed verbatim into the response; numbers keep their original
/// representation (`1` stays `1`, `"1"` stays `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Str(String),
    Null,
}

impl RpcId {
    /// Convert a raw JSON value into an id. Objects, arrays and booleans
    /// are not valid ids.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Str(s)),
            Value::Null => Some(Self::Null),
            _ => None,
        }
    }
}

impl From<i32> for RpcId {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for RpcId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for RpcId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RpcId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// JSON-RPC 2.0 request envelope.
///
/// `id` is `None` only when the key was absent (a notification); an
/// explicit `"id": null` is `Some(RpcId::Null)`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: Option<String>,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<RpcId>, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: Some("2.0".into()),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }

    pub fn notification(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: Some("2.0".into()),
            id: None,
            method: method.into(),
            params,
        }
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Arguments for the `analyze_youtube` tool, read after schema validation.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeYoutubeParams {
    pub youtube_url: String,
    pub prompt: String,
}
