//! Newline-delimited JSON framing.
//!
//! One line in, one JSON value out. Lines that cannot be turned into a
//! request envelope are reported as [`DecodeError`] and never answered,
//! except when the envelope is well-formed but its `id` is unusable.

use serde_json::{Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};

/// Maximum bytes per JSON-RPC message (1 MiB).
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("message exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("message is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid JSON: {source}; line was: {line}")]
    InvalidJson {
        line: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("message is not a JSON object: {line}")]
    NotAnObject { line: String },
    #[error("message has no string `method`: {line}")]
    MissingMethod { line: String },
    #[error("id must be a string, number, or null: {line}")]
    InvalidId { line: String },
}

impl DecodeError {
    /// Error response to emit for this failure, if any.
    ///
    /// Only an unusable `id` on an otherwise valid envelope is answered
    /// (with `id: null`); every other framing error is silent.
    pub fn response(&self) -> Option<JsonRpcResponse> {
        match self {
            Self::InvalidId { .. } => Some(JsonRpcResponse::error(
                RpcId::Null,
                JsonRpcError::invalid_request_with(
                    "Invalid Request: id must be a string, number, or null",
                ),
            )),
            _ => None,
        }
    }
}

/// Buffer capacity kept between lines; anything above is released.
const RETAINED_CAPACITY: usize = 64 * 1024;

/// Reads raw lines from an async byte stream.
///
/// At most `MAX_MESSAGE_BYTES + 1` bytes of a line are buffered. The rest
/// of a longer line is consumed and dropped, and the truncated bytes are
/// returned unstripped so [`decode`] rejects them as too large.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: Vec::new() }
    }

    /// Read the next line, without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream. A final line without a
    /// trailing newline is still returned.
    pub async fn read_line(&mut self) -> std::io::Result<Option<&[u8]>> {
        self.buf.clear();
        self.buf.shrink_to(RETAINED_CAPACITY);

        let limit = MAX_MESSAGE_BYTES as u64 + 1;
        let n = (&mut self.inner)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .await?;
        if n == 0 {
            return Ok(None);
        }

        if self.buf.len() > MAX_MESSAGE_BYTES && self.buf.last() != Some(&b'\n') {
            self.discard_rest_of_line().await?;
            return Ok(Some(&self.buf[..]));
        }

        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        Ok(Some(&self.buf[..end]))
    }

    /// Consume input up to and including the next newline (or EOF)
    /// without buffering it.
    async fn discard_rest_of_line(&mut self) -> std::io::Result<()> {
        loop {
            let (consumed, done) = {
                let available = self.inner.fill_buf().await?;
                if available.is_empty() {
                    return Ok(());
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (available.len(), false),
                }
            };
            self.inner.consume(consumed);
            if done {
                return Ok(());
            }
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Decode one raw line into a request envelope.
///
/// Returns `Ok(None)` for blank lines.
pub fn decode(raw: &[u8]) -> Result<Option<JsonRpcRequest>, DecodeError> {
    if raw.len() > MAX_MESSAGE_BYTES {
        return Err(DecodeError::TooLarge { limit: MAX_MESSAGE_BYTES });
    }

    let line = std::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8)?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(line).map_err(|source| DecodeError::InvalidJson {
        line: line.to_string(),
        source,
    })?;

    let Value::Object(mut obj) = value else {
        return Err(DecodeError::NotAnObject { line: line.to_string() });
    };

    let method = match obj.remove("method") {
        Some(Value::String(m)) => m,
        _ => return Err(DecodeError::MissingMethod { line: line.to_string() }),
    };

    let id = match obj.remove("id") {
        None => None,
        Some(raw_id) => match RpcId::from_value(raw_id) {
            Some(id) => Some(id),
            None => return Err(DecodeError::InvalidId { line: line.to_string() }),
        },
    };

    let jsonrpc = match obj.remove("jsonrpc") {
        Some(Value::String(v)) => Some(v),
        _ => None,
    };

    let params = obj
        .remove("params")
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(Some(JsonRpcRequest { jsonrpc, id, method, params }))
}

/// Serialize a response to a single JSON line (with trailing newline).
pub fn encode(response: &JsonRpcResponse) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string(response)?;
    json.push('\n');
    Ok(json)
}
