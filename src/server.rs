use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::dispatch::Dispatcher;
use crate::framing::{self, LineReader};
use crate::protocol::JsonRpcResponse;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to read input stream: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write response: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// MCP server that communicates over newline-delimited JSON-RPC 2.0.
///
/// One request is read, dispatched and answered at a time. The loop ends
/// cleanly at end of input; malformed lines and handler failures never
/// stop it.
pub struct McpServer<R, W> {
    reader: LineReader<R>,
    writer: W,
    dispatcher: Dispatcher,
}

impl McpServer<BufReader<Stdin>, Stdout> {
    /// Serve over the process's stdin/stdout.
    pub fn stdio(dispatcher: Dispatcher) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), dispatcher)
    }
}

impl<R, W> McpServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, dispatcher: Dispatcher) -> Self {
        Self {
            reader: LineReader::new(reader),
            writer,
            dispatcher,
        }
    }

    pub async fn run(&mut self) -> Result<(), ServerError> {
        tracing::info!(methods = ?self.dispatcher.registry().names(), "server loop started");

        loop {
            tracing::debug!("waiting for input");
            let decoded = match self.reader.read_line().await {
                Ok(Some(raw)) => {
                    tracing::debug!(line = %String::from_utf8_lossy(raw), "received line");
                    framing::decode(raw)
                }
                Ok(None) => {
                    tracing::info!("EOF received, shutting down");
                    break;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::error!(error = %e, "input stream failed");
                    return Err(ServerError::Read(e));
                }
            };

            let req = match decoded {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "dropping undecodable message");
                    if let Some(resp) = e.response() {
                        self.send(&resp).await;
                    }
                    continue;
                }
            };

            if req.jsonrpc.as_deref() != Some("2.0") {
                tracing::warn!(jsonrpc = ?req.jsonrpc, "unexpected jsonrpc version");
            }

            let resp = self.dispatcher.dispatch(&req).await;

            if req.is_notification() {
                tracing::debug!(method = %req.method, "notification handled, no response");
                continue;
            }

            self.send(&resp).await;
        }

        Ok(())
    }

    /// Write a response, logging (not propagating) failures.
    async fn send(&mut self, resp: &JsonRpcResponse) {
        if let Err(e) = self.write_response(resp).await {
            tracing::error!(error = %e, "could not send response");
        }
    }

    async fn write_response(&mut self, resp: &JsonRpcResponse) -> Result<(), ServerError> {
        let out = framing::encode(resp)?;
        tracing::debug!(response = %out.trim_end(), "sending response");
        self.writer
            .write_all(out.as_bytes())
            .await
            .map_err(ServerError::Write)?;
        self.writer.flush().await.map_err(ServerError::Write)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader.into_inner(), self.writer)
    }
}
