//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ask_youtube_transcript::dispatch::Dispatcher;
use ask_youtube_transcript::gemini::{CapabilityError, VideoAnalyzer};
use ask_youtube_transcript::handlers::HandlerContext;
use ask_youtube_transcript::registry::MethodRegistry;
use ask_youtube_transcript::server::McpServer;
use ask_youtube_transcript::tools::ToolCatalog;

pub enum Outcome {
    Text(String),
    MissingKey,
    Failure(String),
}

/// In-memory analyzer that records every call.
pub struct FakeAnalyzer {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeAnalyzer {
    pub fn answering(text: &str) -> Arc<Self> {
        Self::with(Outcome::Text(text.to_string()))
    }

    pub fn with(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoAnalyzer for FakeAnalyzer {
    async fn analyze(&self, youtube_url: &str, prompt: &str) -> Result<String, CapabilityError> {
        self.calls
            .lock()
            .unwrap()
            .push((youtube_url.to_string(), prompt.to_string()));
        match &self.outcome {
            Outcome::Text(t) => Ok(t.clone()),
            Outcome::MissingKey => Err(CapabilityError::MissingApiKey),
            Outcome::Failure(msg) => Err(CapabilityError::Other(msg.clone())),
        }
    }
}

pub fn dispatcher(analyzer: Arc<FakeAnalyzer>) -> Dispatcher {
    Dispatcher::new(
        MethodRegistry::baseline(),
        HandlerContext::new(ToolCatalog::baseline().unwrap(), analyzer),
    )
}

/// Feed `input` through a server and return everything it wrote.
pub async fn run_server(input: &str, analyzer: Arc<FakeAnalyzer>) -> String {
    let mut server = McpServer::new(input.as_bytes(), Vec::new(), dispatcher(analyzer));
    server.run().await.unwrap();
    let (_, out) = server.into_inner();
    String::from_utf8(out).unwrap()
}

pub fn response_lines(output: &str) -> Vec<serde_json::Value> {
    output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
