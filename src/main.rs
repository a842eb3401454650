use std::process::ExitCode;
use std::sync::Arc;

use ask_youtube_transcript::config::ServerConfig;
use ask_youtube_transcript::dispatch::Dispatcher;
use ask_youtube_transcript::gemini::GeminiClient;
use ask_youtube_transcript::handlers::initialize::{SERVER_NAME, SERVER_VERSION};
use ask_youtube_transcript::handlers::HandlerContext;
use ask_youtube_transcript::logging;
use ask_youtube_transcript::registry::MethodRegistry;
use ask_youtube_transcript::server::McpServer;
use ask_youtube_transcript::tools::ToolCatalog;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{SERVER_NAME}: configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (log_file, _guard) = match logging::init(&config.log) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{SERVER_NAME}: logging setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(name = SERVER_NAME, version = SERVER_VERSION, "=== MCP Server Starting ===");
    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!(cwd = %cwd.display(), "working directory");
    }
    let key_state = if config.gemini.api_key.is_some() { "SET" } else { "NOT SET" };
    tracing::info!(
        gemini_api_key = key_state,
        model = %config.gemini.model,
        "capability configuration"
    );
    match &log_file {
        Some(path) => tracing::info!(path = %path.display(), "logging to file"),
        None => tracing::info!("file logging disabled"),
    }

    let analyzer = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build Gemini client");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match ToolCatalog::baseline() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid tool schema");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = Dispatcher::new(
        MethodRegistry::baseline(),
        HandlerContext::new(catalog, Arc::new(analyzer)),
    );

    let mut server = McpServer::stdio(dispatcher);
    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            ExitCode::FAILURE
        }
    }
}
