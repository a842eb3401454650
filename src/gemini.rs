//! Video analysis through the Gemini `generateContent` API.
//!
//! The protocol core never talks to Gemini directly; `tools/call` reaches
//! it through the [`VideoAnalyzer`] trait so the backend can be swapped
//! (or faked in tests).

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

const VIDEO_MIME_TYPE: &str = "video/mp4";

#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("GEMINI_API_KEY environment variable not found. Get your API key at: https://aistudio.google.com/apikey")]
    MissingApiKey,
    #[error("Error analyzing video: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Error analyzing video: {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Error analyzing video: response contained no text")]
    EmptyResponse,
    #[error("Error analyzing video: {0}")]
    Other(String),
}

/// Answers a free-form prompt about a video.
#[async_trait]
pub trait VideoAnalyzer: Send + Sync {
    async fn analyze(&self, youtube_url: &str, prompt: &str) -> Result<String, CapabilityError>;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    File { file_data: FileData<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
struct FileData<'a> {
    file_uri: &'a str,
    mime_type: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Gemini REST client.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, CapabilityError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CapabilityError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }
}

fn build_request<'a>(youtube_url: &'a str, prompt: &'a str) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![
                RequestPart::File {
                    file_data: FileData {
                        file_uri: youtube_url,
                        mime_type: VIDEO_MIME_TYPE,
                    },
                },
                RequestPart::Text { text: prompt },
            ],
        }],
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl VideoAnalyzer for GeminiClient {
    async fn analyze(&self, youtube_url: &str, prompt: &str) -> Result<String, CapabilityError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            tracing::error!("GEMINI_API_KEY not found in environment");
            CapabilityError::MissingApiKey
        })?;

        tracing::info!(url = youtube_url, model = %self.config.model, "analyzing video");

        let response = self
            .client
            .post(self.generate_url())
            .header(header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(&build_request(youtube_url, prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::error!(%status, %message, "Gemini request failed");
            return Err(CapabilityError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(parsed).ok_or(CapabilityError::EmptyResponse)?;
        tracing::info!(chars = text.len(), "video analysis complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_video_then_prompt() {
        let body = serde_json::to_value(build_request("https://youtu.be/abc", "summarize")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        {"file_data": {"file_uri": "https://youtu.be/abc", "mime_type": "video/mp4"}},
                        {"text": "summarize"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn extract_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).as_deref(), Some("Hello, world"));
    }

    #[test]
    fn extract_text_empty_candidates() {
        assert_eq!(extract_text(GenerateContentResponse::default()), None);
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig::default()).unwrap();
        let err = client.analyze("https://youtu.be/abc", "summarize").await.unwrap_err();
        assert!(matches!(err, CapabilityError::MissingApiKey));
        assert!(err.to_string().starts_with("GEMINI_API_KEY environment variable not found"));
    }

    #[test]
    fn generate_url_uses_model() {
        let client = GeminiClient::new(GeminiConfig::default()).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }
}
