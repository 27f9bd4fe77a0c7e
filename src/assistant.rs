//! Gemini assistant proxy.
//!
//! A question goes out as a single `generateContent` request and the
//! answer comes back as plain text. There is no retry, history or caching.
//! Failures never escape [`ask`]: a missing key and any downstream error
//! are both turned into a human-readable string for the caller to print.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::config;

pub const MISSING_KEY_MESSAGE: &str = "❌ API key not found. Please check your .env file.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no text ({0})")]
    EmptyResponse(String),
}

/// Anything that can turn a prompt into a completion.
pub trait GenerativeModel {
    fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// Ask the configured Gemini model a question.
///
/// The key is read from the environment on every call.
pub fn ask(prompt: &str) -> String {
    answer_with(config::api_key().as_deref(), prompt, |key| {
        GeminiClient::new(key, config::api_base(), config::MODEL)
    })
}

/// Run one question through a model built by `connect`.
///
/// A blank key counts as missing. `connect` is only called when a usable
/// key is present.
pub fn answer_with<M, F>(api_key: Option<&str>, prompt: &str, connect: F) -> String
where
    M: GenerativeModel,
    F: FnOnce(&str) -> Result<M, AssistantError>,
{
    let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
        warn!(var = config::API_KEY_VAR, "API key not set");
        return MISSING_KEY_MESSAGE.to_string();
    };

    match connect(key).and_then(|model| model.generate(prompt)) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "assistant request failed");
            format!("AI Error: {}", e)
        }
    }
}

/// Client for the Generative Language REST API.
pub struct GeminiClient {
    http: Client,
    api_key: Zeroizing<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AssistantError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            api_key: Zeroizing::new(api_key.to_string()),
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = self.endpoint();
        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&GenerateContentRequest::new(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            let message = api_error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_generate_response(&body)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Extract the completion text from a successful response body.
///
/// The text is the concatenation of every `text` part of the first candidate.
pub fn parse_generate_response(body: &str) -> Result<String, AssistantError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let first = response.candidates.first();
    let text: String = first
        .and_then(|c| c.content.as_ref())
        .map(|content| content.parts.iter().filter_map(|p| p.text.as_deref()).collect())
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    let reason = response
        .prompt_feedback
        .and_then(|f| f.block_reason)
        .map(|r| format!("prompt blocked: {}", r))
        .or_else(|| first.and_then(|c| c.finish_reason.clone()).map(|r| format!("finish reason: {}", r)))
        .unwrap_or_else(|| "no candidates".to_string());

    Err(AssistantError::EmptyResponse(reason))
}

/// The `error.message` of a Google API error envelope, or the raw body.
fn api_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    if let Some(msg) = parsed
        .as_ref()
        .and_then(|v| v.pointer("/error/message"))
        .and_then(|v| v.as_str())
    {
        return Some(msg.to_string());
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
