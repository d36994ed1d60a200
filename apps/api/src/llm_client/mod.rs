/// LLM Client — the single point of entry for all Groq API calls in the
/// Resume Analyzer.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All model interactions MUST go through this module.
///
/// Model and sampling parameters are hardcoded: every call in one process
/// uses the same model, max_tokens and temperature. Each invocation is
/// exactly one attempt, with no retries, no backoff, and no timeout beyond
/// what reqwest itself enforces.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default Groq endpoint (OpenAI-compatible chat completions).
/// Overridable via `GROQ_API_URL` for gateways and test stubs.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// The model used for all LLM calls.
pub const MODEL: &str = "mixtral-8x7b-32768";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no message content")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the first choice's message content, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GroqApiError {
    error: GroqApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqApiErrorBody {
    message: String,
}

/// A text-completion backend: one user message in, one completion out.
///
/// `AppState` carries this as `Arc<dyn CompletionBackend>` so tests can swap
/// in a counting or failing stub without any network involvement.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, user_message: &str) -> Result<String, LlmError>;
}

/// The Groq-backed client used in production.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            // Default reqwest client: one attempt per call, no timeout override
            client: Client::new(),
            api_url,
            api_key,
        }
    }

    /// Sends one user-role message and returns the first completion's
    /// content verbatim.
    pub async fn call(&self, user_message: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: user_message,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the API's own error message when the body parses
            let message = serde_json::from_str::<GroqApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("LLM API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        match chat.first_content() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyCompletion),
        }
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, user_message: &str) -> Result<String, LlmError> {
        self.call(user_message).await
    }
}
