//! OpenAI-compatible Provider Implementation
//!
//! Provides integration with chat-completions APIs that speak the OpenAI wire
//! format. The base URL is configurable, so self-hosted gateways work too.
//!
//! # Features
//!
//! - Async HTTP communication with the chat-completions API
//! - Configurable endpoint, model, and API key
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use talentgen_llm::OpenAiProvider;
//!
//! // Create a provider against the public endpoint
//! let provider = OpenAiProvider::new("sk-...", "gpt-4o-mini");
//!
//! // Note: The complete method is async, so you need to use it in an async
//! // context or use the CompletionProvider trait's sync wrapper
//! ```

use crate::CompletionError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use talentgen_domain::traits::CompletionProvider as CompletionProviderTrait;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for completion requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// System message sent with every completion request
const SYSTEM_MESSAGE: &str =
    "You are a recruitment content assistant. Respond with JSON only, no markdown.";

/// Chat-completions API provider
///
/// This provider communicates with an OpenAI-compatible endpoint to generate
/// text.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// A single message in a chat-completions request
#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// One choice in a chat-completions response
#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

impl OpenAiProvider {
    /// Create a new provider against the public OpenAI endpoint
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer token for the API
    /// - `model`: Model to use (e.g., "gpt-4o-mini")
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use talentgen_llm::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::new("sk-...", "gpt-4o-mini");
    /// ```
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Create a new provider against a custom OpenAI-compatible endpoint
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com/v1")
    /// - `api_key`: Bearer token for the API
    /// - `model`: Model to use
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The model this provider sends requests to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a completion using the chat-completions API
    ///
    /// # Parameters
    ///
    /// - `prompt`: Input prompt text, sent as the user message
    ///
    /// # Returns
    ///
    /// The content of the first choice in the response
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable
    /// - The model is not available
    /// - The rate limit is exhausted
    /// - Response format is invalid
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        match response.json::<ChatCompletionResponse>().await {
                            Ok(completion) => {
                                return completion
                                    .choices
                                    .into_iter()
                                    .next()
                                    .map(|choice| choice.message.content)
                                    .ok_or_else(|| {
                                        CompletionError::InvalidResponse(
                                            "Response contained no choices".to_string(),
                                        )
                                    });
                            }
                            Err(e) => {
                                return Err(CompletionError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(CompletionError::ModelNotAvailable(self.model.clone()));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(CompletionError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(CompletionError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(CompletionError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| CompletionError::Communication("Max retries exceeded".to_string())))
    }

    /// Complete a prompt and deserialize the response directly
    ///
    /// Thin typed wrapper for callers that trust the model's formatting.
    /// Callers that need tolerance for fences, prose, and syntax defects
    /// should run the raw completion through `talentgen-extract` instead.
    pub async fn complete_typed<T>(&self, prompt: &str) -> Result<T, CompletionError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.complete(prompt).await?;

        serde_json::from_str(&response).map_err(|e| {
            CompletionError::InvalidResponse(format!("Failed to parse structured response: {}", e))
        })
    }
}

impl CompletionProviderTrait for OpenAiProvider {
    type Error = CompletionError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.complete(prompt).await })
    }

    fn complete_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        // For now, just call complete
        // Future: use the API's response_format JSON mode with the schema
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.complete(prompt).await })
    }
}
