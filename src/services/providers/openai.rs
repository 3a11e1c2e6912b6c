/// OpenAI chat completions provider
///
/// Calls `POST {base}/chat/completions` with the standard two-message
/// system/user layout and takes the first non-empty choice as the reply.
/// The wire types are shared with the Groq provider, whose API is
/// OpenAI-compatible.
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::providers::{CompletionRequest, LlmProvider};

const OPENAI_MODEL: &str = "gpt-4";

#[derive(Debug)]
pub struct OpenAiProvider {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl OpenAiProvider {
    pub fn new(http_client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        post_chat_completion(
            &self.http_client,
            &self.api_url,
            &self.api_key,
            OPENAI_MODEL,
            "OpenAI",
            request,
        )
        .await
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// ============================================================================
// OpenAI-compatible chat completions wire types
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionPayload<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionPayload<'a> {
    pub fn new(model: &'a str, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Shared call path for OpenAI and Groq
pub(crate) async fn post_chat_completion(
    http_client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    model: &str,
    provider_label: &str,
    request: &CompletionRequest,
) -> AppResult<String> {
    let url = format!("{}/chat/completions", api_url);
    let payload = ChatCompletionPayload::new(model, request);

    let response = http_client
        .post(&url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Provider(format!(
            "{} API returned status {}: {}",
            provider_label, status, body
        )));
    }

    let completion: ChatCompletionResponse = response.json().await?;

    completion
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(AppError::EmptyCompletion)
}
