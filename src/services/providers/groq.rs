/// Groq provider
///
/// Groq exposes an OpenAI-compatible chat completions API, so the call
/// path and wire types are shared with the OpenAI provider; only the
/// base URL, key and model id differ.
use crate::error::AppResult;
use crate::services::providers::openai::post_chat_completion;
use crate::services::providers::{CompletionRequest, LlmProvider};

const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug)]
pub struct GroqProvider {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GroqProvider {
    pub fn new(http_client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for GroqProvider {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        post_chat_completion(
            &self.http_client,
            &self.api_url,
            &self.api_key,
            GROQ_MODEL,
            "Groq",
            request,
        )
        .await
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
