/// LLM provider abstraction
///
/// This module provides a pluggable architecture for the completion
/// backends (OpenAI, Groq, Gemini). Each provider turns one prompt into
/// one free-text reply; everything else (prompt templates, reply
/// scraping) is provider-agnostic and lives a layer up.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::ModelKind,
};

pub mod gemini;
pub mod groq;
pub mod openai;

/// One completion request, provider-agnostic
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait for completion backends
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Send one prompt and return the raw reply text.
    ///
    /// An empty or whitespace-only reply is an error; callers never have
    /// to re-check.
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the backend named by the request, falling back to the
/// configured default. A backend without a configured key is the static
/// "API key not configured" error.
pub fn select_provider(
    config: &Config,
    http_client: reqwest::Client,
    requested: Option<ModelKind>,
) -> AppResult<Box<dyn LlmProvider>> {
    let kind = requested.unwrap_or(config.default_model);
    let (api_url, api_key) = config.credentials_for(kind);
    let api_key = api_key
        .ok_or(AppError::MissingApiKey(kind.label()))?
        .to_string();
    let api_url = api_url.to_string();

    Ok(match kind {
        ModelKind::OpenAi => Box::new(openai::OpenAiProvider::new(http_client, api_key, api_url)),
        ModelKind::Groq => Box::new(groq::GroqProvider::new(http_client, api_key, api_url)),
        ModelKind::Gemini => Box::new(gemini::GeminiProvider::new(http_client, api_key, api_url)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_groq_key() -> Config {
        Config {
            openai_api_key: None,
            groq_api_key: Some("gsk-test".to_string()),
            gemini_api_key: None,
            default_model: ModelKind::Groq,
            openai_api_url: "http://localhost:1".to_string(),
            groq_api_url: "http://localhost:1".to_string(),
            gemini_api_url: "http://localhost:1".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    #[test]
    fn falls_back_to_the_configured_default() {
        let provider =
            select_provider(&config_with_groq_key(), reqwest::Client::new(), None).unwrap();
        assert_eq!(provider.name(), "groq");
    }

    #[test]
    fn missing_key_is_reported_with_the_provider_label() {
        let error = select_provider(
            &config_with_groq_key(),
            reqwest::Client::new(),
            Some(ModelKind::OpenAi),
        )
        .unwrap_err();

        assert_eq!(error.to_string(), "OpenAI API key not configured");
    }
}
