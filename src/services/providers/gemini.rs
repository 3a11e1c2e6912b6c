/// Gemini provider
///
/// Calls `POST {base}/models/{model}:generateContent` with the prompt as
/// a single user content part and the curator persona as a system
/// instruction. The reply is the first non-empty part of the first
/// candidate; grounding metadata and extra candidates are ignored.
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::providers::{CompletionRequest, LlmProvider};

const GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug)]
pub struct GeminiProvider {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GeminiProvider {
    pub fn new(http_client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, GEMINI_MODEL);
        let payload = GenerateContentPayload::new(request);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response.json().await?;

        body.candidates
            .unwrap_or_default()
            .into_iter()
            .find_map(Candidate::into_text)
            .ok_or(AppError::EmptyCompletion)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentPayload<'a> {
    contents: [Content<'a>; 1],
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateContentPayload<'a> {
    fn new(request: &'a CompletionRequest) -> Self {
        Self {
            contents: [Content {
                role: Some("user"),
                parts: [Part {
                    text: &request.user_prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: [Part {
                    text: &request.system_prompt,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Candidate {
    fn into_text(self) -> Option<String> {
        self.content.and_then(|content| {
            content.parts.unwrap_or_default().into_iter().find_map(|part| {
                part.text
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_splits_prompt_and_system_instruction() {
        let request = CompletionRequest {
            system_prompt: "You are an expert film curator.".to_string(),
            user_prompt: "Recommend 3 movies.".to_string(),
            temperature: 0.5,
            max_tokens: 1000,
        };

        let json = serde_json::to_value(GenerateContentPayload::new(&request)).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Recommend 3 movies.");
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "You are an expert film curator."
        );
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1000);
    }

    #[test]
    fn candidate_flattening_skips_empty_parts() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "  " }, { "text": "1. Inception" } ] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = response
            .candidates
            .unwrap()
            .into_iter()
            .find_map(Candidate::into_text);

        assert_eq!(text.as_deref(), Some("1. Inception"));
    }

    #[test]
    fn missing_candidates_mean_no_reply() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_none());
    }
}
