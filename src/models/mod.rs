use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A single movie recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub match_score: u32,
}

/// LLM backend used to generate recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    OpenAi,
    Groq,
    Gemini,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::OpenAi, ModelKind::Groq, ModelKind::Gemini];

    /// Human-facing name, also used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::OpenAi => "OpenAI",
            ModelKind::Groq => "Groq",
            ModelKind::Gemini => "Gemini",
        }
    }

    /// Wire name as it appears in request payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::OpenAi => "openai",
            ModelKind::Groq => "groq",
            ModelKind::Gemini => "gemini",
        }
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| format!("unknown model '{}', expected openai, groq or gemini", s))
    }
}

/// Request body for POST /api/recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watched_movies: Vec<String>,
}

/// Response body for POST /api/recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_profile: Option<String>,
}

/// Request body for POST /api/recommendations/replace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementRequest {
    pub answers: Vec<String>,
    pub watched_movie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watched_movies: Vec<String>,
}

/// Response body for POST /api/recommendations/replace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementResponse {
    pub movie: Movie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_serializes_with_camel_case_score() {
        let movie = Movie {
            title: "Inception".to_string(),
            description: "A mind-bending sci-fi masterpiece about dreams.".to_string(),
            match_score: 95,
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["matchScore"], 95);
        assert!(json.get("match_score").is_none());
    }

    #[test]
    fn model_kind_parses_wire_names() {
        assert_eq!("openai".parse::<ModelKind>().unwrap(), ModelKind::OpenAi);
        assert_eq!("GROQ".parse::<ModelKind>().unwrap(), ModelKind::Groq);
        assert_eq!("Gemini".parse::<ModelKind>().unwrap(), ModelKind::Gemini);
        assert!("gpt".parse::<ModelKind>().is_err());
    }

    #[test]
    fn recommendations_request_defaults_optional_fields() {
        let request: RecommendationsRequest = serde_json::from_value(serde_json::json!({
            "answers": ["a", "b", "c", "d", "e"]
        }))
        .unwrap();

        assert_eq!(request.answers.len(), 5);
        assert!(request.model.is_none());
        assert!(request.language.is_none());
        assert!(request.watched_movies.is_empty());
    }

    #[test]
    fn replacement_request_reads_camel_case_fields() {
        let request: ReplacementRequest = serde_json::from_value(serde_json::json!({
            "answers": ["a", "b", "c", "d", "e"],
            "watchedMovie": "Inception",
            "model": "groq",
            "watchedMovies": ["Inception", "The Matrix"]
        }))
        .unwrap();

        assert_eq!(request.watched_movie, "Inception");
        assert_eq!(request.model, Some(ModelKind::Groq));
        assert_eq!(request.watched_movies.len(), 2);
    }
}
