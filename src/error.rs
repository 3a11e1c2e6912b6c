use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    #[error("No response from AI")]
    EmptyCompletion,

    #[error("Failed to parse AI response")]
    UnparseableCompletion,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MissingApiKey(_)
            | AppError::EmptyCompletion
            | AppError::UnparseableCompletion => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            // Upstream detail stays in the logs; clients get a fixed message.
            AppError::HttpClient(_) | AppError::Provider(_) => {
                tracing::error!(error = %self, "LLM provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate recommendations".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_the_provider() {
        let error = AppError::MissingApiKey("OpenAI");
        assert_eq!(error.to_string(), "OpenAI API key not configured");
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("Invalid answers format".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_failures_map_to_internal_error() {
        let response = AppError::Provider("status 503".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
