//! HTTP client for the recommendation API, used by the terminal front end.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{
    Movie, RecommendationsRequest, RecommendationsResponse, ReplacementRequest,
    ReplacementResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Error envelope returned by the API on every failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST /api/recommendations
    pub async fn recommendations(
        &self,
        request: &RecommendationsRequest,
    ) -> Result<RecommendationsResponse, ClientError> {
        let url = format!("{}/api/recommendations", self.base_url);
        let response = self.http_client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    /// POST /api/recommendations/replace
    pub async fn replace(&self, request: &ReplacementRequest) -> Result<Movie, ClientError> {
        let url = format!("{}/api/recommendations/replace", self.base_url);
        let response = self.http_client.post(&url).json(request).send().await?;
        let body: ReplacementResponse = Self::decode(response).await?;
        Ok(body.movie)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("server returned status {}", status),
            };
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
