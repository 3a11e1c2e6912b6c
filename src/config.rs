use serde::Deserialize;

use crate::models::ModelKind;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenAI API key
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Groq API key
    #[serde(default)]
    pub groq_api_key: Option<String>,

    /// Gemini API key
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Backend used when a request does not name one
    #[serde(default = "default_model")]
    pub default_model: ModelKind,

    /// OpenAI API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Groq API base URL (OpenAI-compatible)
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model() -> ModelKind {
    ModelKind::Gemini
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The server is useless without at least one provider credential.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.openai_api_key.is_none()
            && self.groq_api_key.is_none()
            && self.gemini_api_key.is_none()
        {
            anyhow::bail!(
                "At least one of OPENAI_API_KEY, GROQ_API_KEY or GEMINI_API_KEY must be set"
            );
        }
        Ok(())
    }

    /// Base URL and key for the given backend, when configured
    pub fn credentials_for(&self, kind: ModelKind) -> (&str, Option<&str>) {
        match kind {
            ModelKind::OpenAi => (&self.openai_api_url, self.openai_api_key.as_deref()),
            ModelKind::Groq => (&self.groq_api_url, self.groq_api_key.as_deref()),
            ModelKind::Gemini => (&self.gemini_api_url, self.gemini_api_key.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> Config {
        Config {
            openai_api_key: None,
            groq_api_key: None,
            gemini_api_key: None,
            default_model: default_model(),
            openai_api_url: default_openai_api_url(),
            groq_api_url: default_groq_api_url(),
            gemini_api_url: default_gemini_api_url(),
            host: default_host(),
            port: default_port(),
        }
    }

    #[test]
    fn validate_rejects_config_without_any_key() {
        let config = bare_config();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_single_key() {
        let mut config = bare_config();
        config.groq_api_key = Some("gsk-test".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn credentials_follow_the_selected_backend() {
        let mut config = bare_config();
        config.gemini_api_key = Some("g-test".to_string());

        let (url, key) = config.credentials_for(ModelKind::Gemini);
        assert_eq!(url, "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(key, Some("g-test"));

        let (_, key) = config.credentials_for(ModelKind::OpenAi);
        assert_eq!(key, None);
    }
}
