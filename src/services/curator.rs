//! Recommendation orchestration: template the prompt, call the selected
//! backend, scrape the reply.

use std::time::Instant;

use crate::error::{AppError, AppResult};
use crate::models::{ModelKind, Movie};
use crate::routes::AppState;
use crate::services::parser::ReplyParser;
use crate::services::prompt;
use crate::services::providers::{self, CompletionRequest};

const TEMPERATURE: f32 = 0.7;
const RECOMMENDATIONS_MAX_TOKENS: u32 = 1000;
const REPLACEMENT_MAX_TOKENS: u32 = 500;

/// A parsed batch of recommendations
pub struct Recommendations {
    pub movies: Vec<Movie>,
    pub viewer_profile: Option<String>,
}

/// Generates a batch of movie recommendations for the given quiz answers
pub async fn recommend(
    state: &AppState,
    answers: &[String],
    model: Option<ModelKind>,
    language: Option<&str>,
    watched_movies: &[String],
) -> AppResult<Recommendations> {
    let provider = providers::select_provider(&state.config, state.http_client.clone(), model)?;

    let request = CompletionRequest {
        system_prompt: prompt::SYSTEM_PROMPT.to_string(),
        user_prompt: prompt::recommendations_prompt(answers, language, watched_movies),
        temperature: TEMPERATURE,
        max_tokens: RECOMMENDATIONS_MAX_TOKENS,
    };

    let start = Instant::now();
    let reply = provider.complete(&request).await?;
    let parsed = ReplyParser::new().parse(&reply);

    tracing::info!(
        provider = provider.name(),
        movies = parsed.movies.len(),
        has_profile = parsed.viewer_profile.is_some(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Reply scraped"
    );

    if parsed.movies.is_empty() {
        tracing::error!(
            provider = provider.name(),
            reply_chars = reply.len(),
            "No movies could be scraped from the reply"
        );
        return Err(AppError::UnparseableCompletion);
    }

    Ok(Recommendations {
        movies: parsed.movies,
        viewer_profile: parsed.viewer_profile,
    })
}

/// Generates a single replacement for a movie the viewer already watched
pub async fn replace(
    state: &AppState,
    answers: &[String],
    watched_movie: &str,
    model: Option<ModelKind>,
    language: Option<&str>,
    watched_movies: &[String],
) -> AppResult<Movie> {
    let provider = providers::select_provider(&state.config, state.http_client.clone(), model)?;

    let request = CompletionRequest {
        system_prompt: prompt::SYSTEM_PROMPT.to_string(),
        user_prompt: prompt::replacement_prompt(answers, watched_movie, language, watched_movies),
        temperature: TEMPERATURE,
        max_tokens: REPLACEMENT_MAX_TOKENS,
    };

    let start = Instant::now();
    let reply = provider.complete(&request).await?;
    let parsed = ReplyParser::new().parse(&reply);

    tracing::info!(
        provider = provider.name(),
        watched_movie = %watched_movie,
        movies = parsed.movies.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Replacement reply scraped"
    );

    parsed
        .movies
        .into_iter()
        .next()
        .ok_or(AppError::UnparseableCompletion)
}
