// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Motivational text for new check-ins.
//!
//! Providers never fail from the caller's point of view: missing credentials,
//! network errors, malformed responses and blank answers all turn into one of
//! a few fixed fallback phrases.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Used when no API key is configured.
pub const FALLBACK_NO_KEY: &str = "Consistency wins! Remember to stay hydrated.";
/// Used when the model answers with nothing.
pub const FALLBACK_EMPTY: &str = "Today's sweat is tomorrow's medal!";
/// Used for any request, HTTP or parse failure.
pub const FALLBACK_ERROR: &str = "Keep the passion, chase the horizon!";

/// Source of a short encouragement for a finished workout.
pub trait MotivationProvider: Send + Sync {
    fn request_motivation<'a>(
        &'a self,
        workout_type: &'a str,
        duration_minutes: u32,
    ) -> BoxFuture<'a, String>;
}

/// Errors from the Gemini API (never surfaced past the provider).
#[derive(Debug, thiserror::Error)]
pub enum MotivationError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Pick a provider for the given configuration.
pub fn provider_from_config(config: &Config) -> Arc<dyn MotivationProvider> {
    match &config.gemini_api_key {
        Some(key) => match GeminiMotivation::new(
            key.clone(),
            config.gemini_model.clone(),
            config.gemini_api_url.clone(),
            config.motivation_timeout,
        ) {
            Ok(client) => {
                tracing::info!(model = %config.gemini_model, "Gemini motivation enabled");
                Arc::new(client)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build Gemini client, using fixed phrases");
                Arc::new(StaticMotivation)
            }
        },
        None => {
            tracing::info!("GEMINI_API_KEY not set, using fixed motivation phrases");
            Arc::new(StaticMotivation)
        }
    }
}

// ─── Static Provider ─────────────────────────────────────────

/// Provider used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMotivation;

impl MotivationProvider for StaticMotivation {
    fn request_motivation<'a>(
        &'a self,
        _workout_type: &'a str,
        _duration_minutes: u32,
    ) -> BoxFuture<'a, String> {
        Box::pin(async { FALLBACK_NO_KEY.to_string() })
    }
}

// ─── Gemini Provider ─────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiMotivation {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiMotivation {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, MotivationError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MotivationError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    /// Ask the model for an encouragement. Returns the raw (trimmed) text.
    pub async fn generate(
        &self,
        workout_type: &str,
        duration_minutes: u32,
    ) -> Result<String, MotivationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(workout_type, duration_minutes)),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MotivationError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MotivationError::Request(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(MotivationError::Api(error_resp.error.message));
            }
            return Err(MotivationError::Api(format!("HTTP {}: {}", status, body)));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| MotivationError::Parse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }
}

impl MotivationProvider for GeminiMotivation {
    fn request_motivation<'a>(
        &'a self,
        workout_type: &'a str,
        duration_minutes: u32,
    ) -> BoxFuture<'a, String> {
        Box::pin(async move {
            match self.generate(workout_type, duration_minutes).await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => {
                    tracing::warn!(workout_type, "Gemini returned empty text");
                    FALLBACK_EMPTY.to_string()
                }
                Err(e) => {
                    tracing::warn!(error = %e, workout_type, "Gemini request failed");
                    FALLBACK_ERROR.to_string()
                }
            }
        })
    }
}

fn build_prompt(workout_type: &str, duration_minutes: u32) -> String {
    format!(
        "The user just checked in a workout.\n\
         Type: {}\n\
         Duration: {} minutes.\n\n\
         Reply with one short, upbeat line of encouragement (20 words or fewer). \
         Keep it casual, like a supportive training buddy, not formal.",
        workout_type, duration_minutes
    )
}
