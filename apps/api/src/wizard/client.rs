//! HTTP client the wizard uses to reach `POST /generate-roadmap`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::{t, Language};
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx reply; `message` is already the best human-readable text.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format from server. Please try again.")]
    InvalidResponse,
}

/// Where the wizard gets roadmaps from.
#[async_trait]
pub trait RoadmapSource: Send + Sync {
    async fn fetch(&self, profile: &Profile) -> Result<RoadmapResult, ClientError>;
}

pub struct HttpRoadmapSource {
    client: Client,
    base_url: String,
}

impl HttpRoadmapSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RoadmapSource for HttpRoadmapSource {
    async fn fetch(&self, profile: &Profile) -> Result<RoadmapResult, ClientError> {
        let url = format!("{}/generate-roadmap", self.base_url);
        debug!("Submitting profile to {url}");

        let response = self.client.post(&url).json(profile).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Roadmap API returned {}: {}", status, body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => Ok(result_from_response(&map, profile.display_language)),
            _ => Err(ClientError::InvalidResponse),
        }
    }
}

/// `details`, else `error`, else the raw body, else `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["details", "error"] {
            if let Some(Value::String(s)) = map.get(key) {
                if !s.is_empty() {
                    return s.clone();
                }
            }
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

/// Fills any empty field of a successful reply with a localized default.
pub fn result_from_response(map: &Map<String, Value>, language: Language) -> RoadmapResult {
    let text = |key: &str, fallback_key: &str| match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => t(language, fallback_key).to_string(),
    };

    let checklist = match map.get("checklist") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => (1..=4)
            .map(|i| t(language, &format!("fallback.checklist.{i}")).to_string())
            .collect(),
    };

    RoadmapResult {
        summary: text("summary", "fallback.summary"),
        professional_differences: text("professionalDifferences", "fallback.professionalDifferences"),
        credential_validation: text("credentialValidation", "fallback.credentialValidation"),
        recommended_training: text("recommendedTraining", "fallback.recommendedTraining"),
        alternative_jobs: text("alternativeJobs", "fallback.alternativeJobs"),
        checklist,
    }
}
