//! Roadmap pipeline: orchestrates a single roadmap generation.
//!
//! Flow: build_prompt → invoke_model → extract_json → normalize.
//!
//! Only `AppError::Config` and `AppError::Service` ever leave this module.
//! JSON-shape problems are absorbed by the fallback in `normalize`.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::API_KEY_VAR;
use crate::errors::AppError;
use crate::i18n::{interpolate, Language};
use crate::llm_client::{GenerationRequest, TextGenerator, MODEL, TEMPERATURE};
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;
use crate::roadmap::extract::extract_json;
use crate::roadmap::normalize::normalize;
use crate::roadmap::prompts::ROADMAP_PROMPT_TEMPLATE;

/// Fills the prompt template with the profile verbatim and the target language name.
pub fn build_prompt(profile: &Profile, language: Language) -> String {
    let years = profile.years_experience.to_string();
    interpolate(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("full_name", profile.full_name.as_str()),
            ("nationality", profile.nationality.as_str()),
            ("profession", profile.profession.as_str()),
            ("years", years.as_str()),
            ("province", profile.province.as_str()),
            ("language", language.prompt_name()),
        ],
    )
    .into_owned()
}

pub fn missing_credential() -> AppError {
    AppError::Config(format!(
        "Google AI API key is not configured. Please add {API_KEY_VAR} to your environment variables."
    ))
}

/// Sends the prompt to the model, bounded by `timeout`.
///
/// A missing credential fails before any outbound call is made.
pub async fn invoke_model(
    generator: &dyn TextGenerator,
    api_key: Option<&str>,
    prompt: &str,
    timeout: Duration,
) -> Result<String, AppError> {
    let api_key = api_key.ok_or_else(missing_credential)?;

    let request = GenerationRequest {
        model: MODEL,
        api_key,
        prompt,
        temperature: TEMPERATURE,
    };

    match tokio::time::timeout(timeout, generator.generate(request)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Service(format!("Model call failed: {e}"))),
        Err(_) => Err(AppError::Service(format!(
            "Model call timed out after {}s",
            timeout.as_secs()
        ))),
    }
}

/// Runs the full pipeline for one submission. The result is always fully shaped.
pub async fn generate_roadmap(
    generator: &dyn TextGenerator,
    api_key: Option<&str>,
    timeout: Duration,
    profile: &Profile,
) -> Result<RoadmapResult, AppError> {
    let language = profile.display_language;
    info!(
        "Generating roadmap: profession={:?}, nationality={:?}, years={}, province={:?}, language={}",
        profile.profession,
        profile.nationality,
        profile.years_experience,
        profile.province,
        language.prompt_name()
    );

    let prompt = build_prompt(profile, language);
    let text = invoke_model(generator, api_key, &prompt, timeout).await?;
    info!("Model call succeeded: response length={}", text.len());

    let parsed = extract_json(&text);
    if let Err(e) = &parsed {
        warn!(
            "Model output was not usable JSON ({e}); using fallback roadmap. First 200 chars: {:?}",
            text.chars().take(200).collect::<String>()
        );
    }

    Ok(normalize(parsed, profile))
}
