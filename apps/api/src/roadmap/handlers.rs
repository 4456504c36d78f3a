//! Axum route handler for roadmap generation.

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;
use crate::roadmap::pipeline::{generate_roadmap, missing_credential};
use crate::state::AppState;

/// Checked in this order; the first missing one is reported.
const REQUIRED_FIELDS: [&str; 5] = [
    "fullName",
    "nationality",
    "profession",
    "yearsExperience",
    "province",
];

/// POST /generate-roadmap
///
/// Body: Profile JSON plus optional `language` (default "en").
/// Credential is checked first, then the body, then the model is called.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RoadmapResult>, AppError> {
    let api_key = state.config.api_key();
    if api_key.is_none() {
        // Fail before parsing the body or calling the model.
        return Err(missing_credential());
    }

    let body = body?;
    let profile = parse_profile(&body)?;

    let result = generate_roadmap(
        state.generator.as_ref(),
        api_key,
        state.config.model_timeout,
        &profile,
    )
    .await?;

    info!(
        "Returning roadmap with {} checklist items",
        result.checklist.len()
    );
    Ok(Json(result))
}

/// Parses and validates the request body into a `Profile`.
pub fn parse_profile(body: &[u8]) -> Result<Profile, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::InvalidRequest("Request body must be valid JSON".to_string()))?;

    let Value::Object(fields) = value else {
        return Err(AppError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !is_truthy(fields.get(**field)))
    {
        return Err(AppError::Validation(format!(
            "Missing required field: {missing}"
        )));
    }

    profile_from_fields(fields)
}

fn profile_from_fields(fields: Map<String, Value>) -> Result<Profile, AppError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| AppError::Validation(e.to_string()))
}

/// Absent, null, false, zero and "" are treated as missing.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
