use serde::{Deserialize, Serialize};

/// The normalized roadmap handed to the presentation layer.
///
/// INVARIANT: every text field is non-empty once it leaves the pipeline;
/// `checklist` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    pub summary: String,
    pub professional_differences: String,
    pub credential_validation: String,
    pub recommended_training: String,
    pub alternative_jobs: String,
    pub checklist: Vec<String>,
}
