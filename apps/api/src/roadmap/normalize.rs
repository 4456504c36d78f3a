//! Shape normalization. Turns whatever the model returned into a complete `RoadmapResult`.
//!
//! `normalize` never fails: unparseable output is replaced by a fallback roadmap
//! built from the profile, and missing or falsy keys get placeholders.

use serde_json::{Map, Value};

use crate::i18n::interpolate;
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;
use crate::roadmap::extract::ParseError;
use crate::roadmap::prompts::{
    FALLBACK_ALTERNATIVE_JOBS, FALLBACK_CHECKLIST, FALLBACK_CREDENTIAL_VALIDATION,
    FALLBACK_PROFESSIONAL_DIFFERENCES, FALLBACK_RECOMMENDED_TRAINING, FALLBACK_SUMMARY,
};

/// Placeholder for a free-text key the model left out.
pub fn placeholder(key: &str) -> String {
    format!("Information about {key} will be provided.")
}

pub fn normalize(parsed: Result<Map<String, Value>, ParseError>, profile: &Profile) -> RoadmapResult {
    match parsed {
        Ok(map) => from_parsed(&map),
        Err(_) => fallback(profile),
    }
}

fn from_parsed(map: &Map<String, Value>) -> RoadmapResult {
    let text = |key: &str| text_field(map.get(key)).unwrap_or_else(|| placeholder(key));

    RoadmapResult {
        summary: text("summary"),
        professional_differences: text("professionalDifferences"),
        credential_validation: text("credentialValidation"),
        recommended_training: text("recommendedTraining"),
        alternative_jobs: text("alternativeJobs"),
        checklist: checklist_field(map.get("checklist")),
    }
}

/// Reads a free-text field. Falsy values (null, false, 0, "") count as missing.
///
/// Arrays of strings are joined one item per line so they still itemize in the
/// presentation layer.
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => {
            let lines: Vec<String> = items.iter().filter_map(scalar_text).collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        _ => None,
    }
}

/// Anything but an array becomes an empty checklist. Non-text items are dropped.
fn checklist_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Fallback roadmap that interpolates the profile into fixed sentences.
pub fn fallback(profile: &Profile) -> RoadmapResult {
    let fill = |template: &str| fill_profile(template, profile);

    RoadmapResult {
        summary: fill(FALLBACK_SUMMARY),
        professional_differences: fill(FALLBACK_PROFESSIONAL_DIFFERENCES),
        credential_validation: fill(FALLBACK_CREDENTIAL_VALIDATION),
        recommended_training: fill(FALLBACK_RECOMMENDED_TRAINING),
        alternative_jobs: fill(FALLBACK_ALTERNATIVE_JOBS),
        checklist: FALLBACK_CHECKLIST.into_iter().map(fill).collect(),
    }
}

fn fill_profile(template: &str, profile: &Profile) -> String {
    let years = profile.years_experience.to_string();
    interpolate(
        template,
        &[
            ("full_name", profile.full_name.as_str()),
            ("nationality", profile.nationality.as_str()),
            ("profession", profile.profession.as_str()),
            ("years", years.as_str()),
            ("province", profile.province.as_str()),
        ],
    )
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::roadmap::extract::extract_json;
    use serde_json::json;

    fn profile() -> Profile {
        Profile {
            full_name: "Ana Ruiz".into(),
            nationality: "Mexico".into(),
            profession: "Civil Engineer".into(),
            years_experience: 8,
            province: "ontario".into(),
            email: "a@x.com".into(),
            display_language: Language::Es,
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_missing_keys_get_exact_placeholders() {
        let result = normalize(extract_json("Sure! ```json\n{\"summary\":\"hi\"}\n```"), &profile());
        assert_eq!(result.summary, "hi");
        assert_eq!(
            result.professional_differences,
            "Information about professionalDifferences will be provided."
        );
        assert_eq!(
            result.credential_validation,
            "Information about credentialValidation will be provided."
        );
        assert_eq!(
            result.recommended_training,
            "Information about recommendedTraining will be provided."
        );
        assert_eq!(
            result.alternative_jobs,
            "Information about alternativeJobs will be provided."
        );
        assert!(result.checklist.is_empty());
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        let map = object(json!({
            "summary": "",
            "professionalDifferences": null,
            "credentialValidation": false,
            "recommendedTraining": 0,
            "alternativeJobs": {},
            "checklist": null
        }));
        let result = normalize(Ok(map), &profile());
        assert_eq!(result.summary, placeholder("summary"));
        assert_eq!(result.professional_differences, placeholder("professionalDifferences"));
        assert_eq!(result.credential_validation, placeholder("credentialValidation"));
        assert_eq!(result.recommended_training, placeholder("recommendedTraining"));
        assert_eq!(result.alternative_jobs, placeholder("alternativeJobs"));
        assert!(result.checklist.is_empty());
    }

    #[test]
    fn test_non_array_checklist_becomes_empty() {
        let map = object(json!({"checklist": "do everything"}));
        assert!(normalize(Ok(map), &profile()).checklist.is_empty());
    }

    #[test]
    fn test_empty_checklist_array_is_kept() {
        let map = object(json!({"summary": "x", "checklist": []}));
        let result = normalize(Ok(map), &profile());
        assert_eq!(result.checklist, Vec::<String>::new());
    }

    #[test]
    fn test_complete_object_passes_through() {
        let map = object(json!({
            "summary": "Welcome",
            "professionalDifferences": "Different codes",
            "credentialValidation": "Step 1: apply - $300 CAD, 3 months",
            "recommendedTraining": "Bridging program",
            "alternativeJobs": "Technologist",
            "checklist": ["a", "b", "c", "d", "e"]
        }));
        let result = normalize(Ok(map), &profile());
        assert_eq!(result.summary, "Welcome");
        assert_eq!(result.credential_validation, "Step 1: apply - $300 CAD, 3 months");
        assert_eq!(result.checklist.len(), 5);
    }

    #[test]
    fn test_list_valued_text_field_is_joined_per_line() {
        let map = object(json!({"alternativeJobs": ["Technologist", "Inspector"]}));
        let result = normalize(Ok(map), &profile());
        assert_eq!(result.alternative_jobs, "Technologist\nInspector");
    }

    #[test]
    fn test_checklist_drops_non_text_items() {
        let map = object(json!({"checklist": ["a", null, {"x": 1}, 3, "  "]}));
        assert_eq!(normalize(Ok(map), &profile()).checklist, vec!["a", "3"]);
    }

    #[test]
    fn test_parse_error_yields_interpolated_fallback() {
        let result = normalize(extract_json("no json at all"), &profile());
        assert!(result.summary.starts_with("Hello Ana Ruiz!"));
        assert!(result.summary.contains("Civil Engineer from Mexico with 8 years"));
        assert!(result.professional_differences.contains("Civil Engineer in ontario"));
        assert_eq!(result.checklist.len(), 6);
        assert_eq!(
            result.checklist[0],
            "Research the regulatory body for Civil Engineer in ontario"
        );
    }

    #[test]
    fn test_fallback_keeps_braced_profile_values() {
        let profile = Profile {
            full_name: "Dr. {province} Smith".into(),
            ..profile()
        };
        let result = fallback(&profile);
        assert!(result.summary.starts_with("Hello Dr. {province} Smith!"));
        assert!(result.summary.contains("experience in ontario"));
    }

    #[test]
    fn test_fallback_leaves_no_template_syntax() {
        let result = fallback(&profile());
        let all = [
            &result.summary,
            &result.professional_differences,
            &result.credential_validation,
            &result.recommended_training,
            &result.alternative_jobs,
        ];
        for text in all.into_iter().chain(result.checklist.iter()) {
            assert!(!text.is_empty());
            assert!(!text.contains('{'), "uninterpolated template in: {text}");
            assert!(!text.contains("${"), "uninterpolated template in: {text}");
        }
    }
}
