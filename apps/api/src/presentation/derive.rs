//! Display-only derivations over `RoadmapResult` text fields.
//!
//! Pure and idempotent: they borrow the source text and never modify it.
//! Empty sources yield a language-appropriate default list, never an empty one.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::i18n::{t, Language};

/// One credential-validation step with best-effort cost/time annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialStep {
    pub text: String,
    pub cost: Option<String>,
    pub time: Option<String>,
}

/// `$300`, `$1,200-1,500 CAD`
fn cost_pattern() -> &'static Regex {
    static COST: OnceLock<Regex> = OnceLock::new();
    COST.get_or_init(|| {
        Regex::new(r"(?i)\$(\d+(?:,\d+)?(?:-\d+(?:,\d+)?)?)\s*(?:CAD)?")
            .expect("cost regex is valid")
    })
}

/// `3 months`, `6-8 weeks`
fn time_pattern() -> &'static Regex {
    static TIME: OnceLock<Regex> = OnceLock::new();
    TIME.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:-\d+)?)\s*(days?|weeks?|months?|years?)")
            .expect("time regex is valid")
    })
}

/// Splits into non-blank lines with a single leading bullet marker removed.
pub fn split_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(['-', '•', '*']).unwrap_or(line).trim()
}

/// First cost mention in `line`, e.g. `$300 CAD`.
pub fn extract_cost(line: &str) -> Option<String> {
    cost_pattern()
        .find(line)
        .map(|m| m.as_str().trim_end().to_string())
}

/// First duration mention in `line`, normalized to `<amount> <unit>`.
pub fn extract_time(line: &str) -> Option<String> {
    time_pattern()
        .captures(line)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
}

pub fn credential_steps(content: &str, language: Language) -> Vec<CredentialStep> {
    let steps: Vec<CredentialStep> = content
        .lines()
        .filter(|line| !strip_bullet(line).is_empty())
        .map(|line| CredentialStep {
            text: strip_bullet(line).to_string(),
            cost: extract_cost(line),
            time: extract_time(line),
        })
        .collect();

    if steps.is_empty() {
        vec![CredentialStep {
            text: t(language, "defaults.credentialStep").to_string(),
            cost: None,
            time: None,
        }]
    } else {
        steps
    }
}

pub fn training_items(content: &str, language: Language) -> Vec<String> {
    or_defaults(split_items(content), language, &["defaults.training"])
}

pub fn alternative_jobs(content: &str, language: Language) -> Vec<String> {
    or_defaults(
        split_items(content),
        language,
        &["defaults.jobs.1", "defaults.jobs.2", "defaults.jobs.3"],
    )
}

fn or_defaults(items: Vec<String>, language: Language, keys: &[&str]) -> Vec<String> {
    if items.is_empty() {
        keys.iter().map(|key| t(language, key).to_string()).collect()
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_strips_bullets_and_blank_lines() {
        let items = split_items("- First\n\n• Second\n  * Third  \nFourth\n-\n");
        assert_eq!(items, ["First", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn test_split_strips_only_one_marker() {
        assert_eq!(split_items("-- dashes"), ["- dashes"]);
    }

    #[test]
    fn test_cost_extracted_when_present() {
        assert_eq!(
            extract_cost("Apply to PEO - $300 CAD, takes a while").as_deref(),
            Some("$300 CAD")
        );
        assert_eq!(
            extract_cost("Fee: $1,200-1,500 cad").as_deref(),
            Some("$1,200-1,500 cad")
        );
        assert_eq!(extract_cost("Fee $450 paid online").as_deref(), Some("$450"));
    }

    #[test]
    fn test_cost_omitted_when_absent() {
        assert_eq!(extract_cost("Free of charge"), None);
        assert_eq!(extract_cost("costs 300 dollars"), None);
    }

    #[test]
    fn test_time_extracted_when_present() {
        assert_eq!(extract_time("Processing: 3 months").as_deref(), Some("3 months"));
        assert_eq!(extract_time("about 6-8 Weeks").as_deref(), Some("6-8 Weeks"));
        assert_eq!(extract_time("within 10days").as_deref(), Some("10 days"));
    }

    #[test]
    fn test_time_omitted_when_absent() {
        assert_eq!(extract_time("As soon as possible"), None);
    }

    #[test]
    fn test_credential_steps_annotate_each_line() {
        let content = "- Credential assessment with WES: $250 CAD, 6-8 weeks\n- Submit application to PEO: $350, 3 months\n- Network with local engineers";
        let steps = credential_steps(content, Language::En);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].text, "Credential assessment with WES: $250 CAD, 6-8 weeks");
        assert_eq!(steps[0].cost.as_deref(), Some("$250 CAD"));
        assert_eq!(steps[0].time.as_deref(), Some("6-8 weeks"));
        assert_eq!(steps[1].cost.as_deref(), Some("$350"));
        assert_eq!(steps[1].time.as_deref(), Some("3 months"));
        assert_eq!(steps[2].cost, None);
        assert_eq!(steps[2].time, None);
    }

    #[test]
    fn test_at_most_one_cost_and_time_per_line() {
        let steps = credential_steps("Exam $500 or $700, 2 months to 1 year", Language::En);
        assert_eq!(steps[0].cost.as_deref(), Some("$500"));
        assert_eq!(steps[0].time.as_deref(), Some("2 months"));
    }

    #[test]
    fn test_empty_sources_use_localized_defaults() {
        let steps = credential_steps("   \n ", Language::Es);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].text, t(Language::Es, "defaults.credentialStep"));

        assert_eq!(
            training_items("", Language::Fr),
            [t(Language::Fr, "defaults.training")]
        );
        assert_eq!(alternative_jobs("", Language::Pt).len(), 3);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let content = "- A $10 CAD, 1 day\n- B";
        let first = credential_steps(content, Language::En);
        let second = credential_steps(content, Language::En);
        assert_eq!(first, second);
        assert_eq!(
            training_items(content, Language::En),
            training_items(content, Language::En)
        );
    }
}
