//! Tolerant JSON extraction from free-form model output.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Expected failure mode: the model did not return a usable JSON object.
/// Always absorbed by the pipeline.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No valid JSON found")]
    NoJsonObject,

    #[error("Malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Matches ```json / ``` fence markers together with trailing whitespace.
fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:json)?\s*").expect("fence regex is valid"))
}

/// Strips every code-fence marker from the trimmed text.
pub fn strip_fences(text: &str) -> String {
    fence_pattern().replace_all(text.trim(), "").into_owned()
}

/// Parses the substring between the first `{` and the last `}` of the cleaned text.
pub fn extract_json(raw_text: &str) -> Result<Map<String, Value>, ParseError> {
    let cleaned = strip_fences(raw_text);

    let start = cleaned.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = cleaned.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end <= start {
        return Err(ParseError::NoJsonObject);
    }

    match serde_json::from_str::<Value>(&cleaned[start..=end])? {
        Value::Object(map) => Ok(map),
        _ => Err(ParseError::NoJsonObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_from_fenced_prose() {
        let raw = "Sure! ```json\n{\"summary\":\"hi\"}\n```";
        let map = extract_json(raw).unwrap();
        assert_eq!(Value::Object(map), json!({"summary": "hi"}));
    }

    #[test]
    fn test_fenced_and_bare_parse_identically() {
        let bare = r#"{"summary": "a", "checklist": ["x", "y"]}"#;
        let fenced = format!("```json\n{bare}\n```");
        let plain_fence = format!("```\n{bare}\n```");
        let expected = extract_json(bare).unwrap();
        assert_eq!(extract_json(&fenced).unwrap(), expected);
        assert_eq!(extract_json(&plain_fence).unwrap(), expected);
    }

    #[test]
    fn test_ignores_prose_around_object() {
        let raw = "Here is your roadmap:\n{\"summary\": \"ok\", \"nested\": {\"a\": 1}}\nGood luck!";
        let map = extract_json(raw).unwrap();
        assert_eq!(map["summary"], "ok");
        assert_eq!(map["nested"]["a"], 1);
    }

    #[test]
    fn test_no_braces_is_parse_error() {
        assert!(matches!(
            extract_json("I cannot help with that."),
            Err(ParseError::NoJsonObject)
        ));
    }

    #[test]
    fn test_reversed_braces_is_parse_error() {
        assert!(matches!(
            extract_json("} nothing here {"),
            Err(ParseError::NoJsonObject)
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            extract_json("{\"summary\": \"unterminated}"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_prose_braces_spanning_two_objects_fail() {
        // First `{` to last `}` covers both objects, which is not valid JSON.
        assert!(extract_json("{\"a\":1} and {\"b\":2}").is_err());
    }
}
