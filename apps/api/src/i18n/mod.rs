//! Display-language support: a static (language, key) → string table.
//!
//! The language is always passed explicitly; there is no ambient "current language".

mod translations;

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Supported display languages. `En` is the fallback for unknown codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Pt,
}

pub const SUPPORTED_LANGUAGES: &[Language] =
    &[Language::En, Language::Es, Language::Fr, Language::Pt];

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Pt => "pt",
        }
    }

    /// Parses a language code, tolerant of case and region tags (`pt-BR`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// Like [`Language::parse`] but falls back to English.
    pub fn from_code(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Language name as written into the model prompt.
    pub const fn prompt_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::Pt => "Portuguese",
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::from_code(&value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Looks up `key`, falling back to English and then to the key itself.
pub fn t(language: Language, key: &str) -> &str {
    translations::lookup(language, key)
        .or_else(|| translations::lookup(Language::En, key))
        .unwrap_or(key)
}

/// Looks up `key` and substitutes each `{name}` placeholder from `params`.
pub fn t_with<'a>(language: Language, key: &'a str, params: &[(&str, &str)]) -> Cow<'a, str> {
    interpolate(t(language, key), params)
}

fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex is valid"))
}

/// Fills `{name}` placeholders in a single left-to-right pass. Substituted
/// values are never rescanned, so a value may itself contain `{name}` text.
/// Unknown names are left as written.
pub fn interpolate<'a>(template: &'a str, params: &[(&str, &str)]) -> Cow<'a, str> {
    placeholder_pattern().replace_all(template, |caps: &Captures<'_>| {
        params
            .iter()
            .find(|(name, _)| *name == &caps[1])
            .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_region_tags_and_case() {
        assert_eq!(Language::parse("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::parse(" ES "), Some(Language::Es));
        assert_eq!(Language::parse("fr_CA"), Some(Language::Fr));
        assert_eq!(Language::parse("de"), None);
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let text = interpolate(
            "{a} and {b} and {missing}",
            &[("a", "{b}"), ("b", "two")],
        );
        assert_eq!(text, "{b} and two and {missing}");
    }

    #[test]
    fn test_t_with_keeps_braces_in_values() {
        let text = t_with(Language::En, "notice.email", &[("email", "{province}@x.com")]);
        assert_eq!(text, "Your roadmap has been sent to {province}@x.com");
    }

    #[test]
    fn test_unknown_code_defaults_to_english() {
        assert_eq!(Language::from_code("klingon"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let lang: Language = serde_json::from_str(r#""es""#).unwrap();
        assert_eq!(lang, Language::Es);
        let lang: Language = serde_json::from_str(r#""xx""#).unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), r#""pt""#);
    }

    #[test]
    fn test_prompt_names() {
        assert_eq!(Language::Es.prompt_name(), "Spanish");
        assert_eq!(Language::Pt.prompt_name(), "Portuguese");
    }

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(t(Language::En, "welcome.start"), "Begin now");
        assert_eq!(t(Language::Es, "welcome.start"), "Empezar ahora");
        assert_eq!(t(Language::Fr, "province.quebec"), "Québec");
        assert_eq!(t(Language::Pt, "province.ontario"), "Ontário");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(t(Language::Fr, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_placeholder_substitution() {
        let text = t_with(
            Language::En,
            "results.intro.credentialValidation",
            &[("province", "Ontario")],
        );
        assert_eq!(text, "To validate your profession in Ontario, you will need:");
    }

    #[test]
    fn test_every_language_covers_every_english_key() {
        for key in translations::keys(Language::En) {
            for language in SUPPORTED_LANGUAGES {
                assert!(
                    translations::lookup(*language, key).is_some(),
                    "{language} is missing '{key}'"
                );
            }
        }
    }
}
