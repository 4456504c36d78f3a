use serde::{de, Deserialize, Deserializer, Serialize};

use crate::i18n::{t, Language};
use crate::models::catalog::province_by_key;

/// User-submitted intake data. Immutable once built.
///
/// Wire shape is camelCase; the display language travels as `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub nationality: String,
    pub profession: String,
    #[serde(deserialize_with = "deserialize_years")]
    pub years_experience: u32,
    pub province: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        rename = "language",
        default,
        deserialize_with = "deserialize_language"
    )]
    pub display_language: Language,
}

impl Profile {
    /// Human label for the province in `language`; unknown keys are shown verbatim.
    pub fn province_label(&self, language: Language) -> &str {
        match province_by_key(&self.province) {
            Some(province) => t(language, province.label_key),
            None => &self.province,
        }
    }
}

/// Accepts a positive JSON integer or a numeric string.
fn deserialize_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Years {
        Number(u64),
        Text(String),
    }

    let years = match Years::deserialize(deserializer) {
        Ok(Years::Number(n)) => u32::try_from(n).ok(),
        Ok(Years::Text(s)) => s.trim().parse::<u32>().ok(),
        Err(_) => None,
    };

    match years {
        Some(n) if n > 0 => Ok(n),
        _ => Err(de::Error::custom(
            "yearsExperience must be a positive whole number",
        )),
    }
}

/// Unknown, empty or null language codes fall back to English.
fn deserialize_language<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<String>::deserialize(deserializer)?;
    Ok(code.map(|c| Language::from_code(&c)).unwrap_or_default())
}
