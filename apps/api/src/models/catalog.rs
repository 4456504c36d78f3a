//! Closed reference lists offered by the intake form.

use crate::i18n::{t, Language, SUPPORTED_LANGUAGES};

/// A Canadian province or territory: stable key plus translation key for its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    pub key: &'static str,
    pub label_key: &'static str,
}

const fn province(key: &'static str, label_key: &'static str) -> Province {
    Province { key, label_key }
}

pub const PROVINCES: &[Province] = &[
    province("ontario", "province.ontario"),
    province("quebec", "province.quebec"),
    province("alberta", "province.alberta"),
    province("britishColumbia", "province.britishColumbia"),
    province("manitoba", "province.manitoba"),
    province("saskatchewan", "province.saskatchewan"),
    province("novascotia", "province.novascotia"),
    province("newbrunswick", "province.newbrunswick"),
    province("newfoundland", "province.newfoundland"),
    province("pei", "province.pei"),
    province("northwest", "province.northwest"),
    province("nunavut", "province.nunavut"),
    province("yukon", "province.yukon"),
];

pub const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bangladesh",
    "Belarus",
    "Belgium",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Brazil",
    "Bulgaria",
    "Cambodia",
    "Cameroon",
    "Chile",
    "China",
    "Colombia",
    "Costa Rica",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Dominican Republic",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Estonia",
    "Ethiopia",
    "Finland",
    "France",
    "Georgia",
    "Germany",
    "Ghana",
    "Greece",
    "Guatemala",
    "Haiti",
    "Honduras",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "South Korea",
    "Kuwait",
    "Latvia",
    "Lebanon",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nicaragua",
    "Nigeria",
    "Norway",
    "Pakistan",
    "Panama",
    "Paraguay",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Russia",
    "Saudi Arabia",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "Spain",
    "Sri Lanka",
    "Sweden",
    "Switzerland",
    "Syria",
    "Taiwan",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Uruguay",
    "Venezuela",
    "Vietnam",
    "Yemen",
    "Zimbabwe",
];

/// Case-insensitive country lookup returning the canonical spelling.
pub fn find_country(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    if needle.is_empty() {
        return None;
    }
    let needle = needle.to_lowercase();
    COUNTRIES.iter().copied().find(|c| c.to_lowercase() == needle)
}

pub fn province_by_key(key: &str) -> Option<&'static Province> {
    PROVINCES.iter().find(|p| p.key.eq_ignore_ascii_case(key.trim()))
}

/// Resolves user input to a province: by key, by 1-based list position, or by
/// label in `language` (then in any supported language).
pub fn find_province(input: &str, language: Language) -> Option<&'static Province> {
    let needle = input.trim();
    if needle.is_empty() {
        return None;
    }
    if let Some(p) = province_by_key(needle) {
        return Some(p);
    }
    if let Ok(index) = needle.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| PROVINCES.get(i));
    }

    let needle = needle.to_lowercase();
    let matches_label =
        |lang: Language, p: &Province| t(lang, p.label_key).to_lowercase() == needle;

    PROVINCES
        .iter()
        .find(|p| matches_label(language, *p))
        .or_else(|| {
            SUPPORTED_LANGUAGES
                .iter()
                .find_map(|lang| PROVINCES.iter().find(|p| matches_label(*lang, *p)))
        })
}
