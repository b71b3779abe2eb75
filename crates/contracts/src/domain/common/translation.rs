use serde::{Deserialize, Serialize};

/// Localized name of a record, one entry per language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Translation {
    pub fn new(language_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Name in `language`, or `fallback` when that translation is missing or blank
pub fn translated_name<'a>(translations: &'a [Translation], language: &str, fallback: &'a str) -> &'a str {
    translations
        .iter()
        .find(|t| t.language_id == language)
        .map(|t| t.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(fallback)
}
