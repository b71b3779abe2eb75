use serde::{Deserialize, Serialize};

use crate::domain::common::{translated_name, EntityMetadata, Translation};
use crate::enums::ContentPageKind;

/// Static page (privacy, returns, about); addressed by kind, not by id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub kind: ContentPageKind,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ContentPage {
    pub fn display_title(&self, language: &str) -> &str {
        translated_name(&self.translations, language, &self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPageDto {
    pub title: String,
    pub body: String,
    pub translations: Vec<Translation>,
}
