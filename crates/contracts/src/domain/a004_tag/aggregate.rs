use serde::{Deserialize, Serialize};

use crate::domain::common::{translated_name, ApiRecord, Translation};

/// Catalog tag used for product grouping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Tag {
    pub fn display_name(&self, language: &str) -> &str {
        translated_name(&self.translations, language, &self.name)
    }
}

impl ApiRecord for Tag {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub name: String,
    pub translations: Vec<Translation>,
}
