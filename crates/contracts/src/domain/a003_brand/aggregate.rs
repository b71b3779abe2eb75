use serde::{Deserialize, Serialize};

use crate::domain::common::{translated_name, ApiRecord, EntityMetadata, Translation};

/// Product brand with localized names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Brand {
    pub fn display_name(&self, language: &str) -> &str {
        translated_name(&self.translations, language, &self.name)
    }
}

impl ApiRecord for Brand {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    pub name: String,
    pub image: Option<String>,
    pub translations: Vec<Translation>,
}
