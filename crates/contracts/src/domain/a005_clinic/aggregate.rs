use serde::{Deserialize, Serialize};

use crate::domain::common::{translated_name, ApiRecord, EntityMetadata, Translation};

/// Partner clinic issuing prescriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Clinic {
    pub fn display_name(&self, language: &str) -> &str {
        translated_name(&self.translations, language, &self.name)
    }
}

impl ApiRecord for Clinic {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicDto {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub translations: Vec<Translation>,
}
