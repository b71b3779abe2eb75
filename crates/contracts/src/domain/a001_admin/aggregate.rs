use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};

/// Back-office account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ApiRecord for Admin {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDto {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Only sent on create or when the password is being reset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
