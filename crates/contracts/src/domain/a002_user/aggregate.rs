use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};

/// Storefront customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl User {
    /// Best contact handle for list rows
    pub fn contact(&self) -> &str {
        self.phone
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("-")
    }
}

impl ApiRecord for User {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_blocked: bool,
}
