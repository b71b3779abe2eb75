use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};

/// Home-screen promotional banner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ApiRecord for Banner {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub title: String,
    pub image: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
}
