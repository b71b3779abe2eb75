use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};

/// Push notification sent to customers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// None means broadcast to every user
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ApiRecord for Notification {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationDto {
    pub title: String,
    pub body: String,
    pub user_id: Option<i64>,
}
