use serde::{Deserialize, Serialize};

/// Lifecycle timestamps the API attaches to every stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    #[serde(default)]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        Self {
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    /// Most recent change, falling back to creation time
    pub fn last_changed(&self) -> chrono::DateTime<chrono::Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
