use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};
use crate::enums::PrescriptionStatus;

/// Prescription uploaded by a customer for review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    pub image: String,
    pub status: PrescriptionStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ApiRecord for Prescription {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPrescriptionDto {
    pub status: PrescriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
