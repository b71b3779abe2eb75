use serde::{Deserialize, Serialize};

/// Review state of an uploaded prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Pending,
    Approved,
    Rejected,
}

impl PrescriptionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PrescriptionStatus::Pending => "pending",
            PrescriptionStatus::Approved => "approved",
            PrescriptionStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrescriptionStatus::Pending => "Pending review",
            PrescriptionStatus::Approved => "Approved",
            PrescriptionStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<PrescriptionStatus> {
        vec![
            PrescriptionStatus::Pending,
            PrescriptionStatus::Approved,
            PrescriptionStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
