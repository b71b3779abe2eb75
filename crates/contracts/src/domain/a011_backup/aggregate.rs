use serde::{Deserialize, Serialize};

use crate::domain::common::ApiRecord;

/// Database snapshot produced by the server; ids are file names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub id: String,
    pub size_bytes: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Backup {
    /// Size for list rows, e.g. "12.4 MB"
    pub fn size_label(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = self.size_bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size_bytes, UNITS[0])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}

impl ApiRecord for Backup {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup(size_bytes: u64) -> Backup {
        Backup {
            id: "backup.sql".to_string(),
            size_bytes,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_size_label() {
        assert_eq!(backup(512).size_label(), "512 B");
        assert_eq!(backup(1536).size_label(), "1.5 KB");
        assert_eq!(backup(13_002_342).size_label(), "12.4 MB");
    }
}
