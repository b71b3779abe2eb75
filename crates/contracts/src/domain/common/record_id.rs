use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of a record exposed by the admin API
pub trait RecordId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URL paths and select values
    fn as_string(&self) -> String;

    /// Parse an id coming back from a path segment or a select value
    fn from_string(s: &str) -> Result<Self, String>;
}

impl RecordId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

impl RecordId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty id".to_string());
        }
        Ok(s.to_string())
    }
}

/// A record served by one REST resource
pub trait ApiRecord: Serialize + DeserializeOwned + Clone {
    type Id: RecordId;

    fn id(&self) -> &Self::Id;
}
