//! Common types shared by all admin resources

pub mod entity_metadata;
pub mod record_id;
pub mod translation;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use record_id::{ApiRecord, RecordId};
pub use translation::{translated_name, Translation};
