//! Store response models and their row field sets.
//!
//! A retrieval step declares every field of both models in its output
//! schema, whatever its configuration says about payload transfer; only
//! the populated values differ at execution time. The field deltas here
//! are therefore part of the schema contract: names, kinds, and order are
//! stable.

use chrono::{DateTime, Utc};
use rowflow_row::{Field, FieldKind, SchemaError};
use serde::{Deserialize, Serialize};

/// Row field: version identifier assigned by the store
pub const FIELD_VERSION_ID: &str = "Store version id";

/// Row field: content hash recorded by the store
pub const FIELD_CONTENT_HASH: &str = "Store content hash";

/// Row field: time the object was ingested into the store
pub const FIELD_INGEST_TIME: &str = "Store ingest time";

/// Row field: object size in bytes
pub const FIELD_SIZE_BYTES: &str = "Store size bytes";

/// Row field: media type reported for fetched content
pub const FIELD_CONTENT_TYPE: &str = "Content type";

/// Row field: number of content bytes transferred
pub const FIELD_CONTENT_LENGTH: &str = "Content length";

/// Store-side object metadata, available with or without a payload fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMetadata {
    /// Version identifier assigned by the store
    pub version_id: String,

    /// Content hash recorded by the store
    pub content_hash: String,

    /// Time the object was ingested
    pub ingest_time: DateTime<Utc>,

    /// Object size in bytes
    pub size_bytes: u64,
}

impl SystemMetadata {
    /// The ordered field delta this model contributes to a row schema
    ///
    /// May fail when a field set cannot be constructed; callers treat
    /// that as fatal at transformation-validation time.
    pub fn field_schema() -> Result<Vec<Field>, SchemaError> {
        Ok(vec![
            Field::new(FIELD_VERSION_ID, FieldKind::String),
            Field::new(FIELD_CONTENT_HASH, FieldKind::String),
            Field::new(FIELD_INGEST_TIME, FieldKind::Date),
            Field::new(FIELD_SIZE_BYTES, FieldKind::Integer),
        ])
    }
}

/// Result of a full content fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResponse {
    /// Metadata the store reports for the object
    pub system: SystemMetadata,

    /// Media type of the fetched content
    pub content_type: String,

    /// Number of content bytes transferred
    pub content_length: u64,
}

impl ReadResponse {
    /// The ordered field delta for read-specific fields
    ///
    /// System metadata fields are contributed separately by
    /// [`SystemMetadata::field_schema`]; this delta covers only what a
    /// payload fetch adds.
    pub fn field_schema() -> Result<Vec<Field>, SchemaError> {
        Ok(vec![
            Field::new(FIELD_CONTENT_TYPE, FieldKind::String),
            Field::new(FIELD_CONTENT_LENGTH, FieldKind::Integer),
        ])
    }
}
