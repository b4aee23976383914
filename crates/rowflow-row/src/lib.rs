//!
//! Rowflow Row - row schema model for the Rowflow platform
//!
//! A step declares the fields it adds to the row stream before any row
//! flows. This crate provides the building blocks for that declaration:
//! typed field descriptors and an append-only row schema that rejects
//! conflicting field names.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a row schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field with the same name is already present in the schema
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A contributed field could not be constructed
    #[error("Field construction failed: {0}")]
    FieldConstruction(String),
}

/// The type of a row field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Text value
    String,

    /// Signed integer value
    Integer,

    /// Boolean value
    Boolean,

    /// Date/time value
    Date,

    /// Raw byte value
    Binary,
}

/// A single typed field of a row schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within a schema
    pub name: String,

    /// Field type
    pub kind: FieldKind,

    /// Optional display length
    #[serde(default)]
    pub length: Option<usize>,

    /// Name of the step that contributed this field, if known
    #[serde(default)]
    pub origin: Option<String>,
}

impl Field {
    /// Create a new field with the given name and kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            length: None,
            origin: None,
        }
    }

    /// Set the display length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the contributing step name
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// An ordered, append-only list of row fields
///
/// Field order is part of the schema contract: downstream steps rely on
/// the declared order as much as on the names and types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSchema {
    fields: Vec<Field>,
}

impl RowSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, failing when its name is already taken
    pub fn append(&mut self, field: Field) -> Result<(), SchemaError> {
        if self.contains(&field.name) {
            return Err(SchemaError::DuplicateField(field.name));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Append a contributed field delta in order
    ///
    /// The first conflicting name aborts with an error; callers are
    /// expected to discard the partially extended schema.
    pub fn append_all(
        &mut self,
        fields: impl IntoIterator<Item = Field>,
    ) -> Result<(), SchemaError> {
        for field in fields {
            self.append(field)?;
        }
        Ok(())
    }

    /// All fields, in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field names, in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
