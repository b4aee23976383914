//! Flat, typed attribute persistence for step configurations.
//!
//! A transformation definition stored in a repository database keeps each
//! step's settings as named attributes scoped to a (transformation, step)
//! key pair. The medium is unordered key/value with typed accessors; there
//! is no document structure to parse, so the only failure mode is the
//! store itself.

use crate::{StepId, TransformationId};
use std::collections::HashMap;
use thiserror::Error;

/// Scope of a step's attributes: one step within one transformation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepKey {
    /// The owning transformation
    pub transformation_id: TransformationId,

    /// The step within that transformation
    pub step_id: StepId,
}

impl StepKey {
    /// Create a new step key
    pub fn new(transformation_id: TransformationId, step_id: StepId) -> Self {
        Self {
            transformation_id,
            step_id,
        }
    }
}

/// Errors raised by a step attribute repository
///
/// Any of these is a structural failure of the store and fatal to the
/// surrounding load or save operation. A merely absent attribute is not
/// an error; reads return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum AttributeStoreError {
    /// The underlying store is unreachable or corrupt
    #[error("Attribute store backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// An attribute exists but holds a value of another type
    #[error("Attribute '{attribute}' holds a {found} where a {expected} was expected")]
    TypeMismatch {
        /// The attribute name
        attribute: String,
        /// The type the caller asked for
        expected: &'static str,
        /// The type actually stored
        found: &'static str,
    },
}

/// Flat named-attribute store scoped by [`StepKey`]
///
/// Implementations are typically backed by a repository database; the
/// in-memory implementation below serves tests and local development.
pub trait StepAttributeRepository: Send + Sync {
    /// Read a string attribute; `Ok(None)` when absent
    fn read_string(
        &self,
        key: &StepKey,
        attribute: &str,
    ) -> Result<Option<String>, AttributeStoreError>;

    /// Read a boolean attribute; `Ok(None)` when absent
    fn read_bool(&self, key: &StepKey, attribute: &str)
        -> Result<Option<bool>, AttributeStoreError>;

    /// Write a string attribute
    fn write_string(
        &mut self,
        key: &StepKey,
        attribute: &str,
        value: &str,
    ) -> Result<(), AttributeStoreError>;

    /// Write a boolean attribute
    fn write_bool(
        &mut self,
        key: &StepKey,
        attribute: &str,
        value: bool,
    ) -> Result<(), AttributeStoreError>;
}

#[derive(Debug, Clone, PartialEq)]
enum AttributeValue {
    String(String),
    Bool(bool),
}

impl AttributeValue {
    fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "string",
            AttributeValue::Bool(_) => "boolean",
        }
    }
}

/// In-memory implementation of [`StepAttributeRepository`]
///
/// All data is lost when the instance is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttributeRepository {
    attributes: HashMap<(StepKey, String), AttributeValue>,
}

impl InMemoryAttributeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_key(key: &StepKey, attribute: &str) -> (StepKey, String) {
        (key.clone(), attribute.to_string())
    }
}

impl StepAttributeRepository for InMemoryAttributeRepository {
    fn read_string(
        &self,
        key: &StepKey,
        attribute: &str,
    ) -> Result<Option<String>, AttributeStoreError> {
        match self.attributes.get(&Self::entry_key(key, attribute)) {
            None => Ok(None),
            Some(AttributeValue::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(AttributeStoreError::TypeMismatch {
                attribute: attribute.to_string(),
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    fn read_bool(
        &self,
        key: &StepKey,
        attribute: &str,
    ) -> Result<Option<bool>, AttributeStoreError> {
        match self.attributes.get(&Self::entry_key(key, attribute)) {
            None => Ok(None),
            Some(AttributeValue::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(AttributeStoreError::TypeMismatch {
                attribute: attribute.to_string(),
                expected: "boolean",
                found: other.type_name(),
            }),
        }
    }

    fn write_string(
        &mut self,
        key: &StepKey,
        attribute: &str,
        value: &str,
    ) -> Result<(), AttributeStoreError> {
        self.attributes.insert(
            Self::entry_key(key, attribute),
            AttributeValue::String(value.to_string()),
        );
        Ok(())
    }

    fn write_bool(
        &mut self,
        key: &StepKey,
        attribute: &str,
        value: bool,
    ) -> Result<(), AttributeStoreError> {
        self.attributes
            .insert(Self::entry_key(key, attribute), AttributeValue::Bool(value));
        Ok(())
    }
}
