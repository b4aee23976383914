//!
//! Rowflow Core - engine-facing seams shared by every step
//!
//! This crate defines the contracts the host engine offers to step
//! implementations: identity value objects for scoping persisted state,
//! the flat step-attribute repository, message resolution for
//! user-facing text, and the static step descriptor a step registers
//! with the engine.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Step attribute persistence
pub mod attributes;

/// Message resolution for user-facing text
pub mod messages;

/// Static step registration data
pub mod step;

pub use attributes::{
    AttributeStoreError, InMemoryAttributeRepository, StepAttributeRepository, StepKey,
};
pub use messages::MessageCatalog;
pub use step::StepDescriptor;

/// Value object: transformation ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformationId(pub String);

/// Value object: step ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub String);

impl TransformationId {
    /// Create a transformation ID from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl StepId {
    /// Create a step ID from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
