//! # Rowflow Get step
//!
//! Retrieves a document, or only its store-side metadata, from a remote
//! content-addressed object store for every row flowing through a
//! transformation. This crate covers the step's configuration contract:
//! the configuration entity, its two persistence codecs (the hierarchical
//! pipeline document and the flat repository attribute store), the
//! connection-resolution policy shared by both load paths, and the output
//! schema the step declares before any row is processed.
//!
//! Loading a configuration never fails just because its named connection
//! is missing from the registry; the reference degrades and keeps the
//! name, so definitions stay loadable for inspection and editing in
//! environments that lack the connection.
//!
//! ```
//! use rowflow_step_get::{from_markup, to_markup, ConnectionRef, EnglishMessages, GetStepConfig};
//! use rowflow_store::InMemoryConnectionRegistry;
//!
//! let mut config = GetStepConfig::new();
//! config.connection = ConnectionRef::Named("prod-store".to_string());
//! config.source_file_field = "doc_key".to_string();
//! config.target_file_field = "doc_content".to_string();
//!
//! let document = to_markup(&config).unwrap();
//!
//! // No "prod-store" connection registered here, yet the load succeeds
//! // and the name survives.
//! let registry = InMemoryConnectionRegistry::new();
//! let reloaded = from_markup(&document, &registry, &EnglishMessages).unwrap();
//! assert_eq!(reloaded.connection.name(), Some("prod-store"));
//! assert!(!reloaded.connection.is_resolved());
//! ```

#![forbid(unsafe_code)]

mod attributes;
mod config;
mod error;
mod markup;
mod messages;
mod schema;

pub use attributes::{load_attributes, save_attributes};
pub use config::{ConnectionRef, GetStepConfig};
pub use error::GetStepError;
pub use markup::{from_markup, to_markup};
pub use messages::{keys as message_keys, EnglishMessages};
pub use schema::ELAPSED_TIME_FIELD_NAME;

use rowflow_core::StepDescriptor;

/// The step descriptor registered with the host engine
pub fn descriptor() -> StepDescriptor {
    StepDescriptor {
        id: "ObjectStoreGet",
        name: "Object store get",
        description: "Retrieve documents or their system metadata from a content-addressed object store",
        category: "Object store",
        supports_error_handling: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_declares_error_handling() {
        let descriptor = descriptor();

        assert_eq!(descriptor.id, "ObjectStoreGet");
        assert!(descriptor.supports_error_handling);
    }
}
