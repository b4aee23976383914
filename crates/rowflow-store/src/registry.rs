//! Name-to-descriptor resolution.

use crate::ConnectionDescriptor;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by the registry mechanism itself
///
/// A name that simply has no entry is not an error; lookups report that
/// as `Ok(None)`. These variants mean the registry could not answer at
/// all, which is fatal to whatever load operation triggered the lookup.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The underlying metadata store is unreachable or broken
    #[error("Connection registry backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// An entry exists for the name but cannot be decoded
    #[error("Corrupt connection entry '{name}'")]
    CorruptEntry {
        /// Name of the unreadable entry
        name: String,
        /// The decode failure
        #[source]
        source: serde_json::Error,
    },
}

/// Keyed lookup of shared, named connection descriptors
pub trait ConnectionRegistry: Send + Sync {
    /// Resolve a connection name to its descriptor
    ///
    /// Returns `Ok(None)` when no connection with that name exists.
    fn lookup(&self, name: &str) -> Result<Option<ConnectionDescriptor>, RegistryError>;
}

/// In-memory implementation of [`ConnectionRegistry`]
///
/// Entries are held as JSON documents, the same shape a repository-backed
/// registry persists. Primarily intended for testing and development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnectionRegistry {
    entries: HashMap<String, serde_json::Value>,
}

impl InMemoryConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own name
    pub fn register(&mut self, descriptor: &ConnectionDescriptor) -> Result<(), RegistryError> {
        let entry = serde_json::to_value(descriptor).map_err(anyhow::Error::new)?;
        self.entries.insert(descriptor.name.clone(), entry);
        Ok(())
    }

    /// Insert a raw entry document under a name
    ///
    /// Lets tests simulate registry contents written by other tools,
    /// including entries this crate cannot decode.
    pub fn register_raw(&mut self, name: impl Into<String>, entry: serde_json::Value) {
        self.entries.insert(name.into(), entry);
    }
}

impl ConnectionRegistry for InMemoryConnectionRegistry {
    fn lookup(&self, name: &str) -> Result<Option<ConnectionDescriptor>, RegistryError> {
        match self.entries.get(name) {
            None => Ok(None),
            Some(entry) => serde_json::from_value(entry.clone())
                .map(Some)
                .map_err(|source| RegistryError::CorruptEntry {
                    name: name.to_string(),
                    source,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lookup_resolves_registered_descriptor() {
        let mut registry = InMemoryConnectionRegistry::new();
        let descriptor = ConnectionDescriptor::new("prod-store", "https://store.example.com")
            .with_credentials("ingest", "secret");
        registry.register(&descriptor).unwrap();

        let resolved = registry.lookup("prod-store").unwrap();
        assert_eq!(resolved, Some(descriptor));
    }

    #[test]
    fn test_missing_name_is_not_an_error() {
        let registry = InMemoryConnectionRegistry::new();

        let resolved = registry.lookup("nowhere").unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_corrupt_entry_is_a_registry_error() {
        let mut registry = InMemoryConnectionRegistry::new();
        registry.register_raw("broken", json!({ "name": 42 }));

        let err = registry.lookup("broken").unwrap_err();
        match err {
            RegistryError::CorruptEntry { name, .. } => assert_eq!(name, "broken"),
            other => panic!("Expected CorruptEntry, got {:?}", other),
        }
    }
}
