//! Named connection descriptors.

use serde::{Deserialize, Serialize};

/// Describes how to reach a remote object store
///
/// Descriptors are shared, named resources: the registry owns them and
/// hands out copies, and nothing mutates one after it has been resolved.
/// Steps treat the descriptor as opaque beyond its name; the transport
/// layer consumes the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Registry name of this connection
    pub name: String,

    /// Base endpoint of the store, e.g. `https://store.example.com`
    pub endpoint: String,

    /// Optional namespace within the store
    #[serde(default)]
    pub namespace: Option<String>,

    /// Account used to authenticate
    pub username: String,

    /// Credential used to authenticate
    pub password: String,

    /// Optional connect timeout in milliseconds
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

impl ConnectionDescriptor {
    /// Create a descriptor with empty credentials
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            namespace: None,
            username: String::new(),
            password: String::new(),
            connect_timeout_ms: None,
        }
    }

    /// Set the authentication credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the store namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_fills_optional_parts() {
        let descriptor = ConnectionDescriptor::new("prod-store", "https://store.example.com")
            .with_credentials("ingest", "secret")
            .with_namespace("documents");

        assert_eq!(descriptor.name, "prod-store");
        assert_eq!(descriptor.namespace.as_deref(), Some("documents"));
        assert_eq!(descriptor.username, "ingest");
        assert_eq!(descriptor.connect_timeout_ms, None);
    }
}
