use crate::error::GetStepError;
use crate::messages::keys;
use rowflow_core::MessageCatalog;
use rowflow_store::{ConnectionDescriptor, ConnectionRegistry};

// Persisted names of the step's settings, shared by both mediums.
pub(crate) const TAG_CONNECTION: &str = "connection";
pub(crate) const TAG_SOURCE_FIELD: &str = "source_field";
pub(crate) const TAG_TARGET_FIELD: &str = "target_field";
pub(crate) const TAG_FETCH_SYS_META: &str = "fetch_sys_meta";

/// Reference from a step configuration to a named object store connection
///
/// The name is the persisted identity. A live descriptor is only attached
/// when the registry resolves the name at load time; when it cannot, the
/// reference degrades to [`ConnectionRef::Unresolved`] and keeps the name,
/// so a later save round-trips it unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectionRef {
    /// No connection configured
    #[default]
    Unset,

    /// A name is configured but resolution has not been attempted yet
    Named(String),

    /// The name resolved to a live descriptor
    Resolved(ConnectionDescriptor),

    /// The name did not resolve to any registered connection
    Unresolved(String),
}

impl ConnectionRef {
    /// The persisted connection name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            ConnectionRef::Unset => None,
            ConnectionRef::Named(name) | ConnectionRef::Unresolved(name) => Some(name),
            ConnectionRef::Resolved(descriptor) => Some(&descriptor.name),
        }
    }

    /// The live descriptor, when resolution succeeded
    pub fn descriptor(&self) -> Option<&ConnectionDescriptor> {
        match self {
            ConnectionRef::Resolved(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// Whether a live descriptor is attached
    pub fn is_resolved(&self) -> bool {
        matches!(self, ConnectionRef::Resolved(_))
    }
}

/// Configuration of the object store Get step
///
/// These four fields are the complete persisted state of the step. The
/// host engine creates the configuration empty, one of the load paths
/// populates it, and it is read-only from schema contribution onwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetStepConfig {
    /// The object store connection this step reads from
    pub connection: ConnectionRef,

    /// Input-row field holding the document key to fetch
    pub source_file_field: String,

    /// Field that receives the fetched content or a content handle
    pub target_file_field: String,

    /// When true, execution skips payload transfer and only returns
    /// store-side metadata; the declared output schema is unaffected
    pub fetch_system_metadata_only: bool,
}

impl GetStepConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve a connection name through the registry, shared by both load paths
///
/// A missing name degrades to [`ConnectionRef::Unresolved`] with a logged
/// warning and the load continues; a broken registry aborts the load.
pub(crate) fn resolve_connection(
    name: &str,
    registry: &dyn ConnectionRegistry,
    catalog: &dyn MessageCatalog,
) -> Result<ConnectionRef, GetStepError> {
    match registry.lookup(name)? {
        Some(descriptor) => Ok(ConnectionRef::Resolved(descriptor)),
        None => {
            tracing::warn!(
                connection = name,
                "{}",
                catalog.resolve(keys::CONNECTION_NOT_FOUND, &[name])
            );
            Ok(ConnectionRef::Unresolved(name.to_string()))
        }
    }
}
