use rowflow_core::AttributeStoreError;
use rowflow_row::SchemaError;
use rowflow_store::RegistryError;
use thiserror::Error;

/// Errors surfaced by the Get step's configuration and schema paths
///
/// A connection name that fails to resolve is deliberately not here: that
/// case degrades the loaded configuration instead of failing it, so the
/// transformation stays loadable in environments missing the connection.
#[derive(Error, Debug)]
pub enum GetStepError {
    /// The step's fragment of the pipeline document is structurally invalid
    #[error("{message}")]
    MalformedConfiguration {
        /// Human-readable message identifying this step's configuration
        message: String,
        /// The underlying parse failure
        #[source]
        source: serde_yaml::Error,
    },

    /// The connection registry mechanism itself failed
    #[error("Connection registry failure: {0}")]
    Registry(#[from] RegistryError),

    /// The step attribute store failed
    #[error("Attribute store failure: {0}")]
    AttributeStore(#[from] AttributeStoreError),

    /// A contributed field set could not be added to the output schema
    #[error("Schema contribution failed: {0}")]
    SchemaContribution(#[from] SchemaError),

    /// The configuration could not be written to the pipeline document
    #[error("Failed to serialize step configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),
}
