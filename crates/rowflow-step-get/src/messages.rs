//! Message keys and the built-in English catalog for this step.

use rowflow_core::MessageCatalog;

/// Message keys this step resolves through the catalog
pub mod keys {
    /// Warning logged when a configured connection is missing from the
    /// registry. Argument 0: the connection name.
    pub const CONNECTION_NOT_FOUND: &str = "step.store-get.connection-not-found";

    /// Load error for a structurally invalid configuration fragment.
    /// Argument 0: the parser detail.
    pub const MALFORMED_CONFIGURATION: &str = "step.store-get.malformed-configuration";
}

/// Built-in English messages for this step
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl MessageCatalog for EnglishMessages {
    fn resolve(&self, key: &str, args: &[&str]) -> String {
        let arg = |index: usize| args.get(index).copied().unwrap_or("");
        match key {
            keys::CONNECTION_NOT_FOUND => format!(
                "Object store connection '{}' could not be found; the step keeps the name but no live connection is attached",
                arg(0)
            ),
            keys::MALFORMED_CONFIGURATION => format!(
                "Unable to read the Get step configuration from the pipeline document: {}",
                arg(0)
            ),
            _ => {
                tracing::warn!(key, "no message registered for key");
                key.to_string()
            }
        }
    }
}
