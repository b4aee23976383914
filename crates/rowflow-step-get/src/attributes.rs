//! Attribute-store codec: the step's settings as flat named attributes.
//!
//! Same logical content as the markup fragment, but the medium is
//! unordered key/value with typed accessors, so the boolean is stored as
//! a boolean and no lexical parsing happens on the way back.

use crate::config::{
    resolve_connection, GetStepConfig, TAG_CONNECTION, TAG_FETCH_SYS_META, TAG_SOURCE_FIELD,
    TAG_TARGET_FIELD,
};
use crate::error::GetStepError;
use rowflow_core::{MessageCatalog, StepAttributeRepository, StepKey};
use rowflow_store::ConnectionRegistry;

/// Write the configuration as attributes scoped to `key`
///
/// An unset connection writes no connection attribute at all.
pub fn save_attributes(
    config: &GetStepConfig,
    key: &StepKey,
    repository: &mut dyn StepAttributeRepository,
) -> Result<(), GetStepError> {
    if let Some(name) = config.connection.name() {
        repository.write_string(key, TAG_CONNECTION, name)?;
    }
    repository.write_string(key, TAG_SOURCE_FIELD, &config.source_file_field)?;
    repository.write_string(key, TAG_TARGET_FIELD, &config.target_file_field)?;
    repository.write_bool(key, TAG_FETCH_SYS_META, config.fetch_system_metadata_only)?;

    tracing::debug!(step = %key.step_id.0, "saved step attributes");
    Ok(())
}

/// Load a configuration from the attributes scoped to `key`
///
/// Connection resolution follows the same policy as the markup load path:
/// a missing connection degrades, a broken registry or attribute store
/// aborts.
pub fn load_attributes(
    key: &StepKey,
    repository: &dyn StepAttributeRepository,
    registry: &dyn ConnectionRegistry,
    catalog: &dyn MessageCatalog,
) -> Result<GetStepConfig, GetStepError> {
    let mut config = GetStepConfig::new();

    if let Some(name) = repository.read_string(key, TAG_CONNECTION)? {
        if !name.is_empty() {
            config.connection = resolve_connection(&name, registry, catalog)?;
        }
    }
    config.source_file_field = repository.read_string(key, TAG_SOURCE_FIELD)?.unwrap_or_default();
    config.target_file_field = repository.read_string(key, TAG_TARGET_FIELD)?.unwrap_or_default();
    config.fetch_system_metadata_only =
        repository.read_bool(key, TAG_FETCH_SYS_META)?.unwrap_or(false);

    Ok(config)
}
