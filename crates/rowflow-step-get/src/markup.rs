//! Markup codec: the step's fragment of the hierarchical pipeline document.
//!
//! Exactly four tags, written in fixed order; reads tolerate any tag
//! order and treat missing tags as defaults. The boolean setting uses the
//! lexical `"Y"`/`"N"` convention of the markup medium; the attribute
//! store medium stores it as a typed boolean instead.

use crate::config::{
    resolve_connection, GetStepConfig, TAG_CONNECTION, TAG_FETCH_SYS_META, TAG_SOURCE_FIELD,
    TAG_TARGET_FIELD,
};
use crate::error::GetStepError;
use crate::messages::keys;
use rowflow_core::MessageCatalog;
use rowflow_store::ConnectionRegistry;
use serde_yaml::{Mapping, Value};

const FLAG_TRUE: &str = "Y";
const FLAG_FALSE: &str = "N";

/// Serialize the configuration to its pipeline-document fragment
///
/// An unset connection produces no `connection` tag at all, never a
/// placeholder value.
pub fn to_markup(config: &GetStepConfig) -> Result<String, GetStepError> {
    let mut doc = Mapping::new();
    if let Some(name) = config.connection.name() {
        doc.insert(Value::from(TAG_CONNECTION), Value::from(name));
    }
    doc.insert(
        Value::from(TAG_SOURCE_FIELD),
        Value::from(config.source_file_field.as_str()),
    );
    doc.insert(
        Value::from(TAG_TARGET_FIELD),
        Value::from(config.target_file_field.as_str()),
    );
    doc.insert(
        Value::from(TAG_FETCH_SYS_META),
        Value::from(if config.fetch_system_metadata_only {
            FLAG_TRUE
        } else {
            FLAG_FALSE
        }),
    );

    serde_yaml::to_string(&doc).map_err(GetStepError::Serialize)
}

/// Load a configuration from its pipeline-document fragment
///
/// A connection name that fails to resolve degrades the reference and
/// keeps loading; a structurally invalid document aborts with
/// [`GetStepError::MalformedConfiguration`].
pub fn from_markup(
    document: &str,
    registry: &dyn ConnectionRegistry,
    catalog: &dyn MessageCatalog,
) -> Result<GetStepConfig, GetStepError> {
    let node: Option<Mapping> =
        serde_yaml::from_str(document).map_err(|source| GetStepError::MalformedConfiguration {
            message: catalog.resolve(keys::MALFORMED_CONFIGURATION, &[&source.to_string()]),
            source,
        })?;
    let node = Value::Mapping(node.unwrap_or_default());

    let mut config = GetStepConfig::new();

    if let Some(name) = tag_value(&node, TAG_CONNECTION) {
        if !name.is_empty() {
            config.connection = resolve_connection(&name, registry, catalog)?;
        }
    }
    config.source_file_field = tag_value(&node, TAG_SOURCE_FIELD).unwrap_or_default();
    config.target_file_field = tag_value(&node, TAG_TARGET_FIELD).unwrap_or_default();
    if let Some(flag) = tag_value(&node, TAG_FETCH_SYS_META) {
        config.fetch_system_metadata_only = flag.eq_ignore_ascii_case(FLAG_TRUE);
    }

    Ok(config)
}

fn tag_value(node: &Value, tag: &str) -> Option<String> {
    node.get(tag).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionRef;
    use crate::messages::EnglishMessages;
    use pretty_assertions::assert_eq;
    use rowflow_store::InMemoryConnectionRegistry;

    #[test]
    fn test_tags_are_written_in_fixed_order() {
        let mut config = GetStepConfig::new();
        config.connection = ConnectionRef::Named("prod-store".to_string());
        config.source_file_field = "doc_key".to_string();
        config.target_file_field = "doc_content".to_string();

        let document = to_markup(&config).unwrap();
        let positions: Vec<usize> = ["connection", "source_field", "target_field", "fetch_sys_meta"]
            .iter()
            .map(|tag| document.find(tag).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_unset_connection_writes_no_tag() {
        let document = to_markup(&GetStepConfig::new()).unwrap();

        assert!(!document.contains("connection"));
        assert!(document.contains("source_field"));
    }

    #[test]
    fn test_boolean_flag_uses_lexical_tokens() {
        let mut config = GetStepConfig::new();
        config.fetch_system_metadata_only = true;
        assert!(to_markup(&config).unwrap().contains("Y"));

        config.fetch_system_metadata_only = false;
        assert!(to_markup(&config).unwrap().contains("N"));
    }

    #[test]
    fn test_read_tolerates_any_tag_order() {
        let document = "fetch_sys_meta: \"Y\"\ntarget_field: out\nsource_field: key\n";
        let registry = InMemoryConnectionRegistry::new();

        let config = from_markup(document, &registry, &EnglishMessages).unwrap();
        assert_eq!(config.source_file_field, "key");
        assert_eq!(config.target_file_field, "out");
        assert!(config.fetch_system_metadata_only);
        assert_eq!(config.connection, ConnectionRef::Unset);
    }

    #[test]
    fn test_missing_tags_read_as_defaults() {
        let registry = InMemoryConnectionRegistry::new();

        let config = from_markup("source_field: key\n", &registry, &EnglishMessages).unwrap();
        assert_eq!(config.source_file_field, "key");
        // Absent tags degrade to empty strings, never nulls
        assert_eq!(config.target_file_field, "");
        assert!(!config.fetch_system_metadata_only);
    }

    #[test]
    fn test_lowercase_flag_token_is_accepted() {
        let registry = InMemoryConnectionRegistry::new();

        let config = from_markup("fetch_sys_meta: \"y\"\n", &registry, &EnglishMessages).unwrap();
        assert!(config.fetch_system_metadata_only);
    }

    #[test]
    fn test_empty_connection_tag_stays_unset() {
        let registry = InMemoryConnectionRegistry::new();

        let config =
            from_markup("connection: \"\"\nsource_field: key\n", &registry, &EnglishMessages)
                .unwrap();
        assert_eq!(config.connection, ConnectionRef::Unset);
    }
}
