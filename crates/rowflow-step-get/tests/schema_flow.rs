//! Pre-execution flow: load a configuration, then declare the output schema.

use pretty_assertions::assert_eq;
use rowflow_row::{Field, FieldKind, RowSchema};
use rowflow_step_get::{from_markup, EnglishMessages, ELAPSED_TIME_FIELD_NAME};
use rowflow_store::{response, InMemoryConnectionRegistry};

fn input_schema() -> RowSchema {
    let mut schema = RowSchema::new();
    schema.append(Field::new("doc_key", FieldKind::String)).unwrap();
    schema
}

#[test]
fn schema_is_declared_even_with_an_unresolved_connection() {
    // A definition loaded in an environment missing its connection must
    // still declare its full downstream schema for validation.
    let registry = InMemoryConnectionRegistry::new();
    let document = "connection: prod-hcp\nsource_field: doc_key\ntarget_field: doc_content\nfetch_sys_meta: \"N\"\n";

    let config = from_markup(document, &registry, &EnglishMessages).unwrap();
    assert!(!config.connection.is_resolved());

    let output = config.output_schema(&input_schema(), "Get document").unwrap();
    assert_eq!(
        output.field_names(),
        vec![
            "doc_key",
            ELAPSED_TIME_FIELD_NAME,
            response::FIELD_VERSION_ID,
            response::FIELD_CONTENT_HASH,
            response::FIELD_INGEST_TIME,
            response::FIELD_SIZE_BYTES,
            response::FIELD_CONTENT_TYPE,
            response::FIELD_CONTENT_LENGTH,
        ]
    );
}

#[test]
fn metadata_only_and_full_fetch_declare_the_same_shape() {
    let registry = InMemoryConnectionRegistry::new();

    let metadata_only = from_markup("fetch_sys_meta: \"Y\"\n", &registry, &EnglishMessages).unwrap();
    let full_fetch = from_markup("fetch_sys_meta: \"N\"\n", &registry, &EnglishMessages).unwrap();
    assert!(metadata_only.fetch_system_metadata_only);
    assert!(!full_fetch.fetch_system_metadata_only);

    let a = metadata_only.output_schema(&input_schema(), "get").unwrap();
    let b = full_fetch.output_schema(&input_schema(), "get").unwrap();
    assert_eq!(a, b);
}

#[test]
fn contributed_fields_follow_the_original_input_fields() {
    let registry = InMemoryConnectionRegistry::new();
    let config = from_markup("source_field: doc_key\n", &registry, &EnglishMessages).unwrap();

    let mut input = RowSchema::new();
    input.append(Field::new("first", FieldKind::String)).unwrap();
    input.append(Field::new("second", FieldKind::Date)).unwrap();

    let output = config.output_schema(&input, "get").unwrap();
    let names = output.field_names();

    assert_eq!(&names[..2], &["first", "second"]);
    assert_eq!(names[2], ELAPSED_TIME_FIELD_NAME);
    assert_eq!(output.len(), input.len() + 7);
}
