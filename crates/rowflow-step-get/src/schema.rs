//! Output schema contribution.

use crate::config::GetStepConfig;
use crate::error::GetStepError;
use rowflow_row::{Field, FieldKind, RowSchema};
use rowflow_store::{ReadResponse, SystemMetadata};

/// Name of the numeric field recording how long each fetch took
pub const ELAPSED_TIME_FIELD_NAME: &str = "Elapsed time ms";

const ELAPSED_TIME_FIELD_LENGTH: usize = 7;

impl GetStepConfig {
    /// Compute the schema this step emits, given the schema it receives
    ///
    /// Appended after the input fields, in fixed order: the elapsed-time
    /// field, the store's system metadata fields, then the read response
    /// fields. The shape never depends on `fetch_system_metadata_only`;
    /// a metadata-only fetch simply leaves the read fields unpopulated at
    /// execution time.
    pub fn output_schema(
        &self,
        input: &RowSchema,
        step_name: &str,
    ) -> Result<RowSchema, GetStepError> {
        let mut output = input.clone();

        output.append(
            Field::new(ELAPSED_TIME_FIELD_NAME, FieldKind::Integer)
                .with_length(ELAPSED_TIME_FIELD_LENGTH)
                .with_origin(step_name),
        )?;
        output.append_all(SystemMetadata::field_schema()?)?;
        output.append_all(ReadResponse::field_schema()?)?;

        Ok(output)
    }
}
