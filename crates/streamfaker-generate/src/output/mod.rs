pub mod csv;
pub mod json;

use streamfaker_core::OutputFormat;

use crate::errors::GenerationError;
use crate::fields::FieldSpec;
use crate::model::Record;

/// Serialize a batch in the requested wire format.
pub fn serialize_batch(
    fields: &[FieldSpec],
    batch: &[Record],
    format: OutputFormat,
) -> Result<Vec<u8>, GenerationError> {
    match format {
        OutputFormat::Json => json::batch_to_json(batch),
        OutputFormat::Csv => Ok(csv::batch_to_csv(fields, batch, true)?),
        OutputFormat::CsvHeadless => Ok(csv::batch_to_csv(fields, batch, false)?),
    }
}
