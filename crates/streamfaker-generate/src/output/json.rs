use crate::errors::GenerationError;
use crate::model::Record;

/// Encode a batch as a JSON array with one object per record.
pub fn batch_to_json(batch: &[Record]) -> Result<Vec<u8>, GenerationError> {
    Ok(serde_json::to_vec(batch)?)
}
