use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid data field '{line}': {reason}")]
    InvalidField { line: String, reason: String },
    #[error("unknown generator '{generator}' in data field '{line}'")]
    UnknownGenerator { line: String, generator: String },
    #[error("invalid data field label '{0}': the label is reserved for data correlation")]
    ReservedLabel(String),
    #[error("no valid data fields found in config")]
    NoFields,
    #[error("correlated field '{0}' has no correlation pool")]
    MissingPool(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
