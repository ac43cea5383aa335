use crate::error::{Error, Result};

/// Generator name reserved for the correlation field.
pub const CORRELATE_GENERATOR: &str = "correlate";

/// Validated correlation settings: a reserved label and a pool size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrelationConfig {
    pub label: String,
    pub amount: usize,
}

impl CorrelationConfig {
    /// Build correlation settings from the raw configuration pair.
    ///
    /// Both halves must be set together. An empty label with a zero (or
    /// negative) amount means correlation is disabled.
    pub fn from_parts(label: &str, amount: i64) -> Result<Option<Self>> {
        match (label.is_empty(), amount > 0) {
            (true, false) => Ok(None),
            (false, true) => {
                let amount = usize::try_from(amount).map_err(|_| {
                    Error::invalid(
                        "correlation amount",
                        format!("{amount}; value does not fit in memory"),
                    )
                })?;
                Ok(Some(Self {
                    label: label.to_string(),
                    amount,
                }))
            }
            (false, false) => Err(Error::invalid(
                "correlation amount",
                format!("{amount}; valid values are positive integers"),
            )),
            (true, true) => Err(Error::invalid(
                "correlation label",
                "''; valid values are non-empty strings",
            )),
        }
    }
}
