use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Wire format of a serialized batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Array of objects, one per record.
    Json,
    /// CSV with a header row of field labels.
    Csv,
    /// CSV without the header row.
    CsvHeadless,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Json, Self::Csv, Self::CsvHeadless];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::CsvHeadless => "csvheadless",
        }
    }

    pub fn has_header(self) -> bool {
        matches!(self, Self::Csv)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == value)
            .ok_or_else(|| {
                Error::invalid(
                    "format",
                    format!("'{value}'; valid values are: 'json', 'csv', 'csvheadless'"),
                )
            })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How field lines that cannot be resolved are handled at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Invalid lines and unknown generators are logged and dropped.
    #[default]
    Permissive,
    /// Invalid lines and unknown generators abort startup.
    Strict,
}

impl Strictness {
    pub fn from_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
