use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationConfig;
use crate::error::{Error, Result};
use crate::format::{OutputFormat, Strictness};

/// Raw configuration file as written by the user.
///
/// Every key defaults to its zero value so that a missing key is reported by
/// [`Config::validate`] with the same message as an invalid one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kafka bootstrap address, e.g. `localhost:9092`.
    pub kafka: String,
    pub topic: String,
    /// Milliseconds between two published batches.
    pub interval: i64,
    /// Records generated per batch.
    pub samples: i64,
    pub format: String,
    pub correlation: CorrelationSection,
    /// `label=generator` lines.
    pub data: Vec<String>,
    /// Abort on unresolvable field lines instead of skipping them.
    pub strict: bool,
    /// Seed for the random source; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationSection {
    pub amount: i64,
    pub label: String,
}

/// Configuration whose scalar values passed validation.
///
/// Field lines stay raw: resolving them against the generator registry is the
/// generation engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub broker: String,
    pub topic: String,
    pub interval: Duration,
    pub samples: usize,
    pub format: OutputFormat,
    pub correlation: Option<CorrelationConfig>,
    pub data: Vec<String>,
    pub strictness: Strictness,
    pub seed: Option<u64>,
}

impl Config {
    /// Read a configuration file. `.toml` files are decoded as TOML, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document decodes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check every scalar value, failing on the first invalid one.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        if self.kafka.is_empty() {
            return Err(Error::invalid(
                "kafka",
                "''; valid values are non-empty strings",
            ));
        }
        if self.topic.is_empty() {
            return Err(Error::invalid(
                "topic",
                "''; valid values are non-empty strings",
            ));
        }
        let interval = positive("interval", self.interval)?;
        let samples = positive("samples", self.samples)?;
        let samples = usize::try_from(samples)
            .map_err(|_| Error::invalid("samples", format!("{samples}; value is too large")))?;
        let format: OutputFormat = self.format.parse()?;
        let correlation =
            CorrelationConfig::from_parts(&self.correlation.label, self.correlation.amount)?;

        Ok(ValidatedConfig {
            broker: self.kafka.clone(),
            topic: self.topic.clone(),
            interval: Duration::from_millis(interval),
            samples,
            format,
            correlation,
            data: self.data.clone(),
            strictness: Strictness::from_flag(self.strict),
            seed: self.seed,
        })
    }
}

fn positive(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| Error::invalid(field, format!("{value}; valid values are positive integers")))
}
