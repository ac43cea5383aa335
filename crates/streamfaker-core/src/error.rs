use thiserror::Error;

/// Core error type shared across streamfaker crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value failed validation.
    #[error("invalid {field} value: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid YAML.
    #[error("yaml decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The configuration file is not valid TOML.
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

/// Convenience alias for results returned by streamfaker crates.
pub type Result<T> = std::result::Result<T, Error>;
