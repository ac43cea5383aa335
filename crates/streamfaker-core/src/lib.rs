//! Core contracts shared across streamfaker crates.
//!
//! This crate defines the configuration file model and its validation, the
//! output formats, the strictness mode and the correlation settings consumed
//! by the generation engine and the CLI.

pub mod config;
pub mod correlation;
pub mod error;
pub mod format;

pub use config::{Config, CorrelationSection, ValidatedConfig};
pub use correlation::{CORRELATE_GENERATOR, CorrelationConfig};
pub use error::{Error, Result};
pub use format::{OutputFormat, Strictness};
