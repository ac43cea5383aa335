//! Field-specification engine for streamfaker.
//!
//! This crate resolves `label=generator` lines against a registry of value
//! generators, builds the optional correlation pool, generates records and
//! serializes batches as JSON or CSV.

pub mod correlation;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod generators;
pub mod model;
pub mod output;

pub use correlation::CorrelationPool;
pub use engine::SampleGenerator;
pub use errors::GenerationError;
pub use fields::{FieldKind, FieldSpec, ResolvedFields, SkippedField, parse_field_line, resolve_fields};
pub use generators::{Generator, GeneratorRegistry};
pub use model::{Batch, Record};
pub use output::serialize_batch;
