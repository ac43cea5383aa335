use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, info};

use streamfaker_core::{OutputFormat, Strictness, ValidatedConfig};

use crate::correlation::CorrelationPool;
use crate::errors::GenerationError;
use crate::fields::{FieldKind, FieldSpec, resolve_fields};
use crate::generators::GeneratorRegistry;
use crate::model::{Batch, Record};
use crate::output::serialize_batch;

/// Produces records from a resolved field list.
///
/// Registry, field list and pool are shared read-only; cloning the generator
/// only bumps reference counts.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    registry: Arc<GeneratorRegistry>,
    fields: Arc<[FieldSpec]>,
    pool: Option<Arc<CorrelationPool>>,
    strictness: Strictness,
}

impl SampleGenerator {
    pub fn new(
        registry: Arc<GeneratorRegistry>,
        fields: Vec<FieldSpec>,
        pool: Option<Arc<CorrelationPool>>,
        strictness: Strictness,
    ) -> Self {
        Self {
            registry,
            fields: fields.into(),
            pool,
            strictness,
        }
    }

    /// Resolve the configured field lines and build the correlation pool.
    pub fn from_config(
        config: &ValidatedConfig,
        registry: Arc<GeneratorRegistry>,
        rng: &mut dyn RngCore,
    ) -> Result<Self, GenerationError> {
        let resolved = resolve_fields(
            config.data.as_slice(),
            config.correlation.as_ref(),
            &registry,
            config.strictness,
        )?;
        let pool = config
            .correlation
            .as_ref()
            .map(|correlation| Arc::new(CorrelationPool::initialize(correlation.amount, rng)));

        info!(
            fields = resolved.fields.len(),
            skipped = resolved.skipped.len(),
            correlated = pool.is_some(),
            strict = config.strictness.is_strict(),
            "field list resolved"
        );

        Ok(Self::new(registry, resolved.fields, pool, config.strictness))
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn pool(&self) -> Option<&CorrelationPool> {
        self.pool.as_deref()
    }

    /// Generate one record, visiting fields in list order.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Record, GenerationError> {
        let mut record = Record::with_capacity(self.fields.len());
        for field in self.fields.iter() {
            match &field.kind {
                FieldKind::Correlated => {
                    let value = self
                        .pool
                        .as_deref()
                        .and_then(|pool| pool.draw(rng))
                        .ok_or_else(|| GenerationError::MissingPool(field.label.clone()))?;
                    record.insert(&field.label, value.to_string());
                }
                FieldKind::Plain(id) => match self.registry.generator(id) {
                    Some(generator) => record.insert(&field.label, generator.generate(rng)),
                    None if self.strictness.is_strict() => {
                        return Err(GenerationError::UnknownGenerator {
                            line: format!("{}={id}", field.label),
                            generator: id.clone(),
                        });
                    }
                    None => debug!(label = %field.label, generator = %id, "generator missing, field omitted"),
                },
            }
        }
        Ok(record)
    }

    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Batch, GenerationError> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generate `count` records and serialize them in one step.
    pub fn render(
        &self,
        count: usize,
        format: OutputFormat,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>, GenerationError> {
        let batch = self.generate_batch(count, rng)?;
        serialize_batch(&self.fields, &batch, format)
    }
}
