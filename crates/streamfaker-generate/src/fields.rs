use thiserror::Error;
use tracing::warn;

use streamfaker_core::{CORRELATE_GENERATOR, CorrelationConfig, Strictness};

use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;

/// How a field obtains its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Value produced by the named registry generator.
    Plain(String),
    /// Value drawn from the correlation pool.
    Correlated,
}

/// One output column: a label and where its value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn plain(label: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Plain(generator.into()),
        }
    }

    pub fn correlated(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Correlated,
        }
    }

    pub fn is_correlated(&self) -> bool {
        matches!(self.kind, FieldKind::Correlated)
    }
}

/// Why a `label=generator` line could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldLineError {
    #[error("expected exactly one '=' separator")]
    Separator,
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("generator name must not be empty")]
    EmptyGenerator,
}

/// A line dropped in permissive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub line: String,
    pub reason: String,
}

/// Active field list plus the lines dropped while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    pub fields: Vec<FieldSpec>,
    pub skipped: Vec<SkippedField>,
}

/// Split a `label=generator` line. The label text is kept verbatim.
pub fn parse_field_line(line: &str) -> Result<(&str, &str), FieldLineError> {
    let Some((label, generator)) = line.split_once('=') else {
        return Err(FieldLineError::Separator);
    };
    if generator.contains('=') {
        return Err(FieldLineError::Separator);
    }
    if label.is_empty() {
        return Err(FieldLineError::EmptyLabel);
    }
    if generator.is_empty() {
        return Err(FieldLineError::EmptyGenerator);
    }
    Ok((label, generator))
}

/// Build the active field list from raw configuration lines.
///
/// Malformed lines, the reserved `correlate` name and unknown generators are
/// fatal in strict mode and skipped with a warning in permissive mode. A label
/// equal to the correlation label is always fatal, as is an empty result.
/// When correlation is enabled its field is appended last.
pub fn resolve_fields<S: AsRef<str>>(
    lines: &[S],
    correlation: Option<&CorrelationConfig>,
    registry: &GeneratorRegistry,
    strictness: Strictness,
) -> Result<ResolvedFields, GenerationError> {
    let mut resolved = ResolvedFields::default();

    for line in lines {
        let line = line.as_ref();
        let (label, generator) = match parse_field_line(line) {
            Ok(parts) => parts,
            Err(err) => {
                reject(
                    &mut resolved,
                    strictness,
                    GenerationError::InvalidField {
                        line: line.to_string(),
                        reason: err.to_string(),
                    },
                    line,
                )?;
                continue;
            }
        };

        if correlation.is_some_and(|correlation| correlation.label == label) {
            return Err(GenerationError::ReservedLabel(label.to_string()));
        }

        if generator == CORRELATE_GENERATOR {
            reject(
                &mut resolved,
                strictness,
                GenerationError::InvalidField {
                    line: line.to_string(),
                    reason: format!(
                        "generator name '{CORRELATE_GENERATOR}' is reserved; configure correlation instead"
                    ),
                },
                line,
            )?;
            continue;
        }

        if !registry.contains(generator) {
            reject(
                &mut resolved,
                strictness,
                GenerationError::UnknownGenerator {
                    line: line.to_string(),
                    generator: generator.to_string(),
                },
                line,
            )?;
            continue;
        }

        resolved.fields.push(FieldSpec::plain(label, generator));
    }

    if resolved.fields.is_empty() {
        return Err(GenerationError::NoFields);
    }

    if let Some(correlation) = correlation {
        resolved
            .fields
            .push(FieldSpec::correlated(correlation.label.clone()));
    }

    Ok(resolved)
}

fn reject(
    resolved: &mut ResolvedFields,
    strictness: Strictness,
    error: GenerationError,
    line: &str,
) -> Result<(), GenerationError> {
    if strictness.is_strict() {
        return Err(error);
    }
    let reason = error.to_string();
    warn!(event = "field_skipped", line = %line, reason = %reason, "skipping data field");
    resolved.skipped.push(SkippedField {
        line: line.to_string(),
        reason,
    });
    Ok(())
}
