use std::time::Duration;

use rand::RngCore;
use tracing::{error, info};

use streamfaker_core::OutputFormat;
use streamfaker_generate::SampleGenerator;

use crate::sink::PublishSink;

/// Loop parameters taken from a validated configuration.
#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub samples: usize,
    pub format: OutputFormat,
    pub interval: Duration,
    /// Stop after this many ticks; `None` runs until the process is stopped.
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub published: u64,
    pub failed: u64,
    pub bytes: u64,
}

/// Generate, serialize and publish one batch per tick, sleeping `interval`
/// between ticks. A failed tick is logged and the loop carries on.
pub async fn publish_loop<S, R>(
    generator: &SampleGenerator,
    sink: &S,
    settings: &LoopSettings,
    rng: &mut R,
) -> LoopSummary
where
    S: PublishSink + ?Sized,
    R: RngCore,
{
    let mut summary = LoopSummary::default();

    loop {
        summary.ticks += 1;
        let tick = summary.ticks;

        match generator.render(settings.samples, settings.format, &mut *rng) {
            Ok(payload) => match sink.write(&payload).await {
                Ok(bytes) => {
                    summary.published += 1;
                    summary.bytes += bytes as u64;
                    info!(
                        event = "batch_published",
                        tick,
                        records = settings.samples,
                        bytes,
                        format = settings.format.as_str(),
                        "batch published"
                    );
                }
                Err(err) => {
                    summary.failed += 1;
                    error!(event = "batch_failed", tick, stage = "publish", error = %err, "batch failed");
                }
            },
            Err(err) => {
                summary.failed += 1;
                error!(event = "batch_failed", tick, stage = "render", error = %err, "batch failed");
            }
        }

        if settings.max_ticks.is_some_and(|max| tick >= max) {
            break;
        }
        tokio::time::sleep(settings.interval).await;
    }

    summary
}
