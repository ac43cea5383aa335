mod logging;
mod runner;
mod sink;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use streamfaker_core::{Config, Error as CoreError, ValidatedConfig};
use streamfaker_generate::{GenerationError, GeneratorRegistry, SampleGenerator};
use thiserror::Error;
use tracing::info;

use logging::{LogFormat, init_logging};
use runner::{LoopSettings, publish_loop};
use sink::{KafkaSink, PublishSink, SinkError, StdoutSink};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "streamfaker", version, about = "Synthetic record stream generator")]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publish batches to Kafka at the configured interval.
    Run(RunArgs),
    /// Print one batch to stdout.
    Preview(PreviewArgs),
    /// List generator names.
    Generators,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to a YAML or TOML configuration file.
    config: PathBuf,
    /// Treat invalid data lines and unknown generators as fatal.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Stop after this many batches.
    #[arg(long)]
    ticks: Option<u64>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Path to a YAML or TOML configuration file.
    config: PathBuf,
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Override the configured batch size.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    samples: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        Command::Run(args) => run(args).await,
        Command::Preview(args) => preview(args).await,
        Command::Generators => {
            list_generators();
            Ok(())
        }
    }
}

async fn run(args: RunArgs) -> Result<(), CliError> {
    let config = load_config(&args.config, args.strict)?;
    let mut rng = seeded_rng(config.seed);
    let generator =
        SampleGenerator::from_config(&config, Arc::new(GeneratorRegistry::new()), &mut rng)?;
    let sink = KafkaSink::connect(&config.broker, &config.topic).await?;

    let settings = LoopSettings {
        samples: config.samples,
        format: config.format,
        interval: config.interval,
        max_ticks: args.ticks,
    };
    let summary = publish_loop(&generator, &sink, &settings, &mut rng).await;
    info!(
        ticks = summary.ticks,
        published = summary.published,
        failed = summary.failed,
        bytes = summary.bytes,
        "publish loop finished"
    );
    Ok(())
}

async fn preview(args: PreviewArgs) -> Result<(), CliError> {
    let config = load_config(&args.config, args.strict)?;
    let mut rng = seeded_rng(config.seed);
    let generator =
        SampleGenerator::from_config(&config, Arc::new(GeneratorRegistry::new()), &mut rng)?;

    let samples = match args.samples {
        Some(samples) => usize::try_from(samples).map_err(|_| {
            CoreError::invalid("samples", format!("{samples}; value is too large"))
        })?,
        None => config.samples,
    };
    let payload = generator.render(samples, config.format, &mut rng)?;
    StdoutSink.write(&payload).await?;
    Ok(())
}

fn list_generators() {
    let registry = GeneratorRegistry::new();
    for id in registry.generator_ids() {
        println!("{id}");
    }
}

fn load_config(path: &Path, strict: bool) -> Result<ValidatedConfig, CliError> {
    let mut config = Config::load(path)?;
    config.strict |= strict;
    let config = config.validate()?;
    info!(
        event = "config_loaded",
        path = %path.display(),
        broker = %config.broker,
        topic = %config.topic,
        interval_ms = config.interval.as_millis() as u64,
        samples = config.samples,
        format = config.format.as_str(),
        correlation = config.correlation.is_some(),
        strict = config.strictness.is_strict(),
        "configuration loaded"
    );
    Ok(config)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
