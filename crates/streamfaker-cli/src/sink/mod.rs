mod kafka;
mod stdout;

pub use kafka::KafkaSink;
pub use stdout::StdoutSink;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while handing a payload to its destination.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Destination for serialized batches.
#[async_trait]
pub trait PublishSink: Send + Sync {
    /// Publish one payload, returning the number of bytes written.
    async fn write(&self, payload: &[u8]) -> Result<usize, SinkError>;
}
