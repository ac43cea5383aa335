use std::time::Duration;

use async_trait::async_trait;
use rdkafka::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use tracing::info;

use super::{PublishSink, SinkError};

const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Publishes every batch as one message on partition 0 of a topic.
pub struct KafkaSink {
    producer: FutureProducer,
    topic: String,
}

impl KafkaSink {
    /// Create the producer and check that the broker answers for the topic.
    pub async fn connect(broker: &str, topic: &str) -> Result<Self, SinkError> {
        Self::connect_with_timeout(broker, topic, METADATA_TIMEOUT).await
    }

    async fn connect_with_timeout(
        broker: &str,
        topic: &str,
        metadata_timeout: Duration,
    ) -> Result<Self, SinkError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", broker)
            .create()?;

        // fetch_metadata blocks the calling thread until the broker answers.
        let client = producer.clone();
        let metadata_topic = topic.to_string();
        tokio::task::spawn_blocking(move || {
            client
                .client()
                .fetch_metadata(Some(metadata_topic.as_str()), metadata_timeout)
                .map(|_| ())
        })
        .await??;

        info!(event = "producer_connected", broker = %broker, topic = %topic, "kafka producer connected");
        Ok(Self {
            producer,
            topic: topic.to_string(),
        })
    }
}

#[async_trait]
impl PublishSink for KafkaSink {
    // No queue timeout: a stalled broker stalls the loop.
    async fn write(&self, payload: &[u8]) -> Result<usize, SinkError> {
        let record = FutureRecord::<(), [u8]>::to(&self.topic)
            .payload(payload)
            .partition(0);
        self.producer
            .send(record, Timeout::Never)
            .await
            .map_err(|(err, _)| SinkError::Kafka(err))?;
        Ok(payload.len())
    }
}
