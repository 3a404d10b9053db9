use metrics::Counter;
use metrics_derive::Metrics;

/// The metrics for the [`super::BatchDecoder`].
#[derive(Metrics, Clone)]
#[metrics(scope = "batch_decoder")]
pub struct BatchDecoderMetrics {
    /// A counter on the decoded batches.
    pub decoded_batches: Counter,
    /// A counter on the decoded transaction entries.
    pub decoded_transactions: Counter,
    /// A counter on the batches decoded after inflating the whole calldata.
    pub compression_fallbacks: Counter,
    /// A counter on the batches which failed to decode.
    pub failed_batches: Counter,
}
