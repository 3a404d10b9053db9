//! The decoder of `SequencerBatchAppended` events.

use crate::{
    compression::{decompress, is_likely_compressed, DEFAULT_MAX_INFLATED_SIZE},
    decoding::{AppendSequencerBatchParams, BatchContext},
    error::{BatchDecodingError, DecodingError, MalformedReason},
    metrics::BatchDecoderMetrics,
};

use alloy_primitives::{hex, U256};
use ovm_l1::SequencerBatchAppendedArgs;
use ovm_primitives::{
    DecodedBatch, SequencerBatchAppendedExtraData, TransactionBatchEntry, TransactionEntry,
};
use serde::{Deserialize, Serialize};

/// The configuration of the [`BatchDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchDecoderConfig {
    /// Retry the decoding on the inflated calldata if it looks like a zlib stream and fails to
    /// decode as a raw batch.
    pub compression_fallback: bool,
    /// Decode the sequencer transactions as signed legacy transactions.
    pub decode_transactions: bool,
    /// The maximum size in bytes of inflated calldata or transaction sections.
    pub max_inflated_size: usize,
}

impl Default for BatchDecoderConfig {
    fn default() -> Self {
        Self {
            compression_fallback: true,
            decode_transactions: true,
            max_inflated_size: DEFAULT_MAX_INFLATED_SIZE,
        }
    }
}

/// Decodes `SequencerBatchAppended` events into transaction entries.
#[derive(Debug, Clone, Default)]
pub struct BatchDecoder {
    config: BatchDecoderConfig,
    metrics: BatchDecoderMetrics,
}

impl BatchDecoder {
    /// Returns a new [`BatchDecoder`] from the config.
    pub fn new(config: BatchDecoderConfig) -> Self {
        Self { config, metrics: BatchDecoderMetrics::default() }
    }

    /// Decodes the event and its extra data into a [`DecodedBatch`]. The transaction entries are
    /// indexed from the previous total elements of the chain, in calldata order.
    pub fn parse_event(
        &self,
        args: &SequencerBatchAppendedArgs,
        extra_data: &SequencerBatchAppendedExtraData,
        chain_id: u64,
    ) -> Result<DecodedBatch, BatchDecodingError> {
        let res = self.try_parse_event(args, extra_data, chain_id);

        match &res {
            Ok(batch) => {
                self.metrics.decoded_batches.increment(1);
                self.metrics.decoded_transactions.increment(batch.transaction_entries.len() as u64);
                tracing::trace!(
                    target: "ovm::codec",
                    batch_index = extra_data.batch_index,
                    block_number = extra_data.block_number,
                    entries = batch.transaction_entries.len(),
                    "decoded sequencer batch"
                );
            }
            Err(err) => {
                self.metrics.failed_batches.increment(1);
                tracing::debug!(
                    target: "ovm::codec",
                    batch_index = extra_data.batch_index,
                    block_number = extra_data.block_number,
                    %err,
                    "failed to decode sequencer batch"
                );
            }
        }

        res
    }

    fn try_parse_event(
        &self,
        args: &SequencerBatchAppendedArgs,
        extra_data: &SequencerBatchAppendedExtraData,
        chain_id: u64,
    ) -> Result<DecodedBatch, BatchDecodingError> {
        let calldata = from_hex_string(&extra_data.l1_transaction_data).map_err(|source| {
            BatchDecodingError::InvalidHex { block_number: extra_data.block_number, source }
        })?;

        let max_inflated_size = self.config.max_inflated_size;
        let params = match AppendSequencerBatchParams::decode_with_max_inflated_size(
            &calldata,
            max_inflated_size,
        ) {
            Ok(params) => params,
            Err(DecodingError::Malformed(reason))
                if reason.is_truncation() && self.config.compression_fallback =>
            {
                // the whole calldata might be a zlib stream, the original error surfaces if the
                // inflated buffer doesn't decode either.
                self.decode_compressed(&calldata)
                    .ok_or_else(|| malformed(extra_data, calldata.len(), reason))?
            }
            Err(DecodingError::Malformed(reason)) => {
                return Err(malformed(extra_data, calldata.len(), reason))
            }
            Err(DecodingError::Decompression(source)) => {
                return Err(BatchDecodingError::Decompression {
                    block_number: extra_data.block_number,
                    source,
                })
            }
        };

        let transaction_entries = self
            .transaction_entries(args, extra_data, &params, chain_id)
            .map_err(|reason| malformed(extra_data, calldata.len(), reason))?;

        Ok(DecodedBatch {
            transaction_batch_entry: TransactionBatchEntry::from(extra_data),
            transaction_entries,
        })
    }

    /// Inflates the calldata and decodes it. Returns [`None`] if either step fails.
    fn decode_compressed(&self, calldata: &[u8]) -> Option<AppendSequencerBatchParams> {
        if !is_likely_compressed(calldata) {
            return None
        }

        let max_inflated_size = self.config.max_inflated_size;
        let inflated = decompress(calldata, max_inflated_size)
            .inspect_err(|err| {
                tracing::trace!(target: "ovm::codec", %err, "calldata is not a zlib stream")
            })
            .ok()?;
        let params = AppendSequencerBatchParams::decode_with_max_inflated_size(
            &inflated,
            max_inflated_size,
        )
            .inspect_err(|err| {
                tracing::trace!(target: "ovm::codec", %err, "inflated calldata is not a batch")
            })
            .ok()?;

        self.metrics.compression_fallbacks.increment(1);
        tracing::debug!(
            target: "ovm::codec",
            compressed = calldata.len(),
            inflated = inflated.len(),
            "decoded compressed calldata"
        );

        Some(params)
    }

    /// Checks the decoded batch against the event and returns its transaction entries. All the
    /// counts are checked before any entry is built.
    fn transaction_entries(
        &self,
        args: &SequencerBatchAppendedArgs,
        extra_data: &SequencerBatchAppendedExtraData,
        params: &AppendSequencerBatchParams,
        chain_id: u64,
    ) -> Result<Vec<TransactionEntry>, MalformedReason> {
        let prev_total_elements = extra_data.prev_total_elements;
        // the decoded fields are at most 3 bytes wide, the sums can't overflow.
        let got: u64 = params.contexts.iter().map(BatchContext::transactions_count).sum();
        let queued: u64 =
            params.contexts.iter().map(|context| context.num_subsequent_queue_transactions).sum();
        debug_assert_eq!(got - queued, params.transactions.len() as u64);

        let expected = args.total_elements.checked_sub(prev_total_elements).ok_or(
            MalformedReason::TotalElementsUnderflow {
                prev_total_elements,
                total_elements: args.total_elements,
            },
        )?;
        if got != expected {
            return Err(MalformedReason::ElementCountMismatch { expected, got })
        }
        if queued != args.num_queue_elements {
            return Err(MalformedReason::QueueCountMismatch {
                expected: args.num_queue_elements,
                got: queued,
            })
        }
        if params.total_elements_to_append != got {
            return Err(MalformedReason::ElementsToAppendMismatch {
                header: params.total_elements_to_append,
                got,
            })
        }
        if params.should_start_at_element != prev_total_elements {
            return Err(MalformedReason::StartElementMismatch {
                should_start_at_element: params.should_start_at_element,
                prev_total_elements,
            })
        }
        if args.starting_queue_index.checked_add(queued).is_none() {
            return Err(MalformedReason::QueueIndexOverflow {
                starting_queue_index: args.starting_queue_index,
                num_queue_elements: queued,
            })
        }

        let batch_index = extra_data.batch_index;
        let mut entries = Vec::with_capacity(got as usize);
        let mut transactions = params.transactions.iter();
        let mut index = prev_total_elements;
        let mut queue_index = args.starting_queue_index;

        for context in &params.contexts {
            for tx in transactions.by_ref().take(context.num_sequenced_transactions as usize) {
                let decoded = if self.config.decode_transactions { tx.decode() } else { None };
                entries.push(TransactionEntry::sequencer(
                    index,
                    batch_index,
                    context.block_number,
                    context.timestamp,
                    tx.0.clone(),
                    decoded,
                    chain_id,
                ));
                index += 1;
            }

            for _ in 0..context.num_subsequent_queue_transactions {
                entries.push(TransactionEntry::queue(
                    index,
                    batch_index,
                    context.block_number,
                    context.timestamp,
                    queue_index,
                    chain_id,
                ));
                index += 1;
                queue_index += 1;
            }
        }

        Ok(entries)
    }
}

/// Decodes a `SequencerBatchAppended` event from its positional arguments, using the default
/// [`BatchDecoder`].
pub fn parse_event(
    event_args: &[U256],
    extra_data: &SequencerBatchAppendedExtraData,
    chain_id: u64,
) -> Result<DecodedBatch, BatchDecodingError> {
    let args = SequencerBatchAppendedArgs::try_from_slice(event_args)?;
    BatchDecoder::default().parse_event(&args, extra_data, chain_id)
}

/// Converts the optionally `0x` prefixed hex string into bytes. A trailing odd nibble is dropped.
pub fn from_hex_string(data: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let data = data.strip_prefix("0x").unwrap_or(data);
    let data = data.get(..data.len() - data.len() % 2).unwrap_or(data);
    hex::decode(data)
}

fn malformed(
    extra_data: &SequencerBatchAppendedExtraData,
    len: usize,
    reason: MalformedReason,
) -> BatchDecodingError {
    BatchDecodingError::MalformedBatchData {
        block_number: extra_data.block_number,
        data: extra_data.l1_transaction_data.clone(),
        len,
        reason,
    }
}
