use crate::{
    compression::{compress, decompress, DEFAULT_MAX_INFLATED_SIZE},
    decoding::{
        constants::{
            HEADER_BYTES_LENGTH, MIN_CALLDATA_LENGTH, NUM_CONTEXTS_BYTES_SIZE, SELECTOR_BYTES_SIZE,
            SHOULD_START_AT_ELEMENT_BYTES_SIZE, TOTAL_ELEMENTS_TO_APPEND_BYTES_SIZE,
            TRANSACTION_SIZE_BYTES_SIZE,
        },
        BatchContext, SequencerTransaction,
    },
    error::{CodecError, DecodingError, EncodingError, MalformedReason},
    from_be_bytes_slice_and_advance_buf, put_be_bytes_truncated,
};

use alloy_primitives::bytes::{Buf, BufMut};
use ovm_l1::abi::calls::APPEND_SEQUENCER_BATCH_SELECTOR;

/// The encoding of the transaction section of a sequencer batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BatchType {
    /// The transactions are packed after the contexts.
    #[default]
    #[display("legacy")]
    Legacy,
    /// The transactions are packed in a zlib stream after the contexts. Signaled by a marker
    /// context with a zero block number and timestamp.
    #[display("zlib")]
    Zlib,
}

impl BatchType {
    /// The marker timestamp of the zlib batch type.
    const ZLIB_MARKER: u64 = 0;

    /// Returns the [`BatchType`] signaled by the marker context.
    const fn from_marker(context: &BatchContext) -> Result<Self, MalformedReason> {
        match context.timestamp {
            Self::ZLIB_MARKER => Ok(Self::Zlib),
            ty => Err(MalformedReason::UnknownBatchType(ty)),
        }
    }
}

/// The decoded calldata of an `appendSequencerBatch` call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendSequencerBatchParams {
    /// The index of the first element of the batch in the chain.
    pub should_start_at_element: u64,
    /// The amount of elements in the batch.
    pub total_elements_to_append: u64,
    /// The contexts of the batch, without the typed batch marker.
    pub contexts: Vec<BatchContext>,
    /// The sequencer transactions of the batch, in order.
    pub transactions: Vec<SequencerTransaction>,
    /// The encoding of the transaction section.
    pub batch_type: BatchType,
}

impl AppendSequencerBatchParams {
    /// Decodes the calldata of an `appendSequencerBatch` call. The selector isn't checked.
    pub fn decode(calldata: &[u8]) -> Result<Self, DecodingError> {
        Self::decode_with_max_inflated_size(calldata, DEFAULT_MAX_INFLATED_SIZE)
    }

    /// Decodes the calldata of an `appendSequencerBatch` call, inflating the transaction section
    /// of a [`BatchType::Zlib`] batch to at most `max_inflated_size` bytes.
    pub fn decode_with_max_inflated_size(
        calldata: &[u8],
        max_inflated_size: usize,
    ) -> Result<Self, DecodingError> {
        if calldata.len() < MIN_CALLDATA_LENGTH {
            return Err(MalformedReason::BufferTooShort.into())
        }
        if calldata.len() < HEADER_BYTES_LENGTH {
            return Err(MalformedReason::HeaderTruncated { len: calldata.len() }.into())
        }

        let buf = &mut &calldata[SELECTOR_BYTES_SIZE..];
        let should_start_at_element =
            from_be_bytes_slice_and_advance_buf!(u64, SHOULD_START_AT_ELEMENT_BYTES_SIZE, buf);
        let total_elements_to_append =
            from_be_bytes_slice_and_advance_buf!(u64, TOTAL_ELEMENTS_TO_APPEND_BYTES_SIZE, buf);
        let num_contexts =
            from_be_bytes_slice_and_advance_buf!(u32, NUM_CONTEXTS_BYTES_SIZE, buf) as usize;

        // check the buffer covers all the contexts before allocating.
        if buf.len() < num_contexts * BatchContext::BYTES_LENGTH {
            return Err(MalformedReason::ContextsTruncated { num_contexts, available: buf.len() }
                .into())
        }
        let mut contexts = Vec::with_capacity(num_contexts);
        for _ in 0..num_contexts {
            let context = BatchContext::try_from_buf(buf).ok_or(
                MalformedReason::ContextsTruncated { num_contexts, available: buf.len() },
            )?;
            contexts.push(context);
        }

        // a leading marker context signals a typed batch.
        let batch_type = match contexts.first() {
            Some(context) if context.is_marker() => {
                let ty = BatchType::from_marker(context)?;
                contexts.remove(0);
                ty
            }
            _ => BatchType::Legacy,
        };

        let inflated;
        let mut section: &[u8] = match batch_type {
            BatchType::Legacy => *buf,
            BatchType::Zlib => {
                inflated = decompress(buf, max_inflated_size)?;
                &inflated
            }
        };
        let section = &mut section;

        let mut transactions = Vec::new();
        for context in &contexts {
            for _ in 0..context.num_sequenced_transactions {
                let index = transactions.len();
                let tx = SequencerTransaction::try_from_buf(section).map_err(|expected| {
                    MalformedReason::TransactionTruncated {
                        index,
                        expected,
                        available: section.remaining(),
                    }
                })?;
                transactions.push(tx);
            }
        }

        if section.has_remaining() {
            return Err(MalformedReason::TrailingBytes(section.remaining()).into())
        }

        Ok(Self { should_start_at_element, total_elements_to_append, contexts, transactions, batch_type })
    }

    /// Encodes the parameters into the calldata of an `appendSequencerBatch` call, using the
    /// encoding of [`AppendSequencerBatchParams::batch_type`].
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let marker = match self.batch_type {
            BatchType::Legacy => None,
            BatchType::Zlib => Some(BatchContext::marker(BatchType::ZLIB_MARKER)),
        };
        let num_contexts = self.contexts.len() + usize::from(marker.is_some());

        let mut calldata =
            Vec::with_capacity(HEADER_BYTES_LENGTH + num_contexts * BatchContext::BYTES_LENGTH);
        calldata.put_slice(&APPEND_SEQUENCER_BATCH_SELECTOR);
        put_be_bytes_truncated!(
            "shouldStartAtElement",
            self.should_start_at_element,
            SHOULD_START_AT_ELEMENT_BYTES_SIZE,
            &mut calldata
        );
        put_be_bytes_truncated!(
            "totalElementsToAppend",
            self.total_elements_to_append,
            TOTAL_ELEMENTS_TO_APPEND_BYTES_SIZE,
            &mut calldata
        );
        put_be_bytes_truncated!(
            "numContexts",
            num_contexts as u64,
            NUM_CONTEXTS_BYTES_SIZE,
            &mut calldata
        );

        for context in marker.iter().chain(&self.contexts) {
            context.encode(&mut calldata)?;
        }

        let mut section = Vec::new();
        for tx in &self.transactions {
            put_be_bytes_truncated!(
                "transactionSize",
                tx.0.len() as u64,
                TRANSACTION_SIZE_BYTES_SIZE,
                &mut section
            );
            section.put_slice(&tx.0);
        }

        match self.batch_type {
            BatchType::Legacy => calldata.extend_from_slice(&section),
            BatchType::Zlib => calldata.extend_from_slice(&compress(&section)?),
        }

        Ok(calldata)
    }
}

/// Re-encodes the calldata of an `appendSequencerBatch` call as a [`BatchType::Zlib`] batch.
pub fn compress_batch_with_zlib(calldata: &[u8]) -> Result<Vec<u8>, CodecError> {
    let params = AppendSequencerBatchParams::decode(calldata)?;
    Ok(AppendSequencerBatchParams { batch_type: BatchType::Zlib, ..params }.encode()?)
}
