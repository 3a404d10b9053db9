use crate::decoding::constants::MIN_CALLDATA_LENGTH;

use alloy_primitives::hex::FromHexError;
use ovm_l1::{AbiArityError, EventArgsError};

/// An error occurring during the codec process.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// An error occurring at the decoding state.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// An error occurring at the encoding state.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// An error occurring during the decoding of the calldata.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The calldata does not follow the batch format.
    #[error(transparent)]
    Malformed(#[from] MalformedReason),
    /// The compressed transaction section could not be inflated.
    #[error(transparent)]
    Decompression(#[from] DecompressionError),
}

/// The reason for which a batch is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// The buffer is shorter than the selector and the leading header fields.
    #[error("converted buffer length is < {}.", MIN_CALLDATA_LENGTH)]
    BufferTooShort,
    /// The buffer ends within the contexts count.
    #[error("header truncated: buffer length {len} is < 15")]
    HeaderTruncated { len: usize },
    /// The buffer ends within the contexts.
    #[error("contexts truncated: {num_contexts} contexts announced, {available} bytes available")]
    ContextsTruncated { num_contexts: usize, available: usize },
    /// The buffer ends within a sequencer transaction.
    #[error("transaction {index} truncated: {expected} bytes expected, {available} bytes available")]
    TransactionTruncated { index: usize, expected: usize, available: usize },
    /// The marker context signals an unknown batch type.
    #[error("unknown batch type {0}")]
    UnknownBatchType(u64),
    /// The buffer continues after the last sequencer transaction.
    #[error("{0} trailing bytes after the last transaction")]
    TrailingBytes(usize),
    /// The batch doesn't start at the end of the chain.
    #[error("batch should start at element {should_start_at_element}, previous total elements is {prev_total_elements}")]
    StartElementMismatch { should_start_at_element: u64, prev_total_elements: u64 },
    /// The chain had more elements before the batch than after it.
    #[error("previous total elements {prev_total_elements} exceed total elements {total_elements}")]
    TotalElementsUnderflow { prev_total_elements: u64, total_elements: u64 },
    /// The amount of entries doesn't match the elements added by the event.
    #[error("element count mismatch: expected {expected}, got {got}")]
    ElementCountMismatch { expected: u64, got: u64 },
    /// The amount of queue entries doesn't match the queue elements of the event.
    #[error("queue element count mismatch: expected {expected}, got {got}")]
    QueueCountMismatch { expected: u64, got: u64 },
    /// The header doesn't announce the amount of entries in the batch.
    #[error("total elements to append mismatch: header has {header}, got {got}")]
    ElementsToAppendMismatch { header: u64, got: u64 },
    /// The queue index of the last queue entry overflows.
    #[error("queue index overflow: starting at {starting_queue_index} with {num_queue_elements} elements")]
    QueueIndexOverflow { starting_queue_index: u64, num_queue_elements: u64 },
}

impl MalformedReason {
    /// Returns true if the buffer ended before the batch it announces. A compressed buffer
    /// decoded as a raw batch fails in this way.
    pub const fn is_truncation(&self) -> bool {
        matches!(
            self,
            Self::BufferTooShort |
                Self::HeaderTruncated { .. } |
                Self::ContextsTruncated { .. } |
                Self::TransactionTruncated { .. }
        )
    }
}

/// An error occurring when inflating a buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompressionError {
    /// The buffer is not a valid zlib stream.
    #[error("invalid zlib stream: {0}")]
    InvalidStream(String),
    /// The buffer ended before the end of the zlib stream.
    #[error("zlib stream truncated after {0} bytes")]
    Truncated(u64),
    /// The buffer continues after the end of the zlib stream.
    #[error("{0} trailing bytes after the zlib stream")]
    TrailingBytes(usize),
    /// The stream inflates to more than the maximum size.
    #[error("inflated data exceeds {0} bytes")]
    TooLarge(usize),
}

/// An error occurring during the encoding of a batch.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// A value doesn't fit in the width of its field.
    #[error("{field} value {value} does not fit in {width} bytes")]
    FieldOverflow {
        /// The name of the field.
        field: &'static str,
        /// The value.
        value: u64,
        /// The width of the field in bytes.
        width: usize,
    },
    /// The compression of the transaction section failed.
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// An error occurring when parsing a `SequencerBatchAppended` event.
#[derive(Debug, thiserror::Error)]
pub enum BatchDecodingError {
    /// The L1 transaction data is not a valid batch.
    #[error("Block {block_number} transaction data is invalid for decoding: {data} , {reason}")]
    MalformedBatchData {
        /// The L1 block number of the submission.
        block_number: u64,
        /// The hex encoded L1 transaction data.
        data: String,
        /// The length of the converted buffer.
        len: usize,
        /// The reason.
        reason: MalformedReason,
    },
    /// The compressed transaction section of the batch could not be inflated.
    #[error("Block {block_number} transaction data could not be decompressed: {source}")]
    Decompression {
        /// The L1 block number of the submission.
        block_number: u64,
        /// The inflate error.
        #[source]
        source: DecompressionError,
    },
    /// The L1 transaction data is not valid hex.
    #[error("Block {block_number} transaction data is not valid hex: {source}")]
    InvalidHex {
        /// The L1 block number of the submission.
        block_number: u64,
        /// The hex error.
        #[source]
        source: FromHexError,
    },
    /// The event arguments are invalid.
    #[error(transparent)]
    EventArgs(#[from] EventArgsError),
}

impl BatchDecodingError {
    /// Returns the [`AbiArityError`] if the event was emitted with an unexpected amount of
    /// arguments.
    pub const fn as_abi_arity(&self) -> Option<&AbiArityError> {
        match self {
            Self::EventArgs(EventArgsError::Arity(err)) => Some(err),
            _ => None,
        }
    }

    /// Returns the [`MalformedReason`] if the batch data is malformed.
    pub const fn as_malformed(&self) -> Option<&MalformedReason> {
        match self {
            Self::MalformedBatchData { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
