//! Primitive types for the decoding of sequencer batches appended to the canonical transaction
//! chain.

pub use batch::{DecodedBatch, TransactionBatchEntry};
mod batch;

pub use metadata::SequencerBatchAppendedExtraData;
mod metadata;

pub use transaction::{DecodedSequencerTransaction, DecodedSignature, QueueOrigin, TransactionEntry};
mod transaction;
