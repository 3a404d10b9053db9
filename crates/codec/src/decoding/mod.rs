//! Decoding implementations for the `appendSequencerBatch` calldata.

pub use calldata::{compress_batch_with_zlib, AppendSequencerBatchParams, BatchType};
mod calldata;

/// Constants of the calldata layout.
pub mod constants;

pub use context::BatchContext;
mod context;

mod macros;

/// Tests utils.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use transaction::SequencerTransaction;
mod transaction;
