use crate::TransactionBatchEntry;

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// Out of band metadata accompanying a `SequencerBatchAppended` event: the calldata of the L1
/// transaction which emitted it and the batch information from the companion
/// `TransactionBatchAppended` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencerBatchAppendedExtraData {
    /// The L1 timestamp of the submission.
    pub timestamp: u64,
    /// The L1 block number of the submission.
    pub block_number: u64,
    /// The submitter of the batch.
    pub submitter: Address,
    /// The L1 transaction hash.
    pub l1_transaction_hash: B256,
    /// The `0x` prefixed hex encoded calldata of the L1 transaction.
    pub l1_transaction_data: String,
    /// The gas limit of the L1 transaction.
    pub gas_limit: u64,
    /// The total amount of elements in the chain before the batch.
    pub prev_total_elements: u64,
    /// The index of the batch.
    pub batch_index: u64,
    /// The amount of elements in the batch.
    pub batch_size: u64,
    /// The batch root.
    pub batch_root: B256,
    /// The batch extra data.
    pub batch_extra_data: Bytes,
}

impl From<&SequencerBatchAppendedExtraData> for TransactionBatchEntry {
    fn from(value: &SequencerBatchAppendedExtraData) -> Self {
        Self {
            index: value.batch_index,
            root: value.batch_root,
            size: value.batch_size,
            prev_total_elements: value.prev_total_elements,
            extra_data: value.batch_extra_data.clone(),
            block_number: value.block_number,
            timestamp: value.timestamp,
            submitter: value.submitter,
            l1_transaction_hash: value.l1_transaction_hash,
        }
    }
}
