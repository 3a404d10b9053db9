use crate::{QueueOrigin, TransactionEntry};

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// The batch level metadata of a sequencer batch. Carried through from the extra data of the
/// event, never computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBatchEntry {
    /// The index of the batch.
    pub index: u64,
    /// The batch root.
    pub root: B256,
    /// The amount of elements in the batch.
    pub size: u64,
    /// The total amount of elements in the chain before the batch.
    pub prev_total_elements: u64,
    /// The batch extra data.
    pub extra_data: Bytes,
    /// The L1 block number of the submission.
    pub block_number: u64,
    /// The L1 timestamp of the submission.
    pub timestamp: u64,
    /// The submitter of the batch.
    pub submitter: Address,
    /// The L1 transaction hash of the submission.
    pub l1_transaction_hash: B256,
}

/// The result of decoding a sequencer batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedBatch {
    /// The batch metadata.
    pub transaction_batch_entry: TransactionBatchEntry,
    /// The transactions of the batch, in index order.
    pub transaction_entries: Vec<TransactionEntry>,
}

impl DecodedBatch {
    /// Returns an iterator over the L1 queue transactions of the batch.
    pub fn queue_entries(&self) -> impl Iterator<Item = &TransactionEntry> {
        self.transaction_entries.iter().filter(|entry| entry.queue_origin.is_l1())
    }

    /// Returns an iterator over the sequencer transactions of the batch.
    pub fn sequencer_entries(&self) -> impl Iterator<Item = &TransactionEntry> {
        self.transaction_entries
            .iter()
            .filter(|entry| entry.queue_origin == QueueOrigin::Sequencer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::{address, b256, bytes};

    fn batch() -> DecodedBatch {
        DecodedBatch {
            transaction_batch_entry: TransactionBatchEntry {
                index: 743,
                root: b256!("10B99425FB53AD7D40A939205C0F7B35CBB89AB4D67E7AE64BDAC5F1073943B4"),
                size: 2,
                prev_total_elements: 73677,
                extra_data: Bytes::new(),
                block_number: 11969713,
                timestamp: 1614862375,
                submitter: address!("fd7d4de366850c08ee2cba32d851385a3071ec8d"),
                l1_transaction_hash: b256!(
                    "6effe006836b841205ace4d99d7ae1b74ee96aac499a3f358b97fccd32ee9af2"
                ),
            },
            transaction_entries: vec![
                TransactionEntry::sequencer(73677, 743, 11969710, 1614862300, bytes!("c0"), None, 10),
                TransactionEntry::queue(73678, 743, 11969710, 1614862300, 12, 10),
            ],
        }
    }

    #[test]
    fn test_should_partition_entries() {
        let batch = batch();
        assert_eq!(batch.queue_entries().count(), 1);
        assert_eq!(batch.sequencer_entries().count(), 1);
        assert_eq!(batch.queue_entries().next().and_then(|e| e.queue_index), Some(12));
    }

    #[test]
    fn test_should_serialize_camel_case() -> eyre::Result<()> {
        let batch = batch();
        let json = serde_json::to_value(&batch)?;

        assert_eq!(json["transactionBatchEntry"]["prevTotalElements"], 73677);
        assert_eq!(json["transactionEntries"][0]["queueOrigin"], "sequencer");
        assert_eq!(json["transactionEntries"][1]["queueOrigin"], "l1");
        assert_eq!(json["transactionEntries"][1]["queueIndex"], 12);
        assert!(json["transactionEntries"][1]["gasLimit"].is_null());

        let back: DecodedBatch = serde_json::from_value(json)?;
        assert_eq!(back, batch);

        Ok(())
    }
}
