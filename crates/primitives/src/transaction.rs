use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// The origin of a transaction in the canonical transaction chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum QueueOrigin {
    /// The transaction was submitted inline by the sequencer.
    #[display("sequencer")]
    Sequencer,
    /// The transaction was enqueued on L1 and is included by reference.
    #[display("l1")]
    L1,
}

impl QueueOrigin {
    /// Returns true if the origin is the L1 queue.
    pub const fn is_l1(&self) -> bool {
        matches!(self, Self::L1)
    }
}

/// A transaction of the canonical transaction chain, decoded from a sequencer batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    /// The absolute index of the transaction in the chain.
    pub index: u64,
    /// The index of the batch containing the transaction.
    pub batch_index: u64,
    /// The L1 block number of the batch context.
    pub block_number: u64,
    /// The timestamp of the batch context.
    pub timestamp: u64,
    /// The gas limit of the transaction. Only set for sequencer transactions.
    pub gas_limit: Option<u64>,
    /// The target of the transaction. Only set for sequencer transactions.
    pub target: Option<Address>,
    /// The sender of the transaction. Only set for sequencer transactions which carry a valid
    /// signature.
    pub origin: Option<Address>,
    /// The raw transaction payload. Empty for queue transactions.
    pub data: Bytes,
    /// The origin of the transaction.
    pub queue_origin: QueueOrigin,
    /// The value transferred by the transaction.
    pub value: U256,
    /// The index in the L1 queue. Only set for [`QueueOrigin::L1`] transactions.
    pub queue_index: Option<u64>,
    /// The decoded sequencer transaction, if the payload could be decoded.
    pub decoded: Option<DecodedSequencerTransaction>,
    /// Whether the transaction was confirmed on L1.
    pub confirmed: bool,
    /// The L2 chain id.
    pub chain_id: u64,
}

impl TransactionEntry {
    /// Returns a new sequencer [`TransactionEntry`].
    pub fn sequencer(
        index: u64,
        batch_index: u64,
        block_number: u64,
        timestamp: u64,
        data: Bytes,
        decoded: Option<DecodedSequencerTransaction>,
        chain_id: u64,
    ) -> Self {
        let gas_limit = decoded.as_ref().map(|tx| tx.gas_limit).unwrap_or_default();
        let value = decoded.as_ref().map(|tx| tx.value).unwrap_or_default();
        Self {
            index,
            batch_index,
            block_number,
            timestamp,
            gas_limit: Some(gas_limit),
            target: decoded.as_ref().and_then(|tx| tx.target),
            origin: decoded.as_ref().and_then(|tx| tx.origin),
            data,
            queue_origin: QueueOrigin::Sequencer,
            value,
            queue_index: None,
            decoded,
            confirmed: true,
            chain_id,
        }
    }

    /// Returns a new L1 queue [`TransactionEntry`]. The block number and timestamp are the ones
    /// from the batch context, the enqueued transaction carries the definitive values.
    pub const fn queue(
        index: u64,
        batch_index: u64,
        block_number: u64,
        timestamp: u64,
        queue_index: u64,
        chain_id: u64,
    ) -> Self {
        Self {
            index,
            batch_index,
            block_number,
            timestamp,
            gas_limit: None,
            target: None,
            origin: None,
            data: Bytes::new(),
            queue_origin: QueueOrigin::L1,
            value: U256::ZERO,
            queue_index: Some(queue_index),
            decoded: None,
            confirmed: true,
            chain_id,
        }
    }
}

/// A sequencer transaction decoded from its RLP encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedSequencerTransaction {
    /// The transaction nonce.
    pub nonce: u64,
    /// The transaction gas price.
    pub gas_price: U256,
    /// The transaction gas limit.
    pub gas_limit: u64,
    /// The recipient, [`None`] for contract creations.
    pub target: Option<Address>,
    /// The value transferred.
    pub value: U256,
    /// The transaction input.
    pub data: Bytes,
    /// The signer recovered from the signature.
    pub origin: Option<Address>,
    /// The transaction signature.
    pub sig: DecodedSignature,
}

/// The signature of a [`DecodedSequencerTransaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSignature {
    /// The recovery id, normalized to 0 or 1.
    pub v: u8,
    /// The r value.
    pub r: U256,
    /// The s value.
    pub s: U256,
}
