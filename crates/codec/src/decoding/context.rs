use crate::{error::EncodingError, from_be_bytes_slice_and_advance_buf, put_be_bytes_truncated};

/// The context of a group of transactions in a sequencer batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchContext {
    /// The amount of sequencer transactions in the context.
    pub num_sequenced_transactions: u64,
    /// The amount of L1 queue transactions following the sequencer transactions.
    pub num_subsequent_queue_transactions: u64,
    /// The timestamp of the context.
    pub timestamp: u64,
    /// The L1 block number of the context.
    pub block_number: u64,
}

impl BatchContext {
    /// The length in bytes of an encoded context.
    pub const BYTES_LENGTH: usize = 16;

    const NUM_SEQUENCED_TRANSACTIONS_BYTES_SIZE: usize = 3;
    const NUM_SUBSEQUENT_QUEUE_TRANSACTIONS_BYTES_SIZE: usize = 3;
    const TIMESTAMP_BYTES_SIZE: usize = 5;
    const BLOCK_NUMBER_BYTES_SIZE: usize = 5;

    /// Returns a new [`BatchContext`].
    pub const fn new(
        num_sequenced_transactions: u64,
        num_subsequent_queue_transactions: u64,
        timestamp: u64,
        block_number: u64,
    ) -> Self {
        Self { num_sequenced_transactions, num_subsequent_queue_transactions, timestamp, block_number }
    }

    /// Returns the marker context of a typed batch: a context with a zero block number, using
    /// the timestamp as the batch type.
    pub(crate) const fn marker(batch_type: u64) -> Self {
        Self::new(0, 0, batch_type, 0)
    }

    /// Returns true if the context is a typed batch marker.
    pub(crate) const fn is_marker(&self) -> bool {
        self.block_number == 0
    }

    /// Returns the total amount of transactions in the context.
    pub const fn transactions_count(&self) -> u64 {
        self.num_sequenced_transactions + self.num_subsequent_queue_transactions
    }

    /// Tries to read from the input buffer into the [`BatchContext`].
    /// Returns [`None`] if the buffer.len() < [`BatchContext::BYTES_LENGTH`].
    pub(crate) fn try_from_buf(buf: &mut &[u8]) -> Option<Self> {
        if buf.len() < Self::BYTES_LENGTH {
            return None
        }

        let num_sequenced_transactions =
            from_be_bytes_slice_and_advance_buf!(u64, Self::NUM_SEQUENCED_TRANSACTIONS_BYTES_SIZE, buf);
        let num_subsequent_queue_transactions = from_be_bytes_slice_and_advance_buf!(
            u64,
            Self::NUM_SUBSEQUENT_QUEUE_TRANSACTIONS_BYTES_SIZE,
            buf
        );
        let timestamp = from_be_bytes_slice_and_advance_buf!(u64, Self::TIMESTAMP_BYTES_SIZE, buf);
        let block_number =
            from_be_bytes_slice_and_advance_buf!(u64, Self::BLOCK_NUMBER_BYTES_SIZE, buf);

        Some(Self { num_sequenced_transactions, num_subsequent_queue_transactions, timestamp, block_number })
    }

    /// Writes the packed context into the buffer.
    pub(crate) fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        put_be_bytes_truncated!(
            "numSequencedTransactions",
            self.num_sequenced_transactions,
            Self::NUM_SEQUENCED_TRANSACTIONS_BYTES_SIZE,
            buf
        );
        put_be_bytes_truncated!(
            "numSubsequentQueueTransactions",
            self.num_subsequent_queue_transactions,
            Self::NUM_SUBSEQUENT_QUEUE_TRANSACTIONS_BYTES_SIZE,
            buf
        );
        put_be_bytes_truncated!("timestamp", self.timestamp, Self::TIMESTAMP_BYTES_SIZE, buf);
        put_be_bytes_truncated!("blockNumber", self.block_number, Self::BLOCK_NUMBER_BYTES_SIZE, buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::hex;

    #[test]
    fn test_should_decode_context() {
        let raw = hex!("00000300000100603fe5270000b6a3b1ff");
        let buf = &mut &raw[..];

        let context = BatchContext::try_from_buf(buf).expect("enough bytes");

        assert_eq!(context, BatchContext::new(3, 1, 1614800167, 11969457));
        assert_eq!(context.transactions_count(), 4);
        assert_eq!(*buf, &[0xff][..]);
    }

    #[test]
    fn test_should_not_decode_short_context() {
        let raw = hex!("00000300000100603fe5270000b6a3");
        assert!(BatchContext::try_from_buf(&mut &raw[..]).is_none());
    }

    #[test]
    fn test_should_encode_context() -> eyre::Result<()> {
        let mut buf = Vec::new();
        BatchContext::new(3, 1, 1614800167, 11969457).encode(&mut buf)?;
        assert_eq!(buf, hex!("00000300000100603fe5270000b6a3b1"));
        Ok(())
    }

    #[test]
    fn test_should_reject_overflowing_field() {
        let mut buf = Vec::new();
        let err = BatchContext::new(1 << 24, 0, 0, 1).encode(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::FieldOverflow { field: "numSequencedTransactions", width: 3, .. }
        ));
    }
}
