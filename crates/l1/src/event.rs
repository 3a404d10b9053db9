use crate::abi::logs::SequencerBatchAppended;

use alloy_primitives::U256;

/// The arguments of a [`SequencerBatchAppended`] event, narrowed to `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerBatchAppendedArgs {
    /// The queue index of the first L1 queue transaction in the batch.
    pub starting_queue_index: u64,
    /// The amount of L1 queue transactions in the batch.
    pub num_queue_elements: u64,
    /// The total amount of elements in the chain after the batch.
    pub total_elements: u64,
}

impl SequencerBatchAppendedArgs {
    /// The amount of arguments emitted by the event.
    pub const ARITY: usize = 3;

    /// Returns a new instance of [`SequencerBatchAppendedArgs`].
    pub const fn new(starting_queue_index: u64, num_queue_elements: u64, total_elements: u64) -> Self {
        Self { starting_queue_index, num_queue_elements, total_elements }
    }

    /// Tries to build the arguments from the positional arguments of the event.
    pub fn try_from_slice(args: &[U256]) -> Result<Self, EventArgsError> {
        let [starting_queue_index, num_queue_elements, total_elements] = args else {
            return Err(AbiArityError { got: args.len() }.into())
        };
        Self::try_from_values(*starting_queue_index, *num_queue_elements, *total_elements)
    }

    fn try_from_values(
        starting_queue_index: U256,
        num_queue_elements: U256,
        total_elements: U256,
    ) -> Result<Self, EventArgsError> {
        let args = Self {
            starting_queue_index: narrow("_startingQueueIndex", starting_queue_index)?,
            num_queue_elements: narrow("_numQueueElements", num_queue_elements)?,
            total_elements: narrow("_totalElements", total_elements)?,
        };

        if args.num_queue_elements > args.total_elements {
            return Err(EventArgsError::QueueElementsExceedTotal {
                num_queue_elements: args.num_queue_elements,
                total_elements: args.total_elements,
            })
        }

        Ok(args)
    }
}

impl TryFrom<&SequencerBatchAppended> for SequencerBatchAppendedArgs {
    type Error = EventArgsError;

    fn try_from(event: &SequencerBatchAppended) -> Result<Self, Self::Error> {
        Self::try_from_values(
            event._startingQueueIndex,
            event._numQueueElements,
            event._totalElements,
        )
    }
}

fn narrow(name: &'static str, value: U256) -> Result<u64, EventArgsError> {
    if value > U256::from(u64::MAX) {
        return Err(EventArgsError::Overflow { name, value })
    }
    Ok(value.to::<u64>())
}

/// The event was emitted with an unexpected amount of arguments, meaning the ABI of the contract
/// doesn't match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ABI mismatch: expected {} event arguments, got {got}", SequencerBatchAppendedArgs::ARITY)]
pub struct AbiArityError {
    /// The amount of arguments received.
    pub got: usize,
}

/// An error occurring when reading the arguments of a [`SequencerBatchAppended`] event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventArgsError {
    /// The amount of arguments is not [`SequencerBatchAppendedArgs::ARITY`].
    #[error(transparent)]
    Arity(#[from] AbiArityError),
    /// An argument does not fit in a `u64`.
    #[error("event argument {name} overflows u64: {value}")]
    Overflow {
        /// The name of the argument.
        name: &'static str,
        /// The value of the argument.
        value: U256,
    },
    /// The batch contains more queue elements than the total elements of the chain.
    #[error("queue elements {num_queue_elements} exceed total elements {total_elements}")]
    QueueElementsExceedTotal {
        /// The amount of queue elements.
        num_queue_elements: u64,
        /// The total amount of elements.
        total_elements: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abi::logs::try_decode_log, MAINNET_CANONICAL_TRANSACTION_CHAIN_ADDRESS};

    use alloy_primitives::Log;
    use alloy_sol_types::SolEvent;

    #[test]
    fn test_should_read_args() -> eyre::Result<()> {
        let args = SequencerBatchAppendedArgs::try_from_slice(&[
            U256::from(1),
            U256::from(2),
            U256::from(73778),
        ])?;
        assert_eq!(args, SequencerBatchAppendedArgs::new(1, 2, 73778));
        Ok(())
    }

    #[test]
    fn test_should_reject_arity() {
        for len in [0, 1, 2, 4] {
            let args = vec![U256::ZERO; len];
            let err = SequencerBatchAppendedArgs::try_from_slice(&args).unwrap_err();
            assert_eq!(err, EventArgsError::Arity(AbiArityError { got: len }));
        }
    }

    #[test]
    fn test_should_reject_overflow() {
        let err = SequencerBatchAppendedArgs::try_from_slice(&[
            U256::ZERO,
            U256::ZERO,
            U256::from(u64::MAX) + U256::from(1),
        ])
        .unwrap_err();
        assert!(matches!(err, EventArgsError::Overflow { name: "_totalElements", .. }));
    }

    #[test]
    fn test_should_reject_queue_elements_above_total() {
        let err = SequencerBatchAppendedArgs::try_from_slice(&[
            U256::ZERO,
            U256::from(3),
            U256::from(2),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            EventArgsError::QueueElementsExceedTotal { num_queue_elements: 3, total_elements: 2 }
        );
    }

    #[test]
    fn test_should_read_args_from_log() -> eyre::Result<()> {
        let event = SequencerBatchAppended {
            _startingQueueIndex: U256::from(4),
            _numQueueElements: U256::from(1),
            _totalElements: U256::from(10),
        };
        let log = Log { address: MAINNET_CANONICAL_TRANSACTION_CHAIN_ADDRESS, data: event.encode_log_data() };

        let decoded = try_decode_log::<SequencerBatchAppended>(&log).expect("valid log");
        let args = SequencerBatchAppendedArgs::try_from(&decoded.data)?;
        assert_eq!(args, SequencerBatchAppendedArgs::new(4, 1, 10));

        Ok(())
    }
}
