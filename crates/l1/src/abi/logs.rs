use alloy_primitives::Log;
use alloy_sol_types::{sol, SolEvent};

sol! {
    /// Emitted by the canonical transaction chain for each appended sequencer batch.
    #[derive(Debug, PartialEq, Eq)]
    event SequencerBatchAppended(
        uint256 _startingQueueIndex,
        uint256 _numQueueElements,
        uint256 _totalElements
    );
}

/// Tries to decode the provided log into the type T.
pub fn try_decode_log<T: SolEvent>(log: &Log) -> Option<Log<T>> {
    T::decode_log(log).ok()
}
