use alloy_sol_types::{sol, SolCall};

sol! {
    /// The call appending a sequencer batch. The batch is packed in the calldata after the
    /// selector rather than ABI encoded.
    #[derive(Debug)]
    function appendSequencerBatch() external;
}

/// The selector of [`appendSequencerBatchCall`].
pub const APPEND_SEQUENCER_BATCH_SELECTOR: [u8; 4] = appendSequencerBatchCall::SELECTOR;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_selector() {
        assert_eq!(APPEND_SEQUENCER_BATCH_SELECTOR, hex!("d0f89344"));
    }
}
