/// The length in bytes of the function selector.
pub const SELECTOR_BYTES_SIZE: usize = 4;

/// The length in bytes of the `shouldStartAtElement` header field.
pub const SHOULD_START_AT_ELEMENT_BYTES_SIZE: usize = 5;

/// The length in bytes of the `totalElementsToAppend` header field.
pub const TOTAL_ELEMENTS_TO_APPEND_BYTES_SIZE: usize = 3;

/// The length in bytes of the contexts count header field.
pub const NUM_CONTEXTS_BYTES_SIZE: usize = 3;

/// The minimum length of the calldata: selector, `shouldStartAtElement` and
/// `totalElementsToAppend`.
pub const MIN_CALLDATA_LENGTH: usize =
    SELECTOR_BYTES_SIZE + SHOULD_START_AT_ELEMENT_BYTES_SIZE + TOTAL_ELEMENTS_TO_APPEND_BYTES_SIZE;

/// The length of the full calldata header, including the contexts count.
pub const HEADER_BYTES_LENGTH: usize = MIN_CALLDATA_LENGTH + NUM_CONTEXTS_BYTES_SIZE;

/// The length in bytes of the size prefix of each sequencer transaction.
pub const TRANSACTION_SIZE_BYTES_SIZE: usize = 3;
