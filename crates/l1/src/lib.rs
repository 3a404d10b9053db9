//! A library containing the L1 interface of the canonical transaction chain.

pub mod abi;

mod constants;
pub use constants::*;

mod event;
pub use event::{AbiArityError, EventArgsError, SequencerBatchAppendedArgs};
