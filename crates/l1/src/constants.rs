use alloy_primitives::{address, Address};

/// The address of the canonical transaction chain contract on mainnet.
pub const MAINNET_CANONICAL_TRANSACTION_CHAIN_ADDRESS: Address =
    address!("5E4e65926BA27467555EB562121fac00D24E9dD2");
