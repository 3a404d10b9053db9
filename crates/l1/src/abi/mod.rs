//! The ABI of the canonical transaction chain.

/// Calls to the canonical transaction chain.
pub mod calls;

/// Logs emitted by the canonical transaction chain.
pub mod logs;
