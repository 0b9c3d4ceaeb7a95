//! Height sentinels and protocol defaults for pending transactions.
//!
//! Persistence stores these sentinels verbatim, so they must never be
//! replaced by `Option` at the record boundary.

/// Stored in `mined_height` until the transaction is included in a block.
pub const NOT_MINED_HEIGHT: i64 = -1;

/// Stored in `expiry_height` when the transaction never expires.
pub const NO_EXPIRY_HEIGHT: i64 = -1;

/// Current chain height when the wallet has not observed the tip yet.
pub const UNKNOWN_HEIGHT: i64 = -1;

/// Overview id reported for a record that has not been persisted.
pub const UNPERSISTED_ID: i64 = -1;

// === Confirmation depth ===
/// Blocks past the mined height before a transaction counts as confirmed
pub const DEFAULT_STALE_TOLERANCE: u64 = 10;
pub const MAINNET_STALE_TOLERANCE: u64 = DEFAULT_STALE_TOLERANCE;
pub const TESTNET_STALE_TOLERANCE: u64 = DEFAULT_STALE_TOLERANCE;

/// Environment variable overriding the confirmation depth
pub const STALE_TOLERANCE_ENV: &str = "STALE_TOLERANCE";
