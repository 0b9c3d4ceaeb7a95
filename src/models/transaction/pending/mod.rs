//! Pending transaction record and its lifecycle predicates.
//!
//! A pending transaction is created when the wallet decides to spend funds and is
//! then mutated in place by external collaborators: the encoder sets `raw` and
//! `raw_transaction_id`, the submitter bumps `submit_attempts` and the error fields,
//! and chain sync fills in `mined_height`. Every predicate here is a pure function
//! of the current snapshot; nothing caches a status.

mod recipient;
pub use recipient::*;

use crate::{
    constants::{NOT_MINED_HEIGHT, NO_EXPIRY_HEIGHT},
    utils::now_epoch_seconds,
};
use serde::{Deserialize, Serialize};

fn default_not_mined() -> i64 {
    NOT_MINED_HEIGHT
}

fn default_no_expiry() -> i64 {
    NO_EXPIRY_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Local identifier, absent until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Amount in zatoshi.
    pub value: u64,
    #[serde(default, with = "crate::utils::optional_hex_bytes")]
    pub memo: Option<Vec<u8>>,
    /// Absent until computed by the fee policy.
    #[serde(default)]
    pub fee: Option<u64>,
    /// Encoded transaction, absent until encoding succeeds.
    #[serde(default, with = "crate::utils::optional_hex_bytes")]
    pub raw: Option<Vec<u8>>,
    pub recipient: Recipient,
    pub account_index: u32,
    /// `-1` until the transaction is included in a block.
    #[serde(default = "default_not_mined")]
    pub mined_height: i64,
    /// `-1` when the transaction never expires.
    #[serde(default = "default_no_expiry")]
    pub expiry_height: i64,
    /// Any value above zero means the user cancelled the send.
    #[serde(default)]
    pub cancelled: i32,
    #[serde(default)]
    pub encode_attempts: i32,
    #[serde(default)]
    pub submit_attempts: i32,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_code: Option<i32>,
    /// Seconds since epoch.
    pub create_time: i64,
    #[serde(default, with = "crate::utils::optional_hex_bytes")]
    pub raw_transaction_id: Option<Vec<u8>>,
}

impl PendingTransaction {
    /// Builds a fresh, unpersisted record stamped with the current time.
    pub fn new(value: u64, recipient: Recipient, account_index: u32, memo: Option<Vec<u8>>) -> Self {
        Self {
            id: None,
            value,
            memo,
            fee: None,
            raw: None,
            recipient,
            account_index,
            mined_height: NOT_MINED_HEIGHT,
            expiry_height: NO_EXPIRY_HEIGHT,
            cancelled: 0,
            encode_attempts: 0,
            submit_attempts: 0,
            error_message: None,
            error_code: None,
            create_time: now_epoch_seconds(),
            raw_transaction_id: None,
        }
    }

    /// True when encoded bytes are present and non-empty.
    pub fn has_raw(&self) -> bool {
        self.raw.as_ref().is_some_and(|raw| !raw.is_empty())
    }

    /// Construction in progress with no encode, submit or failure recorded yet.
    pub fn is_creating(&self) -> bool {
        !self.has_raw()
            && self.submit_attempts <= 0
            && !self.is_failed_submit()
            && !self.is_failed_encoding()
    }

    pub fn is_failed_encoding(&self) -> bool {
        !self.has_raw() && self.encode_attempts > 0
    }

    /// Either an error message or a negative error code marks the submission as failed.
    pub fn is_failed_submit(&self) -> bool {
        self.error_message.is_some() || self.error_code.is_some_and(|code| code < 0)
    }

    pub fn is_failure(&self) -> bool {
        self.is_failed_encoding() || self.is_failed_submit()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled > 0
    }

    pub fn is_mined(&self) -> bool {
        self.mined_height > 0
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_attempts > 0
    }

    /// The latest submission was accepted. Says nothing about chain inclusion.
    pub fn is_submit_success(&self) -> bool {
        self.submit_attempts > 0
            && self.error_code.is_none_or(|code| code >= 0)
            && self.error_message.is_none()
    }

    /// Whether the mined transaction has reached `stale_tolerance` blocks of depth.
    ///
    /// The depth is measured as the absolute distance between `current_height` and
    /// `mined_height`, so a local tip lagging behind the mined height by at least the
    /// tolerance also reports confirmed. This mirrors what wallets already persisted
    /// against and is pinned by tests until the intended semantics are settled.
    pub fn is_confirmed(&self, current_height: i64, stale_tolerance: u64) -> bool {
        if !self.is_mined() || current_height <= 0 {
            return false;
        }
        current_height.abs_diff(self.mined_height) >= stale_tolerance
    }

    /// Accepted by the network, encoded, not yet confirmed and not past expiry.
    ///
    /// Only the presence of `raw` is required here, unlike `is_creating` and
    /// `is_failed_encoding` which also treat an empty payload as missing.
    ///
    /// Pass [`UNKNOWN_HEIGHT`](crate::constants::UNKNOWN_HEIGHT) when the chain tip
    /// has not been observed.
    pub fn is_pending(&self, current_height: i64, stale_tolerance: u64) -> bool {
        self.is_submit_success()
            && !self.is_confirmed(current_height, stale_tolerance)
            && (self.expiry_height == NO_EXPIRY_HEIGHT || self.expiry_height > current_height)
            && self.raw.is_some()
    }

    /// Identity is the raw transaction id alone; records without one never match.
    pub fn is_same_transaction(&self, other: &PendingTransaction) -> bool {
        match (&self.raw_transaction_id, &other.raw_transaction_id) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }
}
