//! Status classification for pending transactions.
//!
//! The engine owns the confirmation depth so callers never pass a protocol
//! constant around by hand. It holds no other state: every call classifies the
//! snapshot it is given and nothing is cached between calls.

use crate::{
    config::StatusConfig,
    constants::NO_EXPIRY_HEIGHT,
    domain::{is_active_state, is_final_state},
    models::{PendingTransaction, PendingTransactionStatus},
};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransactionStatusEngine {
    stale_tolerance: u64,
}

impl Default for PendingTransactionStatusEngine {
    fn default() -> Self {
        Self::new(StatusConfig::default())
    }
}

impl From<StatusConfig> for PendingTransactionStatusEngine {
    fn from(config: StatusConfig) -> Self {
        Self::new(config)
    }
}

impl PendingTransactionStatusEngine {
    /// Creates an engine using the confirmation depth from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Status configuration, usually from `StatusConfig::from_env` or `from_file`
    pub fn new(config: StatusConfig) -> Self {
        Self {
            stale_tolerance: config.stale_tolerance,
        }
    }

    /// Confirmation depth in blocks.
    pub fn stale_tolerance(&self) -> u64 {
        self.stale_tolerance
    }

    /// Checks if a mined transaction is deep enough to count as confirmed.
    ///
    /// Delegates to [`PendingTransaction::is_confirmed`] with the injected tolerance,
    /// including its absolute-distance measurement.
    ///
    /// # Arguments
    ///
    /// * `tx` - The pending transaction snapshot
    /// * `current_height` - Current chain height, non-positive when unknown
    ///
    /// # Returns
    ///
    /// `true` if the transaction is mined and at least `stale_tolerance` blocks away
    /// from `current_height`, `false` otherwise
    pub fn is_confirmed(&self, tx: &PendingTransaction, current_height: i64) -> bool {
        tx.is_confirmed(current_height, self.stale_tolerance)
    }

    /// Checks if an accepted transaction is still waiting on the chain.
    ///
    /// # Arguments
    ///
    /// * `tx` - The pending transaction snapshot
    /// * `current_height` - Current chain height, `UNKNOWN_HEIGHT` when unknown
    ///
    /// # Returns
    ///
    /// `true` if the submission succeeded, the transaction is encoded, not
    /// confirmed and not past its expiry height, `false` otherwise
    pub fn is_pending(&self, tx: &PendingTransaction, current_height: i64) -> bool {
        tx.is_pending(current_height, self.stale_tolerance)
    }

    /// Unmined and past its expiry height. An unknown tip never expires anything.
    pub fn is_expired(&self, tx: &PendingTransaction, current_height: i64) -> bool {
        !tx.is_mined()
            && tx.expiry_height != NO_EXPIRY_HEIGHT
            && current_height > 0
            && tx.expiry_height <= current_height
    }

    /// Derives the lifecycle stage of `tx` at `current_height`.
    ///
    /// Predicates are checked in a fixed order and the first match wins:
    /// cancelled, failed encoding, failed submit, creating, confirmed, mined,
    /// expired, submitted. A record that matches none of them has been encoded
    /// but not yet handed to the submitter.
    pub fn status(&self, tx: &PendingTransaction, current_height: i64) -> PendingTransactionStatus {
        let status = if tx.is_cancelled() {
            PendingTransactionStatus::Cancelled
        } else if tx.is_failed_encoding() {
            PendingTransactionStatus::FailedEncoding
        } else if tx.is_failed_submit() {
            PendingTransactionStatus::FailedSubmit
        } else if tx.is_creating() {
            PendingTransactionStatus::Creating
        } else if self.is_confirmed(tx, current_height) {
            PendingTransactionStatus::Confirmed
        } else if tx.is_mined() {
            PendingTransactionStatus::Mined
        } else if self.is_expired(tx, current_height) {
            PendingTransactionStatus::Expired
        } else if tx.is_submit_success() {
            PendingTransactionStatus::Submitted
        } else {
            PendingTransactionStatus::Encoded
        };

        trace!(
            "Pending transaction {:?} classified as {} at height {}",
            tx.id,
            status,
            current_height
        );
        status
    }

    /// Whether the record has reached a status that needs no further polling.
    pub fn is_final(&self, tx: &PendingTransaction, current_height: i64) -> bool {
        is_final_state(&self.status(tx, current_height))
    }

    /// Whether the record still needs encoding, submission or chain polling.
    pub fn is_active(&self, tx: &PendingTransaction, current_height: i64) -> bool {
        is_active_state(&self.status(tx, current_height))
    }
}
