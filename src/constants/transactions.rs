//! Pending transaction status groupings
//!
//! Final statuses are terminal from the wallet's point of view: the record can be
//! archived by the persistence layer and no further polling is needed.

use crate::models::PendingTransactionStatus;

/// Statuses after which the record will not change through normal processing.
pub const FINAL_PENDING_STATUSES: &[PendingTransactionStatus] = &[
    PendingTransactionStatus::Cancelled,
    PendingTransactionStatus::Confirmed,
    PendingTransactionStatus::Expired,
    PendingTransactionStatus::FailedEncoding,
    PendingTransactionStatus::FailedSubmit,
];

/// Statuses that still require chain polling or an encoder/submitter pass.
pub const ACTIVE_PENDING_STATUSES: &[PendingTransactionStatus] = &[
    PendingTransactionStatus::Creating,
    PendingTransactionStatus::Encoded,
    PendingTransactionStatus::Submitted,
    PendingTransactionStatus::Mined,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_pending_statuses_contains_expected_values() {
        assert_eq!(FINAL_PENDING_STATUSES.len(), 5);
        assert!(FINAL_PENDING_STATUSES.contains(&PendingTransactionStatus::Cancelled));
        assert!(FINAL_PENDING_STATUSES.contains(&PendingTransactionStatus::Confirmed));
        assert!(FINAL_PENDING_STATUSES.contains(&PendingTransactionStatus::Expired));
        assert!(FINAL_PENDING_STATUSES.contains(&PendingTransactionStatus::FailedEncoding));
        assert!(FINAL_PENDING_STATUSES.contains(&PendingTransactionStatus::FailedSubmit));
    }

    #[test]
    fn test_active_pending_statuses_contains_expected_values() {
        assert_eq!(ACTIVE_PENDING_STATUSES.len(), 4);
        assert!(ACTIVE_PENDING_STATUSES.contains(&PendingTransactionStatus::Creating));
        assert!(ACTIVE_PENDING_STATUSES.contains(&PendingTransactionStatus::Encoded));
        assert!(ACTIVE_PENDING_STATUSES.contains(&PendingTransactionStatus::Submitted));
        assert!(ACTIVE_PENDING_STATUSES.contains(&PendingTransactionStatus::Mined));
    }

    #[test]
    fn test_status_groups_are_disjoint() {
        for status in ACTIVE_PENDING_STATUSES {
            assert!(!FINAL_PENDING_STATUSES.contains(status));
        }
    }
}
