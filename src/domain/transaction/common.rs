//! Status helpers shared by wallet sync and display code.
//!
//! Both helpers read the status groupings in `crate::constants`, so a status
//! belongs to exactly one of the two groups.

use crate::constants::{ACTIVE_PENDING_STATUSES, FINAL_PENDING_STATUSES};
use crate::models::PendingTransactionStatus;

/// Checks if a pending transaction status is final (confirmed, expired, cancelled or failed).
///
/// Records in a final status need no further polling and may be archived by the
/// persistence layer according to its retention policy.
///
/// # Arguments
///
/// * `status` - The derived status to check
///
/// # Returns
///
/// `true` if the status is final, `false` otherwise
pub fn is_final_state(status: &PendingTransactionStatus) -> bool {
    FINAL_PENDING_STATUSES.contains(status)
}

/// Checks if a pending transaction status still needs work (creating, encoded, submitted or mined).
///
/// Active records are the ones a wallet keeps polling chain state for, or hands
/// back to the encoder and submitter.
///
/// # Arguments
///
/// * `status` - The derived status to check
///
/// # Returns
///
/// `true` if the status is active, `false` otherwise
pub fn is_active_state(status: &PendingTransactionStatus) -> bool {
    ACTIVE_PENDING_STATUSES.contains(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [PendingTransactionStatus; 9] = [
        PendingTransactionStatus::Creating,
        PendingTransactionStatus::FailedEncoding,
        PendingTransactionStatus::FailedSubmit,
        PendingTransactionStatus::Encoded,
        PendingTransactionStatus::Submitted,
        PendingTransactionStatus::Mined,
        PendingTransactionStatus::Confirmed,
        PendingTransactionStatus::Expired,
        PendingTransactionStatus::Cancelled,
    ];

    #[test]
    fn test_is_final_state() {
        assert!(is_final_state(&PendingTransactionStatus::Confirmed));
        assert!(is_final_state(&PendingTransactionStatus::Expired));
        assert!(is_final_state(&PendingTransactionStatus::Cancelled));
        assert!(is_final_state(&PendingTransactionStatus::FailedEncoding));
        assert!(is_final_state(&PendingTransactionStatus::FailedSubmit));

        assert!(!is_final_state(&PendingTransactionStatus::Creating));
        assert!(!is_final_state(&PendingTransactionStatus::Encoded));
        assert!(!is_final_state(&PendingTransactionStatus::Submitted));
        assert!(!is_final_state(&PendingTransactionStatus::Mined));
    }

    #[test]
    fn test_is_active_state() {
        assert!(is_active_state(&PendingTransactionStatus::Creating));
        assert!(is_active_state(&PendingTransactionStatus::Encoded));
        assert!(is_active_state(&PendingTransactionStatus::Submitted));
        assert!(is_active_state(&PendingTransactionStatus::Mined));

        assert!(!is_active_state(&PendingTransactionStatus::Confirmed));
        assert!(!is_active_state(&PendingTransactionStatus::Cancelled));
        assert!(!is_active_state(&PendingTransactionStatus::FailedSubmit));
    }

    #[test]
    fn test_every_status_is_either_active_or_final() {
        for status in ALL_STATUSES {
            assert_ne!(is_active_state(&status), is_final_state(&status));
        }
    }
}
