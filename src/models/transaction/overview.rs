use crate::{constants::UNPERSISTED_ID, models::PendingTransaction};
use serde::{Deserialize, Serialize};

/// Display shape shared by pending and confirmed transactions.
///
/// Fields a pending record does not track (note counts, position in block,
/// change and memo bookkeeping) are reported as their zero values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOverview {
    pub block_time: i64,
    pub expiry_height: i64,
    pub fee: Option<u64>,
    pub id: i64,
    pub index: Option<i64>,
    pub is_wallet_internal: bool,
    pub has_change: bool,
    pub memo_count: u32,
    pub mined_height: i64,
    #[serde(default, with = "crate::utils::optional_hex_bytes")]
    pub raw: Option<Vec<u8>>,
    #[serde(with = "crate::utils::hex_bytes")]
    pub raw_id: Vec<u8>,
    pub received_note_count: u32,
    pub sent_note_count: u32,
    pub value: u64,
}

impl PendingTransaction {
    /// Converts the record for display.
    ///
    /// `_default_fee` keeps the signature aligned with the confirmed-transaction
    /// conversion. It is never substituted: a record without a computed fee yields
    /// an overview without a fee.
    pub fn to_overview(&self, _default_fee: u64) -> TransactionOverview {
        TransactionOverview {
            block_time: self.create_time,
            expiry_height: self.expiry_height,
            fee: self.fee,
            id: self.id.unwrap_or(UNPERSISTED_ID),
            index: None,
            is_wallet_internal: false,
            has_change: false,
            memo_count: 0,
            mined_height: self.mined_height,
            raw: self.raw.clone(),
            raw_id: self.raw_transaction_id.clone().unwrap_or_default(),
            received_note_count: 0,
            sent_note_count: 0,
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::pending::tests::{
        create_submitted_transaction, create_test_pending_transaction,
    };
    use crate::models::Recipient;

    #[test]
    fn test_overview_of_fresh_record() {
        let tx = create_test_pending_transaction();
        let overview = tx.to_overview(1_000);

        assert_eq!(overview.id, UNPERSISTED_ID);
        assert_eq!(overview.fee, None);
        assert!(overview.raw_id.is_empty());
        assert_eq!(overview.raw, None);
        assert_eq!(overview.index, None);
        assert_eq!(overview.block_time, tx.create_time);
        assert_eq!(overview.mined_height, tx.mined_height);
        assert_eq!(overview.expiry_height, tx.expiry_height);
        assert_eq!(overview.value, tx.value);
    }

    #[test]
    fn test_overview_default_fee_is_not_substituted() {
        let tx = create_submitted_transaction();
        assert_eq!(tx.to_overview(10_000).fee, None);

        let with_fee = PendingTransaction {
            fee: Some(1_000),
            ..create_submitted_transaction()
        };
        assert_eq!(with_fee.to_overview(10_000).fee, Some(1_000));
    }

    #[test]
    fn test_overview_of_submitted_record() {
        let tx = PendingTransaction {
            id: Some(42),
            mined_height: 1_200,
            expiry_height: 1_240,
            ..create_submitted_transaction()
        };
        let overview = tx.to_overview(0);

        assert_eq!(overview.id, 42);
        assert_eq!(overview.raw, tx.raw);
        assert_eq!(Some(overview.raw_id.clone()), tx.raw_transaction_id);
        assert_eq!(overview.mined_height, 1_200);
        assert_eq!(overview.expiry_height, 1_240);
    }

    #[test]
    fn test_overview_untracked_fields_are_zeroed() {
        let tx = PendingTransaction {
            recipient: Recipient::Account(2),
            memo: Some(b"thanks".to_vec()),
            ..create_submitted_transaction()
        };
        let overview = tx.to_overview(0);

        assert!(!overview.is_wallet_internal);
        assert!(!overview.has_change);
        assert_eq!(overview.memo_count, 0);
        assert_eq!(overview.received_note_count, 0);
        assert_eq!(overview.sent_note_count, 0);
    }

    #[test]
    fn test_overview_serializes_bytes_as_hex() {
        let tx = PendingTransaction {
            raw: Some(vec![0x05, 0x00]),
            raw_transaction_id: Some(vec![0xab, 0xcd]),
            ..create_test_pending_transaction()
        };
        let value = serde_json::to_value(tx.to_overview(0)).unwrap();

        assert_eq!(value["raw"], "0500");
        assert_eq!(value["raw_id"], "abcd");
        assert_eq!(value["fee"], serde_json::Value::Null);
    }
}
