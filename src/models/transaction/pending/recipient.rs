use serde::{Deserialize, Serialize};

/// Destination of a pending transaction.
///
/// External sends carry the encoded address string; wallet-internal transfers
/// between accounts carry the receiving account index instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Recipient {
    Address(String),
    Account(u32),
}

impl Recipient {
    pub fn address(&self) -> Option<&str> {
        match self {
            Recipient::Address(address) => Some(address),
            Recipient::Account(_) => None,
        }
    }

    pub fn account_index(&self) -> Option<u32> {
        match self {
            Recipient::Account(index) => Some(*index),
            Recipient::Address(_) => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Recipient::Account(_))
    }
}
