use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle stage derived from a pending transaction snapshot.
///
/// Never stored; see `PendingTransactionStatusEngine::status` for the order in
/// which the underlying predicates are evaluated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PendingTransactionStatus {
    Creating,
    FailedEncoding,
    FailedSubmit,
    Encoded,
    Submitted,
    Mined,
    Confirmed,
    Expired,
    Cancelled,
}
