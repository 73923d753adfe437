use alloy_primitives::TxHash;
use serde::{Deserialize, Serialize};

/// Inclusion report for a submitted transaction.
///
/// Deliberately smaller than a full node receipt: a wallet bridge only has
/// to say whether the transaction landed and whether it executed
/// successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    /// `true` if execution succeeded, `false` if the transaction was
    /// included but reverted.
    pub status: bool,
}
