use alloy_primitives::TxHash;
use vault_wallet::WalletError;

/// The closed, user-facing failure taxonomy for vault operations.
///
/// Every provider or contract failure is mapped to exactly one of these at
/// the boundary of the operation that produced it; user text is formatted
/// from the kind, never passed through untyped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VaultError {
    /// No wallet provider is reachable from the host environment.
    #[error("no wallet provider is available; install or unlock a wallet to continue")]
    ProviderUnavailable,
    /// The user declined the signature in the wallet UI.
    #[error("the request was rejected in the wallet")]
    UserRejected,
    /// The account cannot cover the amount plus fees.
    #[error("insufficient funds to cover the amount and fees")]
    InsufficientFunds,
    /// The node reported an execution error for the call.
    #[error("the call reverted: {0}")]
    CallReverted(String),
    /// The transaction was included but reverted on chain.
    #[error("transaction {0} was included but reverted")]
    TransactionFailed(TxHash),
    /// Transport-level failure; retrying may succeed.
    #[error("network error: {0}")]
    NetworkError(String),
    /// Local validation failure; never reaches the network.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl VaultError {
    /// Maps a wallet failure observed while acquiring a session.
    pub(crate) fn from_session(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => Self::ProviderUnavailable,
            WalletError::Rejected => Self::UserRejected,
            WalletError::Rpc { message, .. } | WalletError::Transport(message) => {
                Self::NetworkError(message)
            }
        }
    }

    /// Maps a wallet failure observed during a read-only call.
    pub(crate) fn from_read(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => Self::ProviderUnavailable,
            WalletError::Rejected => Self::UserRejected,
            WalletError::Rpc { message, .. } => Self::CallReverted(message),
            WalletError::Transport(message) => Self::NetworkError(message),
        }
    }

    /// Maps a wallet failure observed while submitting a state-changing
    /// call.
    pub(crate) fn from_submit(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => Self::ProviderUnavailable,
            WalletError::Rejected => Self::UserRejected,
            WalletError::Rpc { message, .. } => {
                if message.to_lowercase().contains("insufficient funds") {
                    Self::InsufficientFunds
                } else {
                    Self::CallReverted(message)
                }
            }
            WalletError::Transport(message) => Self::NetworkError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_classifies_insufficient_funds() {
        let err = WalletError::Rpc {
            code: -32000,
            message: "Insufficient funds for gas * price + value".to_string(),
        };
        assert!(matches!(VaultError::from_submit(err), VaultError::InsufficientFunds));
    }

    #[test]
    fn submit_classifies_reverts() {
        let err = WalletError::Rpc {
            code: 3,
            message: "execution reverted: vault: amount exceeds balance".to_string(),
        };
        match VaultError::from_submit(err) {
            VaultError::CallReverted(message) => assert!(message.contains("exceeds balance")),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn session_failures_never_become_reverts() {
        let err = WalletError::Rpc { code: -32603, message: "internal error".to_string() };
        assert!(matches!(VaultError::from_session(err), VaultError::NetworkError(_)));
    }
}
