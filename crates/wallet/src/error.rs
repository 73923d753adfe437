use alloy_transport::TransportError;

/// EIP-1193 error code for a request the user declined in the wallet UI.
const USER_REJECTED_REQUEST: i64 = 4001;

/// Errors produced at the wallet provider boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalletError {
    /// No wallet provider is reachable from the host environment.
    #[error("no wallet provider is reachable from this environment")]
    Unavailable,
    /// The user declined the request in the wallet's own UI.
    #[error("the user rejected the request")]
    Rejected,
    /// The provider answered with a JSON-RPC error response.
    #[error("provider returned an error (code {code}): {message}")]
    Rpc { code: i64, message: String },
    /// The provider could not be reached or produced a malformed response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl WalletError {
    /// Classifies a JSON-RPC error response from the provider.
    ///
    /// User rejection is recognized both by the EIP-1193 code and by the
    /// message text, since not every injected provider sets the code.
    pub fn from_rpc(code: i64, message: &str) -> Self {
        let lowered = message.to_lowercase();
        if code == USER_REJECTED_REQUEST
            || lowered.contains("user rejected")
            || lowered.contains("user denied")
        {
            return Self::Rejected;
        }
        Self::Rpc { code, message: message.to_string() }
    }
}

impl From<TransportError> for WalletError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::ErrorResp(payload) => {
                Self::from_rpc(payload.code, payload.message.as_ref())
            }
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_eip1193_rejection_code() {
        assert!(matches!(WalletError::from_rpc(4001, "User rejected the request."), WalletError::Rejected));
    }

    #[test]
    fn classifies_rejection_by_message() {
        assert!(matches!(
            WalletError::from_rpc(-32603, "MetaMask Tx Signature: User denied transaction signature."),
            WalletError::Rejected
        ));
    }

    #[test]
    fn keeps_other_rpc_errors() {
        let err = WalletError::from_rpc(-32000, "insufficient funds for gas * price + value");
        match err {
            WalletError::Rpc { code, message } => {
                assert_eq!(code, -32000);
                assert!(message.contains("insufficient funds"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
