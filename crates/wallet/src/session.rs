use std::{fmt, sync::Arc};

use alloy_primitives::Address;
use tracing::debug;

use crate::{bridge::WalletBridge, error::WalletError};

/// A short-lived binding between the wallet's active account and the
/// capability to sign and submit calls.
///
/// Sessions are never cached: the wallet's active account can change
/// between operations, so callers acquire a fresh one per orchestrated
/// call.
#[derive(Clone)]
pub struct Session {
    account: Address,
    bridge: Arc<dyn WalletBridge>,
}

impl Session {
    /// The account this session signs for.
    pub fn account(&self) -> Address {
        self.account
    }

    /// The underlying submission capability.
    pub fn bridge(&self) -> &dyn WalletBridge {
        &*self.bridge
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("account", &self.account).finish_non_exhaustive()
    }
}

/// Obtains signing sessions from the host-injected wallet provider.
#[derive(Clone)]
pub struct SessionProvider {
    bridge: Option<Arc<dyn WalletBridge>>,
}

impl SessionProvider {
    /// Wraps whatever the host environment injected. `None` models a host
    /// without a reachable wallet provider.
    pub fn new(bridge: Option<Arc<dyn WalletBridge>>) -> Self {
        Self { bridge }
    }

    /// Acquires a session bound to the wallet's currently-active account.
    ///
    /// Fails with [`WalletError::Unavailable`] when no provider is
    /// injected or the provider exposes no account. May prompt the user
    /// through the wallet's own UI.
    pub async fn acquire(&self) -> Result<Session, WalletError> {
        let Some(bridge) = self.bridge.clone() else {
            return Err(WalletError::Unavailable);
        };
        let accounts = bridge.request_accounts().await?;
        let account = accounts.first().copied().ok_or(WalletError::Unavailable)?;
        debug!(%account, "acquired signing session");
        Ok(Session { account, bridge })
    }
}

impl fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionProvider")
            .field("injected", &self.bridge.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Bytes, TxHash, address};
    use alloy_rpc_types::TransactionRequest;
    use async_trait::async_trait;

    use super::*;
    use crate::types::TransactionReceipt;

    const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    struct StaticBridge {
        accounts: Vec<Address>,
    }

    #[async_trait]
    impl WalletBridge for StaticBridge {
        async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
            Ok(self.accounts.clone())
        }

        async fn call(&self, _request: TransactionRequest) -> Result<Bytes, WalletError> {
            Ok(Bytes::new())
        }

        async fn send_transaction(
            &self,
            _request: TransactionRequest,
        ) -> Result<TxHash, WalletError> {
            Ok(TxHash::ZERO)
        }

        async fn transaction_receipt(
            &self,
            _hash: TxHash,
        ) -> Result<Option<TransactionReceipt>, WalletError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn acquire_fails_without_injected_provider() {
        let provider = SessionProvider::new(None);
        assert!(matches!(provider.acquire().await, Err(WalletError::Unavailable)));
    }

    #[tokio::test]
    async fn acquire_fails_when_no_account_is_exposed() {
        let bridge: Arc<dyn WalletBridge> = Arc::new(StaticBridge { accounts: vec![] });
        let provider = SessionProvider::new(Some(bridge));
        assert!(matches!(provider.acquire().await, Err(WalletError::Unavailable)));
    }

    #[tokio::test]
    async fn acquire_binds_the_active_account() {
        let bridge: Arc<dyn WalletBridge> = Arc::new(StaticBridge { accounts: vec![ALICE] });
        let provider = SessionProvider::new(Some(bridge));
        let session = provider.acquire().await.expect("session should be acquired");
        assert_eq!(session.account(), ALICE);
    }
}
