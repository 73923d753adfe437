use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;

use crate::{error::WalletError, types::TransactionReceipt};

/// The capability a host-injected wallet provider exposes to the client.
///
/// This is the typed rendition of the EIP-1193 request surface the client
/// actually needs: expose the active account, evaluate a read call, submit
/// a state-changing call, and report inclusion. Implementations decide how
/// requests reach the wallet (browser bridge, unlocked node, test double);
/// the client core only sees this trait.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// Requests the accounts the wallet currently exposes
    /// (`eth_requestAccounts`). May prompt the user via the wallet's own
    /// UI; the first account is the active one.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Evaluates a read-only call (`eth_call`) and returns the raw return
    /// data.
    async fn call(&self, request: TransactionRequest) -> Result<Bytes, WalletError>;

    /// Signs and submits a state-changing call (`eth_sendTransaction`).
    /// Returns the submission hash; inclusion is observed separately via
    /// [`Self::transaction_receipt`].
    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Looks up the inclusion report for a submitted transaction
    /// (`eth_getTransactionReceipt`). `None` while the transaction is
    /// still pending.
    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, WalletError>;
}
