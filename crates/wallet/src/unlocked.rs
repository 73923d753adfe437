use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;

use crate::{bridge::WalletBridge, error::WalletError, types::TransactionReceipt};

/// A [`WalletBridge`] over a node that manages its own accounts, e.g. a
/// local anvil instance.
///
/// The node plays the role of the injected wallet: `eth_accounts` exposes
/// the unlocked accounts and `eth_sendTransaction` signs with them. Useful
/// for development and end-to-end runs without a browser in the loop.
#[derive(Clone, Debug)]
pub struct UnlockedBridge<P> {
    provider: P,
}

impl<P> UnlockedBridge<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider + 'static> WalletBridge for UnlockedBridge<P> {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(self.provider.get_accounts().await?)
    }

    async fn call(&self, request: TransactionRequest) -> Result<Bytes, WalletError> {
        Ok(self.provider.call(request).await?)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash, WalletError> {
        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, WalletError> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt.map(|receipt| TransactionReceipt {
            transaction_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            status: receipt.status(),
        }))
    }
}
