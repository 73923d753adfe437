use std::time::Duration;

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{SolCall, sol};
use tracing::{debug, warn};
use vault_wallet::{Session, TransactionReceipt};

use crate::{amount::Amount, error::VaultError};

sol! {
    interface IVault {
        function getBalance() external view returns (uint256);
        function deposit(uint256 amount) external payable;
        function withdraw(uint256 amount) external;
    }
}

/// How often inclusion is polled for. The wait itself is unbounded; only
/// the provider's own behavior limits it.
const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Handle for a submitted, not yet confirmed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCall {
    hash: TxHash,
}

impl PendingCall {
    pub fn hash(&self) -> TxHash {
        self.hash
    }
}

/// Acknowledgement that a submitted call was included and did not revert.
#[derive(Debug, Clone, Copy)]
pub struct Confirmation {
    pub hash: TxHash,
    pub receipt: TransactionReceipt,
}

/// Outcome of a vault call: a read value or a write acknowledgement.
#[derive(Debug, Clone, Copy)]
pub enum CallResult {
    Read(Amount),
    Write(Confirmation),
}

/// Binds the vault's address and interface to an active signing session.
///
/// The interface is the static [`IVault`] schema, fixed at compile time;
/// only the address varies per deployment.
pub struct ContractBinding {
    address: Address,
    session: Session,
}

impl ContractBinding {
    pub fn new(address: Address, session: Session) -> Self {
        Self { address, session }
    }

    /// Reads the vault balance. Pure read, no state change.
    pub async fn read_balance(&self) -> Result<Amount, VaultError> {
        let request = TransactionRequest::default()
            .with_from(self.session.account())
            .with_to(self.address)
            .with_input(Bytes::from(IVault::getBalanceCall {}.abi_encode()));
        let raw = self.session.bridge().call(request).await.map_err(VaultError::from_read)?;
        let balance = IVault::getBalanceCall::abi_decode_returns(&raw).map_err(|err| {
            VaultError::NetworkError(format!("malformed getBalance return data: {err}"))
        })?;
        Ok(Amount::from_base_units(balance))
    }

    /// Submits a deposit. The amount is attached both as the call argument
    /// and as the transferred value; the contract expects them equal.
    pub async fn submit_deposit(&self, amount: Amount) -> Result<PendingCall, VaultError> {
        let request = TransactionRequest::default()
            .with_from(self.session.account())
            .with_to(self.address)
            .with_value(amount.base_units())
            .with_input(Bytes::from(
                IVault::depositCall { amount: amount.base_units() }.abi_encode(),
            ));
        self.submit(request, "deposit").await
    }

    /// Submits a withdrawal. No value attached.
    pub async fn submit_withdraw(&self, amount: Amount) -> Result<PendingCall, VaultError> {
        let request = TransactionRequest::default()
            .with_from(self.session.account())
            .with_to(self.address)
            .with_input(Bytes::from(
                IVault::withdrawCall { amount: amount.base_units() }.abi_encode(),
            ));
        self.submit(request, "withdraw").await
    }

    async fn submit(
        &self,
        request: TransactionRequest,
        op: &'static str,
    ) -> Result<PendingCall, VaultError> {
        let hash = self
            .session
            .bridge()
            .send_transaction(request)
            .await
            .map_err(VaultError::from_submit)?;
        debug!(%hash, op, "submitted transaction");
        Ok(PendingCall { hash })
    }

    /// Waits until the submitted call is observed included, then reports
    /// the outcome. There is no way to abort a call once the wallet has
    /// accepted it, so the wait has no timeout of its own.
    pub async fn confirm(&self, pending: PendingCall) -> Result<Confirmation, VaultError> {
        let hash = pending.hash;
        loop {
            let receipt = self
                .session
                .bridge()
                .transaction_receipt(hash)
                .await
                .map_err(|err| VaultError::NetworkError(err.to_string()))?;
            match receipt {
                Some(receipt) if receipt.status => {
                    debug!(%hash, block = ?receipt.block_number, "transaction confirmed");
                    return Ok(Confirmation { hash, receipt });
                }
                Some(_) => {
                    warn!(%hash, "transaction reverted after inclusion");
                    return Err(VaultError::TransactionFailed(hash));
                }
                None => tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await,
            }
        }
    }
}
