use alloy_primitives::Address;
use parking_lot::Mutex;
use tracing::{debug, warn};
use vault_wallet::SessionProvider;

use crate::{
    amount::Amount,
    binding::{CallResult, ContractBinding},
    error::VaultError,
    view::ViewState,
};

/// Notice shown when no wallet provider is reachable.
const PROVIDER_MISSING_NOTICE: &str =
    "A wallet provider is required to use this app. Install or unlock a wallet and try again.";

/// Intents the external UI surface forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    RequestRefresh,
    SetPendingAmount(String),
    RequestDeposit,
    RequestWithdraw,
}

/// The two state-changing operation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MutateOp {
    Deposit,
    Withdraw,
}

impl MutateOp {
    fn success_notice(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit successful!",
            Self::Withdraw => "Withdrawal successful!",
        }
    }

    fn failure_verb(self) -> &'static str {
        match self {
            Self::Deposit => "depositing",
            Self::Withdraw => "withdrawing",
        }
    }
}

/// Sequences vault operations and reconciles [`ViewState`] with their
/// outcomes.
///
/// Stateless between operations apart from the view itself: every
/// operation acquires a fresh session, runs to completion and writes its
/// outcome back. At most one state-changing operation is in flight at a
/// time, enforced by the `busy` flag (test-and-set under the view lock,
/// which is never held across an await). Refreshes are not serialized;
/// concurrent refreshes follow last-writer-wins, both deriving from the
/// same authoritative on-chain read.
pub struct TransactionController {
    sessions: SessionProvider,
    contract: Address,
    view: Mutex<ViewState>,
}

impl TransactionController {
    pub fn new(sessions: SessionProvider, contract: Address) -> Self {
        Self { sessions, contract, view: Mutex::new(ViewState::default()) }
    }

    /// A snapshot of the current display state.
    pub fn view(&self) -> ViewState {
        self.view.lock().clone()
    }

    /// Dispatches an intent from the UI surface.
    pub async fn handle(&self, intent: Intent) {
        match intent {
            Intent::RequestRefresh => self.refresh().await,
            Intent::SetPendingAmount(value) => self.set_pending_amount(value),
            Intent::RequestDeposit => self.deposit().await,
            Intent::RequestWithdraw => self.withdraw().await,
        }
    }

    /// Records the amount the user typed. Validation happens on use, so a
    /// partially-typed value never produces an error notice.
    pub fn set_pending_amount(&self, value: String) {
        self.view.lock().pending_amount = value;
    }

    /// Reads the vault balance and reconciles the view. Never sets `busy`.
    pub async fn refresh(&self) {
        match self.reload_balance().await {
            Ok(_) => self.view.lock().status.clear(),
            Err(VaultError::ProviderUnavailable) => {
                self.view.lock().status = PROVIDER_MISSING_NOTICE.to_string();
            }
            Err(err) => self.view.lock().status = format!("Error getting balance: {err}"),
        }
    }

    pub async fn deposit(&self) {
        self.mutate(MutateOp::Deposit).await;
    }

    pub async fn withdraw(&self) {
        self.mutate(MutateOp::Withdraw).await;
    }

    async fn mutate(&self, op: MutateOp) {
        // Guarded entry: test-and-set under the view lock, before any call
        // traffic is produced.
        let amount = {
            let mut view = self.view.lock();
            if view.busy {
                debug!(?op, "mutation rejected, another one is in flight");
                return;
            }
            match Amount::parse(&view.pending_amount) {
                Ok(amount) => {
                    view.busy = true;
                    view.status.clear();
                    amount
                }
                Err(err) => {
                    view.status = format!("Error {}: {err}", op.failure_verb());
                    return;
                }
            }
        };

        let outcome = self.run_mutation(op, amount).await;

        // Structured exit: `busy` resets on the success and failure paths
        // alike. The pending amount survives failures so the user can
        // retry.
        let succeeded = {
            let mut view = self.view.lock();
            view.busy = false;
            match &outcome {
                Ok(_) => {
                    view.status = op.success_notice().to_string();
                    view.pending_amount.clear();
                    true
                }
                Err(err) => {
                    warn!(?op, %err, "mutation failed");
                    view.status = format!("Error {}: {err}", op.failure_verb());
                    false
                }
            }
        };

        if succeeded {
            // Reload the balance from the authoritative read, keeping the
            // success notice unless the reload itself fails.
            if let Err(err) = self.reload_balance().await {
                self.view.lock().status = format!("Error getting balance: {err}");
            }
        }
    }

    /// Reads the balance into the view; status handling is the caller's.
    async fn reload_balance(&self) -> Result<CallResult, VaultError> {
        let session = self.sessions.acquire().await.map_err(VaultError::from_session)?;
        let balance = ContractBinding::new(self.contract, session).read_balance().await?;
        self.view.lock().balance = balance.display();
        Ok(CallResult::Read(balance))
    }

    async fn run_mutation(&self, op: MutateOp, amount: Amount) -> Result<CallResult, VaultError> {
        let session = self.sessions.acquire().await.map_err(VaultError::from_session)?;
        let binding = ContractBinding::new(self.contract, session);
        let pending = match op {
            MutateOp::Deposit => binding.submit_deposit(amount).await?,
            MutateOp::Withdraw => binding.submit_withdraw(amount).await?,
        };
        let confirmation = binding.confirm(pending).await?;
        Ok(CallResult::Write(confirmation))
    }
}
