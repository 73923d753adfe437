use std::sync::Arc;

use alloy_primitives::Address;
use alloy_provider::ProviderBuilder;
use clap::Parser;
use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use vault_client::{Intent, TransactionController, ViewState};
use vault_wallet::{SessionProvider, UnlockedBridge, WalletBridge};

/// Inspect and mutate a deployed vault contract through a wallet provider.
///
/// Connects to a node that manages its own accounts (e.g. anvil) and
/// forwards the commands read from stdin as intents.
#[derive(Debug, Parser)]
#[command(name = "vault", version)]
struct VaultArgs {
    /// The vault contract address.
    #[arg(long, env = "VAULT_CONTRACT")]
    contract: Address,

    /// The RPC endpoint of a node with an unlocked account.
    #[arg(long, env = "ETH_RPC_URL", default_value = "http://localhost:8545")]
    rpc_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = VaultArgs::parse();
    let provider = ProviderBuilder::new().connect(&args.rpc_url).await?;
    let bridge: Arc<dyn WalletBridge> = Arc::new(UnlockedBridge::new(provider));
    let controller =
        TransactionController::new(SessionProvider::new(Some(bridge)), args.contract);

    controller.handle(Intent::RequestRefresh).await;
    render(&controller.view());

    println!("commands: balance | amount <value> | deposit | withdraw | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let intent = if let Some(("amount", value)) = line.split_once(' ') {
            Intent::SetPendingAmount(value.trim().to_string())
        } else {
            match line {
                "" => continue,
                "balance" => Intent::RequestRefresh,
                "deposit" => Intent::RequestDeposit,
                "withdraw" => Intent::RequestWithdraw,
                "quit" | "exit" => break,
                other => {
                    println!("unknown command: {other}");
                    continue;
                }
            }
        };
        controller.handle(intent).await;
        render(&controller.view());
    }

    Ok(())
}

fn render(view: &ViewState) {
    println!("balance: {} ETH{}", view.balance, if view.busy { " (busy)" } else { "" });
    if !view.pending_amount.is_empty() {
        println!("pending amount: {}", view.pending_amount);
    }
    if !view.status.is_empty() {
        println!("{}", view.status);
    }
}
