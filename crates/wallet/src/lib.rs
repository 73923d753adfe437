//! # Wallet Provider Boundary
//!
//! This crate models the host-injected wallet provider the vault client
//! talks to, following [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193):
//! the host environment (browser extension, mobile wallet bridge, local
//! node) supplies a capability that can expose the active account, submit
//! signed calls and report inclusion. The client core never assumes the
//! capability is present; its absence is a recoverable condition surfaced
//! as [`WalletError::Unavailable`].
//!
//! A [`Session`] is the short-lived binding between the currently-active
//! account and the submission capability. Sessions are acquired fresh for
//! every orchestrated call via [`SessionProvider::acquire`] because the
//! active account can change between calls.

mod bridge;
mod error;
mod session;
mod types;
mod unlocked;

pub use bridge::WalletBridge;
pub use error::WalletError;
pub use session::{Session, SessionProvider};
pub use types::TransactionReceipt;
pub use unlocked::UnlockedBridge;
