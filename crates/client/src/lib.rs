//! # Vault Client Core
//!
//! Transaction orchestration for one deployed vault contract exposing
//! `getBalance` / `deposit` / `withdraw`. The core acquires a signing
//! session per operation, issues the read or state-changing call, waits
//! for on-chain confirmation and reconciles [`ViewState`] with the
//! outcome. Every failure is converted into a human-readable status at
//! the boundary of the operation that produced it; the controller never
//! propagates errors to the surface and never gets stuck busy.
//!
//! The visual surface is an external collaborator: it forwards
//! [`Intent`]s and displays [`ViewState`] snapshots, nothing more.

mod amount;
mod binding;
mod controller;
mod error;
mod view;

pub use amount::Amount;
pub use binding::{CallResult, Confirmation, ContractBinding, PendingCall};
pub use controller::{Intent, TransactionController};
pub use error::VaultError;
pub use view::ViewState;
