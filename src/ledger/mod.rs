//! Ledger aggregate plus the derived balance and settlement computations.

pub mod balance;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod settlement;

pub use balance::{balance_of, compute_balances, Balances};
pub use ledger::Ledger;
pub use settlement::{apply_transfers, plan_settlements, Transfer};
