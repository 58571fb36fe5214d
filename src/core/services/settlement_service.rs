//! Balance and settlement queries over a ledger.

use crate::domain::common::EPSILON;
use crate::ledger::{balance, settlement, Balances, Ledger, Transfer};

pub struct SettlementService;

impl SettlementService {
    /// Net position per participant, recomputed from the full ledger.
    pub fn balances(ledger: &Ledger) -> Balances {
        balance::compute_balances(ledger)
    }

    pub fn balance_of(ledger: &Ledger, person: &str) -> f64 {
        balance::balance_of(ledger, person)
    }

    /// Proposed payment plan for the current balances.
    pub fn plan(ledger: &Ledger) -> Vec<Transfer> {
        settlement::plan_settlements(&Self::balances(ledger))
    }

    /// Sum of all outstanding debt across the ledger.
    pub fn outstanding_total(ledger: &Ledger) -> f64 {
        Self::balances(ledger)
            .values()
            .filter(|amount| **amount < -EPSILON)
            .map(|amount| -amount)
            .sum()
    }
}
