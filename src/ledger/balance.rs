//! Balance engine: one full pass over the ledger into net positions.

use std::collections::BTreeMap;

use crate::ledger::Ledger;

/// Net position per participant. Positive means the person is owed money (or
/// has overpaid); negative means the person owes.
pub type Balances = BTreeMap<String, f64>;

/// Recomputes every participant's net balance from scratch.
///
/// Every roster member starts at zero, each record credits its payer with the
/// full total, and every open share debits its holder. Settled shares are
/// repaid obligations and no longer count against the holder. There is no
/// cached state, so two calls over an unchanged ledger agree exactly.
pub fn compute_balances(ledger: &Ledger) -> Balances {
    let mut balances: Balances = ledger
        .roster
        .names()
        .map(|name| (name.to_string(), 0.0))
        .collect();

    for expense in &ledger.expenses {
        if let Some(balance) = balances.get_mut(&expense.paid_by) {
            *balance += expense.total_amount;
        }
        for (person, amount) in expense.shares.open() {
            if let Some(balance) = balances.get_mut(person) {
                *balance -= amount;
            }
        }
    }

    balances
}

/// Single-participant convenience lookup.
pub fn balance_of(ledger: &Ledger, person: &str) -> f64 {
    compute_balances(ledger)
        .get(person)
        .copied()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expense::{Expense, ShareMap, SplitKind};

    fn ledger_with_dinner() -> (Ledger, uuid::Uuid) {
        let mut ledger = Ledger::new("Trip", "Me");
        ledger.add_participant("Alice").unwrap();
        ledger.add_participant("Bob").unwrap();
        let mut shares = ShareMap::new();
        shares.insert("Alice", 15.0);
        shares.insert("Bob", 15.0);
        let id = ledger
            .add_expense(Expense::new(
                "Dinner",
                30.0,
                "Food",
                "Me",
                SplitKind::Equal,
                shares,
            ))
            .unwrap();
        (ledger, id)
    }

    #[test]
    fn payer_credited_share_holders_debited() {
        let (ledger, _) = ledger_with_dinner();
        let balances = compute_balances(&ledger);
        assert_eq!(balances["Me"], 30.0);
        assert_eq!(balances["Alice"], -15.0);
        assert_eq!(balances["Bob"], -15.0);
    }

    #[test]
    fn settled_shares_drop_out_of_the_debit_pass() {
        let (mut ledger, id) = ledger_with_dinner();
        ledger.settle_share(id, "Alice").unwrap();
        let balances = compute_balances(&ledger);
        assert_eq!(balances["Alice"], 0.0);
        assert_eq!(balances["Bob"], -15.0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let (ledger, _) = ledger_with_dinner();
        assert_eq!(compute_balances(&ledger), compute_balances(&ledger));
    }

    #[test]
    fn every_roster_member_appears_even_without_records() {
        let mut ledger = Ledger::new("Fresh", "Me");
        ledger.add_participant("Alice").unwrap();
        let balances = compute_balances(&ledger);
        assert_eq!(balances.len(), 2);
        assert_eq!(balances["Alice"], 0.0);
        assert_eq!(balance_of(&ledger, "Nobody"), 0.0);
    }
}
