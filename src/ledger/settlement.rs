//! Settlement planner: greedy reduction of balances into pairwise transfers.

use serde::{Deserialize, Serialize};

use crate::domain::common::EPSILON;
use crate::ledger::balance::Balances;

/// A proposed single payment from `from` to `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Reduces a balance mapping into transfers that drive every balance to
/// within [`EPSILON`] of zero when executed.
///
/// Greedy largest-creditor/largest-debtor matching: both sides sort
/// descending by amount with a stable sort, so ties keep the balances-map
/// enumeration order and the plan is deterministic. Not guaranteed globally
/// minimal in transfer count, but minimal under this tie-break and fine for
/// the domain.
pub fn plan_settlements(balances: &Balances) -> Vec<Transfer> {
    let mut creditors: Vec<(&str, f64)> = Vec::new();
    let mut debtors: Vec<(&str, f64)> = Vec::new();
    for (person, balance) in balances {
        if *balance > EPSILON {
            creditors.push((person, *balance));
        } else if *balance < -EPSILON {
            debtors.push((person, balance.abs()));
        }
    }
    creditors.sort_by(|a, b| b.1.total_cmp(&a.1));
    debtors.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].1.min(debtors[j].1);
        transfers.push(Transfer {
            from: debtors[j].0.to_string(),
            to: creditors[i].0.to_string(),
            amount,
        });
        creditors[i].1 -= amount;
        debtors[j].1 -= amount;
        if creditors[i].1 < EPSILON {
            i += 1;
        }
        if debtors[j].1 < EPSILON {
            j += 1;
        }
    }
    transfers
}

/// Applies each transfer to the balance mapping, crediting the sender and
/// debiting the receiver. Lets callers and tests verify the drive-to-zero
/// invariant without touching the ledger.
pub fn apply_transfers(balances: &mut Balances, transfers: &[Transfer]) {
    for transfer in transfers {
        if let Some(balance) = balances.get_mut(&transfer.from) {
            *balance += transfer.amount;
        }
        if let Some(balance) = balances.get_mut(&transfer.to) {
            *balance -= transfer.amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(pairs: &[(&str, f64)]) -> Balances {
        pairs
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn largest_creditor_is_paid_first() {
        let plan = plan_settlements(&balances(&[("Me", -30.0), ("A", 10.0), ("B", 20.0)]));
        assert_eq!(
            plan,
            vec![
                Transfer {
                    from: "Me".into(),
                    to: "B".into(),
                    amount: 20.0,
                },
                Transfer {
                    from: "Me".into(),
                    to: "A".into(),
                    amount: 10.0,
                },
            ]
        );
    }

    #[test]
    fn one_debtor_covers_many_creditors() {
        let plan = plan_settlements(&balances(&[
            ("Alice", 50.0),
            ("Bob", 25.0),
            ("Me", -75.0),
        ]));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].to, "Alice");
        assert_eq!(plan[1].to, "Bob");
        assert!(plan.iter().all(|transfer| transfer.amount > 0.0));
    }

    #[test]
    fn near_zero_balances_produce_no_transfers() {
        let plan = plan_settlements(&balances(&[("A", 0.005), ("B", -0.005)]));
        assert!(plan.is_empty());
    }

    #[test]
    fn ties_resolve_in_enumeration_order() {
        // Balances iterate name-ordered; equal creditors keep that order.
        let plan = plan_settlements(&balances(&[("B", 10.0), ("A", 10.0), ("Me", -20.0)]));
        assert_eq!(plan[0].to, "A");
        assert_eq!(plan[1].to, "B");
    }

    #[test]
    fn transfers_drive_balances_to_zero() {
        let mut state = balances(&[
            ("Me", -37.5),
            ("Alice", 12.5),
            ("Bob", 40.0),
            ("Carol", -15.0),
        ]);
        let plan = plan_settlements(&state);
        apply_transfers(&mut state, &plan);
        for (person, balance) in &state {
            assert!(
                balance.abs() <= EPSILON,
                "{person} left with residual balance {balance}"
            );
        }
    }

    #[test]
    fn transfer_sum_equals_total_debt() {
        let state = balances(&[("Me", -30.0), ("A", 10.0), ("B", 20.0)]);
        let plan = plan_settlements(&state);
        let transferred: f64 = plan.iter().map(|transfer| transfer.amount).sum();
        let total_debt: f64 = state
            .values()
            .filter(|balance| **balance < -EPSILON)
            .map(|balance| -balance)
            .sum();
        assert!((transferred - total_debt).abs() <= EPSILON);
    }
}
