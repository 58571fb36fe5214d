//! Split calculation: turning a total plus a policy into per-person shares.

use std::collections::BTreeMap;

use crate::domain::common::amounts_match;
use crate::domain::expense::{ShareMap, SplitPolicy};
use crate::errors::SplitError;

/// Computes per-participant shares for a single expense.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Produces the share mapping for `total_amount` across `participants`
    /// under `policy`, or fails without side effects.
    ///
    /// Equal shares are stored at full precision (the raw quotient); rounding
    /// to currency granularity is a presentation concern. All sum checks use
    /// the fixed [`EPSILON`] tolerance.
    pub fn compute(
        total_amount: f64,
        participants: &[String],
        payer: &str,
        policy: &SplitPolicy,
    ) -> Result<ShareMap, SplitError> {
        if !total_amount.is_finite() || total_amount <= 0.0 {
            return Err(SplitError::InvalidInput(
                "Total amount must be positive".into(),
            ));
        }

        match policy {
            SplitPolicy::Equal => Self::equal(total_amount, participants),
            SplitPolicy::ExactAmounts(requested) => {
                Self::exact(total_amount, participants, requested)
            }
            SplitPolicy::FixedPlusEqual(fixed) => Self::fixed_plus_equal(
                total_amount,
                participants,
                fixed,
            ),
            SplitPolicy::Personal => {
                let mut shares = ShareMap::new();
                shares.insert(payer, total_amount);
                Ok(shares)
            }
        }
    }

    fn equal(total_amount: f64, participants: &[String]) -> Result<ShareMap, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::InvalidInput(
                "Select at least one participant to split with".into(),
            ));
        }
        let per_person = total_amount / participants.len() as f64;
        Ok(participants
            .iter()
            .map(|person| (person.clone(), per_person))
            .collect())
    }

    fn exact(
        total_amount: f64,
        participants: &[String],
        requested: &BTreeMap<String, f64>,
    ) -> Result<ShareMap, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::InvalidInput(
                "Select at least one participant to split with".into(),
            ));
        }
        for person in requested.keys() {
            if !participants.contains(person) {
                return Err(SplitError::InvalidInput(format!(
                    "`{}` is not among the selected participants",
                    person
                )));
            }
        }
        let assigned: f64 = participants
            .iter()
            .map(|person| requested.get(person).copied().unwrap_or(0.0))
            .sum();
        if !amounts_match(assigned, total_amount) {
            return Err(SplitError::AmountMismatch {
                assigned,
                total: total_amount,
            });
        }
        Ok(participants
            .iter()
            .map(|person| (person.clone(), requested.get(person).copied().unwrap_or(0.0)))
            .collect())
    }

    fn fixed_plus_equal(
        total_amount: f64,
        participants: &[String],
        fixed: &BTreeMap<String, f64>,
    ) -> Result<ShareMap, SplitError> {
        // Non-positive fixed entries count as unassigned, matching the entry
        // form where a cleared field leaves a zero behind.
        let fixed: BTreeMap<&str, f64> = fixed
            .iter()
            .filter(|(_, amount)| **amount > 0.0)
            .map(|(person, amount)| (person.as_str(), *amount))
            .collect();
        for person in fixed.keys() {
            if !participants.iter().any(|p| p == person) {
                return Err(SplitError::InvalidInput(format!(
                    "`{}` is not among the selected participants",
                    person
                )));
            }
        }
        if fixed.is_empty() {
            return Err(SplitError::NoFixedPayers);
        }
        let fixed_total: f64 = fixed.values().sum();
        if fixed_total >= total_amount {
            return Err(SplitError::FixedExceedsTotal {
                fixed: fixed_total,
                total: total_amount,
            });
        }
        let equal_payers: Vec<&String> = participants
            .iter()
            .filter(|person| !fixed.contains_key(person.as_str()))
            .collect();
        if equal_payers.is_empty() {
            return Err(SplitError::NoRemainingPayers);
        }
        let per_person = (total_amount - fixed_total) / equal_payers.len() as f64;

        let mut shares = ShareMap::new();
        for (person, amount) in &fixed {
            shares.insert(*person, *amount);
        }
        for person in equal_payers {
            shares.insert(person.as_str(), per_person);
        }
        Ok(shares)
    }
}
