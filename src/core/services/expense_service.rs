//! Business logic helpers for recording and settling expenses.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::expense::{Expense, ExpenseDraft, SplitPolicy};
use crate::ledger::Ledger;
use crate::split::SplitCalculator;

/// Provides validated operations over ledger expense records.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates a draft, runs the split calculator, and commits the record.
    /// Nothing is mutated when any step fails.
    pub fn add(ledger: &mut Ledger, draft: ExpenseDraft) -> ServiceResult<Uuid> {
        if draft.description.trim().is_empty() {
            return Err(ServiceError::Invalid("Description cannot be empty".into()));
        }
        if !draft.total_amount.is_finite() || draft.total_amount <= 0.0 {
            return Err(ServiceError::Invalid("Amount must be positive".into()));
        }

        let category = match draft.category.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                if !ledger.categories.contains(name) {
                    return Err(ServiceError::Invalid(format!(
                        "Category `{}` does not exist",
                        name
                    )));
                }
                name.to_string()
            }
            _ => ledger.categories.selected().to_string(),
        };

        let paid_by = draft
            .paid_by
            .clone()
            .unwrap_or_else(|| ledger.roster.owner().to_string());
        if !ledger.roster.contains(&paid_by) {
            return Err(crate::errors::LedgerError::UnknownPerson(paid_by).into());
        }
        for person in &draft.split_with {
            if !ledger.roster.contains(person) {
                return Err(crate::errors::LedgerError::UnknownPerson(person.clone()).into());
            }
        }
        if draft.split_with.is_empty() && !matches!(draft.policy, SplitPolicy::Personal) {
            return Err(ServiceError::Invalid(
                "Select at least one participant to split with".into(),
            ));
        }

        let shares = SplitCalculator::compute(
            draft.total_amount,
            &draft.split_with,
            &paid_by,
            &draft.policy,
        )?;

        let mut expense = Expense::new(
            draft.description.trim(),
            draft.total_amount,
            category,
            paid_by,
            draft.policy.kind(),
            shares,
        );
        if let Some(notes) = draft.notes.filter(|notes| !notes.trim().is_empty()) {
            expense.notes = Some(notes);
        }
        Ok(ledger.add_expense(expense)?)
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Expense> {
        ledger
            .remove_expense(id)
            .ok_or(crate::errors::LedgerError::RecordNotFound(id))
            .map_err(ServiceError::from)
    }

    /// Marks one participant's share settled; returns whether the record is
    /// now fully settled.
    pub fn settle(ledger: &mut Ledger, id: Uuid, person: &str) -> ServiceResult<bool> {
        Ok(ledger.settle_share(id, person)?)
    }

    /// Returns a snapshot of the ledger's records in insertion order.
    pub fn list(ledger: &Ledger) -> Vec<&Expense> {
        ledger.expenses.iter().collect()
    }

    pub fn list_for_participant<'a>(ledger: &'a Ledger, person: &'a str) -> Vec<&'a Expense> {
        ledger.expenses_for(person).collect()
    }
}
