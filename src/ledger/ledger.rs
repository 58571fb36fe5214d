use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::CategoryBook;
use crate::domain::expense::Expense;
use crate::domain::participant::Roster;
use crate::errors::{LedgerError, SplitError};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The expense-splitting ledger: roster, category book, and expense records
/// in insertion order. One mutable value owned by the calling session; the
/// caller snapshots it (see [`Ledger::to_json`]) after each mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    pub roster: Roster,
    #[serde(default)]
    pub categories: CategoryBook,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            roster: Roster::new(owner),
            categories: CategoryBook::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Appends a fully built record after re-checking the ledger-level
    /// invariants. Validation happens before any mutation.
    pub fn add_expense(&mut self, expense: Expense) -> Result<Uuid, LedgerError> {
        if !self.roster.is_ready() {
            return Err(LedgerError::InvalidInput(
                "Add at least one other participant before recording expenses".into(),
            ));
        }
        if self.expense(expense.id).is_some() {
            return Err(LedgerError::InvalidInput(format!(
                "Expense id {} already exists",
                expense.id
            )));
        }
        if !self.roster.contains(&expense.paid_by) {
            return Err(LedgerError::UnknownPerson(expense.paid_by.clone()));
        }
        for (person, _) in expense.shares.iter() {
            if !self.roster.contains(person) {
                return Err(LedgerError::UnknownPerson(person.to_string()));
            }
        }
        // The calculator already balanced the shares; this guards records
        // assembled by hand.
        if !expense.shares_balance() {
            return Err(LedgerError::Split(SplitError::AmountMismatch {
                assigned: expense.shares.total(),
                total: expense.total_amount,
            }));
        }
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        Ok(id)
    }

    /// Deletes the record entirely. Immediately visible to balance queries.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch();
        Some(removed)
    }

    /// Marks `person`'s share of the record settled, retaining the record so
    /// its history (amount, category, description) survives full settlement.
    /// Returns whether the record is now fully settled.
    pub fn settle_share(&mut self, id: Uuid, person: &str) -> Result<bool, LedgerError> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(LedgerError::RecordNotFound(id))?;
        expense.shares.settle(person)?;
        let fully_settled = expense.is_fully_settled();
        self.touch();
        Ok(fully_settled)
    }

    /// Drops fully settled records, returning how many were removed.
    pub fn purge_settled(&mut self) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|expense| !expense.is_fully_settled());
        let removed = before - self.expenses.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Lazy, restartable view of the records `person` appears in, as payer
    /// or as a shares key.
    pub fn expenses_for<'a>(&'a self, person: &'a str) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |expense| expense.involves(person))
    }

    /// Whether any record references `person` as payer or share holder.
    pub fn references(&self, person: &str) -> bool {
        self.expenses.iter().any(|expense| expense.involves(person))
    }

    pub fn add_participant(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        self.roster.add(name)?;
        self.touch();
        Ok(())
    }

    /// Removes a participant, refusing while ledger records still reference
    /// them; removing would orphan their shares.
    pub fn remove_participant(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.references(name) {
            return Err(LedgerError::InvalidInput(format!(
                "`{}` still appears in recorded expenses",
                name
            )));
        }
        self.roster.remove(name)?;
        self.touch();
        Ok(())
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        self.categories.add(name)?;
        self.touch();
        Ok(())
    }

    /// Removes a custom category. Existing records keep the name they were
    /// created with.
    pub fn remove_category(&mut self, name: &str) -> Result<(), LedgerError> {
        self.categories.remove(name)?;
        self.touch();
        Ok(())
    }

    /// Serializes the full ledger state for the caller's snapshot store.
    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
