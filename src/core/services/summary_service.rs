//! Reporting helpers the caller renders on its overview screens.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::ledger::Ledger;

/// One row of a participant's expense breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonShareDetail {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub total_amount: f64,
    pub person_owes: f64,
    pub settled: bool,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

pub struct SummaryService;

impl SummaryService {
    /// Sum of record totals created in the given calendar month.
    pub fn monthly_total(ledger: &Ledger, year: i32, month: u32) -> f64 {
        ledger
            .expenses
            .iter()
            .filter(|expense| {
                expense.created_at.year() == year && expense.created_at.month() == month
            })
            .map(|expense| expense.total_amount)
            .sum()
    }

    /// Record totals grouped by category, seeded with every known category
    /// at zero. Records keeping a since-deleted category name still count
    /// under that name.
    pub fn totals_by_category(ledger: &Ledger) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = ledger
            .categories
            .names()
            .iter()
            .map(|name| (name.clone(), 0.0))
            .collect();
        for expense in &ledger.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.total_amount;
        }
        totals
    }

    /// A participant's share-by-share breakdown across the ledger.
    pub fn person_details(ledger: &Ledger, person: &str) -> Vec<PersonShareDetail> {
        ledger
            .expenses_for(person)
            .filter_map(|expense| {
                let share = expense.shares.get(person)?;
                Some(PersonShareDetail {
                    id: expense.id,
                    description: expense.description.clone(),
                    category: expense.category.clone(),
                    total_amount: expense.total_amount,
                    person_owes: share.amount,
                    settled: share.settled,
                    created_at: expense.created_at,
                    notes: expense.notes.clone(),
                })
            })
            .collect()
    }

    /// Total amount the person has fronted as payer.
    pub fn total_fronted(ledger: &Ledger, person: &str) -> f64 {
        ledger
            .expenses
            .iter()
            .filter(|expense| expense.paid_by == person)
            .map(|expense| expense.total_amount)
            .sum()
    }
}
