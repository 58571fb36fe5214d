//! Expense records and the share bookkeeping attached to them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{amounts_match, Displayable, Identifiable};
use crate::errors::LedgerError;

/// Rule used to distribute an expense's total among participants.
///
/// Carries the caller-supplied parameters; the calculator consumes them and
/// the stored record keeps only the [`SplitKind`] tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SplitPolicy {
    /// Everyone selected pays the same raw quotient of the total.
    Equal,
    /// Caller dictates each participant's exact amount.
    ExactAmounts(BTreeMap<String, f64>),
    /// Some participants pay fixed amounts; the rest split the remainder evenly.
    FixedPlusEqual(BTreeMap<String, f64>),
    /// No split: the whole amount is the payer's own.
    Personal,
}

impl SplitPolicy {
    pub fn kind(&self) -> SplitKind {
        match self {
            SplitPolicy::Equal => SplitKind::Equal,
            SplitPolicy::ExactAmounts(_) => SplitKind::ExactAmounts,
            SplitPolicy::FixedPlusEqual(_) => SplitKind::FixedPlusEqual,
            SplitPolicy::Personal => SplitKind::Personal,
        }
    }
}

/// Policy tag retained on the stored record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SplitKind {
    Equal,
    ExactAmounts,
    FixedPlusEqual,
    Personal,
}

/// One participant's obligation within an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Share {
    pub amount: f64,
    #[serde(default)]
    pub settled: bool,
}

/// Mapping from participant name to owed share.
///
/// Keys iterate in name order, which keeps every downstream enumeration
/// (balances, settlement tie-breaks, serialized snapshots) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ShareMap {
    entries: BTreeMap<String, Share>,
}

impl ShareMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, person: impl Into<String>, amount: f64) {
        self.entries.insert(
            person.into(),
            Share {
                amount,
                settled: false,
            },
        );
    }

    pub fn get(&self, person: &str) -> Option<&Share> {
        self.entries.get(person)
    }

    pub fn contains(&self, person: &str) -> bool {
        self.entries.contains_key(person)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Share)> {
        self.entries.iter().map(|(name, share)| (name.as_str(), share))
    }

    /// Shares not yet settled.
    pub fn open(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .filter(|(_, share)| !share.settled)
            .map(|(name, share)| (name.as_str(), share.amount))
    }

    /// Sum over every share, settled or not. Creation-time invariant checks
    /// compare this against the record total.
    pub fn total(&self) -> f64 {
        self.entries.values().map(|share| share.amount).sum()
    }

    pub fn all_settled(&self) -> bool {
        self.entries.values().all(|share| share.settled)
    }

    /// Marks one participant's share settled.
    pub fn settle(&mut self, person: &str) -> Result<(), LedgerError> {
        let share = self
            .entries
            .get_mut(person)
            .ok_or_else(|| LedgerError::UnknownPerson(person.to_string()))?;
        if share.settled {
            return Err(LedgerError::InvalidInput(format!(
                "Share for `{}` is already settled",
                person
            )));
        }
        share.settled = true;
        Ok(())
    }
}

impl FromIterator<(String, f64)> for ShareMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut shares = ShareMap::new();
        for (person, amount) in iter {
            shares.insert(person, amount);
        }
        shares
    }
}

/// A recorded shared expense. Core fields are immutable once created; only
/// the settled flags inside `shares` change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub total_amount: f64,
    pub category: String,
    pub paid_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub split: SplitKind,
    pub shares: ShareMap,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        total_amount: f64,
        category: impl Into<String>,
        paid_by: impl Into<String>,
        split: SplitKind,
        shares: ShareMap,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            total_amount,
            category: category.into(),
            paid_by: paid_by.into(),
            notes: None,
            created_at: Utc::now(),
            split,
            shares,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_fully_settled(&self) -> bool {
        self.shares.all_settled()
    }

    /// Whether the share amounts re-sum to the record total. `Personal`
    /// records trivially hold the whole amount against the payer.
    pub fn shares_balance(&self) -> bool {
        self.split == SplitKind::Personal || amounts_match(self.shares.total(), self.total_amount)
    }

    pub fn involves(&self, person: &str) -> bool {
        self.paid_by == person || self.shares.contains(person)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.description, self.total_amount)
    }
}

/// Caller-supplied input for recording a new expense. The services layer
/// validates it, runs the split calculator, and commits the resulting record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub total_amount: f64,
    /// Known category name; falls back to the book's current selection when empty.
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to the ledger owner.
    #[serde(default)]
    pub paid_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Participants the expense is split with.
    pub split_with: Vec<String>,
    pub policy: SplitPolicy,
}
