//! Participant roster: the ledger owner plus the people expenses are split with.

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Owner display name used when the caller does not supply one.
pub const DEFAULT_OWNER: &str = "Me";

/// The closed set of people who can owe or be owed money.
///
/// Names are case-sensitive and unique across the owner and the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    owner: String,
    #[serde(default)]
    others: Vec<String>,
}

impl Roster {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            others: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn others(&self) -> &[String] {
        &self.others
    }

    /// All participant names, owner first, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.owner.as_str()).chain(self.others.iter().map(String::as_str))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.owner == name || self.others.iter().any(|other| other == name)
    }

    /// Total participant count including the owner.
    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Expenses may only be recorded once the owner has at least one
    /// counterpart to split with.
    pub fn is_ready(&self) -> bool {
        !self.others.is_empty()
    }

    pub fn add(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Participant name cannot be empty".into(),
            ));
        }
        if self.contains(trimmed) {
            return Err(LedgerError::DuplicatePerson(trimmed.to_string()));
        }
        self.others.push(trimmed.to_string());
        Ok(())
    }

    /// Removes a non-owner participant. The owner is permanent.
    pub fn remove(&mut self, name: &str) -> Result<(), LedgerError> {
        if name == self.owner {
            return Err(LedgerError::InvalidInput(
                "The ledger owner cannot be removed".into(),
            ));
        }
        let before = self.others.len();
        self.others.retain(|other| other != name);
        if self.others.len() == before {
            return Err(LedgerError::UnknownPerson(name.to_string()));
        }
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER)
    }
}
