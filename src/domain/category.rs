//! Category labels applied to expense records.

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Seed categories present in every new book. These cannot be removed.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Utilities",
    "Other",
];

/// Selection falls back here when the selected category is deleted.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Mutable set of category names plus the selection used for new entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBook {
    names: Vec<String>,
    selected: String,
}

impl CategoryBook {
    pub fn new() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
            selected: FALLBACK_CATEGORY.to_string(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    pub fn is_default(name: &str) -> bool {
        DEFAULT_CATEGORIES.contains(&name)
    }

    /// The category pre-selected for the next expense entry.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, name: &str) -> Result<(), LedgerError> {
        if !self.contains(name) {
            return Err(LedgerError::InvalidInput(format!(
                "Category `{}` does not exist",
                name
            )));
        }
        self.selected = name.to_string();
        Ok(())
    }

    /// Adds a custom category and selects it.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Category name cannot be empty".into(),
            ));
        }
        if self.contains(trimmed) {
            return Err(LedgerError::InvalidInput(format!(
                "Category `{}` already exists",
                trimmed
            )));
        }
        self.names.push(trimmed.to_string());
        self.selected = trimmed.to_string();
        Ok(())
    }

    /// Removes a custom category. Removing the selected one resets the
    /// selection to the fallback.
    pub fn remove(&mut self, name: &str) -> Result<(), LedgerError> {
        if Self::is_default(name) {
            return Err(LedgerError::InvalidInput(format!(
                "Default category `{}` cannot be removed",
                name
            )));
        }
        let before = self.names.len();
        self.names.retain(|known| known != name);
        if self.names.len() == before {
            return Err(LedgerError::InvalidInput(format!(
                "Category `{}` does not exist",
                name
            )));
        }
        if self.selected == name {
            self.selected = FALLBACK_CATEGORY.to_string();
        }
        Ok(())
    }
}

impl Default for CategoryBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_seeds_defaults_with_fallback_selected() {
        let book = CategoryBook::new();
        assert_eq!(book.names().len(), DEFAULT_CATEGORIES.len());
        assert_eq!(book.selected(), FALLBACK_CATEGORY);
    }

    #[test]
    fn add_trims_selects_and_rejects_duplicates() {
        let mut book = CategoryBook::new();
        book.add("  Rent ").unwrap();
        assert_eq!(book.selected(), "Rent");
        assert!(book.contains("Rent"));
        assert!(matches!(
            book.add("Rent"),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn defaults_cannot_be_removed() {
        let mut book = CategoryBook::new();
        assert!(matches!(
            book.remove("Food"),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn removing_selected_category_falls_back() {
        let mut book = CategoryBook::new();
        book.add("Rent").unwrap();
        assert_eq!(book.selected(), "Rent");
        book.remove("Rent").unwrap();
        assert_eq!(book.selected(), FALLBACK_CATEGORY);
    }
}
