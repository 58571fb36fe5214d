//! Plain data types shared by the ledger, calculator, and services.

pub mod category;
pub mod common;
pub mod expense;
pub mod participant;

pub use category::{CategoryBook, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use common::{amounts_match, Displayable, Identifiable, EPSILON};
pub use expense::{Expense, ExpenseDraft, Share, ShareMap, SplitKind, SplitPolicy};
pub use participant::Roster;
