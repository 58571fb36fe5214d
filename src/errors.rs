use thiserror::Error;
use uuid::Uuid;

/// Failures produced by the split calculator.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Assigned amounts sum to {assigned:.2} but the total is {total:.2}")]
    AmountMismatch { assigned: f64, total: f64 },
    #[error("Fixed amounts ({fixed:.2}) meet or exceed the total ({total:.2})")]
    FixedExceedsTotal { fixed: f64, total: f64 },
    #[error("At least one fixed amount is required")]
    NoFixedPayers,
    #[error("No participants left to split the remainder")]
    NoRemainingPayers,
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Participant `{0}` already exists")]
    DuplicatePerson(String),
    #[error("Unknown participant `{0}`")]
    UnknownPerson(String),
    #[error("Expense {0} not found")]
    RecordNotFound(Uuid),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
