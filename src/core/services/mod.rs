pub mod category_service;
pub mod expense_service;
pub mod participant_service;
pub mod settlement_service;
pub mod summary_service;

pub use category_service::CategoryService;
pub use expense_service::ExpenseService;
pub use participant_service::ParticipantService;
pub use settlement_service::SettlementService;
pub use summary_service::{PersonShareDetail, SummaryService};

use crate::errors::{LedgerError, SplitError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("{0}")]
    Invalid(String),
}
