use split_core::domain::expense::{ExpenseDraft, SplitPolicy};
use split_core::core::services::ExpenseService;
use split_core::ledger::Ledger;

/// Builds a ledger with three participants and a couple of recorded expenses,
/// the shape most suites start from.
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new("Flat share", "Me");
    ledger.add_participant("Alice").unwrap();
    ledger.add_participant("Bob").unwrap();

    ExpenseService::add(
        &mut ledger,
        ExpenseDraft {
            description: "Groceries".into(),
            total_amount: 60.0,
            category: Some("Food".into()),
            paid_by: None,
            notes: None,
            split_with: vec!["Alice".into(), "Bob".into()],
            policy: SplitPolicy::Equal,
        },
    )
    .unwrap();
    ExpenseService::add(
        &mut ledger,
        ExpenseDraft {
            description: "Taxi".into(),
            total_amount: 20.0,
            category: Some("Transport".into()),
            paid_by: Some("Alice".into()),
            notes: Some("airport run".into()),
            split_with: vec!["Me".into(), "Bob".into()],
            policy: SplitPolicy::Equal,
        },
    )
    .unwrap();
    ledger
}
