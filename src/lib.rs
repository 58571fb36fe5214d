#![doc(test(attr(deny(warnings))))]

//! Split Core offers the expense-splitting ledger, balance, and settlement
//! primitives that power higher level expense-sharing workflows and UIs.

pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod split;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
