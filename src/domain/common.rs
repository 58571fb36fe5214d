use uuid::Uuid;

/// Absolute tolerance for all monetary equality comparisons, in currency
/// units. Share sums re-derived from divided totals are not guaranteed to
/// re-sum exactly, so equality is never tested bit-for-bit.
pub const EPSILON: f64 = 0.01;

/// Compares two monetary amounts under the fixed tolerance.
pub fn amounts_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
