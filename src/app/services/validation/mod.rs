//! Composable rule-based validation for work items
//!
//! A registry of named rules applied in insertion order at item, row, and
//! batch granularity, with runtime add/remove by name and cooperative
//! cancellation at every public entry point.
//!
//! - [`engine`] - Ordered rule registry and entry points
//! - [`rules`] - The standard rule set (date, hours, rate, description, total, row format)
//! - [`batch`] - Batch-level constraints (date span, rate spread, hours sum)

pub mod batch;
pub mod engine;
pub mod rules;

#[cfg(test)]
pub mod tests;

pub use engine::{RuleOutcome, ValidationEngine, ValidationRule};
pub use rules::standard_rules;
