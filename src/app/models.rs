//! Data models for timesheet processing
//!
//! This module contains the core work-item record produced by the parser
//! and the currency rounding helper shared by parsing and validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single validated unit of billable work
///
/// Instances are created per successfully parsed row and either handed to
/// the caller or discarded when the row becomes a parse error instead.
/// Nothing mutates a work item after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier, supplied by the injected ID generator
    pub id: String,

    /// Calendar date the work was performed
    pub date: NaiveDate,

    /// Hours worked, in decimal hours
    pub hours: f64,

    /// Hourly billing rate
    pub rate: f64,

    /// Human-readable description of the work
    pub description: String,

    /// Line total, always `round2(hours * rate)`
    pub total: f64,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Create a new work item, computing the rounded line total
    pub fn new(
        id: String,
        date: NaiveDate,
        hours: f64,
        rate: f64,
        description: String,
    ) -> Self {
        let total = round_currency(hours * rate);
        Self {
            id,
            date,
            hours,
            rate,
            description,
            total,
            created_at: Utc::now(),
        }
    }
}

/// Round a monetary amount to two decimal places (cents)
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
