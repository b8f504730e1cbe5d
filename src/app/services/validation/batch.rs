//! Batch-level validation checks
//!
//! Applied once per batch of work items, not per item. The zero-hours-sum
//! check can only fire for an empty batch given the per-item hours rule,
//! so it functions as an empty-batch guard.

use std::collections::HashSet;
use tracing::warn;

use crate::app::models::WorkItem;
use crate::constants::limits;

use super::engine::RuleOutcome;

/// Run all batch-level constraints in order
pub fn check_batch(items: &[WorkItem]) -> RuleOutcome {
    check_date_span(items)?;
    check_distinct_rates(items);
    check_hours_sum(items)
}

/// The batch's dates must span at most a year
pub fn check_date_span(items: &[WorkItem]) -> RuleOutcome {
    let Some(earliest) = items.iter().map(|item| item.date).min() else {
        return Ok(());
    };
    let latest = items.iter().map(|item| item.date).max().unwrap_or(earliest);

    let span_days = (latest - earliest).num_days();
    if span_days > limits::MAX_BATCH_SPAN_DAYS {
        return Err(format!(
            "batch spans {span_days} days ({earliest} to {latest}), maximum is {}",
            limits::MAX_BATCH_SPAN_DAYS
        ));
    }
    Ok(())
}

/// Many distinct rates in one batch is suspicious but not fatal
pub fn check_distinct_rates(items: &[WorkItem]) {
    let distinct: HashSet<u64> = items.iter().map(|item| item.rate.to_bits()).collect();
    if distinct.len() > limits::MAX_DISTINCT_RATES {
        warn!(
            distinct_rates = distinct.len(),
            "batch mixes an unusual number of billing rates"
        );
    }
}

/// A batch whose hours sum to exactly zero has nothing to invoice
pub fn check_hours_sum(items: &[WorkItem]) -> RuleOutcome {
    let total_hours: f64 = items.iter().map(|item| item.hours).sum();
    if total_hours == 0.0 {
        return Err("batch hours sum to zero; nothing to invoice".to_string());
    }
    Ok(())
}
