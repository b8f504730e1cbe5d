//! Individual row parsing for timesheet data
//!
//! Converts one raw row into a typed `WorkItem` using the header map. A
//! row either yields a complete work item or fails as a unit; no partial
//! record is ever returned. Row independence (whether a failure stops the
//! parse) is the orchestrator's decision, not this module's.

use crate::app::adapters::id_gen::IdGenerator;
use crate::app::models::WorkItem;
use crate::constants::fields;
use crate::{Error, Result};

use super::dates::parse_date;
use super::header::HeaderMap;

/// Parse a single raw row into a work item
pub fn parse_work_item_row(
    row: &[String],
    header_map: &HeaderMap,
    line: u64,
    id_generator: &dyn IdGenerator,
) -> Result<WorkItem> {
    if row.iter().all(|field| field.trim().is_empty()) {
        return Err(Error::row_parsing(line, "", "", "empty row"));
    }

    let date_raw = required_field(row, header_map, fields::DATE, line)?;
    let hours_raw = required_field(row, header_map, fields::HOURS, line)?;
    let rate_raw = required_field(row, header_map, fields::RATE, line)?;
    let description = required_field(row, header_map, fields::DESCRIPTION, line)?;

    let date = parse_date(date_raw).map_err(|cause| {
        Error::row_parsing(
            line,
            fields::DATE,
            date_raw,
            format!("invalid date '{date_raw}': {cause}"),
        )
    })?;

    let hours = parse_decimal(hours_raw).map_err(|cause| {
        Error::row_parsing(
            line,
            fields::HOURS,
            hours_raw,
            format!("invalid hours '{hours_raw}': {cause}"),
        )
    })?;

    let rate = parse_decimal(rate_raw).map_err(|cause| {
        Error::row_parsing(
            line,
            fields::RATE,
            rate_raw,
            format!("invalid rate '{rate_raw}': {cause}"),
        )
    })?;

    Ok(WorkItem::new(
        id_generator.generate_id(),
        date,
        hours,
        rate,
        description.to_string(),
    ))
}

/// Resolve a canonical field from the row via the header map
fn required_field<'a>(
    row: &'a [String],
    header_map: &HeaderMap,
    field: &str,
    line: u64,
) -> Result<&'a str> {
    // HeaderMap construction guarantees all canonical keys are present
    let index = header_map
        .index_of(field)
        .ok_or_else(|| Error::missing_header_field(field))?;

    let value = row.get(index).ok_or_else(|| {
        Error::row_parsing(line, field, "", format!("field missing in row: {field}"))
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::row_parsing(
            line,
            field,
            "",
            format!("field is empty: {field}"),
        ));
    }

    Ok(trimmed)
}

/// Parse a decimal number, rejecting non-finite values
fn parse_decimal(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("not a decimal number ({e})"))?;
    if !value.is_finite() {
        return Err("not a finite number".to_string());
    }
    Ok(value)
}
