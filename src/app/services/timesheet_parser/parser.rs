//! Parse orchestration for timesheet input
//!
//! Drives the end-to-end pipeline: read all rows, resolve the format and
//! header, parse and validate each data row, and aggregate successes and
//! failures into a `ParseResult`. A linear state machine with no retries:
//! structural failures (empty input, undetectable format, missing header
//! field) abort before any row is processed; per-row failures are
//! recoverable under `continue_on_error`.

use std::io::Read;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app::adapters::id_gen::{IdGenerator, UuidIdGenerator};
use crate::app::services::validation::ValidationEngine;
use crate::config::ParseOptions;
use crate::constants::is_supported_format;
use crate::{Error, Result};

use super::format::{self, FormatInfo};
use super::header::HeaderMap;
use super::result::{ParseError, ParseResult};
use super::row_parser::parse_work_item_row;

/// Timesheet parser with injected ID generation and validation
///
/// A single parse call is synchronous and never split across threads;
/// batch import across files may run independent parser instances in
/// parallel. The validator's rule list is not safe for mutation while a
/// parse is in progress.
pub struct TimesheetParser {
    id_generator: Arc<dyn IdGenerator>,
    validator: ValidationEngine,
}

impl Default for TimesheetParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimesheetParser {
    /// Create a parser with UUID identifiers and the standard rule set
    pub fn new() -> Self {
        Self {
            id_generator: Arc::new(UuidIdGenerator),
            validator: ValidationEngine::new(),
        }
    }

    /// Replace the ID generator collaborator
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Replace the validation engine
    pub fn with_validator(mut self, validator: ValidationEngine) -> Self {
        self.validator = validator;
        self
    }

    /// Mutable access to the validation engine for runtime rule changes
    pub fn validator_mut(&mut self) -> &mut ValidationEngine {
        &mut self.validator
    }

    /// The validation engine this parser applies
    pub fn validator(&self) -> &ValidationEngine {
        &self.validator
    }

    /// Parse timesheet input into validated work items
    ///
    /// With `continue_on_error` unset, the first failing row aborts the
    /// whole parse and no partial result is returned; callers relying on
    /// partial results must opt in via the option.
    pub fn parse_timesheet<R: Read>(
        &self,
        reader: R,
        options: &ParseOptions,
        cancel: &CancellationToken,
    ) -> Result<ParseResult> {
        check_cancelled(cancel)?;

        let content = read_content(reader)?;
        if content.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let format = match options.format {
            Some(name) => FormatInfo::for_name(name),
            None => format::detect_format(&content)?,
        };
        info!(format = %format.name, "parsing timesheet input");
        if let Some(hint) = &options.date_format {
            debug!(hint, "date format hint noted (advisory only)");
        }

        let rows = read_rows(&content, &format)?;
        let Some((_, header_fields)) = rows.first() else {
            return Err(Error::EmptyInput);
        };

        let header_map = HeaderMap::build(header_fields)?;
        debug!(columns = header_map.len(), "header resolved");
        check_cancelled(cancel)?;

        let mut work_items = Vec::new();
        let mut errors: Vec<ParseError> = Vec::new();
        let mut total_rows = 0;
        let mut skipped_rows = 0;

        for (line, fields) in &rows[1..] {
            check_cancelled(cancel)?;

            if options.skip_empty_rows && fields.iter().all(|f| f.trim().is_empty()) {
                skipped_rows += 1;
                debug!(line, "skipped empty row");
                continue;
            }
            total_rows += 1;

            let outcome = self
                .validator
                .validate_row(fields, *line, cancel)
                .and_then(|_| {
                    parse_work_item_row(fields, &header_map, *line, &*self.id_generator)
                })
                .and_then(|item| {
                    self.validator.validate_item(&item, cancel)?;
                    Ok(item)
                });

            match outcome {
                Ok(item) => work_items.push(item),
                Err(error) if error.is_cancelled() => return Err(error),
                Err(error) => {
                    debug!(line, %error, "row failed");
                    errors.push(ParseError::from_error(&error, *line, fields));
                    if !options.continue_on_error {
                        return Err(fatal_row_error(error, *line));
                    }
                }
            }
        }

        let success_rows = work_items.len();
        let error_rows = errors.len();
        info!(
            total_rows,
            success_rows, error_rows, skipped_rows, "parse complete"
        );

        Ok(ParseResult {
            work_items,
            total_rows,
            success_rows,
            error_rows,
            skipped_rows,
            errors,
            header_map,
            format,
        })
    }

    /// Detect the structural shape of timesheet input
    pub fn detect_format<R: Read>(reader: R) -> Result<FormatInfo> {
        let content = read_content(reader)?;
        format::detect_format(&content)
    }

    /// Detect the format and check membership in the supported set
    pub fn validate_format<R: Read>(reader: R) -> Result<FormatInfo> {
        let info = Self::detect_format(reader)?;
        if !is_supported_format(info.name.as_str()) {
            return Err(Error::unsupported_format(info.name.as_str()));
        }
        Ok(info)
    }
}

/// Name the offending line in a fatal per-row failure
///
/// Row parsing errors already carry their line; validation failures get it
/// attached here so fail-fast callers see where the parse stopped.
fn fatal_row_error(error: Error, line: u64) -> Error {
    match error {
        Error::Validation { rule, message } => Error::Validation {
            rule,
            message: format!("line {line}: {message}"),
        },
        other => other,
    }
}

/// Surface cancellation as the distinct sentinel error
fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        Err(Error::Cancelled)
    } else {
        Ok(())
    }
}

/// Buffer the whole input, decoding invalid UTF-8 lossily rather than failing
fn read_content<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io("failed to read timesheet input", e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read all rows with their 1-based source line numbers
///
/// The CSV reader runs in flexible mode so ragged rows reach the row-format
/// validation rule instead of failing the whole parse.
fn read_rows(content: &str, format: &FormatInfo) -> Result<Vec<(u64, Vec<String>)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter as u8)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    let mut fallback_line = 0u64;
    for record in csv_reader.records() {
        fallback_line += 1;
        let record = record.map_err(|e| Error::csv("failed to read row", e))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line)
            .max(1);
        rows.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(rows)
}
