//! Ordered rule registry and validation entry points
//!
//! Rules are data: a name plus optional item-level and row-level
//! callbacks. They are applied in registration order and short-circuit on
//! the first failure, which is wrapped with the failing rule's name. Rules
//! can be added or removed by name at runtime; the list is not safe for
//! concurrent mutation while validation is in progress.

use tokio_util::sync::CancellationToken;

use crate::app::models::WorkItem;
use crate::{Error, Result};

use super::batch::check_batch;
use super::rules::standard_rules;

/// Outcome of a single rule callback; failures carry the message only,
/// the engine supplies the rule name
pub type RuleOutcome = std::result::Result<(), String>;

type ItemCheck = Box<dyn Fn(&WorkItem) -> RuleOutcome + Send + Sync>;
type RowCheck = Box<dyn Fn(&[String], u64) -> RuleOutcome + Send + Sync>;

/// A named, composable validation unit
pub struct ValidationRule {
    name: String,
    item_check: Option<ItemCheck>,
    row_check: Option<RowCheck>,
}

impl ValidationRule {
    /// Create a rule with no callbacks attached yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_check: None,
            row_check: None,
        }
    }

    /// Attach an item-level callback
    pub fn with_item_check(
        mut self,
        check: impl Fn(&WorkItem) -> RuleOutcome + Send + Sync + 'static,
    ) -> Self {
        self.item_check = Some(Box::new(check));
        self
    }

    /// Attach a row-level callback
    pub fn with_row_check(
        mut self,
        check: impl Fn(&[String], u64) -> RuleOutcome + Send + Sync + 'static,
    ) -> Self {
        self.row_check = Some(Box::new(check));
        self
    }

    /// The rule's registered name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("item_check", &self.item_check.is_some())
            .field("row_check", &self.row_check.is_some())
            .finish()
    }
}

/// Registry of validation rules applied in insertion order
#[derive(Debug)]
pub struct ValidationEngine {
    rules: Vec<ValidationRule>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine loaded with the standard rule set
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the ordered list
    pub fn add_rule(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// Remove all rules with the given name; returns whether any was removed
    pub fn remove_rule(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.name != name);
        self.rules.len() != before
    }

    /// Names of the registered rules, in application order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Validate a single work item against all item-level rules
    pub fn validate_item(&self, item: &WorkItem, cancel: &CancellationToken) -> Result<()> {
        check_cancelled(cancel)?;
        for rule in &self.rules {
            if let Some(check) = &rule.item_check {
                check(item).map_err(|message| Error::validation(&rule.name, message))?;
            }
        }
        Ok(())
    }

    /// Validate a raw row against all row-level rules
    pub fn validate_row(
        &self,
        fields: &[String],
        line: u64,
        cancel: &CancellationToken,
    ) -> Result<()> {
        check_cancelled(cancel)?;
        for rule in &self.rules {
            if let Some(check) = &rule.row_check {
                check(fields, line).map_err(|message| Error::validation(&rule.name, message))?;
            }
        }
        Ok(())
    }

    /// Validate every item in a batch, then the batch-level constraints
    pub fn validate_batch(
        &self,
        items: &[WorkItem],
        cancel: &CancellationToken,
    ) -> Result<()> {
        check_cancelled(cancel)?;
        for item in items {
            check_cancelled(cancel)?;
            self.validate_item(item, cancel)?;
        }
        check_batch(items).map_err(|message| Error::validation("batch", message))
    }
}

fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        Err(Error::Cancelled)
    } else {
        Ok(())
    }
}
