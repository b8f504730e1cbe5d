//! Work-item identifier generation
//!
//! The parser does not mint identifiers itself; it calls an injected
//! generator once per successfully parsed row. Identifiers must be unique
//! within a parse session.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Collaborator supplying unique work-item identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier unique within the current parse session
    fn generate_id(&self) -> String;
}

/// Default generator backed by random UUIDs
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based generator, useful in tests and fixtures
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator producing `<prefix>-1`, `<prefix>-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("wi")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, next)
    }
}
