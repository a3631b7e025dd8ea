//! Message identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::board::{domain::MessageId, ports::IdGenerator};

/// Generates random UUID v4 identifiers in hyphenated form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> MessageId {
        MessageId::new(Uuid::new_v4().to_string())
    }
}

/// Generates `"{prefix}{n}"` identifiers with `n` counting up from 1.
///
/// The counter is atomic, so the generator is `Sync` and may sit inside a
/// repository that callers guard with their own lock.
///
/// # Examples
///
/// ```
/// use noticeboard::board::{adapters::SequentialIdGenerator, ports::IdGenerator};
///
/// let generator = SequentialIdGenerator::new("msg-");
/// assert_eq!(generator.generate_id().as_str(), "msg-1");
/// assert_eq!(generator.generate_id().as_str(), "msg-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `"{prefix}1"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Returns the identifier prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> MessageId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        MessageId::new(format!("{}{value}", self.prefix))
    }
}

/// Identifier generator selected at runtime from configuration.
#[derive(Debug)]
pub enum ConfiguredIdGenerator {
    /// Random UUID identifiers.
    Uuid(UuidIdGenerator),
    /// Deterministic prefixed counters.
    Sequential(SequentialIdGenerator),
}

impl IdGenerator for ConfiguredIdGenerator {
    fn generate_id(&self) -> MessageId {
        match self {
            Self::Uuid(generator) => generator.generate_id(),
            Self::Sequential(generator) => generator.generate_id(),
        }
    }
}
