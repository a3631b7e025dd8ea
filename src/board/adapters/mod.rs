//! Adapters for the board module.
//!
//! - [`memory::InMemoryBoardRepository`]: process-memory board storage
//! - [`UuidIdGenerator`], [`SequentialIdGenerator`] and
//!   [`ConfiguredIdGenerator`]: [`IdGenerator`] implementations
//!
//! [`IdGenerator`]: crate::board::ports::IdGenerator

mod id_generator;
pub mod memory;

pub use id_generator::{ConfiguredIdGenerator, SequentialIdGenerator, UuidIdGenerator};
