//! In-memory adapter implementations.

mod board;

pub use board::InMemoryBoardRepository;
