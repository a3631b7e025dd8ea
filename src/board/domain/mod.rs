//! Domain model for message boards.
//!
//! Boards and messages are plain values; timestamps come from an injected
//! [`mockable::Clock`] and message identifiers from an
//! [`IdGenerator`](crate::board::ports::IdGenerator), so nothing here touches
//! infrastructure.

mod board;
mod ids;
mod message;

pub use board::{Board, PersistedBoardData};
pub use ids::{BoardId, MessageId};
pub use message::{Message, PersistedMessageData};
