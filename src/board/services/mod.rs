//! Application services for message boards.

mod message_board;

pub use message_board::{MessageBoardError, MessageBoardResult, MessageBoardService};
