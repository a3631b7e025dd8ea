//! Repository port for board and message storage.

use crate::board::domain::{Board, BoardId, Message, MessageId};

/// Board storage contract.
///
/// Absence is reported as `None`, never as an error. Operations are
/// synchronous and take `&mut self` for mutation; share a repository across
/// threads only behind an external lock.
pub trait BoardRepository {
    /// Returns every board in creation order.
    fn boards(&self) -> &[Board];

    /// Finds the first board created with the given identifier.
    ///
    /// Returns `None` when no such board exists.
    fn find_board(&self, id: &BoardId) -> Option<&Board>;

    /// Returns `true` when [`find_board`](Self::find_board) succeeds.
    fn has_board(&self, id: &BoardId) -> bool {
        self.find_board(id).is_some()
    }

    /// Returns the number of stored boards, duplicates included.
    fn board_count(&self) -> usize {
        self.boards().len()
    }

    /// Returns the messages of a board in posting order.
    ///
    /// An existing board without messages yields `Some(&[])`; a missing
    /// board yields `None`.
    fn find_messages(&self, board_id: &BoardId) -> Option<&[Message]>;

    /// Finds a message on a board.
    ///
    /// Returns `None` when either the board or the message is missing.
    fn find_message(&self, board_id: &BoardId, message_id: &MessageId) -> Option<&Message>;

    /// Appends a new empty board and returns a copy of it.
    ///
    /// Existing boards with the same identifier are not checked; callers
    /// enforce uniqueness.
    fn create_board(&mut self, id: BoardId) -> Board;

    /// Posts a message with zero votes and a freshly generated identifier.
    ///
    /// Returns `None`, leaving state untouched, when the board is missing.
    fn create_message(&mut self, board_id: &BoardId, text: String) -> Option<Message>;

    /// Removes the message with the given identifier from a board.
    ///
    /// Returns the removed message, or `None` when the board or the message
    /// is missing.
    fn delete_message(&mut self, board_id: &BoardId, message_id: &MessageId) -> Option<Message>;

    /// Discards every board and, with them, every message.
    fn clear(&mut self);
}
