//! Caller-facing service translating repository absence into typed errors.

use crate::board::{
    domain::{Board, BoardId, Message, MessageId},
    ports::BoardRepository,
};
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBoardError {
    /// No board exists with the identifier.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The board exists but holds no message with the identifier.
    #[error("message {message_id} not found on board {board_id}")]
    MessageNotFound {
        /// Board that was searched.
        board_id: BoardId,
        /// Message that was requested.
        message_id: MessageId,
    },

    /// A board with the identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),
}

/// Result type for message board service operations.
pub type MessageBoardResult<T> = Result<T, MessageBoardError>;

/// Message board orchestration service.
///
/// Owns its repository and enforces board identifier uniqueness, which the
/// repository leaves to callers.
#[derive(Debug)]
pub struct MessageBoardService<R>
where
    R: BoardRepository,
{
    repository: R,
}

impl<R> MessageBoardService<R>
where
    R: BoardRepository,
{
    /// Creates a service over the given repository.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates a new board.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::DuplicateBoard`] when a board with the
    /// identifier already exists.
    pub fn create_board(&mut self, id: BoardId) -> MessageBoardResult<Board> {
        if self.repository.has_board(&id) {
            debug!(board_id = %id, "rejected duplicate board");
            return Err(MessageBoardError::DuplicateBoard(id));
        }
        Ok(self.repository.create_board(id))
    }

    /// Returns the board with the identifier, creating it first if needed.
    pub fn open_board(&mut self, id: BoardId) -> Board {
        if let Some(board) = self.repository.find_board(&id) {
            return board.clone();
        }
        self.repository.create_board(id)
    }

    /// Retrieves a board.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::BoardNotFound`] when the board is missing.
    pub fn board(&self, id: &BoardId) -> MessageBoardResult<&Board> {
        self.repository
            .find_board(id)
            .ok_or_else(|| board_not_found(id))
    }

    /// Retrieves the messages of a board in posting order.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::BoardNotFound`] when the board is missing.
    pub fn messages(&self, board_id: &BoardId) -> MessageBoardResult<&[Message]> {
        self.repository
            .find_messages(board_id)
            .ok_or_else(|| board_not_found(board_id))
    }

    /// Retrieves a single message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::BoardNotFound`] when the board is missing
    /// or [`MessageBoardError::MessageNotFound`] when the message is.
    pub fn message(
        &self,
        board_id: &BoardId,
        message_id: &MessageId,
    ) -> MessageBoardResult<&Message> {
        self.repository
            .find_message(board_id, message_id)
            .ok_or_else(|| self.missing_message(board_id, message_id))
    }

    /// Posts a message to a board.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::BoardNotFound`] when the board is missing.
    pub fn post_message(
        &mut self,
        board_id: &BoardId,
        text: impl Into<String>,
    ) -> MessageBoardResult<Message> {
        self.repository
            .create_message(board_id, text.into())
            .ok_or_else(|| board_not_found(board_id))
    }

    /// Deletes a message from a board and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::BoardNotFound`] when the board is missing
    /// or [`MessageBoardError::MessageNotFound`] when the message is.
    pub fn delete_message(
        &mut self,
        board_id: &BoardId,
        message_id: &MessageId,
    ) -> MessageBoardResult<Message> {
        self.repository
            .delete_message(board_id, message_id)
            .ok_or_else(|| self.missing_message(board_id, message_id))
    }

    /// Discards every board.
    pub fn reset(&mut self) {
        self.repository.clear();
    }

    fn missing_message(&self, board_id: &BoardId, message_id: &MessageId) -> MessageBoardError {
        if !self.repository.has_board(board_id) {
            return board_not_found(board_id);
        }
        debug!(%board_id, %message_id, "message lookup missed");
        MessageBoardError::MessageNotFound {
            board_id: board_id.clone(),
            message_id: message_id.clone(),
        }
    }
}

fn board_not_found(id: &BoardId) -> MessageBoardError {
    debug!(board_id = %id, "board lookup missed");
    MessageBoardError::BoardNotFound(id.clone())
}
