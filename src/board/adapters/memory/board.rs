//! In-memory board repository.

use std::fmt;

use mockable::{Clock, DefaultClock};
use tracing::{debug, info};

use crate::board::{
    adapters::UuidIdGenerator,
    domain::{Board, BoardId, Message, MessageId},
    ports::{BoardRepository, IdGenerator},
};

/// Board repository keeping every board in process memory.
///
/// Boards are stored in creation order and looked up by linear scan. The
/// repository performs no locking.
pub struct InMemoryBoardRepository<G, C>
where
    G: IdGenerator,
    C: Clock,
{
    boards: Vec<Board>,
    id_generator: G,
    clock: C,
}

impl InMemoryBoardRepository<UuidIdGenerator, DefaultClock> {
    /// Creates an empty repository generating UUID message identifiers and
    /// stamping times from the system clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(UuidIdGenerator, DefaultClock)
    }
}

impl<G, C> InMemoryBoardRepository<G, C>
where
    G: IdGenerator,
    C: Clock,
{
    /// Creates an empty repository.
    #[must_use]
    pub fn new(id_generator: G, clock: C) -> Self {
        info!("initialised in-memory board repository");
        Self {
            boards: Vec::new(),
            id_generator,
            clock,
        }
    }

    /// Returns the identifier generator.
    #[must_use]
    pub const fn id_generator(&self) -> &G {
        &self.id_generator
    }

    fn find_board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id() == id)
    }
}

impl<G, C> fmt::Debug for InMemoryBoardRepository<G, C>
where
    G: IdGenerator,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBoardRepository")
            .field("boards", &self.boards)
            .finish_non_exhaustive()
    }
}

impl<G, C> BoardRepository for InMemoryBoardRepository<G, C>
where
    G: IdGenerator,
    C: Clock,
{
    fn boards(&self) -> &[Board] {
        &self.boards
    }

    fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id() == id)
    }

    fn find_messages(&self, board_id: &BoardId) -> Option<&[Message]> {
        self.find_board(board_id).map(Board::messages)
    }

    fn find_message(&self, board_id: &BoardId, message_id: &MessageId) -> Option<&Message> {
        self.find_board(board_id)?.find_message(message_id)
    }

    fn create_board(&mut self, id: BoardId) -> Board {
        let board = Board::new(id, &self.clock);
        debug!(board_id = %board.id(), "created board");
        self.boards.push(board.clone());
        board
    }

    fn create_message(&mut self, board_id: &BoardId, text: String) -> Option<Message> {
        let Some(index) = self.boards.iter().position(|board| board.id() == board_id) else {
            debug!(%board_id, "cannot post message to missing board");
            return None;
        };
        let message = Message::new(self.id_generator.generate_id(), text, &self.clock);
        let board = self.boards.get_mut(index)?;
        board.push_message(message.clone());
        debug!(%board_id, message_id = %message.id(), "posted message");
        Some(message)
    }

    fn delete_message(&mut self, board_id: &BoardId, message_id: &MessageId) -> Option<Message> {
        let removed = self.find_board_mut(board_id)?.remove_message(message_id);
        if removed.is_some() {
            debug!(%board_id, %message_id, "deleted message");
        }
        removed
    }

    fn clear(&mut self) {
        debug!(boards = self.boards.len(), "clearing board repository");
        self.boards.clear();
    }
}
