//! Board aggregate holding an ordered sequence of messages.

use super::{BoardId, Message, MessageId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named container for messages, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    created_at: DateTime<Utc>,
    messages: Vec<Message>,
}

/// Parameter object for reconstructing a stored board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Stored board identifier.
    pub id: BoardId,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored messages in insertion order.
    pub messages: Vec<Message>,
}

impl Board {
    /// Creates an empty board stamped with the clock's current UTC time.
    #[must_use]
    pub fn new(id: BoardId, clock: &impl Clock) -> Self {
        Self {
            id,
            created_at: clock.utc(),
            messages: Vec::new(),
        }
    }

    /// Reconstructs a board from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            created_at: data.created_at,
            messages: data.messages,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Finds a message by identifier.
    ///
    /// When several messages share the identifier the one posted last is
    /// returned.
    #[must_use]
    pub fn find_message(&self, message_id: &MessageId) -> Option<&Message> {
        self.messages
            .iter()
            .rfind(|message| message.id() == message_id)
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Removes every message with the given identifier and returns the first
    /// one removed.
    pub(crate) fn remove_message(&mut self, message_id: &MessageId) -> Option<Message> {
        let position = self
            .messages
            .iter()
            .position(|message| message.id() == message_id)?;
        let removed = self.messages.remove(position);
        self.messages.retain(|message| message.id() != message_id);
        Some(removed)
    }
}
