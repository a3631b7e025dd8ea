//! Message entity posted to a board.

use super::MessageId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A timestamped text entry with a vote counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    created_at: DateTime<Utc>,
    votes: i64,
}

/// Parameter object for reconstructing a stored message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Stored message identifier.
    pub id: MessageId,
    /// Stored message text.
    pub text: String,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored vote count.
    pub votes: i64,
}

impl Message {
    /// Creates a message with zero votes, stamped with the clock's current
    /// UTC time.
    #[must_use]
    pub fn new(id: MessageId, text: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: clock.utc(),
            votes: 0,
        }
    }

    /// Reconstructs a message from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            created_at: data.created_at,
            votes: data.votes,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current vote count.
    #[must_use]
    pub const fn votes(&self) -> i64 {
        self.votes
    }
}
