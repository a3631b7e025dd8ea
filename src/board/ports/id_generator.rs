//! Identifier generation capability for new messages.

use crate::board::domain::MessageId;

/// Source of fresh, unique message identifiers.
///
/// Repositories trust the returned value as-is: they neither inspect its
/// format nor check it for collisions.
pub trait IdGenerator {
    /// Produces a new identifier.
    fn generate_id(&self) -> MessageId;
}
