//! Shared world state for board message BDD scenarios.

use mockable::DefaultClock;
use noticeboard::board::{
    adapters::{SequentialIdGenerator, memory::InMemoryBoardRepository},
    domain::Message,
    services::{MessageBoardResult, MessageBoardService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService =
    MessageBoardService<InMemoryBoardRepository<SequentialIdGenerator, DefaultClock>>;

/// Scenario world for board message behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub last_post_result: Option<MessageBoardResult<Message>>,
    pub last_delete_result: Option<MessageBoardResult<Message>>,
}

impl BoardWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: MessageBoardService::new(InMemoryBoardRepository::new(
                SequentialIdGenerator::new("msg-"),
                DefaultClock,
            )),
            last_post_result: None,
            last_delete_result: None,
        }
    }

    /// Returns the message from the last successful post.
    pub fn posted_message(&self) -> Result<&Message, eyre::Report> {
        self.last_post_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing post result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected post failure: {err}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
