//! Then steps for board message BDD scenarios.

use super::world::BoardWorld;
use noticeboard::board::{domain::BoardId, services::MessageBoardError};
use rstest_bdd_macros::then;

#[then(r#"the posted message has zero votes and the text "{text}""#)]
fn posted_message_is_fresh(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let message = world.posted_message()?;
    if message.votes() != 0 {
        return Err(eyre::eyre!("expected zero votes, found {}", message.votes()));
    }
    if message.text() != text {
        return Err(eyre::eyre!(
            "expected text {text:?}, found {:?}",
            message.text()
        ));
    }
    if message.id().is_empty() {
        return Err(eyre::eyre!("expected a generated message identifier"));
    }
    Ok(())
}

#[then(r#"board "{board_id}" lists only the posted message"#)]
fn board_lists_posted_message(world: &BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    let posted = world.posted_message()?;
    let messages = world
        .service
        .messages(&BoardId::new(board_id))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if messages != std::slice::from_ref(posted) {
        return Err(eyre::eyre!("expected only the posted message, found {messages:?}"));
    }
    Ok(())
}

#[then("the deleted message matches the posted message")]
fn deleted_matches_posted(world: &BoardWorld) -> Result<(), eyre::Report> {
    let posted = world.posted_message()?;
    let deleted = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected delete failure: {err}"))?;
    if deleted != posted {
        return Err(eyre::eyre!("deleted {deleted:?} but posted {posted:?}"));
    }
    Ok(())
}

#[then(r#"board "{board_id}" has no messages"#)]
fn board_has_no_messages(world: &BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    let messages = world
        .service
        .messages(&BoardId::new(board_id))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !messages.is_empty() {
        return Err(eyre::eyre!("expected no messages, found {messages:?}"));
    }
    Ok(())
}

#[then(r#"deleting the posted message from board "{board_id}" again finds nothing"#)]
fn second_delete_finds_nothing(
    world: &mut BoardWorld,
    board_id: String,
) -> Result<(), eyre::Report> {
    let message_id = world.posted_message()?.id().clone();
    let result = world
        .service
        .delete_message(&BoardId::new(board_id), &message_id);
    if !matches!(result, Err(MessageBoardError::MessageNotFound { .. })) {
        return Err(eyre::eyre!("expected message not found, got {result:?}"));
    }
    Ok(())
}

#[then(r#"posting fails because board "{board_id}" does not exist"#)]
fn posting_fails_for_missing_board(
    world: &BoardWorld,
    board_id: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_post_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing post result in scenario world"))?;
    let expected = MessageBoardError::BoardNotFound(BoardId::new(board_id));
    if result.as_ref().err() != Some(&expected) {
        return Err(eyre::eyre!("expected {expected}, got {result:?}"));
    }
    Ok(())
}

#[then(r#"board "{board_id}" is not found"#)]
fn board_is_not_found(world: &BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    let id = BoardId::new(board_id);
    if world.service.board(&id).is_ok() {
        return Err(eyre::eyre!("expected board {id} to be gone"));
    }
    if world.service.messages(&id).is_ok() {
        return Err(eyre::eyre!("expected no message list for board {id}"));
    }
    Ok(())
}
