//! When steps for board message BDD scenarios.

use super::world::BoardWorld;
use noticeboard::board::domain::BoardId;
use rstest_bdd_macros::when;

#[when(r#"the message "{text}" is posted to board "{board_id}""#)]
fn post_message(world: &mut BoardWorld, text: String, board_id: String) {
    let result = world.service.post_message(&BoardId::new(board_id), text);
    world.last_post_result = Some(result);
}

#[when(r#"the posted message is deleted from board "{board_id}""#)]
fn delete_posted_message(world: &mut BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    let message_id = world.posted_message()?.id().clone();
    let result = world
        .service
        .delete_message(&BoardId::new(board_id), &message_id);
    world.last_delete_result = Some(result);
    Ok(())
}

#[when("the repository is cleared")]
fn clear_repository(world: &mut BoardWorld) {
    world.service.reset();
}
