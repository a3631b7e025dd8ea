//! Given steps for board message BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use noticeboard::board::domain::BoardId;
use rstest_bdd_macros::given;

#[given(r#"an empty board "{board_id}""#)]
fn empty_board(world: &mut BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    world
        .service
        .create_board(BoardId::new(board_id))
        .wrap_err("create board for scenario")?;
    Ok(())
}

#[given(r#"board "{board_id}" holds the message "{text}""#)]
fn board_holds_message(
    world: &mut BoardWorld,
    board_id: String,
    text: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .post_message(&BoardId::new(board_id), text)
        .wrap_err("seed message for scenario")?;
    Ok(())
}
