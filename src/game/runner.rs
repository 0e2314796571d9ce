//! Turn loop: alternate two players until the piles are empty.

use log::info;

use super::player::Player;
use super::session::Game;
use super::side::Side;
use crate::core::{NimError, Result};

/// Play `game` to the end and return the winner.
///
/// Each turn asks the player for the side to move, applies the move, and
/// passes the turn. Errors are returned as soon as they occur and leave
/// `game` at the last legal position:
/// - `InvalidMove` if a player offers an illegal move,
/// - `NoMove` if a player offers nothing on a live position.
///
/// A game that is already over returns its winner without asking anyone.
pub fn play_out(
    game: &mut Game,
    human: &mut dyn Player,
    computer: &mut dyn Player,
) -> Result<Side> {
    while !game.is_over() {
        let side = game.to_move();
        let player: &mut dyn Player = match side {
            Side::Human => &mut *human,
            Side::Computer => &mut *computer,
        };

        let mv = player.choose_move(game.state()).ok_or(NimError::NoMove { side })?;
        game.play(mv)?;
    }

    let winner = game.terminal_winner();
    info!(
        "{} game over after {} plies: {} wins",
        game.state().ruleset,
        game.history().len(),
        winner
    );
    Ok(winner)
}
