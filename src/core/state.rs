//! Game state: a position plus the ruleset it is played under.
//!
//! ## GameState
//!
//! The outer game loop owns exactly one live `GameState` and advances it with
//! `play`. The solver only reads it: it copies the position out and derives
//! child positions locally.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::moves::{Move, MoveList};
use super::position::Position;
use super::ruleset::Ruleset;

/// One concrete game: current piles and the fixed ruleset.
///
/// Pile counts are taken as given; rejecting bad starting input is the
/// caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Current pile counts.
    pub position: Position,

    /// Payoff rule, constant for the whole game.
    pub ruleset: Ruleset,
}

impl GameState {
    /// Create a new game state.
    #[must_use]
    pub const fn new(red: u32, blue: u32, ruleset: Ruleset) -> Self {
        Self {
            position: Position::new(red, blue),
            ruleset,
        }
    }

    /// Legal moves in search order.
    #[must_use]
    pub fn enumerate_moves(&self) -> MoveList {
        self.position.enumerate_moves()
    }

    /// Both piles are empty.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.position.is_terminal()
    }

    /// The state after `mv`, leaving `self` untouched.
    pub fn apply(&self, mv: Move) -> Result<GameState> {
        Ok(Self {
            position: self.position.apply(mv)?,
            ruleset: self.ruleset,
        })
    }

    /// Advance the live state in place.
    ///
    /// On error the state is unchanged, so the caller can re-prompt.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        self.position = self.position.apply(mv)?;
        Ok(())
    }
}
