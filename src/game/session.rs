//! The live game: one `GameState`, the side to move and the ply history.

use log::trace;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::side::Side;
use crate::core::{GameState, Move, MoveList, NimError, Position, Result, WIN};

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Who moved.
    pub side: Side,

    /// The move.
    pub mv: Move,

    /// Piles before the move.
    pub before: Position,
}

/// A game in progress.
///
/// Owns the single mutable `GameState` of the match. Turn order strictly
/// alternates, one ply at a time.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    to_move: Side,
    history: Vec<Ply>,
}

impl Game {
    /// Start a game from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: config.initial_state(),
            to_move: config.first,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.state.position
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// Both piles are empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.state.enumerate_moves()
    }

    /// Apply `mv` for the side to move and pass the turn.
    ///
    /// An illegal move leaves the game untouched, so the caller can ask again.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if self.is_over() {
            return Err(NimError::GameOver);
        }

        let before = self.state.position;
        self.state.play(mv)?;
        trace!("{} plays {}: {} -> {}", self.to_move, mv, before, self.state.position);

        self.history.push(Ply {
            side: self.to_move,
            mv,
            before,
        });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Winner once the game is over, `None` while it continues.
    ///
    /// Standard: the side left to move on empty piles has lost.
    /// Misère: it has won.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.is_over().then(|| self.terminal_winner())
    }

    /// Winner as if the piles were empty now.
    pub(super) fn terminal_winner(&self) -> Side {
        if self.state.ruleset.terminal_value(true) == WIN {
            self.to_move
        } else {
            self.to_move.opponent()
        }
    }
}
