//! Move sources for the match driver.
//!
//! A `Player` turns a game state into a move. The solver, a seeded random
//! mover and a fixed script are provided; a terminal front end implements the
//! trait (or passes a closure) to feed human input in.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState, Move};
use crate::solver::{Solver, SolverConfig};

/// Something that picks moves.
pub trait Player {
    /// Pick a move for the side to move in `state`.
    ///
    /// Returning `None` on a live position aborts the match with
    /// `NimError::NoMove`. Returned moves are validated by the game.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;
}

impl<F> Player for F
where
    F: FnMut(&GameState) -> Option<Move>,
{
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        self(state)
    }
}

/// Optimal play via the exhaustive solver.
///
/// The solver is built on first use and rebuilt only if a state with a
/// different ruleset shows up.
#[derive(Clone, Debug, Default)]
pub struct SolverPlayer {
    config: SolverConfig,
    solver: Option<Solver>,
}

impl SolverPlayer {
    pub fn new(config: SolverConfig) -> Self {
        Self { config, solver: None }
    }

    /// The solver used for the last move, if any.
    #[must_use]
    pub fn solver(&self) -> Option<&Solver> {
        self.solver.as_ref()
    }
}

impl Player for SolverPlayer {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        if self.solver.as_ref().map(Solver::ruleset) != Some(state.ruleset) {
            self.solver = Some(Solver::new(state.ruleset, self.config.clone()));
        }
        self.solver.as_mut()?.best_move(state.position)
    }
}

/// Uniformly random legal moves from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.enumerate_moves();
        self.rng.choose(&moves).copied()
    }
}

/// Replays a fixed list of moves, then runs dry.
///
/// Stands in for an external human in tests and replays. Moves are handed
/// out unchecked, so an illegal entry surfaces as `InvalidMove` from the game.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(&mut self, _state: &GameState) -> Option<Move> {
        self.moves.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ruleset;
    use crate::solver::SearchMode;

    #[test]
    fn test_solver_player_picks_winning_move() {
        let mut player = SolverPlayer::default();
        let state = GameState::new(3, 1, Ruleset::Standard);
        assert_eq!(player.choose_move(&state), Some(Move::red(2)));
        assert_eq!(player.solver().map(Solver::ruleset), Some(Ruleset::Standard));
    }

    #[test]
    fn test_solver_player_follows_ruleset() {
        let config = SolverConfig::default().with_mode(SearchMode::Memoized);
        let mut player = SolverPlayer::new(config);

        player.choose_move(&GameState::new(2, 0, Ruleset::Standard));
        assert_eq!(player.solver().map(Solver::ruleset), Some(Ruleset::Standard));

        let mv = player.choose_move(&GameState::new(2, 0, Ruleset::Misere));
        assert_eq!(mv, Some(Move::red(1)));
        assert_eq!(player.solver().map(Solver::ruleset), Some(Ruleset::Misere));
    }

    #[test]
    fn test_solver_player_terminal() {
        let mut player = SolverPlayer::default();
        assert_eq!(player.choose_move(&GameState::new(0, 0, Ruleset::Standard)), None);
    }

    #[test]
    fn test_random_player_is_legal_and_seeded() {
        let state = GameState::new(4, 3, Ruleset::Standard);
        let mut a = RandomPlayer::new(9);
        let mut b = RandomPlayer::new(9);

        for _ in 0..20 {
            let mv = a.choose_move(&state).unwrap();
            assert!(state.apply(mv).is_ok());
            assert_eq!(Some(mv), b.choose_move(&state));
        }
    }

    #[test]
    fn test_random_player_terminal() {
        let mut player = RandomPlayer::new(1);
        assert_eq!(player.choose_move(&GameState::new(0, 0, Ruleset::Misere)), None);
    }

    #[test]
    fn test_scripted_player() {
        let state = GameState::new(5, 4, Ruleset::Standard);
        let mut player = ScriptedPlayer::new([Move::red(1), Move::blue(2)]);
        assert_eq!(player.remaining(), 2);
        assert_eq!(player.choose_move(&state), Some(Move::red(1)));
        assert_eq!(player.choose_move(&state), Some(Move::blue(2)));
        assert_eq!(player.choose_move(&state), None);
    }

    #[test]
    fn test_closure_player() {
        let mut always_one_blue = |_: &GameState| Some(Move::blue(1));
        let state = GameState::new(0, 2, Ruleset::Standard);
        assert_eq!(always_one_blue.choose_move(&state), Some(Move::blue(1)));
    }
}
