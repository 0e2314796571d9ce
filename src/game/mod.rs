//! Match driver: the live game and the turn loop around the solver.
//!
//! ## Overview
//!
//! A `Game` owns the one mutable `GameState` of a match. `play_out`
//! alternates two `Player`s until both piles are empty and reports the
//! winner. Reading input and printing the board are left to the caller,
//! which plugs in through the `Player` trait.
//!
//! ## Usage
//!
//! ```rust
//! use red_blue_nim::core::{Move, Ruleset};
//! use red_blue_nim::game::{play_out, Game, GameConfig, ScriptedPlayer, Side, SolverPlayer};
//!
//! let config = GameConfig::new().with_piles(2, 2).with_ruleset(Ruleset::Standard);
//! let mut game = Game::new(&config);
//!
//! // The human opens on a lost position; the solver converts.
//! let mut human = ScriptedPlayer::new([Move::red(1), Move::blue(1)]);
//! let mut computer = SolverPlayer::default();
//!
//! let winner = play_out(&mut game, &mut human, &mut computer).unwrap();
//! assert_eq!(winner, Side::Computer);
//! ```

pub mod config;
pub mod player;
pub mod runner;
pub mod session;
pub mod side;

pub use config::GameConfig;
pub use player::{Player, RandomPlayer, ScriptedPlayer, SolverPlayer};
pub use runner::play_out;
pub use session::{Game, Ply};
pub use side::Side;
