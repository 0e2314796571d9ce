//! Core game types: piles, moves, positions, rulesets, state, RNG, errors.
//!
//! Everything here is a pure value. Nothing in this module performs I/O or
//! holds state shared between calls.

pub mod error;
pub mod moves;
pub mod pile;
pub mod position;
pub mod rng;
pub mod ruleset;
pub mod state;
pub mod value;

pub use error::{NimError, Result};
pub use moves::{Move, MoveList};
pub use pile::Pile;
pub use position::Position;
pub use rng::GameRng;
pub use ruleset::Ruleset;
pub use state::GameState;
pub use value::{Score, LOSS, NEG_INFINITY, POS_INFINITY, WIN};
