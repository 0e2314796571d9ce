//! Error types for Red-Blue Nim.
//!
//! The pure core has exactly one failure: applying an illegal move. The other
//! variants belong to the parsing helpers and the match driver.

use thiserror::Error;

use super::pile::Pile;
use crate::game::Side;

/// Errors raised by the game core and the match driver.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum NimError {
    /// The move asks for zero marbles or more than the pile holds.
    #[error("invalid move: cannot remove {amount} from the {pile} pile holding {available}")]
    InvalidMove {
        pile: Pile,
        amount: u32,
        available: u32,
    },

    #[error("unknown pile '{0}' (expected 'red' or 'blue')")]
    UnknownPile(String),

    #[error("unknown ruleset '{0}' (expected 'standard' or 'misere')")]
    UnknownRuleset(String),

    /// A move was offered after both piles were emptied.
    #[error("game already over")]
    GameOver,

    /// A player had nothing to offer on a live position.
    #[error("{side} produced no move on a non-terminal position")]
    NoMove { side: Side },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = NimError::InvalidMove {
            pile: Pile::Red,
            amount: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid move: cannot remove 3 from the red pile holding 2"
        );
    }

    #[test]
    fn test_no_move_message() {
        let err = NimError::NoMove { side: Side::Computer };
        assert_eq!(
            err.to_string(),
            "computer produced no move on a non-terminal position"
        );
    }
}
