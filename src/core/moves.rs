//! Move representation: pile selector + amount.
//!
//! A move is a plain value. Whether it is legal depends on the position it is
//! applied to, so construction never fails; `Position::apply` does the check.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pile::Pile;

/// Remove `amount` marbles from `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The pile to take from.
    pub pile: Pile,

    /// Number of marbles to remove. Legal moves have `1 <= amount <= count(pile)`.
    pub amount: u32,
}

/// Move list returned by move generation.
///
/// SmallVec keeps the moves of a small position (up to 16) off the heap.
pub type MoveList = SmallVec<[Move; 16]>;

impl Move {
    #[must_use]
    pub const fn new(pile: Pile, amount: u32) -> Self {
        Self { pile, amount }
    }

    /// Take `amount` from the red pile.
    #[must_use]
    pub const fn red(amount: u32) -> Self {
        Self::new(Pile::Red, amount)
    }

    /// Take `amount` from the blue pile.
    #[must_use]
    pub const fn blue(amount: u32) -> Self {
        Self::new(Pile::Blue, amount)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.amount == 1 { "marble" } else { "marbles" };
        write!(f, "remove {} {} {}", self.amount, self.pile, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Move::red(2), Move::new(Pile::Red, 2));
        assert_eq!(Move::blue(1), Move { pile: Pile::Blue, amount: 1 });
        assert_ne!(Move::red(1), Move::blue(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::red(1).to_string(), "remove 1 red marble");
        assert_eq!(Move::blue(3).to_string(), "remove 3 blue marbles");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::blue(4);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"pile":"blue","amount":4}"#);
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
