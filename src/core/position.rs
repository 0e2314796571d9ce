//! Pile counts at one point of a game or search.
//!
//! A `Position` is a small `Copy` value. Search frames take it by value and
//! derive children with `apply`, so no frame ever observes another's state.
//! Unsigned counts keep both piles non-negative by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{NimError, Result};
use super::moves::{Move, MoveList};
use super::pile::Pile;

/// Remaining marbles in the red and blue piles.
///
/// The ruleset is deliberately not part of the position: equality and
/// hashing only look at the two counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub red: u32,
    pub blue: u32,
}

impl Position {
    #[must_use]
    pub const fn new(red: u32, blue: u32) -> Self {
        Self { red, blue }
    }

    /// Marbles left in `pile`.
    #[must_use]
    pub const fn count(&self, pile: Pile) -> u32 {
        match pile {
            Pile::Red => self.red,
            Pile::Blue => self.blue,
        }
    }

    /// Marbles left in both piles. Bounds the remaining search depth.
    ///
    /// Widened so that two full `u32` piles cannot overflow.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.red as u64 + self.blue as u64
    }

    /// Both piles are empty. This is the only stopping state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.red == 0 && self.blue == 0
    }

    /// Every legal move, in search order.
    ///
    /// `(Red, 1..=red)` followed by `(Blue, 1..=blue)`, ascending within each
    /// pile. The solver's tie-break depends on this order. Empty iff the
    /// position is terminal.
    ///
    /// ```
    /// use red_blue_nim::core::{Move, Position};
    ///
    /// let moves = Position::new(2, 1).enumerate_moves();
    /// assert_eq!(moves.as_slice(), &[Move::red(1), Move::red(2), Move::blue(1)]);
    /// ```
    #[must_use]
    pub fn enumerate_moves(&self) -> MoveList {
        let capacity = usize::try_from(self.total()).unwrap_or(usize::MAX);
        let mut moves = MoveList::with_capacity(capacity);
        for pile in Pile::ALL {
            moves.extend((1..=self.count(pile)).map(|amount| Move::new(pile, amount)));
        }
        moves
    }

    /// Every legal move paired with the position it leads to, in search order.
    ///
    /// Moves come from `enumerate_moves`, so the subtraction cannot underflow
    /// and no validation is repeated.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Position)> + '_ {
        self.enumerate_moves().into_iter().map(move |mv| {
            let mut next = *self;
            match mv.pile {
                Pile::Red => next.red -= mv.amount,
                Pile::Blue => next.blue -= mv.amount,
            }
            (mv, next)
        })
    }

    /// Check `mv` against this position without applying it.
    pub fn validate(&self, mv: Move) -> Result<()> {
        let available = self.count(mv.pile);
        if mv.amount == 0 || mv.amount > available {
            return Err(NimError::InvalidMove {
                pile: mv.pile,
                amount: mv.amount,
                available,
            });
        }
        Ok(())
    }

    /// The position after `mv`. `self` is left untouched.
    ///
    /// Fails with `InvalidMove` if the amount is zero, exceeds the pile, or
    /// the pile is already empty.
    pub fn apply(&self, mv: Move) -> Result<Position> {
        self.validate(mv)?;
        let mut next = *self;
        match mv.pile {
            Pile::Red => next.red -= mv.amount,
            Pile::Blue => next.blue -= mv.amount,
        }
        Ok(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "red: {}, blue: {}", self.red, self.blue)
    }
}
