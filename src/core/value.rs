//! Game-theoretic values.
//!
//! Nim has no draws, so every solved position is worth exactly `WIN` or
//! `LOSS` to the maximizing side. The infinities only ever appear as the
//! initial search window and as the starting `max_eval`/`min_eval` of a node.

/// Signed value of a position, seen from the maximizing side.
pub type Score = i32;

/// The maximizing side wins with best play.
pub const WIN: Score = 1;

/// The maximizing side loses with best play.
pub const LOSS: Score = -1;

/// Lower end of the initial alpha-beta window.
pub const NEG_INFINITY: Score = i32::MIN;

/// Upper end of the initial alpha-beta window.
pub const POS_INFINITY: Score = i32::MAX;
