//! Transposition table for the memoized search.
//!
//! Keys are `(position, maximizing)`; the ruleset is constant for a solver
//! and therefore not part of the key. Entries are exact results of the
//! unpruned recursion, never alpha-beta bounds.

use rustc_hash::FxHashMap;

use super::search::Evaluation;
use crate::core::Position;

/// Exact evaluations of already-solved nodes.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<(Position, bool), Evaluation>,
}

impl TranspositionTable {
    /// Create an empty table with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Look up a solved node.
    #[inline]
    #[must_use]
    pub fn get(&self, position: Position, maximizing: bool) -> Option<Evaluation> {
        self.entries.get(&(position, maximizing)).copied()
    }

    /// Record a solved node.
    #[inline]
    pub fn insert(&mut self, position: Position, maximizing: bool, eval: Evaluation) {
        self.entries.insert((position, maximizing), eval);
    }

    /// Number of solved nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, LOSS, WIN};

    #[test]
    fn test_insert_and_get() {
        let mut table = TranspositionTable::with_capacity(8);
        assert!(table.is_empty());

        let pos = Position::new(2, 1);
        let eval = Evaluation::new(WIN, Some(Move::red(1)));
        table.insert(pos, true, eval);

        assert_eq!(table.get(pos, true), Some(eval));
        assert_eq!(table.get(pos, false), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_side_is_part_of_key() {
        let mut table = TranspositionTable::default();
        let pos = Position::new(1, 1);
        table.insert(pos, true, Evaluation::new(LOSS, Some(Move::red(1))));
        table.insert(pos, false, Evaluation::new(WIN, Some(Move::red(1))));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(pos, true).map(|e| e.value), Some(LOSS));
        assert_eq!(table.get(pos, false).map(|e| e.value), Some(WIN));
    }

    #[test]
    fn test_clear() {
        let mut table = TranspositionTable::default();
        table.insert(Position::new(0, 0), true, Evaluation::terminal(LOSS));
        table.clear();
        assert!(table.is_empty());
    }
}
