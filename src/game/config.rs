//! Match configuration.

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::core::{GameState, Ruleset};

/// Starting setup of one game.
///
/// Defaults to 5 red and 4 blue marbles, standard rules, human first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Marbles in the red pile at the start.
    pub red: u32,

    /// Marbles in the blue pile at the start.
    pub blue: u32,

    /// Payoff rule for the whole game.
    pub ruleset: Ruleset,

    /// Side making the first move.
    pub first: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            red: 5,
            blue: 4,
            ruleset: Ruleset::Standard,
            first: Side::Human,
        }
    }
}

impl GameConfig {
    /// Create a new game config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting pile counts.
    pub fn with_piles(mut self, red: u32, blue: u32) -> Self {
        self.red = red;
        self.blue = blue;
        self
    }

    /// Set the ruleset.
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Set who moves first.
    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    /// The initial game state described by this config.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.red, self.blue, self.ruleset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.red, config.blue), (5, 4));
        assert_eq!(config.ruleset, Ruleset::Standard);
        assert_eq!(config.first, Side::Human);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_piles(2, 7)
            .with_ruleset(Ruleset::Misere)
            .with_first(Side::Computer);

        assert_eq!(config.initial_state(), GameState::new(2, 7, Ruleset::Misere));
        assert_eq!(config.first, Side::Computer);
    }

    #[test]
    fn test_partial_deserialization() {
        let config: GameConfig = serde_json::from_str(r#"{ "ruleset": "misere" }"#).unwrap();
        assert_eq!(config.ruleset, Ruleset::Misere);
        assert_eq!((config.red, config.blue), (5, 4));
        assert_eq!(config.first, Side::Human);
    }
}
