//! Terminal-payoff rulesets.
//!
//! The ruleset is fixed for a whole game and a whole search tree. Its only
//! effect is the sign of the payoff when both piles are empty, so the rule is
//! stated once here and every leaf of the search asks for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NimError;
use super::value::{Score, LOSS, WIN};

/// Which side wins once both piles are empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Taking the last marble wins: the side left to move on empty piles has lost.
    #[default]
    Standard,

    /// Taking the last marble loses: the side left to move on empty piles has won.
    #[serde(alias = "misère")]
    Misere,
}

impl Ruleset {
    /// Payoff of the empty position, seen from the maximizing side.
    ///
    /// `maximizing` is true when the maximizing side is the one to move.
    ///
    /// | ruleset  | maximizer to move | minimizer to move |
    /// |----------|-------------------|-------------------|
    /// | Standard | `LOSS`            | `WIN`             |
    /// | Misère   | `WIN`             | `LOSS`            |
    ///
    /// ```
    /// use red_blue_nim::core::{Ruleset, LOSS, WIN};
    ///
    /// assert_eq!(Ruleset::Standard.terminal_value(true), LOSS);
    /// assert_eq!(Ruleset::Misere.terminal_value(true), WIN);
    /// ```
    #[must_use]
    pub const fn terminal_value(self, maximizing: bool) -> Score {
        let mover_loses = matches!(self, Ruleset::Standard);
        if mover_loses == maximizing {
            LOSS
        } else {
            WIN
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ruleset::Standard => "standard",
            Ruleset::Misere => "misere",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the names and the numeric menu codes (`1` standard, `2` misère).
impl FromStr for Ruleset {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "normal" | "1" => Ok(Ruleset::Standard),
            "misere" | "misère" | "2" => Ok(Ruleset::Misere),
            _ => Err(NimError::UnknownRuleset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_value_table() {
        assert_eq!(Ruleset::Standard.terminal_value(true), LOSS);
        assert_eq!(Ruleset::Standard.terminal_value(false), WIN);
        assert_eq!(Ruleset::Misere.terminal_value(true), WIN);
        assert_eq!(Ruleset::Misere.terminal_value(false), LOSS);
    }

    #[test]
    fn test_terminal_value_is_antisymmetric() {
        for ruleset in [Ruleset::Standard, Ruleset::Misere] {
            assert_eq!(ruleset.terminal_value(true), -ruleset.terminal_value(false));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("standard".parse::<Ruleset>(), Ok(Ruleset::Standard));
        assert_eq!("1".parse::<Ruleset>(), Ok(Ruleset::Standard));
        assert_eq!("Misere".parse::<Ruleset>(), Ok(Ruleset::Misere));
        assert_eq!("MISÈRE".parse::<Ruleset>(), Ok(Ruleset::Misere));
        assert_eq!("2".parse::<Ruleset>(), Ok(Ruleset::Misere));
        assert_eq!(
            "3".parse::<Ruleset>(),
            Err(NimError::UnknownRuleset("3".to_string()))
        );
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Ruleset::default(), Ruleset::Standard);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Ruleset::Misere).unwrap();
        assert_eq!(json, "\"misere\"");
        let accented: Ruleset = serde_json::from_str("\"misère\"").unwrap();
        assert_eq!(accented, Ruleset::Misere);
    }
}
