//! The two marble piles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NimError;

/// Pile selector.
///
/// Declaration order is the enumeration order used by move generation:
/// every Red move comes before every Blue move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Red,
    Blue,
}

impl Pile {
    /// Both piles, in enumeration order.
    pub const ALL: [Pile; 2] = [Pile::Red, Pile::Blue];

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pile::Red => "red",
            Pile::Blue => "blue",
        }
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pile {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Pile::Red),
            "blue" | "b" => Ok(Pile::Blue),
            _ => Err(NimError::UnknownPile(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        assert_eq!(Pile::ALL, [Pile::Red, Pile::Blue]);
        assert!(Pile::Red < Pile::Blue);
    }

    #[test]
    fn test_parse() {
        assert_eq!("red".parse::<Pile>(), Ok(Pile::Red));
        assert_eq!(" Blue ".parse::<Pile>(), Ok(Pile::Blue));
        assert_eq!("R".parse::<Pile>(), Ok(Pile::Red));
        assert_eq!(
            "green".parse::<Pile>(),
            Err(NimError::UnknownPile("green".to_string()))
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Pile::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let pile: Pile = serde_json::from_str(&json).unwrap();
        assert_eq!(pile, Pile::Blue);
    }
}
