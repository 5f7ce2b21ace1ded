use crate::error::BridgeError;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trick-count denomination: one of the four suits as trumps, or no-trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    /// Spades down to clubs, then no-trump.
    pub const ALL: [Strain; 5] = [
        Strain::Spades,
        Strain::Hearts,
        Strain::Diamonds,
        Strain::Clubs,
        Strain::NoTrump,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strain::Clubs => "C",
            Strain::Diamonds => "D",
            Strain::Hearts => "H",
            Strain::Spades => "S",
            Strain::NoTrump => "NT",
        }
    }

    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Strain::Clubs,
            Suit::Diamonds => Strain::Diamonds,
            Suit::Hearts => Strain::Hearts,
            Suit::Spades => Strain::Spades,
        }
    }

    pub fn to_suit(self) -> Option<Suit> {
        match self {
            Strain::Clubs => Some(Suit::Clubs),
            Strain::Diamonds => Some(Suit::Diamonds),
            Strain::Hearts => Some(Suit::Hearts),
            Strain::Spades => Some(Suit::Spades),
            Strain::NoTrump => None,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strain {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NT" | "N" => Ok(Strain::NoTrump),
            other => other.parse::<Suit>().map(Strain::from_suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_parsing() {
        assert_eq!("S".parse::<Strain>(), Ok(Strain::Spades));
        assert_eq!("nt".parse::<Strain>(), Ok(Strain::NoTrump));
        assert!("X".parse::<Strain>().is_err());
    }

    #[test]
    fn test_strain_suit_mapping() {
        for suit in Suit::ALL {
            assert_eq!(Strain::from_suit(suit).to_suit(), Some(suit));
        }
        assert_eq!(Strain::NoTrump.to_suit(), None);
        assert_eq!(Strain::NoTrump.to_string(), "NT");
    }
}
