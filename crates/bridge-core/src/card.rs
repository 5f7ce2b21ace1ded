use crate::error::BridgeError;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The canonical 52-card deck, spades through clubs, ace through two.
    pub fn deck() -> Vec<Card> {
        Suit::PBN
            .iter()
            .flat_map(|&suit| Rank::DESCENDING.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Parses the two-character form used by card lists, suit first: `"ST"` is the ten of spades.
impl FromStr for Card {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(BridgeError::InvalidCard(s.to_string()));
        };
        let suit = Suit::from_char(suit_char);
        let rank = Rank::from_char(rank_char);
        match (suit, rank) {
            (Some(suit), Some(rank)) => Ok(Card { suit, rank }),
            _ => Err(BridgeError::InvalidCard(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_parsing() {
        assert_eq!("ST".parse::<Card>(), Ok(Card::new(Suit::Spades, Rank::Ten)));
        assert_eq!("ha".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(
            "XA".parse::<Card>(),
            Err(BridgeError::InvalidCard("XA".to_string()))
        );
        assert!("S1".parse::<Card>().is_err());
        assert!("S".parse::<Card>().is_err());
        assert!("SAK".parse::<Card>().is_err());
    }

    #[test]
    fn test_deck_is_complete() {
        let deck = Card::deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Clubs, Rank::Two));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Diamonds, Rank::Queen).to_string(), "DQ");
    }
}
