// cspell:ignore AKQJT AKQJ
use crate::card::Card;
use crate::error::BridgeError;
use crate::io::pbn;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Suit lengths of a hand, or of a partnership when two are added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Distribution {
    pub spades: usize,
    pub hearts: usize,
    pub diamonds: usize,
    pub clubs: usize,
}

impl Distribution {
    pub fn length(&self, suit: Suit) -> usize {
        match suit {
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
        }
    }

    /// Lengths in S, H, D, C order.
    pub fn to_array(self) -> [usize; 4] {
        [self.spades, self.hearts, self.diamonds, self.clubs]
    }

    pub fn total(&self) -> usize {
        self.to_array().iter().sum()
    }
}

impl Add for Distribution {
    type Output = Distribution;

    fn add(self, other: Distribution) -> Distribution {
        Distribution {
            spades: self.spades + other.spades,
            hearts: self.hearts + other.hearts,
            diamonds: self.diamonds + other.diamonds,
            clubs: self.clubs + other.clubs,
        }
    }
}

/// Whether a holding on its own keeps the suit under control.
///
/// True for an ace with at least one guard, a king or queen with two guards,
/// king-queen together, or any four-card holding.
pub fn holding_is_blocked(ranks: &[Rank]) -> bool {
    let len = ranks.len();
    let has = |rank: Rank| ranks.contains(&rank);
    (has(Rank::Ace) && len >= 2)
        || ((has(Rank::King) || has(Rank::Queen)) && len >= 3)
        || (has(Rank::King) && has(Rank::Queen))
        || len >= 4
}

/// One player's cards, kept as a rank list per suit.
///
/// Order within a suit is whatever the cards were added in; it only matters for
/// display, so equality compares holdings as multisets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Hand {
    pub spades: Vec<Rank>,
    pub hearts: Vec<Rank>,
    pub diamonds: Vec<Rank>,
    pub clubs: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Hand::new();
        hand.add_cards(cards);
        hand
    }

    pub fn holding(&self, suit: Suit) -> &[Rank] {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    pub fn holding_mut(&mut self, suit: Suit) -> &mut Vec<Rank> {
        match suit {
            Suit::Spades => &mut self.spades,
            Suit::Hearts => &mut self.hearts,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Clubs => &mut self.clubs,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::PBN.into_iter().flat_map(move |suit| {
            self.holding(suit)
                .iter()
                .map(move |&rank| Card::new(suit, rank))
        })
    }

    pub fn len(&self) -> usize {
        Suit::PBN.iter().map(|&s| self.holding(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a card without checking for duplicates.
    pub fn add_card(&mut self, card: Card) {
        self.holding_mut(card.suit).push(card.rank);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add_card(card);
        }
    }

    /// Appends a run of rank symbols such as `"AQ74"` to one suit.
    ///
    /// Nothing is added unless every symbol is a valid rank.
    pub fn add_holding(&mut self, suit: Suit, ranks: &str) -> Result<(), BridgeError> {
        let parsed = ranks
            .chars()
            .map(|c| Rank::from_char(c).ok_or_else(|| BridgeError::InvalidCard(format!("{suit}{c}"))))
            .collect::<Result<Vec<_>, _>>()?;
        self.holding_mut(suit).extend(parsed);
        Ok(())
    }

    /// Removes one occurrence of `card`.
    pub fn remove_card(&mut self, card: Card) -> Result<(), BridgeError> {
        let holding = self.holding_mut(card.suit);
        let pos = holding
            .iter()
            .position(|&r| r == card.rank)
            .ok_or(BridgeError::CardNotFound(card))?;
        holding.remove(pos);
        Ok(())
    }

    /// Orders every suit from ace down to two.
    pub fn sort(&mut self) {
        for suit in Suit::PBN {
            self.holding_mut(suit).sort_by(|a, b| b.cmp(a));
        }
    }

    /// Not capped at 40; a hand built without the deck can hold repeated honours.
    pub fn hcp(&self) -> usize {
        Suit::PBN
            .iter()
            .flat_map(|&s| self.holding(s))
            .map(|r| usize::from(r.hcp()))
            .sum()
    }

    pub fn distribution(&self) -> Distribution {
        Distribution {
            spades: self.spades.len(),
            hearts: self.hearts.len(),
            diamonds: self.diamonds.len(),
            clubs: self.clubs.len(),
        }
    }

    pub fn is_blocked(&self, suit: Suit) -> bool {
        holding_is_blocked(self.holding(suit))
    }

    /// Blocker status per suit in S, H, D, C order.
    pub fn blocked(&self) -> [bool; 4] {
        Suit::PBN.map(|s| self.is_blocked(s))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        let sorted = |ranks: &[Rank]| {
            let mut v = ranks.to_vec();
            v.sort();
            v
        };
        Suit::PBN
            .iter()
            .all(|&s| sorted(self.holding(s)) == sorted(other.holding(s)))
    }
}

impl Eq for Hand {}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand::from_cards(iter)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pbn::export_hand(self))
    }
}

impl FromStr for Hand {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pbn::import_hand(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Diamonds, Rank::Queen),
            Card::new(Suit::Clubs, Rank::Jack),
            Card::new(Suit::Spades, Rank::Two),
        ]);
        assert_eq!(hand.hcp(), 10);
    }

    #[test]
    fn test_reference_hand() {
        let mut h = Hand::new();
        h.add_holding(Suit::Spades, "AKQ").unwrap();
        h.add_holding(Suit::Clubs, "T98").unwrap();
        assert_eq!(h.to_string(), "AKQ..T98");
        assert_eq!(h.hcp(), 9);
        assert_eq!(h.distribution().to_array(), [3, 0, 0, 3]);
        assert!(h.is_blocked(Suit::Spades));
        assert!(!h.is_blocked(Suit::Hearts));
        assert!(!h.is_blocked(Suit::Diamonds));
        assert!(!h.is_blocked(Suit::Clubs));
    }

    #[test]
    fn test_distribution() {
        let hand = Hand::from_cards(vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Spades, Rank::King),
            Card::new(Suit::Hearts, Rank::Queen),
        ]);
        let dist = hand.distribution();
        assert_eq!(dist.to_array(), [2, 1, 0, 0]);
        assert_eq!(dist.length(Suit::Hearts), 1);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_overfull_hand_counts_past_u8() {
        let mut h = Hand::new();
        h.add_holding(Suit::Spades, &"A".repeat(65)).unwrap();
        assert_eq!(h.hcp(), 260);
        assert_eq!(h.distribution().length(Suit::Spades), 65);
    }

    #[test]
    fn test_distribution_add() {
        let a = hand("AK.Q.J.T").distribution();
        let b = hand("2.3456.7.").distribution();
        assert_eq!((a + b).to_array(), [3, 5, 2, 1]);
    }

    #[test]
    fn test_blocked_holdings() {
        use Rank::*;
        assert!(!holding_is_blocked(&[]));
        assert!(!holding_is_blocked(&[Ace]));
        assert!(holding_is_blocked(&[Ace, Two]));
        assert!(!holding_is_blocked(&[King, Two]));
        assert!(holding_is_blocked(&[King, Three, Two]));
        assert!(!holding_is_blocked(&[Queen, Two]));
        assert!(holding_is_blocked(&[Queen, Three, Two]));
        assert!(holding_is_blocked(&[King, Queen]));
        assert!(!holding_is_blocked(&[Jack, Ten, Nine]));
        assert!(holding_is_blocked(&[Five, Four, Three, Two]));
    }

    #[test]
    fn test_add_holding_rejects_bad_rank() {
        let mut h = Hand::new();
        let err = h.add_holding(Suit::Hearts, "AKX").unwrap_err();
        assert_eq!(err, BridgeError::InvalidCard("HX".to_string()));
        assert!(h.hearts.is_empty());
    }

    #[test]
    fn test_remove_card() {
        let mut h = hand("AK.Q..");
        h.remove_card(Card::new(Suit::Spades, Rank::King)).unwrap();
        assert_eq!(h.spades, vec![Rank::Ace]);
        let missing = Card::new(Suit::Clubs, Rank::Two);
        assert_eq!(h.remove_card(missing), Err(BridgeError::CardNotFound(missing)));
    }

    #[test]
    fn test_remove_card_takes_one_occurrence() {
        let mut h = Hand::new();
        h.add_cards([
            Card::new(Suit::Diamonds, Rank::Five),
            Card::new(Suit::Diamonds, Rank::Five),
        ]);
        h.remove_card(Card::new(Suit::Diamonds, Rank::Five)).unwrap();
        assert_eq!(h.diamonds, vec![Rank::Five]);
    }

    #[test]
    fn test_hand_sorting() {
        let mut h = hand("2A.T9J..3K");
        let before = (h.hcp(), h.distribution(), h.blocked());
        h.sort();
        assert_eq!(h.to_string(), "A2.JT9..K3");
        assert_eq!((h.hcp(), h.distribution(), h.blocked()), before);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(hand("AKQ..T98"), hand("QAK..89T"));
        assert_ne!(hand("AKQ..T98"), hand("AKQ.T98.."));
        assert_ne!(hand("AK..."), hand("AKQ..."));
    }

    #[test]
    fn test_cards_iter() {
        let h = hand("A.K.Q.J");
        let cards: Vec<_> = h.cards().map(|c| c.to_string()).collect();
        assert_eq!(cards, vec!["SA", "HK", "DQ", "CJ"]);
        assert_eq!(h.len(), 4);
        assert!(!h.is_empty());
    }
}
