use crate::board::{Partnership, Position};
use crate::card::Card;
use crate::error::BridgeError;
use crate::hand::{Distribution, Hand};
use crate::io::pbn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Four hands, one per seat.
///
/// A deal does not check that its hands partition the deck; callers that build
/// one from [`Deal::from_deck`] get that for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub north: Hand,
    pub east: Hand,
    pub south: Hand,
    pub west: Hand,
}

impl Deal {
    pub fn new(north: Hand, east: Hand, south: Hand, west: Hand) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Hands out a shuffled deck thirteen cards at a time, north first.
    pub fn from_deck(cards: &[Card]) -> Result<Self, BridgeError> {
        if cards.len() != 52 {
            return Err(BridgeError::InvalidDeck(cards.len()));
        }
        let mut chunks = cards.chunks(13).map(|c| Hand::from_cards(c.iter().copied()));
        let mut next = || chunks.next().unwrap_or_default();
        Ok(Deal::new(next(), next(), next(), next()))
    }

    pub fn hand(&self, pos: Position) -> &Hand {
        match pos {
            Position::North => &self.north,
            Position::East => &self.east,
            Position::South => &self.south,
            Position::West => &self.west,
        }
    }

    pub fn hand_mut(&mut self, pos: Position) -> &mut Hand {
        match pos {
            Position::North => &mut self.north,
            Position::East => &mut self.east,
            Position::South => &mut self.south,
            Position::West => &mut self.west,
        }
    }

    /// Hands in N, E, S, W order.
    pub fn hands(&self) -> [&Hand; 4] {
        Position::ALL.map(|pos| self.hand(pos))
    }

    pub fn sort(&mut self) {
        for pos in Position::ALL {
            self.hand_mut(pos).sort();
        }
    }

    pub fn to_pbn(&self, start: Position) -> String {
        pbn::export_deal(self, start)
    }

    pub fn hcp_per_seat(&self) -> [usize; 4] {
        Position::ALL.map(|pos| self.hcp_for_seat(pos))
    }

    pub fn hcp_for_seat(&self, pos: Position) -> usize {
        self.hand(pos).hcp()
    }

    pub fn hcp_for_team(&self, team: Partnership) -> usize {
        team.seats().iter().map(|&pos| self.hcp_for_seat(pos)).sum()
    }

    pub fn distribution_per_seat(&self) -> [Distribution; 4] {
        Position::ALL.map(|pos| self.distribution_for_seat(pos))
    }

    pub fn distribution_for_seat(&self, pos: Position) -> Distribution {
        self.hand(pos).distribution()
    }

    /// Combined suit lengths of both partners.
    pub fn distribution_for_team(&self, team: Partnership) -> Distribution {
        let [a, b] = team.seats();
        self.distribution_for_seat(a) + self.distribution_for_seat(b)
    }

    pub fn blocked_per_seat(&self) -> [[bool; 4]; 4] {
        Position::ALL.map(|pos| self.blocked_for_seat(pos))
    }

    pub fn blocked_for_seat(&self, pos: Position) -> [bool; 4] {
        self.hand(pos).blocked()
    }

    /// A suit is blocked for the team when either partner blocks it.
    pub fn blocked_for_team(&self, team: Partnership) -> [bool; 4] {
        let [a, b] = team.seats().map(|pos| self.blocked_for_seat(pos));
        std::array::from_fn(|i| a[i] || b[i])
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pbn(Position::North))
    }
}

impl FromStr for Deal {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pbn::import_deal(s)
    }
}
