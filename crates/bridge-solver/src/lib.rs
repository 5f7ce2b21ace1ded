use bridge_core::{Deal, Position, Rank, Strain, Suit};
use dds_bridge::contract::Strain as DdsStrain;
use dds_bridge::deal::{Deal as DdsDeal, Seat, SmallSet, Suit as DdsSuit};
use dds_bridge::solver::{self, StrainFlags};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

// The underlying solver keeps global state; one caller at a time.
static SOLVER_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("double dummy solver failed: {0}")]
    Dds(String),
    #[error("double dummy solver returned no table")]
    NoResult,
}

/// Tricks each seat takes as declarer, indexed by strain: clubs, diamonds,
/// hearts, spades, notrump.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DoubleDummySolution {
    pub north: [u32; 5],
    pub south: [u32; 5],
    pub east: [u32; 5],
    pub west: [u32; 5],
}

impl DoubleDummySolution {
    fn strain_idx(strain: Strain) -> usize {
        match strain {
            Strain::Clubs => 0,
            Strain::Diamonds => 1,
            Strain::Hearts => 2,
            Strain::Spades => 3,
            Strain::NoTrump => 4,
        }
    }

    pub fn tricks(&self, seat: Position, strain: Strain) -> u8 {
        let row = match seat {
            Position::North => &self.north,
            Position::East => &self.east,
            Position::South => &self.south,
            Position::West => &self.west,
        };
        row[Self::strain_idx(strain)] as u8
    }
}

fn to_dds(deal: &Deal) -> DdsDeal {
    let mut dds_deal = DdsDeal::default();

    for (pos_core, seat_dds) in [
        (Position::North, Seat::North),
        (Position::South, Seat::South),
        (Position::East, Seat::East),
        (Position::West, Seat::West),
    ] {
        for card in deal.hand(pos_core).cards() {
            let suit_dds = match card.suit {
                Suit::Clubs => DdsSuit::Clubs,
                Suit::Diamonds => DdsSuit::Diamonds,
                Suit::Hearts => DdsSuit::Hearts,
                Suit::Spades => DdsSuit::Spades,
            };
            dds_deal[seat_dds][suit_dds].insert(rank_value(card.rank));
        }
    }
    dds_deal
}

fn rank_value(rank: Rank) -> u8 {
    rank as u8
}

/// Solves all four seats in all five strains.
pub fn solve(deal: &Deal) -> Result<DoubleDummySolution, SolverError> {
    let dds_deal = to_dds(deal);

    let results = {
        let _guard = SOLVER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        solver::solve_deals(&[dds_deal], StrainFlags::all())
            .map_err(|e| SolverError::Dds(format!("{e:?}")))?
    };
    let table = results.first().copied().ok_or(SolverError::NoResult)?;

    let get_tricks = |seat: Seat| {
        [
            u32::from(table[DdsStrain::Clubs].get(seat)),
            u32::from(table[DdsStrain::Diamonds].get(seat)),
            u32::from(table[DdsStrain::Hearts].get(seat)),
            u32::from(table[DdsStrain::Spades].get(seat)),
            u32::from(table[DdsStrain::Notrump].get(seat)),
        ]
    };

    let solution = DoubleDummySolution {
        north: get_tricks(Seat::North),
        south: get_tricks(Seat::South),
        east: get_tricks(Seat::East),
        west: get_tricks(Seat::West),
    };
    tracing::trace!(deal = %deal, ?solution, "solved deal");
    Ok(solution)
}
