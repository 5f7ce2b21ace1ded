use crate::error::{Axis, StatsError};
use bridge_core::Suit;
use serde::{Deserialize, Serialize};

/// Every high-card point in the deck.
pub const MAX_HCP: usize = 40;
pub const MAX_TRICKS: usize = 13;
/// Longest possible fit: the whole suit.
pub const MAX_FIT: usize = 13;

/// A cell address. Trump and no-trump tables have different dimensions, so the
/// address says which one it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableIndex {
    Trump {
        suit: Suit,
        hcp: usize,
        fit: usize,
        smaller: usize,
        tricks: usize,
    },
    NoTrump {
        hcp: usize,
        blocked: usize,
        tricks: usize,
    },
}

fn slot<T>(items: &[T], axis: Axis, index: usize) -> Result<&T, StatsError> {
    items.get(index).ok_or(StatsError::IndexOutOfRange {
        axis,
        index,
        len: items.len(),
    })
}

fn slot_mut<T>(items: &mut [T], axis: Axis, index: usize) -> Result<&mut T, StatsError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(StatsError::IndexOutOfRange { axis, index, len })
}

fn check_len(what: &str, actual: usize, expected: usize) -> Result<(), StatsError> {
    if actual == expected {
        Ok(())
    } else {
        Err(StatsError::TableShape(format!(
            "{what} has {actual} entries, expected {expected}"
        )))
    }
}

/// Counts for one trump suit, indexed `[hcp][fit][smaller][tricks]`.
///
/// `smaller` is the shorter partner's length, so it never exceeds `fit / 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrumpTable {
    counts: Vec<Vec<Vec<Vec<u64>>>>,
}

impl TrumpTable {
    pub fn new() -> Self {
        let counts = (0..=MAX_HCP)
            .map(|_| {
                (0..=MAX_FIT)
                    .map(|fit| vec![vec![0; MAX_TRICKS + 1]; fit / 2 + 1])
                    .collect()
            })
            .collect();
        Self { counts }
    }

    pub fn get(
        &self,
        hcp: usize,
        fit: usize,
        smaller: usize,
        tricks: usize,
    ) -> Result<u64, StatsError> {
        let by_fit = slot(&self.counts, Axis::Hcp, hcp)?;
        let by_smaller = slot(by_fit, Axis::Fit, fit)?;
        let by_tricks = slot(by_smaller, Axis::Smaller, smaller)?;
        slot(by_tricks, Axis::Tricks, tricks).copied()
    }

    fn get_mut(
        &mut self,
        hcp: usize,
        fit: usize,
        smaller: usize,
        tricks: usize,
    ) -> Result<&mut u64, StatsError> {
        let by_fit = slot_mut(&mut self.counts, Axis::Hcp, hcp)?;
        let by_smaller = slot_mut(by_fit, Axis::Fit, fit)?;
        let by_tricks = slot_mut(by_smaller, Axis::Smaller, smaller)?;
        slot_mut(by_tricks, Axis::Tricks, tricks)
    }

    fn cells(&self) -> impl Iterator<Item = &u64> {
        self.counts.iter().flatten().flatten().flatten()
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut u64> {
        self.counts.iter_mut().flatten().flatten().flatten()
    }

    fn validate_shape(&self) -> Result<(), StatsError> {
        check_len("hcp axis", self.counts.len(), MAX_HCP + 1)?;
        for by_fit in &self.counts {
            check_len("fit axis", by_fit.len(), MAX_FIT + 1)?;
            for (fit, by_smaller) in by_fit.iter().enumerate() {
                check_len("smaller axis", by_smaller.len(), fit / 2 + 1)?;
                for by_tricks in by_smaller {
                    check_len("tricks axis", by_tricks.len(), MAX_TRICKS + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for TrumpTable {
    fn default() -> Self {
        Self::new()
    }
}

/// No-trump counts, indexed `[hcp][blocked][tricks]` where `blocked` is 1 when
/// the partnership stops every suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoTrumpTable {
    counts: Vec<Vec<Vec<u64>>>,
}

impl NoTrumpTable {
    pub fn new() -> Self {
        Self {
            counts: vec![vec![vec![0; MAX_TRICKS + 1]; 2]; MAX_HCP + 1],
        }
    }

    pub fn get(&self, hcp: usize, blocked: usize, tricks: usize) -> Result<u64, StatsError> {
        let by_blocked = slot(&self.counts, Axis::Hcp, hcp)?;
        let by_tricks = slot(by_blocked, Axis::Blocked, blocked)?;
        slot(by_tricks, Axis::Tricks, tricks).copied()
    }

    fn get_mut(
        &mut self,
        hcp: usize,
        blocked: usize,
        tricks: usize,
    ) -> Result<&mut u64, StatsError> {
        let by_blocked = slot_mut(&mut self.counts, Axis::Hcp, hcp)?;
        let by_tricks = slot_mut(by_blocked, Axis::Blocked, blocked)?;
        slot_mut(by_tricks, Axis::Tricks, tricks)
    }

    fn cells(&self) -> impl Iterator<Item = &u64> {
        self.counts.iter().flatten().flatten()
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut u64> {
        self.counts.iter_mut().flatten().flatten()
    }

    fn validate_shape(&self) -> Result<(), StatsError> {
        check_len("hcp axis", self.counts.len(), MAX_HCP + 1)?;
        for by_blocked in &self.counts {
            check_len("blocked axis", by_blocked.len(), 2)?;
            for by_tricks in by_blocked {
                check_len("tricks axis", by_tricks.len(), MAX_TRICKS + 1)?;
            }
        }
        Ok(())
    }
}

impl Default for NoTrumpTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Trick-count frequencies for all five denominations.
///
/// The shape is fixed when the table is created; only cell values change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    #[serde(rename = "S")]
    spades: TrumpTable,
    #[serde(rename = "H")]
    hearts: TrumpTable,
    #[serde(rename = "D")]
    diamonds: TrumpTable,
    #[serde(rename = "C")]
    clubs: TrumpTable,
    #[serde(rename = "NT")]
    notrump: NoTrumpTable,
}

impl FrequencyTable {
    /// An all-zero table.
    pub fn new() -> Self {
        Self {
            spades: TrumpTable::new(),
            hearts: TrumpTable::new(),
            diamonds: TrumpTable::new(),
            clubs: TrumpTable::new(),
            notrump: NoTrumpTable::new(),
        }
    }

    pub fn trump(&self, suit: Suit) -> &TrumpTable {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    fn trump_mut(&mut self, suit: Suit) -> &mut TrumpTable {
        match suit {
            Suit::Spades => &mut self.spades,
            Suit::Hearts => &mut self.hearts,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Clubs => &mut self.clubs,
        }
    }

    pub fn get(&self, index: &TableIndex) -> Result<u64, StatsError> {
        match *index {
            TableIndex::Trump {
                suit,
                hcp,
                fit,
                smaller,
                tricks,
            } => self.trump(suit).get(hcp, fit, smaller, tricks),
            TableIndex::NoTrump {
                hcp,
                blocked,
                tricks,
            } => self.notrump.get(hcp, blocked, tricks),
        }
    }

    fn cell_mut(&mut self, index: &TableIndex) -> Result<&mut u64, StatsError> {
        match *index {
            TableIndex::Trump {
                suit,
                hcp,
                fit,
                smaller,
                tricks,
            } => self.trump_mut(suit).get_mut(hcp, fit, smaller, tricks),
            TableIndex::NoTrump {
                hcp,
                blocked,
                tricks,
            } => self.notrump.get_mut(hcp, blocked, tricks),
        }
    }

    /// Adds one to a cell. Fails without touching the table if any axis is out of range.
    pub fn increment(&mut self, index: &TableIndex) -> Result<(), StatsError> {
        *self.cell_mut(index)? += 1;
        Ok(())
    }

    /// Sum of every cell.
    pub fn total(&self) -> u64 {
        self.cells().sum()
    }

    fn cells(&self) -> impl Iterator<Item = &u64> {
        Suit::PBN
            .iter()
            .flat_map(move |&suit| self.trump(suit).cells())
            .chain(self.notrump.cells())
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut u64> {
        self.spades
            .cells_mut()
            .chain(self.hearts.cells_mut())
            .chain(self.diamonds.cells_mut())
            .chain(self.clubs.cells_mut())
            .chain(self.notrump.cells_mut())
    }

    /// Checks every axis against the fixed dimensions, for tables read from disk.
    pub fn validate_shape(&self) -> Result<(), StatsError> {
        for suit in Suit::PBN {
            self.trump(suit).validate_shape().map_err(|e| match e {
                StatsError::TableShape(msg) => StatsError::TableShape(format!("{suit}: {msg}")),
                other => other,
            })?;
        }
        self.notrump.validate_shape().map_err(|e| match e {
            StatsError::TableShape(msg) => StatsError::TableShape(format!("NT: {msg}")),
            other => other,
        })
    }

    /// Adds another table's counts into this one, cell by cell.
    pub fn merge(&mut self, other: &FrequencyTable) -> Result<(), StatsError> {
        self.validate_shape()?;
        other.validate_shape()?;
        for (mine, theirs) in self.cells_mut().zip(other.cells()) {
            *mine += *theirs;
        }
        tracing::debug!(total = self.total(), "merged frequency table");
        Ok(())
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
