use crate::error::StatsError;
use crate::table::{FrequencyTable, TableIndex};
use bridge_core::{Deal, Position, Strain};

/// Double-dummy trick counts for a single deal.
pub trait TrickOracle {
    /// Tricks `seat` takes as declarer in `strain`, from 0 to 13.
    fn tricks(&self, seat: Position, strain: Strain) -> u8;
}

impl<F> TrickOracle for F
where
    F: Fn(Position, Strain) -> u8,
{
    fn tricks(&self, seat: Position, strain: Strain) -> u8 {
        self(seat, strain)
    }
}

/// The twenty table cells a deal contributes to, one per seat and strain.
///
/// Indices are not range-checked here; [`record_deal`] does that.
pub fn deal_indices(deal: &Deal, oracle: &impl TrickOracle) -> Vec<TableIndex> {
    let mut indices = Vec::with_capacity(Position::ALL.len() * Strain::ALL.len());
    for seat in Position::ALL {
        let team = seat.partnership();
        let hcp = deal.hcp_for_team(team);
        let blocked = usize::from(deal.blocked_for_team(team).iter().all(|&b| b));
        let team_shape = deal.distribution_for_team(team);
        let seat_shape = deal.distribution_for_seat(seat);

        for strain in Strain::ALL {
            let tricks = usize::from(oracle.tricks(seat, strain));
            let index = match strain.to_suit() {
                Some(suit) => {
                    let fit = team_shape.length(suit);
                    let own = seat_shape.length(suit);
                    TableIndex::Trump {
                        suit,
                        hcp,
                        fit,
                        smaller: own.min(fit - own),
                        tricks,
                    }
                }
                None => TableIndex::NoTrump {
                    hcp,
                    blocked,
                    tricks,
                },
            };
            indices.push(index);
        }
    }
    indices
}

/// Adds one deal's trick counts to `table`.
///
/// All twenty indices are checked before any cell changes, so a deal that falls
/// outside the table leaves it untouched.
pub fn record_deal(
    table: &mut FrequencyTable,
    deal: &Deal,
    oracle: &impl TrickOracle,
) -> Result<(), StatsError> {
    let indices = deal_indices(deal, oracle);
    for index in &indices {
        table.get(index)?;
    }
    for index in &indices {
        table.increment(index)?;
    }
    tracing::trace!(deal = %deal, "recorded deal");
    Ok(())
}
