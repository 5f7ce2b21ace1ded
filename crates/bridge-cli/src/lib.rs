use anyhow::{Context, Result};
use bridge_core::{BridgeError, Card, Deal};
use bridge_stats::{load_table, record_deal, save_table, DealLog, FrequencyTable, TrickOracle};
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Where a survey reads and writes its state, and how long it runs.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub trials: usize,
    pub deal_log: PathBuf,
    pub results: PathBuf,
    /// Log progress every this many deals; 0 disables it.
    pub progress_every: usize,
}

pub fn generate_random_deal(rng: &mut impl rand::Rng) -> Result<Deal, BridgeError> {
    let mut deck = Card::deck();
    deck.shuffle(rng);
    Deal::from_deck(&deck)
}

/// Deals, solves and records `config.trials` boards, then saves the table.
///
/// Each deal is appended to the log before it is solved, and the table on disk
/// is only replaced once every trial has been recorded.
pub fn run_survey<S, O>(
    config: &SurveyConfig,
    rng: &mut impl rand::Rng,
    mut solve: S,
) -> Result<FrequencyTable>
where
    S: FnMut(&Deal) -> Result<O>,
    O: TrickOracle,
{
    let mut table = load_table(&config.results)
        .with_context(|| format!("loading {}", config.results.display()))?;
    let mut log = DealLog::open(&config.deal_log)
        .with_context(|| format!("opening {}", config.deal_log.display()))?;
    let starting_total = table.total();

    for trial in 1..=config.trials {
        let deal = generate_random_deal(rng).context("dealing a shuffled deck")?;
        log.append(&deal)
            .with_context(|| format!("appending to {}", log.path().display()))?;
        let tricks = solve(&deal).with_context(|| format!("solving {deal}"))?;
        record_deal(&mut table, &deal, &tricks).with_context(|| format!("recording {deal}"))?;

        if config.progress_every > 0 && trial % config.progress_every == 0 {
            tracing::info!(trial, of = config.trials, "progress");
        }
    }

    save_table(&config.results, &table)
        .with_context(|| format!("saving {}", config.results.display()))?;
    tracing::info!(
        trials = config.trials,
        added = table.total() - starting_total,
        total = table.total(),
        "survey complete"
    );
    Ok(table)
}
