//! Deal random boards, solve them double dummy and accumulate trick-count
//! frequencies by partnership strength and fit.
use anyhow::Result;
use bridge_cli::{run_survey, SurveyConfig};
use bridge_core::{Position, Strain};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tabulate double-dummy tricks by team points, fit and stoppers"
)]
struct Args {
    /// Number of random deals to generate
    #[arg(short = 'n', long, env = "DD_SURVEY_TRIALS", default_value_t = 1000)]
    trials: usize,

    /// File every generated deal is appended to
    #[arg(long, env = "DD_SURVEY_DEAL_LOG", default_value = "games.pbn")]
    deal_log: PathBuf,

    /// Frequency table, read at start and rewritten at the end
    #[arg(long, env = "DD_SURVEY_RESULTS", default_value = "results.json")]
    results: PathBuf,

    /// Seed for a reproducible run
    #[arg(long, env = "DD_SURVEY_SEED")]
    seed: Option<u64>,

    /// Log progress every N deals (0 to disable)
    #[arg(long, env = "DD_SURVEY_PROGRESS_EVERY", default_value_t = 10)]
    progress_every: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = SurveyConfig {
        trials: args.trials,
        deal_log: args.deal_log,
        results: args.results,
        progress_every: args.progress_every,
    };

    run_survey(&config, &mut rng, |deal| {
        let solution = bridge_solver::solve(deal)?;
        Ok(move |seat: Position, strain: Strain| solution.tricks(seat, strain))
    })?;
    Ok(())
}
