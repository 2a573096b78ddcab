use crate::config::SimulationConfig;
use crate::electorate::generate;
use crate::error::Result;
use crate::models::VoterPopulation;
use crate::report::ChartReport;
use crate::voting::{evaluate_positions, ElectionResults};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything one evaluation produces, ready to hand to a renderer.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub voters: VoterPopulation,
    pub results: ElectionResults,
    pub report: ChartReport,
}

/// Generates a fresh electorate and evaluates the configured party positions.
pub fn run_simulation(config: &SimulationConfig) -> Result<Simulation> {
    // Unseeded runs still go through ChaCha8 so every run is replayable from its seed.
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!(
        "Simulating {} {} voters (seed {})",
        config.voters, config.distribution, seed
    );

    let voters = generate(config.distribution, config.voters, config.noise, &mut rng)?;
    let results = evaluate_positions(&voters, config.party_a, config.party_b)?;
    let report = ChartReport::build(config.distribution, &voters, &results, config.bins)?;

    Ok(Simulation {
        voters,
        results,
        report,
    })
}
