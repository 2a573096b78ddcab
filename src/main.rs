use clap::Parser;
use downsian_vote::commands::run_simulation;
use downsian_vote::config::SimulationConfig;
use downsian_vote::models::{DistributionKind, PartyPosition};
use downsian_vote::Result;
use log::{error, info};

#[derive(Parser)]
#[clap(about = "Downsian model of party competition")]
struct Opts {
    /// Voter distribution: Normal, Bimodal or Skewed
    distribution: Option<DistributionKind>,
    /// Position of party A on [0, 1]
    party_a: Option<f64>,
    /// Position of party B on [0, 1]
    party_b: Option<f64>,
    /// Print the chart data as JSON instead of a summary
    #[clap(long)]
    json: bool,
}

fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let opts = Opts::parse();

    if let Err(e) = run(opts) {
        error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<()> {
    let mut config = SimulationConfig::from_env()?;

    // Command-line values win over the environment
    if let Some(distribution) = opts.distribution {
        config.distribution = distribution;
    }
    if let Some(a) = opts.party_a {
        config.party_a = PartyPosition::snapped(a)?;
    }
    if let Some(b) = opts.party_b {
        config.party_b = PartyPosition::snapped(b)?;
    }

    let simulation = run_simulation(&config)?;
    info!(
        "Median voter at {:.4}; A {:.4}, B {:.4}",
        simulation.results.median, simulation.results.share_a, simulation.results.share_b
    );

    if opts.json {
        println!("{}", simulation.report.to_json()?);
    } else {
        println!("{}", simulation.report);
    }

    Ok(())
}
