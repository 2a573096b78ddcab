use downsian_vote::commands::run_simulation;
use downsian_vote::config::SimulationConfig;
use downsian_vote::electorate::{generate, generate_seeded, DEFAULT_NOISE};
use downsian_vote::models::{DistributionKind, Party, PartyPosition, VoterPopulation};
use downsian_vote::report::{ChartReport, DEFAULT_BINS};
use downsian_vote::voting::{evaluate, format_share};
use downsian_vote::DownsianError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn uniform_electorate(n: usize) -> VoterPopulation {
    VoterPopulation::from_unsorted((0..n).map(|i| i as f64 / (n - 1) as f64).collect()).unwrap()
}

#[test]
fn concrete_five_voter_election() {
    let voters = VoterPopulation::from_unsorted(vec![1.0, 0.75, 0.5, 0.25, 0.0]).unwrap();
    let results = evaluate(&voters, 0.2, 0.8).unwrap();

    assert_eq!(results.votes_a, vec![0.0, 0.25]);
    assert_eq!(results.votes_b, vec![0.75, 1.0]);
    assert_eq!(results.ties, vec![0.5]);
    assert_eq!(results.share_a, 0.5);
    assert_eq!(results.share_b, 0.5);
    assert_eq!(results.median, 0.5);
}

#[test]
fn median_voter_position_beats_moderate_challenger() {
    let voters = uniform_electorate(101);
    let mut previous = 0.0;
    for a in [0.1, 0.2, 0.3, 0.4, 0.5] {
        let share = evaluate(&voters, a, 0.8).unwrap().share_a;
        assert!(share >= previous, "share fell from {} to {} at {}", previous, share, a);
        previous = share;
    }
    assert_eq!(evaluate(&voters, 0.5, 0.8).unwrap().winner(), Some(Party::A));
}

#[test]
fn every_grid_pair_splits_the_whole_electorate() {
    let voters = generate_seeded(DistributionKind::Bimodal, 301, DEFAULT_NOISE, 11).unwrap();
    let grid = PartyPosition::grid();
    for a in grid.iter().step_by(10) {
        for b in grid.iter().step_by(10) {
            let results = evaluate(&voters, a.value(), b.value()).unwrap();
            assert!((results.share_a + results.share_b - 1.0).abs() < 1e-12);
            assert_eq!(
                results.votes_a.len() + results.votes_b.len() + results.ties.len(),
                301
            );
            if a == b {
                assert_eq!(results.ties.len(), 301);
                assert_eq!(results.share_a, 0.5);
            }
        }
    }
}

#[test]
fn explicit_rng_drives_generation() {
    let mut first_rng = ChaCha8Rng::seed_from_u64(99);
    let mut second_rng = ChaCha8Rng::seed_from_u64(99);
    let first = generate(DistributionKind::Skewed, 250, DEFAULT_NOISE, &mut first_rng).unwrap();
    let second = generate(DistributionKind::Skewed, 250, DEFAULT_NOISE, &mut second_rng).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unsupported_distribution_produces_nothing() {
    let err = "Uniform".parse::<DistributionKind>().unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "Unsupported distribution: Uniform");
}

#[test]
fn empty_population_cannot_be_evaluated() {
    let voters = generate_seeded(DistributionKind::Normal, 0, DEFAULT_NOISE, 1).unwrap();
    let err = evaluate(&voters, 0.2, 0.8).unwrap_err();
    assert!(matches!(err, DownsianError::EmptyPopulation));
    assert!(err.is_invalid_argument());
}

#[test]
fn chart_report_for_a_full_run() {
    let config = SimulationConfig {
        distribution: DistributionKind::Skewed,
        seed: Some(7),
        party_a: PartyPosition::snapped(0.3).unwrap(),
        party_b: PartyPosition::snapped(0.6).unwrap(),
        ..SimulationConfig::default()
    };
    let simulation = run_simulation(&config).unwrap();
    let report = &simulation.report;

    assert_eq!(report.histogram.counts.len(), DEFAULT_BINS);
    assert_eq!(report.histogram.total(), config.voters);
    assert_eq!(
        report.annotations[0].text,
        format!("Vote share A: {}", format_share(simulation.results.share_a))
    );
    // Beta(2, 5) piles voters up left of 0.45.
    assert_eq!(report.winner, Some(Party::A));

    let rebuilt = ChartReport::build(
        config.distribution,
        &simulation.voters,
        &simulation.results,
        DEFAULT_BINS,
    )
    .unwrap();
    assert_eq!(&rebuilt, report);
}
