//! Synthetic voter populations on the [0, 1] policy line.

use crate::error::{DownsianError, Result};
use crate::models::{DistributionKind, VoterPopulation};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Beta, Distribution, Normal};

pub const DEFAULT_VOTERS: usize = 5000;
pub const DEFAULT_NOISE: f64 = 1e-6;

const NORMAL_MEAN: f64 = 0.5;
const NORMAL_SD: f64 = 0.15;
const BIMODAL_LEFT_MEAN: f64 = 0.35;
const BIMODAL_RIGHT_MEAN: f64 = 0.65;
const BIMODAL_SD: f64 = 0.08;
const SKEW_ALPHA: f64 = 2.0;
const SKEW_BETA: f64 = 5.0;

/// Draws `n` voter ideal points from `kind`, clamps them into
/// [0, 1 - noise_epsilon], jitters each by a uniform amount in
/// [0, noise_epsilon) and sorts. `noise_epsilon` must lie in [0, 1).
///
/// Out-of-range draws are clipped, not resampled. For `Bimodal` with odd `n`
/// the right-hand mode receives the extra voter.
pub fn generate<R: Rng + ?Sized>(
    kind: DistributionKind,
    n: usize,
    noise_epsilon: f64,
    rng: &mut R,
) -> Result<VoterPopulation> {
    if !(0.0..1.0).contains(&noise_epsilon) {
        return Err(DownsianError::InvalidNoise(noise_epsilon));
    }
    debug!(
        "Generating {} voters from {} distribution (noise {})",
        n, kind, noise_epsilon
    );

    let raw = match kind {
        DistributionKind::Normal => sample(normal(NORMAL_MEAN, NORMAL_SD)?, n, rng),
        DistributionKind::Bimodal => {
            let left_count = n / 2;
            let mut voters = sample(normal(BIMODAL_LEFT_MEAN, BIMODAL_SD)?, left_count, rng);
            voters.extend(sample(normal(BIMODAL_RIGHT_MEAN, BIMODAL_SD)?, n - left_count, rng));
            voters
        }
        DistributionKind::Skewed => {
            let beta = Beta::new(SKEW_ALPHA, SKEW_BETA)
                .map_err(|e| DownsianError::DistributionParameters(e.to_string()))?;
            sample(beta, n, rng)
        }
    };

    // Clipping below 1.0 leaves room for the jitter, so clipped voters stay distinct.
    let upper = 1.0 - noise_epsilon;
    let mut voters: Vec<f64> = raw
        .into_iter()
        .map(|v| {
            let jitter = if noise_epsilon > 0.0 {
                rng.gen_range(0.0..noise_epsilon)
            } else {
                0.0
            };
            v.clamp(0.0, upper) + jitter
        })
        .collect();
    voters.sort_by(f64::total_cmp);

    Ok(VoterPopulation::from_sorted_unchecked(voters))
}

/// Same as [`generate`] with a fresh ChaCha8 generator built from `seed`.
pub fn generate_seeded(
    kind: DistributionKind,
    n: usize,
    noise_epsilon: f64,
    seed: u64,
) -> Result<VoterPopulation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(kind, n, noise_epsilon, &mut rng)
}

fn normal(mean: f64, sd: f64) -> Result<Normal<f64>> {
    Normal::new(mean, sd).map_err(|e| DownsianError::DistributionParameters(e.to_string()))
}

fn sample<D, R>(dist: D, n: usize, rng: &mut R) -> Vec<f64>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    dist.sample_iter(&mut *rng).take(n).collect()
}
