use crate::electorate::{DEFAULT_NOISE, DEFAULT_VOTERS};
use crate::error::{DownsianError, Result};
use crate::models::{DistributionKind, PartyPosition};
use crate::report::DEFAULT_BINS;
use std::env;
use std::str::FromStr;

pub const ENV_DISTRIBUTION: &str = "DOWNSIAN_DISTRIBUTION";
pub const ENV_VOTERS: &str = "DOWNSIAN_VOTERS";
pub const ENV_NOISE: &str = "DOWNSIAN_NOISE";
pub const ENV_SEED: &str = "DOWNSIAN_SEED";
pub const ENV_PARTY_A: &str = "DOWNSIAN_PARTY_A";
pub const ENV_PARTY_B: &str = "DOWNSIAN_PARTY_B";
pub const ENV_BINS: &str = "DOWNSIAN_BINS";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub distribution: DistributionKind,
    pub voters: usize,
    pub noise: f64,
    pub seed: Option<u64>,
    pub party_a: PartyPosition,
    pub party_b: PartyPosition,
    pub bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            distribution: DistributionKind::default(),
            voters: DEFAULT_VOTERS,
            noise: DEFAULT_NOISE,
            seed: None,
            party_a: PartyPosition(PartyPosition::DEFAULT_A),
            party_b: PartyPosition(PartyPosition::DEFAULT_B),
            bins: DEFAULT_BINS,
        }
    }
}

impl SimulationConfig {
    /// Reads overrides from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DISTRIBUTION) {
            config.distribution = raw
                .parse::<DistributionKind>()
                .map_err(|e| config_error(ENV_DISTRIBUTION, e))?;
        }
        if let Some(raw) = lookup(ENV_VOTERS) {
            config.voters = parse_number(ENV_VOTERS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_NOISE) {
            let noise: f64 = parse_number(ENV_NOISE, &raw)?;
            if !(0.0..1.0).contains(&noise) {
                return Err(config_error(ENV_NOISE, DownsianError::InvalidNoise(noise)));
            }
            config.noise = noise;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_number(ENV_SEED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_PARTY_A) {
            config.party_a = parse_position(ENV_PARTY_A, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PARTY_B) {
            config.party_b = parse_position(ENV_PARTY_B, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BINS) {
            let bins: usize = parse_number(ENV_BINS, &raw)?;
            if bins == 0 {
                return Err(config_error(ENV_BINS, DownsianError::InvalidBins));
            }
            config.bins = bins;
        }

        Ok(config)
    }
}

fn parse_number<T>(var: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| DownsianError::Config {
        var: var.to_string(),
        reason: format!("'{}': {}", raw, e),
    })
}

// Positions from configuration snap to the slider grid.
fn parse_position(var: &str, raw: &str) -> Result<PartyPosition> {
    let value: f64 = parse_number(var, raw)?;
    PartyPosition::snapped(value).map_err(|e| config_error(var, e))
}

fn config_error(var: &str, err: DownsianError) -> DownsianError {
    DownsianError::Config {
        var: var.to_string(),
        reason: err.to_string(),
    }
}
