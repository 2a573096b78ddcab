use crate::error::{DownsianError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generative family used to place voters on the policy line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistributionKind {
    #[default]
    Normal,
    Bimodal,
    Skewed,
}

impl DistributionKind {
    /// Every supported kind, in the order the distribution picker lists them.
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Normal,
        DistributionKind::Bimodal,
        DistributionKind::Skewed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "Normal",
            DistributionKind::Bimodal => "Bimodal",
            DistributionKind::Skewed => "Skewed",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = DownsianError;

    fn from_str(s: &str) -> Result<Self> {
        DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DownsianError::UnsupportedDistribution(s.to_string()))
    }
}

/// One of the two competing parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    A,
    B,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::A => f.write_str("A"),
            Party::B => f.write_str("B"),
        }
    }
}

/// A party platform on the policy line, guaranteed to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PartyPosition(pub(crate) f64);

impl PartyPosition {
    pub const DEFAULT_A: f64 = 0.20;
    pub const DEFAULT_B: f64 = 0.80;
    /// Number of points on the slider grid (0.00, 0.01, ..., 1.00).
    pub const GRID_POINTS: usize = 101;

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DownsianError::PositionOutOfRange(value))
        }
    }

    /// Rounds `value` to the nearest point of the 101-point grid.
    pub fn snapped(value: f64) -> Result<Self> {
        let position = Self::new(value)?;
        Ok(Self((position.0 * 100.0).round() / 100.0))
    }

    pub fn grid() -> Vec<PartyPosition> {
        (0..Self::GRID_POINTS)
            .map(|step| PartyPosition(step as f64 / 100.0))
            .collect()
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PartyPosition {
    type Error = DownsianError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PartyPosition> for f64 {
    fn from(position: PartyPosition) -> f64 {
        position.0
    }
}

impl fmt::Display for PartyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Voter ideal points in ascending order, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct VoterPopulation {
    voters: Vec<f64>,
}

impl VoterPopulation {
    /// Validates and sorts an arbitrary set of ideal points.
    pub fn from_unsorted(mut voters: Vec<f64>) -> Result<Self> {
        if let Some(bad) = voters
            .iter()
            .copied()
            .find(|v| !(v.is_finite() && (0.0..=1.0).contains(v)))
        {
            return Err(DownsianError::InvalidVoter(bad));
        }
        voters.sort_by(f64::total_cmp);
        Ok(Self { voters })
    }

    /// Caller guarantees every value is in [0, 1] and the vector is sorted.
    pub(crate) fn from_sorted_unchecked(voters: Vec<f64>) -> Self {
        debug_assert!(voters.windows(2).all(|w| w[0] <= w[1]));
        Self { voters }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.voters
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.voters.iter().copied()
    }
}

impl TryFrom<Vec<f64>> for VoterPopulation {
    type Error = DownsianError;

    fn try_from(voters: Vec<f64>) -> Result<Self> {
        Self::from_unsorted(voters)
    }
}

impl From<VoterPopulation> for Vec<f64> {
    fn from(population: VoterPopulation) -> Vec<f64> {
        population.voters
    }
}
