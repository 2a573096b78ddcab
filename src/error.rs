use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownsianError {
    #[error("Unsupported distribution: {0}")]
    UnsupportedDistribution(String),
    #[error("Cannot evaluate an empty voter population")]
    EmptyPopulation,
    #[error("Party position {0} is outside the policy space [0, 1]")]
    PositionOutOfRange(f64),
    #[error("Noise epsilon must be finite and non-negative, got {0}")]
    InvalidNoise(f64),
    #[error("Voter ideal point {0} is outside the policy space [0, 1]")]
    InvalidVoter(f64),
    #[error("Histogram needs at least one bin")]
    InvalidBins,
    #[error("Invalid distribution parameters: {0}")]
    DistributionParameters(String),
    #[error("Invalid value for {var}: {reason}")]
    Config { var: String, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DownsianError {
    /// True for every rejection of caller-supplied input.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            DownsianError::Config { .. }
                | DownsianError::DistributionParameters(_)
                | DownsianError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DownsianError>;
