//! Data handed to a chart renderer: voter histogram, point markers and
//! vote-share annotations.

use crate::error::{DownsianError, Result};
use crate::models::{DistributionKind, Party, VoterPopulation};
use crate::voting::{format_share, ElectionResults};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_BINS: usize = 60;
pub const CHART_TITLE: &str = "Downsian competition in 1D policy space";

/// Equal-width bins over [0, 1]; the last bin is closed on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_population(voters: &VoterPopulation, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(DownsianError::InvalidBins);
        }
        let mut counts = vec![0usize; bins];
        for voter in voters.iter() {
            let index = ((voter * bins as f64) as usize).min(bins - 1);
            counts[index] += 1;
        }
        Ok(Self {
            bin_width: 1.0 / bins as f64,
            counts,
        })
    }

    /// Left edge of every bin.
    pub fn edges(&self) -> Vec<f64> {
        (0..self.counts.len())
            .map(|i| i as f64 * self.bin_width)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Party(Party),
    MedianVoter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub label: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub party: Party,
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub title: String,
    pub distribution: DistributionKind,
    pub total_voters: usize,
    pub histogram: Histogram,
    pub markers: Vec<Marker>,
    pub annotations: Vec<Annotation>,
    pub share_a: f64,
    pub share_b: f64,
    pub winner: Option<Party>,
}

impl ChartReport {
    pub fn build(
        distribution: DistributionKind,
        voters: &VoterPopulation,
        results: &ElectionResults,
        bins: usize,
    ) -> Result<Self> {
        let histogram = Histogram::from_population(voters, bins)?;

        let markers = vec![
            party_marker(results, Party::A),
            party_marker(results, Party::B),
            Marker {
                kind: MarkerKind::MedianVoter,
                label: "Median".to_string(),
                x: results.median,
            },
        ];

        let annotations = [Party::A, Party::B]
            .into_iter()
            .map(|party| Annotation {
                party,
                text: format!("Vote share {}: {}", party, format_share(results.share(party))),
                x: results.position(party).value(),
            })
            .collect();

        Ok(Self {
            title: CHART_TITLE.to_string(),
            distribution,
            total_voters: results.total_voters,
            histogram,
            markers,
            annotations,
            share_a: results.share_a,
            share_b: results.share_b,
            winner: results.winner(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn party_marker(results: &ElectionResults, party: Party) -> Marker {
    Marker {
        kind: MarkerKind::Party(party),
        label: party.to_string(),
        x: results.position(party).value(),
    }
}

impl fmt::Display for ChartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.title)?;
        writeln!(f, "Distribution: {} ({} voters)", self.distribution, self.total_voters)?;
        for marker in &self.markers {
            writeln!(f, "• {} at {:.3}", marker.label, marker.x)?;
        }
        for annotation in &self.annotations {
            writeln!(f, "{}", annotation.text)?;
        }
        match self.winner {
            Some(party) => write!(f, "\nParty {} leads.", party),
            None => write!(f, "\nThe parties are tied."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::evaluate;

    fn five_voters() -> VoterPopulation {
        VoterPopulation::from_unsorted(vec![0.0, 0.25, 0.5, 0.75, 1.0]).unwrap()
    }

    #[test]
    fn histogram_counts_every_voter() {
        let histogram = Histogram::from_population(&five_voters(), 4).unwrap();
        assert_eq!(histogram.counts, vec![1, 1, 1, 2]);
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.peak(), 2);
        assert_eq!(histogram.edges(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn histogram_needs_bins() {
        assert!(matches!(
            Histogram::from_population(&five_voters(), 0),
            Err(DownsianError::InvalidBins)
        ));
    }

    #[test]
    fn report_carries_markers_and_annotations() {
        let voters = five_voters();
        let results = evaluate(&voters, 0.2, 0.8).unwrap();
        let report =
            ChartReport::build(DistributionKind::Normal, &voters, &results, DEFAULT_BINS).unwrap();

        assert_eq!(report.histogram.counts.len(), DEFAULT_BINS);
        assert_eq!(report.markers.len(), 3);
        assert_eq!(report.markers[2].kind, MarkerKind::MedianVoter);
        assert_eq!(report.markers[2].x, 0.5);
        assert_eq!(report.annotations[0].text, "Vote share A: 50.000%");
        assert_eq!(report.annotations[1].text, "Vote share B: 50.000%");
        assert_eq!(report.winner, None);

        let summary = report.to_string();
        assert!(summary.contains("The parties are tied."));
    }

    #[test]
    fn report_serializes_to_json() {
        let voters = five_voters();
        let results = evaluate(&voters, 0.1, 0.9).unwrap();
        let report = ChartReport::build(DistributionKind::Skewed, &voters, &results, 10).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["distribution"], "Skewed");
        assert_eq!(json["total_voters"], 5);
        assert_eq!(json["histogram"]["counts"].as_array().unwrap().len(), 10);
    }
}
