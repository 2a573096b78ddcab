pub mod median;
pub mod proximity;

pub use median::median;
pub use proximity::{evaluate, evaluate_positions};

use crate::models::{Party, PartyPosition};
use serde::Serialize;

// Outcome of one proximity-voting evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectionResults {
    pub party_a: PartyPosition,
    pub party_b: PartyPosition,
    pub median: f64,
    pub votes_a: Vec<f64>,  // Ideal points of voters strictly closer to A
    pub votes_b: Vec<f64>,  // Ideal points of voters strictly closer to B
    pub ties: Vec<f64>,     // Ideal points exactly equidistant from both
    pub share_a: f64,
    pub share_b: f64,
    pub total_voters: usize,
}

impl ElectionResults {
    /// Party with the larger vote share, or `None` when the shares are equal.
    pub fn winner(&self) -> Option<Party> {
        if self.share_a > self.share_b {
            Some(Party::A)
        } else if self.share_b > self.share_a {
            Some(Party::B)
        } else {
            None
        }
    }

    pub fn margin(&self) -> f64 {
        self.share_a - self.share_b
    }

    /// Point on the line where a voter is indifferent between the parties.
    pub fn midpoint(&self) -> f64 {
        (self.party_a.value() + self.party_b.value()) / 2.0
    }

    pub fn share(&self, party: Party) -> f64 {
        match party {
            Party::A => self.share_a,
            Party::B => self.share_b,
        }
    }

    pub fn position(&self, party: Party) -> PartyPosition {
        match party {
            Party::A => self.party_a,
            Party::B => self.party_b,
        }
    }
}

/// Formats a vote-share fraction as a percentage, e.g. `0.667` -> `"66.700%"`.
pub fn format_share(share: f64) -> String {
    format!("{:.3}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VoterPopulation;

    #[test]
    fn margin_and_winner_follow_the_shares() {
        let voters = VoterPopulation::from_unsorted(vec![0.0, 0.125, 0.25, 0.875]).unwrap();
        let results = evaluate(&voters, 0.25, 0.75).unwrap();
        assert_eq!(results.share_a, 0.75);
        assert_eq!(results.share_b, 0.25);
        assert_eq!(results.margin(), 0.5);
        assert_eq!(results.winner(), Some(Party::A));
        assert_eq!(results.midpoint(), 0.5);

        let swapped = evaluate(&voters, 0.75, 0.25).unwrap();
        assert_eq!(swapped.margin(), -0.5);
        assert_eq!(swapped.winner(), Some(Party::B));

        let tied = evaluate(&voters, 0.4, 0.4).unwrap();
        assert_eq!(tied.margin(), 0.0);
        assert_eq!(tied.winner(), None);
    }

    #[test]
    fn formats_shares_as_percentages() {
        assert_eq!(format_share(0.667), "66.700%");
        assert_eq!(format_share(0.5), "50.000%");
        assert_eq!(format_share(1.0), "100.000%");
        assert_eq!(format_share(0.0), "0.000%");
    }
}
