use crate::error::{DownsianError, Result};
use crate::models::{Party, PartyPosition, VoterPopulation};
use crate::voting::{median, ElectionResults};
use log::{debug, warn};

/// Where a single voter's support goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    Vote(Party),
    Tie,
}

/// Assigns a voter to the nearer party.
///
/// Equidistance is tested exactly, with no tolerance. The comparison is made
/// against the indifference point `(a + b) / 2` rather than between the two
/// separately computed distances `|v - a|` and `|v - b|`. The two forms agree
/// except where those distances round differently: a voter exactly on the
/// midpoint then ties here, while the distance form hands it to one party
/// (`|0.5 - 0.2|` is `0.3` but `|0.5 - 0.8|` is `0.30000000000000004`).
/// Every such disagreement is a voter sitting on the exact midpoint.
pub fn allocate_voter(voter: f64, party_a: f64, party_b: f64) -> Allocation {
    if party_a == party_b {
        return Allocation::Tie;
    }
    let midpoint = (party_a + party_b) / 2.0;
    let (left, right) = if party_a < party_b {
        (Party::A, Party::B)
    } else {
        (Party::B, Party::A)
    };
    if voter < midpoint {
        Allocation::Vote(left)
    } else if voter > midpoint {
        Allocation::Vote(right)
    } else {
        Allocation::Tie
    }
}

/// Validates both positions, then runs [`evaluate_positions`].
pub fn evaluate(voters: &VoterPopulation, pos_a: f64, pos_b: f64) -> Result<ElectionResults> {
    let party_a = PartyPosition::new(pos_a)?;
    let party_b = PartyPosition::new(pos_b)?;
    evaluate_positions(voters, party_a, party_b)
}

/// Computes the median voter and splits the population by proximity.
/// Ties count half towards each party's share.
pub fn evaluate_positions(
    voters: &VoterPopulation,
    party_a: PartyPosition,
    party_b: PartyPosition,
) -> Result<ElectionResults> {
    if voters.is_empty() {
        return Err(DownsianError::EmptyPopulation);
    }
    let median = median(voters.as_slice())?;

    if party_a == party_b {
        warn!("Both parties sit at {}; every voter is tied", party_a);
    }

    let mut votes_a = Vec::new();
    let mut votes_b = Vec::new();
    let mut ties = Vec::new();

    for voter in voters.iter() {
        match allocate_voter(voter, party_a.value(), party_b.value()) {
            Allocation::Vote(Party::A) => votes_a.push(voter),
            Allocation::Vote(Party::B) => votes_b.push(voter),
            Allocation::Tie => ties.push(voter),
        }
    }

    let total_voters = voters.len();
    let total = total_voters as f64;
    let half_ties = 0.5 * ties.len() as f64;
    let share_a = (votes_a.len() as f64 + half_ties) / total;
    let share_b = (votes_b.len() as f64 + half_ties) / total;

    debug!(
        "A at {} holds {} votes, B at {} holds {} votes, {} ties, median {:.4}",
        party_a,
        votes_a.len(),
        party_b,
        votes_b.len(),
        ties.len(),
        median
    );

    Ok(ElectionResults {
        party_a,
        party_b,
        median,
        votes_a,
        votes_b,
        ties,
        share_a,
        share_b,
        total_voters,
    })
}
