use tracing::{debug, error, info};

use crate::ballot::Ballot;
use crate::candidates::{Candidate, CandidateSet};
use crate::error::VoteError;
use crate::ratings::RatingLookup;
use crate::results::CandidateResult;
use crate::voting::VotingSystem;

/// A candidate with its bracket seed (1 is the best rated).
#[derive(Debug, Clone, PartialEq)]
pub struct Seeded {
    pub seed : usize,
    pub candidate : Candidate,
    pub rating : f64,
}

/// A first round pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub higher : Seeded,
    pub lower : Seeded,
}

/// Seeds a single elimination bracket by popularity rating. No ballots are counted.
#[derive(Debug, Clone)]
pub struct Bracket<L> {
    ratings : L,
}

impl<L : RatingLookup> Bracket<L> {
    /// Creates a bracket that seeds with the given ratings.
    pub fn new(ratings : L) -> Self {
        Bracket { ratings }
    }

    /// Pairs seed 1 with seed n, 2 with n - 1, and so on. Equal ratings keep the candidate set's
    /// order. The candidate count must be a power of two, checked before any rating is looked up.
    pub fn matchups(&self, candidates : &CandidateSet) -> Result<Vec<Matchup>, VoteError> {
        let count = candidates.len();
        check_size(count)?;

        let mut rated : Vec<(Candidate, f64)> =
            candidates
            .iter()
            .map(|candidate| (candidate.clone(), self.ratings.rating_or_fallback(candidate)))
            .collect();
        rated.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let mut seeded : Vec<Seeded> =
            rated
            .into_iter()
            .enumerate()
            .map(|(i, (candidate, rating))| {
                debug!(seed = i + 1, %candidate, rating, "seeded");
                Seeded { seed : i + 1, candidate, rating }
            })
            .collect();

        // 1v32, 2v31, ..., 16v17
        let lowest = seeded.split_off(count / 2);
        let matchups =
            seeded
            .into_iter()
            .zip(lowest.into_iter().rev())
            .map(|(higher, lower)| Matchup { higher, lower })
            .collect();

        Ok(matchups)
    }
}

/// Fails unless `count` candidates can fill a bracket, i.e. `count` is a power of two.
pub fn check_size(count : usize) -> Result<(), VoteError> {
    if count.is_power_of_two() {
        return Ok(());
    }

    error!(count, "cannot seed a bracket, candidate count must be a power of two");
    Err(VoteError::InvalidInput {
        method : "bracket",
        count,
        reason : "the candidate count must be a power of two",
    })
}

impl<L : RatingLookup> VotingSystem for Bracket<L> {
    /// Logs the seeded matchups and returns no results; a bracket has no winner until it is played.
    fn ranked_results(
        &self,
        candidates : &CandidateSet,
        _ballots : &[Ballot],
    ) -> Result<Vec<CandidateResult>, VoteError> {
        for Matchup { higher, lower } in self.matchups(candidates)? {
            info!(
                "#{} {} ({}) vs #{} {} ({})",
                higher.seed, higher.candidate, higher.rating, lower.seed, lower.candidate, lower.rating
            );
        }

        Ok(Vec::new())
    }
}
