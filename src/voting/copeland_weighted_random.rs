use std::sync::{Mutex, PoisonError};

use rand_core::RngCore;
use tracing::debug;

use crate::ballot::Ballot;
use crate::candidates::CandidateSet;
use crate::error::VoteError;
use crate::results::CandidateResult;
use crate::rng::{uniform_below, ElectionRng};
use crate::voting::{Copeland, VotingSystem};

/// Draws a single winner at random, weighted by Copeland score.
///
/// With `n` candidates a Copeland net score lies in `[-(n - 1), n - 1]`, which is shifted to a
/// weight in `[1, 2n - 1]`, so every candidate has a chance. Conceptually each result is repeated
/// `weight` times in Copeland order and one position of that sequence is drawn uniformly.
///
/// The random source sits behind a mutex so one instance can serve concurrent callers.
#[derive(Debug)]
pub struct CopelandWeightedRandom<R = ElectionRng> {
    copeland : Copeland,
    rng : Mutex<R>,
}

impl<R : RngCore> CopelandWeightedRandom<R> {
    /// Creates the system around an injected random source.
    pub fn new(rng : R) -> Self {
        CopelandWeightedRandom {
            copeland : Copeland,
            rng : Mutex::new(rng),
        }
    }

    /// Gives back the random source, e.g. to continue a seeded stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn draw(&self, total : u64) -> Option<u64> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        uniform_below(&mut *rng, total)
    }
}

/// Weight of every Copeland result: net score plus the number of candidates.
pub fn weights(results : &[CandidateResult], candidate_count : usize) -> Vec<u64> {
    let n = candidate_count as i64;
    results
        .iter()
        .map(|result| u64::try_from(result.net() + n).unwrap_or(0))
        .collect()
}

/// Position in `weights` owning `index` of the flattened sequence, where position `i` occupies
/// `weights[i]` consecutive slots.
pub fn select(weights : &[u64], index : u64) -> Option<usize> {
    let mut cumulative = 0u64;
    for (position, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if index < cumulative {
            return Some(position);
        }
    }
    None
}

impl<R : RngCore> VotingSystem for CopelandWeightedRandom<R> {
    /// Returns only the drawn winner, with its full Copeland record.
    fn ranked_results(
        &self,
        candidates : &CandidateSet,
        ballots : &[Ballot],
    ) -> Result<Vec<CandidateResult>, VoteError> {
        let mut results = self.copeland.rank(candidates, ballots);
        let weights = weights(&results, candidates.len());
        let total : u64 = weights.iter().sum();

        let index = self.draw(total).ok_or(VoteError::EmptyDistribution)?;
        let winner = select(&weights, index).ok_or(VoteError::EmptyDistribution)?;
        debug!(total, index, winner = %results[winner].candidate(), "weighted draw");

        Ok(vec![results.swap_remove(winner)])
    }
}
