//! The voting systems. Each takes the official candidates and the ballots and ranks the
//! candidates, winner first.

pub mod bracket;
pub mod copeland;
pub mod copeland_weighted_random;
pub mod first_past_the_post;

pub use bracket::{Bracket, Matchup, Seeded};
pub use copeland::{Copeland, PairwiseTable};
pub use copeland_weighted_random::CopelandWeightedRandom;
pub use first_past_the_post::FirstPastThePost;

use crate::ballot::Ballot;
use crate::candidates::CandidateSet;
use crate::error::VoteError;
use crate::results::CandidateResult;

/// A method of ranking candidates from ballots.
pub trait VotingSystem {
    /// Returns the results with the winner first and the loser last. A system that cannot rank
    /// every candidate may return fewer results, or none.
    fn ranked_results(
        &self,
        candidates : &CandidateSet,
        ballots : &[Ballot],
    ) -> Result<Vec<CandidateResult>, VoteError>;

    /// Returns the winner, if the system produced one.
    fn winner(
        &self,
        candidates : &CandidateSet,
        ballots : &[Ballot],
    ) -> Result<Option<CandidateResult>, VoteError> {
        Ok(self.ranked_results(candidates, ballots)?.into_iter().next())
    }
}
