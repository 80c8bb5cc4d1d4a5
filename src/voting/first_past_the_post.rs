use crate::ballot::Ballot;
use crate::candidates::CandidateSet;
use crate::error::VoteError;
use crate::results::CandidateResult;
use crate::voting::VotingSystem;

/// Counts only the highest effective preference on each ballot.
///
/// Write-ins are removed before the first preference is taken, and ballots left empty are not
/// counted. Every official candidate is reported, with zero if nobody put them first. Equal
/// counts keep the candidate set's order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPastThePost;

impl FirstPastThePost {
    /// Counts first preferences and returns every candidate, most votes first.
    pub fn rank(&self, candidates : &CandidateSet, ballots : &[Ballot]) -> Vec<CandidateResult> {
        let mut tally = vec![0u32; candidates.len()];

        for ballot in ballots {
            if let Some(&first) = ballot.effective(candidates).first() {
                tally[first] += 1;
            }
        }

        let mut results : Vec<CandidateResult> =
            candidates
            .iter()
            .zip(tally)
            .map(|(candidate, votes)| CandidateResult::new(candidate.clone(), votes, 0))
            .collect();

        // `sort_by` is stable, so ties stay in candidate order.
        results.sort_by(|a, b| b.wins().cmp(&a.wins()));
        results
    }
}

impl VotingSystem for FirstPastThePost {
    fn ranked_results(
        &self,
        candidates : &CandidateSet,
        ballots : &[Ballot],
    ) -> Result<Vec<CandidateResult>, VoteError> {
        Ok(self.rank(candidates, ballots))
    }
}
