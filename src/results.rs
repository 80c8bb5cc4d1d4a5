use std::fmt;

use crate::candidates::Candidate;

/// A candidate's aggregated record as produced by a voting system. For first past the post the
/// wins are first preference votes and there are never any losses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult {
    candidate : Candidate,
    wins : u32,
    losses : u32,
}

impl CandidateResult {
    /// Creates a result from a win and loss record.
    pub fn new(candidate : Candidate, wins : u32, losses : u32) -> Self {
        CandidateResult { candidate, wins, losses }
    }

    /// The candidate the record belongs to.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Pairwise wins, or first preference votes.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Pairwise losses.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Wins minus losses.
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }
}

impl fmt::Display for CandidateResult {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (net {} = {} - {})", self.candidate, self.net(), self.wins, self.losses)
    }
}
