use tracing::{debug, info};

use crate::candidates::{Candidate, CandidateSet};

/// Represents a ballot paper: candidates in order of preference, most preferred first. Entries
/// need not belong to the official candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot(Vec<Candidate>);

impl Ballot {
    /// Creates a new ballot from candidates in order of preference.
    pub fn new(ballot : Vec<Candidate>) -> Ballot {
        Ballot(ballot)
    }

    /// Creates a ballot from names in order of preference.
    pub fn from_names<I, S>(names : I) -> Ballot
    where
        I : IntoIterator<Item = S>,
        S : Into<String>,
    {
        Ballot(names.into_iter().map(Candidate::new).collect())
    }

    /// Creates an iterator over the candidates on the ballot.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    /// Returns the number of preferences, write-ins included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no preference was expressed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the highest preference, if any was expressed.
    pub fn first_pref(&self) -> Option<&Candidate> {
        self.0.first()
    }

    /// Resolves the ballot against the official candidates, returning their indices in order of
    /// preference. Write-ins are dropped, as is any repeat of a candidate already ranked higher.
    pub fn effective(&self, candidates : &CandidateSet) -> Vec<usize> {
        let mut seen = vec![false; candidates.len()];
        let mut effective = Vec::with_capacity(self.0.len().min(candidates.len()));

        for candidate in &self.0 {
            match candidates.index_of(candidate) {
                None => info!(%candidate, "ignoring write-in"),
                Some(index) if seen[index] => debug!(%candidate, "ignoring repeated preference"),
                Some(index) => {
                    seen[index] = true;
                    effective.push(index);
                }
            }
        }

        effective
    }
}

impl FromIterator<Candidate> for Ballot {
    fn from_iter<I : IntoIterator<Item = Candidate>>(iter : I) -> Self {
        Ballot(iter.into_iter().collect())
    }
}
