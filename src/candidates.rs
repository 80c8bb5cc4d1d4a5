use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

/// A named contender. Names compare, order and hash without regard to case.
#[derive(Debug, Clone)]
pub struct Candidate {
    name : String,
}

impl Candidate {
    /// Creates a candidate from its raw name.
    pub fn new(name : impl Into<String>) -> Self {
        Candidate { name : name.into() }
    }

    /// The name exactly as it was provided.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case folded characters of the name, used for every comparison so that equality, ordering
    /// and hashing can never disagree.
    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.name.chars().flat_map(char::to_uppercase)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other : &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other : &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other : &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl Hash for Candidate {
    fn hash<H : Hasher>(&self, state : &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The official candidates, unique under `Candidate` equality and kept in insertion order. The
/// position of a candidate in the set is its index throughout the engines.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet(IndexSet<Candidate>);

impl CandidateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        CandidateSet(IndexSet::new())
    }

    /// Adds a candidate, returning `false` if an equal candidate was already present (the first
    /// spelling is kept).
    pub fn insert(&mut self, candidate : Candidate) -> bool {
        self.0.insert(candidate)
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether an equal candidate is in the set.
    pub fn contains(&self, candidate : &Candidate) -> bool {
        self.0.contains(candidate)
    }

    /// Gets the index assigned to a candidate.
    pub fn index_of(&self, candidate : &Candidate) -> Option<usize> {
        self.0.get_index_of(candidate)
    }

    /// Gets a candidate based on their index.
    pub fn get(&self, index : usize) -> Option<&Candidate> {
        self.0.get_index(index)
    }

    /// Iterates the candidates in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Candidate> {
        self.0.iter()
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<I : IntoIterator<Item = Candidate>>(iter : I) -> Self {
        CandidateSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = indexmap::set::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
