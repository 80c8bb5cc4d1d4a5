use tracing::trace;

use crate::ballot::Ballot;
use crate::candidates::CandidateSet;
use crate::error::VoteError;
use crate::results::CandidateResult;
use crate::voting::VotingSystem;

/// Head to head preference counts between every two official candidates, indexed by their
/// position in the candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseTable {
    size : usize,
    wins : Vec<u32>,
}

impl PairwiseTable {
    fn new(size : usize) -> Self {
        PairwiseTable {
            size,
            wins : vec![0; size * size],
        }
    }

    /// Number of candidates covered by the table.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table covers no candidates.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of ballots preferring candidate `winner` over candidate `loser`.
    pub fn wins(&self, winner : usize, loser : usize) -> u32 {
        self.wins[winner * self.size + loser]
    }

    fn increment(&mut self, winner : usize, loser : usize) {
        self.wins[winner * self.size + loser] += 1;
    }

    /// Adds one effective ballot. Each candidate beats everyone ranked below it and everyone left
    /// off the ballot.
    fn record(&mut self, effective : &[usize]) {
        if effective.is_empty() {
            return;
        }

        let mut ranked = vec![false; self.size];
        for (position, &current) in effective.iter().enumerate() {
            ranked[current] = true;
            for &below in &effective[position + 1..] {
                self.increment(current, below);
            }
        }

        let unranked : Vec<usize> = (0..self.size).filter(|&c| !ranked[c]).collect();
        for &voted in effective {
            for &not_voted in &unranked {
                self.increment(voted, not_voted);
            }
        }
    }

    /// Decides every match once (AvB, AvC, ..., BvC, ...) and returns each candidate's
    /// `(wins, losses)`. A drawn match counts for neither.
    pub fn records(&self) -> Vec<(u32, u32)> {
        let mut records = vec![(0u32, 0u32); self.size];

        for lhs in 0..self.size {
            for rhs in lhs + 1..self.size {
                let lhs_wins = self.wins(lhs, rhs);
                let rhs_wins = self.wins(rhs, lhs);
                trace!(lhs, lhs_wins, rhs, rhs_wins, "pairwise comparison");

                if lhs_wins > rhs_wins {
                    records[lhs].0 += 1;
                    records[rhs].1 += 1;
                }
                else if rhs_wins > lhs_wins {
                    records[rhs].0 += 1;
                    records[lhs].1 += 1;
                }
            }
        }

        records
    }
}

/// Copeland's method: rank candidates by pairwise match wins minus pairwise match losses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Copeland;

impl Copeland {
    /// Builds the pairwise table from the ballots, with write-ins removed first.
    pub fn pairwise(&self, candidates : &CandidateSet, ballots : &[Ballot]) -> PairwiseTable {
        let mut table = PairwiseTable::new(candidates.len());
        for ballot in ballots {
            table.record(&ballot.effective(candidates));
        }
        table
    }

    /// One result per candidate, ordered by net descending, then wins descending, then losses
    /// ascending. Anything still equal keeps the candidate set's order.
    pub fn rank(&self, candidates : &CandidateSet, ballots : &[Ballot]) -> Vec<CandidateResult> {
        let records = self.pairwise(candidates, ballots).records();

        let mut results : Vec<CandidateResult> =
            candidates
            .iter()
            .zip(records)
            .map(|(candidate, (wins, losses))| CandidateResult::new(candidate.clone(), wins, losses))
            .collect();

        results.sort_by(|a, b| {
            b.net().cmp(&a.net())
                .then_with(|| b.wins().cmp(&a.wins()))
                .then_with(|| a.losses().cmp(&b.losses()))
        });

        results
    }
}

impl VotingSystem for Copeland {
    fn ranked_results(
        &self,
        candidates : &CandidateSet,
        ballots : &[Ballot],
    ) -> Result<Vec<CandidateResult>, VoteError> {
        Ok(self.rank(candidates, ballots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Candidate;
    use proptest::prelude::*;

    fn set(names : &[&str]) -> CandidateSet {
        names.iter().copied().map(Candidate::new).collect()
    }

    fn records(results : &[CandidateResult]) -> Vec<(String, u32, u32)> {
        results
            .iter()
            .map(|r| (r.candidate().name().to_string(), r.wins(), r.losses()))
            .collect()
    }

    #[test]
    fn counts_every_lower_preference_not_just_the_next() {
        let candidates = set(&["A", "B", "C"]);
        let table = Copeland.pairwise(&candidates, &[Ballot::from_names(["A", "B", "C"])]);
        assert_eq!(table.wins(0, 1), 1);
        assert_eq!(table.wins(0, 2), 1);
        assert_eq!(table.wins(1, 2), 1);
        assert_eq!(table.wins(1, 0) + table.wins(2, 0) + table.wins(2, 1), 0);
    }

    #[test]
    fn ranked_candidates_beat_unranked_ones() {
        let candidates = set(&["A", "B", "C", "D"]);
        let table = Copeland.pairwise(&candidates, &[Ballot::from_names(["C", "A"])]);
        assert_eq!(table.wins(2, 1), 1);
        assert_eq!(table.wins(2, 3), 1);
        assert_eq!(table.wins(0, 1), 1);
        assert_eq!(table.wins(0, 3), 1);
        assert_eq!(table.wins(1, 3), 0);
        assert_eq!(table.wins(3, 1), 0);
    }

    #[test]
    fn ballot_without_official_candidates_changes_nothing() {
        let candidates = set(&["A", "B"]);
        let table = Copeland.pairwise(&candidates, &[Ballot::from_names(["X"]), Ballot::new(Vec::new())]);
        assert_eq!(table, Copeland.pairwise(&candidates, &[]));
    }

    #[test]
    fn drawn_match_counts_for_neither() {
        let candidates = set(&["A", "B"]);
        let ballots = vec![Ballot::from_names(["A", "B"]), Ballot::from_names(["B", "A"])];
        let results = Copeland.rank(&candidates, &ballots);
        assert_eq!(records(&results), vec![("A".into(), 0, 0), ("B".into(), 0, 0)]);
    }

    #[test]
    fn condorcet_cycle_ties_everyone() {
        let candidates = set(&["A", "B", "C"]);
        let ballots = vec![
            Ballot::from_names(["A", "B", "C"]),
            Ballot::from_names(["B", "C", "A"]),
            Ballot::from_names(["C", "A", "B"]),
        ];
        let results = Copeland.rank(&candidates, &ballots);
        assert_eq!(records(&results), vec![("A".into(), 1, 1), ("B".into(), 1, 1), ("C".into(), 1, 1)]);
    }

    #[test]
    fn tiny_candidate_sets() {
        assert!(Copeland.rank(&CandidateSet::new(), &[Ballot::from_names(["A"])]).is_empty());

        let results = Copeland.rank(&set(&["Solo"]), &[Ballot::from_names(["Solo"])]);
        assert_eq!(records(&results), vec![("Solo".into(), 0, 0)]);
    }

    #[test]
    fn orders_by_net_then_wins_then_losses() {
        // A beats B, A and C draw, C beats B.
        let candidates = set(&["B", "C", "A"]);
        let ballots = vec![
            Ballot::from_names(["A", "C", "B"]),
            Ballot::from_names(["C", "A", "B"]),
        ];
        let results = Copeland.rank(&candidates, &ballots);
        assert_eq!(records(&results), vec![("C".into(), 1, 0), ("A".into(), 1, 0), ("B".into(), 0, 2)]);
    }

    #[test]
    fn equal_net_is_broken_by_wins() {
        // Q beats P and draws R and S. P beats R and S. R beats S.
        let candidates = set(&["Q", "P", "R", "S"]);
        let ballots = vec![
            Ballot::from_names(["Q", "P", "R", "S"]),
            Ballot::from_names(["Q", "P", "R", "S"]),
            Ballot::from_names(["P", "R", "S", "Q"]),
            Ballot::from_names(["R", "S", "Q", "P"]),
        ];
        let results = Copeland.rank(&candidates, &ballots);
        assert_eq!(
            records(&results),
            vec![("P".into(), 2, 1), ("Q".into(), 1, 0), ("R".into(), 1, 1), ("S".into(), 0, 2)]
        );
    }

    #[test]
    fn independent_threads_agree() {
        let candidates = set(&["A", "B", "C"]);
        let ballots = vec![Ballot::from_names(["B", "C"]), Ballot::from_names(["B", "A"])];
        let expected = Copeland.rank(&candidates, &ballots);

        std::thread::scope(|scope| {
            let handles : Vec<_> = (0..4).map(|_| scope.spawn(|| Copeland.rank(&candidates, &ballots))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn election() -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
        (0..6usize, prop::collection::vec(prop::collection::vec(0..9usize, 0..7), 0..12))
    }

    /// Indices below `size` are official candidates, the rest are write-ins.
    fn build(size : usize, raw : &[Vec<usize>], keep_write_ins : bool) -> (CandidateSet, Vec<Ballot>) {
        let candidates = (0..size).map(|i| Candidate::new(format!("c{i}"))).collect();
        let ballots = raw
            .iter()
            .map(|ballot| {
                ballot
                    .iter()
                    .filter(|&&i| keep_write_ins || i < size)
                    .map(|&i| if i < size { Candidate::new(format!("C{i}")) } else { Candidate::new(format!("write-in {i}")) })
                    .collect()
            })
            .collect();
        (candidates, ballots)
    }

    proptest! {
        #[test]
        fn every_candidate_reported_once_with_bounded_record((size, raw) in election()) {
            let (candidates, ballots) = build(size, &raw, true);
            let results = Copeland.rank(&candidates, &ballots);

            prop_assert_eq!(results.len(), size);
            for candidate in &candidates {
                prop_assert_eq!(results.iter().filter(|r| r.candidate() == candidate).count(), 1);
            }
            for result in &results {
                prop_assert!(u64::from(result.wins()) + u64::from(result.losses()) <= size.saturating_sub(1) as u64);
                prop_assert_eq!(result.net(), i64::from(result.wins()) - i64::from(result.losses()));
            }
        }

        #[test]
        fn total_wins_equal_total_losses((size, raw) in election()) {
            let (candidates, ballots) = build(size, &raw, true);
            let results = Copeland.rank(&candidates, &ballots);
            let wins : u32 = results.iter().map(CandidateResult::wins).sum();
            let losses : u32 = results.iter().map(CandidateResult::losses).sum();
            prop_assert_eq!(wins, losses);
        }

        #[test]
        fn write_ins_do_not_change_pairwise_counts((size, raw) in election()) {
            let (candidates, with_write_ins) = build(size, &raw, true);
            let (_, without_write_ins) = build(size, &raw, false);
            prop_assert_eq!(
                Copeland.pairwise(&candidates, &with_write_ins),
                Copeland.pairwise(&candidates, &without_write_ins)
            );
        }

        #[test]
        fn results_are_sorted((size, raw) in election()) {
            let (candidates, ballots) = build(size, &raw, true);
            let results = Copeland.rank(&candidates, &ballots);
            for pair in results.windows(2) {
                let key = |r : &CandidateResult| (-r.net(), -i64::from(r.wins()), r.losses());
                prop_assert!(key(&pair[0]) <= key(&pair[1]));
            }
        }
    }
}
