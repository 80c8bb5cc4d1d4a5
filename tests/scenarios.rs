use ranked_vote_engine::loading::{mock_ballots, mock_candidates};
use ranked_vote_engine::rng::ElectionRng;
use ranked_vote_engine::voting::{Copeland, CopelandWeightedRandom, FirstPastThePost};
use ranked_vote_engine::{Ballot, Candidate, CandidateResult, CandidateSet, VotingSystem};

fn result(name : &str, wins : u32, losses : u32) -> CandidateResult {
    CandidateResult::new(Candidate::new(name), wins, losses)
}

fn repeat<'a>(names : &'a [&'a str], count : usize) -> impl Iterator<Item = Ballot> + 'a {
    std::iter::repeat_with(move || Ballot::from_names(names.iter().copied())).take(count)
}

#[test]
fn copeland_wikipedia_abcde() {
    let results = Copeland.ranked_results(&mock_candidates(), &mock_ballots()).unwrap();
    assert_eq!(
        results,
        vec![
            result("A", 3, 1),
            result("B", 2, 2),
            result("C", 2, 2),
            result("E", 2, 2),
            result("D", 1, 3),
        ]
    );
}

#[test]
fn copeland_wikipedia_tennessee() {
    let candidates : CandidateSet =
        ["Memphis", "Nashville", "Chattanooga", "Knoxville"].into_iter().map(Candidate::new).collect();

    let ballots : Vec<Ballot> =
        repeat(&["Memphis", "Nashville", "Chattanooga", "Knoxville"], 42)
        .chain(repeat(&["Nashville", "Chattanooga", "Knoxville", "Memphis"], 26))
        .chain(repeat(&["Chattanooga", "Knoxville", "Nashville", "Memphis"], 15))
        .chain(repeat(&["Knoxville", "Chattanooga", "Nashville", "Memphis"], 17))
        .collect();

    let results = Copeland.ranked_results(&candidates, &ballots).unwrap();
    assert_eq!(
        results,
        vec![
            result("Nashville", 3, 0),
            result("Chattanooga", 2, 1),
            result("Knoxville", 1, 2),
            result("Memphis", 0, 3),
        ]
    );
    assert_eq!(Copeland.winner(&candidates, &ballots).unwrap(), Some(result("nashville", 3, 0)));
}

#[test]
fn copeland_ignores_write_ins_in_the_wikipedia_election() {
    let ballots : Vec<Ballot> =
        mock_ballots()
        .into_iter()
        .map(|ballot| {
            let mut names : Vec<Candidate> = ballot.iter().cloned().collect();
            names.insert(1, Candidate::new("Write-In"));
            Ballot::new(names)
        })
        .collect();

    assert_eq!(
        Copeland.rank(&mock_candidates(), &ballots),
        Copeland.rank(&mock_candidates(), &mock_ballots())
    );
}

#[test]
fn first_past_the_post_wikipedia() {
    let results = FirstPastThePost.ranked_results(&mock_candidates(), &mock_ballots()).unwrap();
    assert_eq!(
        results,
        vec![
            result("A", 31, 0),
            result("B", 30, 0),
            result("C", 29, 0),
            result("D", 10, 0),
            result("E", 0, 0),
        ]
    );
}

#[test]
fn first_past_the_post_tie() {
    let candidates : CandidateSet = ["A", "B"].into_iter().map(Candidate::new).collect();
    let ballots = vec![
        Ballot::from_names(["A", "B"]),
        Ballot::from_names(["A"]),
        Ballot::from_names(["B", "A"]),
        Ballot::from_names(["B"]),
    ];
    let results = FirstPastThePost.ranked_results(&candidates, &ballots).unwrap();
    assert_eq!(results, vec![result("A", 2, 0), result("B", 2, 0)]);
}

#[test]
fn weighted_random_is_reproducible_and_returns_a_copeland_record() {
    let copeland = Copeland.rank(&mock_candidates(), &mock_ballots());

    let winners : Vec<Vec<CandidateResult>> = (0..2)
        .map(|_| {
            let system = CopelandWeightedRandom::new(ElectionRng::from_seed_u64(31_337));
            (0..10)
                .map(|_| system.ranked_results(&mock_candidates(), &mock_ballots()).unwrap().remove(0))
                .collect()
        })
        .collect();

    assert_eq!(winners[0], winners[1]);
    assert!(winners[0].iter().all(|winner| copeland.contains(winner)));
}

#[test]
fn weighted_random_single_candidate() {
    let candidates : CandidateSet = std::iter::once(Candidate::new("Only")).collect();
    let system = CopelandWeightedRandom::new(ElectionRng::from_seed_u64(0));
    let ballots = vec![Ballot::from_names(["Only", "Other"])];
    assert_eq!(system.ranked_results(&candidates, &ballots).unwrap(), vec![result("Only", 0, 0)]);
}
