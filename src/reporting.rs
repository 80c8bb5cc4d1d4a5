use colored::*;

use crate::results::CandidateResult;
use crate::voting::Matchup;

/// Displays the ranked results, winner first.
pub fn results(results : &[CandidateResult]) {
    if results.is_empty() {
        println!("{}", "No results to rank.".bright_yellow());
        return;
    }

    println!("{}", "Results:".bright_yellow().bold());
    for (rank, result) in results.iter().enumerate() {
        println!(
            "    #{} {}  net {} ({}-{})",
            rank + 1,
            result.candidate(),
            result.net(),
            result.wins(),
            result.losses()
        );
    }

    winner(&results[0]);
}

/// Displays the winner.
pub fn winner(winner : &CandidateResult) {
    println!("{} {}", "Winner:".bright_blue(), winner.candidate());
}

/// Displays the first round of a seeded bracket.
pub fn matchups(matchups : &[Matchup]) {
    println!("{}", "Bracket:".bright_magenta().bold());
    for Matchup { higher, lower } in matchups {
        println!(
            "    #{} {} ({}) {} #{} {} ({})",
            higher.seed,
            higher.candidate,
            higher.rating,
            "vs".bright_cyan(),
            lower.seed,
            lower.candidate,
            lower.rating
        );
    }
}

/// Displays an error that stopped the count.
pub fn error(error : &dyn std::error::Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
