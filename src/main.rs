use std::path::{Path, PathBuf};
use std::process;

use clap::{Args as ClapArgs, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use ranked_vote_engine::loading::{self, LoadError};
use ranked_vote_engine::ratings::{CsvRatings, NoRatings, RatingLookup};
use ranked_vote_engine::reporting;
use ranked_vote_engine::rng::ElectionRng;
use ranked_vote_engine::voting::bracket::{self, Bracket};
use ranked_vote_engine::voting::{Copeland, CopelandWeightedRandom, FirstPastThePost, VotingSystem};
use ranked_vote_engine::{Ballot, CandidateSet};

#[derive(Parser, Debug)]
#[clap(author, version)]
/// Ranks candidates from ranked ballots.
struct Args {
    /// Voting method.
    #[clap(subcommand)]
    method : Method,

    #[clap(flatten)]
    data : DataOptions,

    /// Maximum log level (off, error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[clap(long, global = true, default_value = "info")]
    log_level : LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Method {
    /// Uses first past the post voting, also known as a simple majority rule.
    FirstPastThePost,

    /// Uses Copeland's method, ranking by pairwise wins minus pairwise losses.
    Copeland,

    /// Uses Copeland's method to weight candidates then randomly selects one.
    CopelandWeightedRandom {
        /// Seed for the draw. A random seed is chosen and logged if omitted.
        #[clap(long)]
        seed : Option<u64>,
    },

    /// Seeds a single elimination bracket by rating. The candidate count must be a power of two.
    Bracket {
        /// Headerless CSV of `name,rating` rows. Unrated candidates get the midpoint rating.
        #[clap(long)]
        ratings_path : Option<PathBuf>,
    },

    #[clap(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(ClapArgs, Debug)]
/// Where candidates and ballots come from.
struct DataOptions {
    /// Path to a text file with one candidate per line.
    #[clap(long, global = true)]
    candidates_path : Option<PathBuf>,

    /// Directory of ballot files, each listing one candidate per line in order of preference.
    #[clap(long, global = true)]
    votes_directory : Option<PathBuf>,

    /// CSV file with one ballot per row in order of preference.
    #[clap(long, global = true)]
    ballots_csv : Option<PathBuf>,

    /// Uses the built-in mock election instead of input files.
    #[clap(long, global = true)]
    use_mock_data : bool,
}

/// Where the ballots come from once the options have been checked.
enum DataSource<'a> {
    Mock,
    Directory { candidates : &'a Path, votes : &'a Path },
    Csv { candidates : &'a Path, ballots : &'a Path },
}

#[derive(Debug, Error)]
#[error("{0}")]
struct UsageError(&'static str);

impl DataOptions {
    fn source(&self) -> Result<DataSource<'_>, UsageError> {
        let paths = (&self.candidates_path, &self.votes_directory, &self.ballots_csv);

        match (self.use_mock_data, paths) {
            (true, (None, None, None)) => Ok(DataSource::Mock),
            (true, _) => Err(UsageError("--use-mock-data cannot be combined with input paths")),
            (false, (Some(candidates), Some(votes), None)) => Ok(DataSource::Directory { candidates, votes }),
            (false, (Some(candidates), None, Some(ballots))) => Ok(DataSource::Csv { candidates, ballots }),
            (false, (None, _, _)) => Err(UsageError("--candidates-path or --use-mock-data is required")),
            (false, (Some(_), None, None)) => Err(UsageError("--votes-directory or --ballots-csv is required")),
            (false, (Some(_), Some(_), Some(_))) => Err(UsageError("--votes-directory and --ballots-csv cannot be combined")),
        }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnCode {
    Success,
    FailedToParseOptions,
    UnknownVotingMethod,
    MissingInput,
    InvalidData,
}

impl ReturnCode {
    fn code(self) -> exitcode::ExitCode {
        match self {
            ReturnCode::Success => exitcode::OK,
            ReturnCode::FailedToParseOptions => exitcode::USAGE,
            ReturnCode::UnknownVotingMethod => exitcode::UNAVAILABLE,
            ReturnCode::MissingInput => exitcode::NOINPUT,
            ReturnCode::InvalidData => exitcode::DATAERR,
        }
    }
}

impl From<&LoadError> for ReturnCode {
    fn from(error : &LoadError) -> Self {
        if error.is_missing_input() {
            ReturnCode::MissingInput
        }
        else {
            ReturnCode::InvalidData
        }
    }
}

fn init_logging(level : LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(source : DataSource<'_>) -> Result<(CandidateSet, Vec<Ballot>), LoadError> {
    match source {
        DataSource::Mock => Ok((loading::mock_candidates(), loading::mock_ballots())),
        DataSource::Directory { candidates, votes } => {
            Ok((loading::candidates_from_file(candidates)?, loading::ballots_from_directory(votes)?))
        },
        DataSource::Csv { candidates, ballots } => {
            Ok((loading::candidates_from_file(candidates)?, loading::ballots_from_csv(ballots)?))
        },
    }
}

/// Runs a voting system and displays its ranking.
fn rank(system : &dyn VotingSystem, candidates : &CandidateSet, ballots : &[Ballot]) -> ReturnCode {
    match system.ranked_results(candidates, ballots) {
        Ok(results) => {
            reporting::results(&results);
            ReturnCode::Success
        },
        Err(error) => {
            reporting::error(&error);
            ReturnCode::InvalidData
        },
    }
}

/// Displays the seeded matchups of a bracket.
fn seed_bracket<L : RatingLookup>(bracket : Bracket<L>, candidates : &CandidateSet) -> ReturnCode {
    match bracket.matchups(candidates) {
        Ok(matchups) => {
            reporting::matchups(&matchups);
            ReturnCode::Success
        },
        Err(error) => {
            reporting::error(&error);
            ReturnCode::InvalidData
        },
    }
}

fn run(args : Args) -> ReturnCode {
    if let Method::Unknown(verb) = &args.method {
        let verb = verb.first().map(String::as_str).unwrap_or_default();
        error!(verb, "unknown voting method");
        return ReturnCode::UnknownVotingMethod;
    }

    let source = match args.data.source() {
        Ok(source) => source,
        Err(error) => {
            reporting::error(&error);
            return ReturnCode::FailedToParseOptions;
        },
    };

    let (candidates, ballots) = match load(source) {
        Ok(loaded) => loaded,
        Err(error) => {
            reporting::error(&error);
            return ReturnCode::from(&error);
        },
    };
    info!(candidates = candidates.len(), ballots = ballots.len(), "loaded election");

    match args.method {
        Method::FirstPastThePost => rank(&FirstPastThePost, &candidates, &ballots),
        Method::Copeland => rank(&Copeland, &candidates, &ballots),
        Method::CopelandWeightedRandom { seed } => {
            let rng = seed.map_or_else(ElectionRng::from_os_entropy, ElectionRng::from_seed_u64);
            info!(seed = rng.seed(), "weighted random draw");
            rank(&CopelandWeightedRandom::new(rng), &candidates, &ballots)
        },
        Method::Bracket { ratings_path } => {
            // Reject the size before reading any ratings.
            if let Err(error) = bracket::check_size(candidates.len()) {
                reporting::error(&error);
                return ReturnCode::InvalidData;
            }
            match ratings_path {
                None => seed_bracket(Bracket::new(NoRatings), &candidates),
                Some(path) => match CsvRatings::from_path(&path) {
                    Ok(ratings) => seed_bracket(Bracket::new(ratings), &candidates),
                    Err(error) => {
                        reporting::error(&error);
                        ReturnCode::from(&error)
                    },
                },
            }
        },
        Method::Unknown(_) => ReturnCode::UnknownVotingMethod,
    }
}

fn main() {
    let code = match Args::try_parse() {
        Ok(args) => {
            init_logging(args.log_level);
            run(args)
        },
        Err(error) => {
            // --help and --version also arrive here, on stdout.
            let code = if error.use_stderr() { ReturnCode::FailedToParseOptions } else { ReturnCode::Success };
            let _ = error.print();
            code
        },
    };

    info!(code = code.code(), status = ?code, "exiting");
    process::exit(code.code());
}
