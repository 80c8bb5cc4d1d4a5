//! Reading candidates and ballots from disk, plus the built-in mock election.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::ballot::Ballot;
use crate::candidates::{Candidate, CandidateSet};

/// Failure to read candidates, ballots or ratings.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path : PathBuf,
        #[source]
        source : io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path : PathBuf,
        #[source]
        source : csv::Error,
    },

    #[error("no candidates listed in {}", path.display())]
    EmptyCandidates { path : PathBuf },
}

impl LoadError {
    fn from_io(path : &Path, source : io::Error) -> Self {
        LoadError::Io { path : path.to_path_buf(), source }
    }

    pub(crate) fn from_csv(path : &Path, source : csv::Error) -> Self {
        LoadError::Csv { path : path.to_path_buf(), source }
    }

    /// True if the input could not be read at all, as opposed to being read and found invalid.
    pub fn is_missing_input(&self) -> bool {
        match self {
            LoadError::Io { source, .. } => source.kind() != io::ErrorKind::InvalidData,
            LoadError::Csv { source, .. } => source.is_io_error(),
            LoadError::EmptyCandidates { .. } => false,
        }
    }
}

/// Non-blank lines of a file, trimmed, one candidate per line.
fn read_names(path : &Path) -> Result<Vec<Candidate>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|error| LoadError::from_io(path, error))?;

    Ok(
        contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Candidate::new)
        .collect()
    )
}

/// Reads the official candidates, one per line. Repeats (ignoring case) keep the first spelling.
pub fn candidates_from_file(path : &Path) -> Result<CandidateSet, LoadError> {
    let names = read_names(path)?;
    let listed = names.len();
    let candidates : CandidateSet = names.into_iter().collect();

    if candidates.is_empty() {
        return Err(LoadError::EmptyCandidates { path : path.to_path_buf() });
    }
    if candidates.len() < listed {
        info!(listed, unique = candidates.len(), "collapsed repeated candidates");
    }

    Ok(candidates)
}

/// Reads one ballot per file in `directory`, one preference per line. Files are read in path
/// order so the ballot order does not depend on the filesystem.
pub fn ballots_from_directory(directory : &Path) -> Result<Vec<Ballot>, LoadError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(directory).map_err(|error| LoadError::from_io(directory, error))? {
        let entry = entry.map_err(|error| LoadError::from_io(directory, error))?;
        let file_type = entry.file_type().map_err(|error| LoadError::from_io(&entry.path(), error))?;
        if file_type.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut ballots = Vec::with_capacity(paths.len());
    for path in &paths {
        let ballot = Ballot::new(read_names(path)?);
        debug!(path = %path.display(), preferences = ballot.len(), "read ballot");
        ballots.push(ballot);
    }

    Ok(ballots)
}

/// Reads one ballot per row of a headerless CSV, most preferred first. Rows may differ in length
/// and empty cells are skipped.
pub fn ballots_from_csv(path : &Path) -> Result<Vec<Ballot>, LoadError> {
    let reader =
        csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|error| LoadError::from_csv(path, error))?;

    ballots_from_csv_reader(reader).map_err(|error| LoadError::from_csv(path, error))
}

fn ballots_from_csv_reader<R : io::Read>(mut reader : csv::Reader<R>) -> Result<Vec<Ballot>, csv::Error> {
    let mut ballots = Vec::new();

    for record in reader.records() {
        let ballot : Ballot =
            record?
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(Candidate::new)
            .collect();
        ballots.push(ballot);
    }

    Ok(ballots)
}

/// Candidates A to E of the mock election.
pub fn mock_candidates() -> CandidateSet {
    ["A", "B", "C", "D", "E"].into_iter().map(Candidate::new).collect()
}

/// The 100 ballots of the mock election: 31 A>E>C>D>B, 30 B>A>E, 29 C>D>B and 10 D>A>E.
pub fn mock_ballots() -> Vec<Ballot> {
    let blocks : [(&[&str], usize); 4] = [
        (&["A", "E", "C", "D", "B"], 31),
        (&["B", "A", "E"], 30),
        (&["C", "D", "B"], 29),
        (&["D", "A", "E"], 10),
    ];

    blocks
        .iter()
        .flat_map(|&(names, count)| std::iter::repeat(Ballot::from_names(names.iter().copied())).take(count))
        .collect()
}
