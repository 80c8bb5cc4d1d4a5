//! Popularity ratings used to seed a bracket.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::candidates::Candidate;
use crate::loading::LoadError;

/// Rating given to candidates without a usable rating, the midpoint of a 0 to 10 scale.
pub const FALLBACK_RATING : f64 = 5.0;

/// Looks up a candidate's popularity rating. Caching or retrying a slow source is the
/// implementor's business.
pub trait RatingLookup {
    /// The candidate's rating, if one is known.
    fn rating(&self, candidate : &Candidate) -> Option<f64>;

    /// The rating, or `FALLBACK_RATING` when none is available or it is not a finite number.
    fn rating_or_fallback(&self, candidate : &Candidate) -> f64 {
        match self.rating(candidate) {
            Some(rating) if rating.is_finite() => rating,
            _ => FALLBACK_RATING,
        }
    }
}

/// Knows no ratings, so every candidate gets the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRatings;

impl RatingLookup for NoRatings {
    fn rating(&self, _candidate : &Candidate) -> Option<f64> {
        None
    }
}

impl RatingLookup for HashMap<Candidate, f64> {
    fn rating(&self, candidate : &Candidate) -> Option<f64> {
        self.get(candidate).copied()
    }
}

/// Ratings read from a headerless `name,rating` CSV. A row with no rating leaves its candidate
/// unrated.
#[derive(Debug, Clone, Default)]
pub struct CsvRatings(HashMap<Candidate, f64>);

impl CsvRatings {
    /// Reads ratings from a CSV file.
    pub fn from_path(path : &Path) -> Result<CsvRatings, LoadError> {
        let reader =
            csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|error| LoadError::from_csv(path, error))?;

        CsvRatings::from_csv(reader).map_err(|error| LoadError::from_csv(path, error))
    }

    /// Reads ratings from any CSV source.
    pub fn from_reader<R : io::Read>(reader : R) -> Result<CsvRatings, csv::Error> {
        let reader =
            csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        CsvRatings::from_csv(reader)
    }

    fn from_csv<R : io::Read>(mut reader : csv::Reader<R>) -> Result<CsvRatings, csv::Error> {
        let mut ratings = HashMap::new();

        for record in reader.records() {
            let record = record?;
            let name = record.get(0).unwrap_or_default();
            if name.is_empty() {
                warn!(line = ?record.position().map(csv::Position::line), "ratings row without a name, skipping");
                continue;
            }

            match record.get(1).filter(|cell| !cell.is_empty()) {
                None => debug!(name, "no rating given, using fallback"),
                Some(cell) => match cell.parse::<f64>() {
                    Ok(rating) => {
                        debug!(name, rating, "loaded rating");
                        ratings.insert(Candidate::new(name), rating);
                    }
                    Err(_) => warn!(name, rating = cell, "unparsable rating, using fallback"),
                },
            }
        }

        Ok(CsvRatings(ratings))
    }

    /// Returns the number of rated candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no candidate is rated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RatingLookup for CsvRatings {
    fn rating(&self, candidate : &Candidate) -> Option<f64> {
        self.0.rating(candidate)
    }
}
