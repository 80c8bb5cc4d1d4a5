//! Ranked ballot voting systems: Copeland, Copeland weighted random, first past the post and
//! popularity-seeded brackets.

pub mod ballot;
pub mod candidates;
pub mod error;
pub mod loading;
pub mod ratings;
pub mod reporting;
pub mod results;
pub mod rng;
pub mod voting;

pub use ballot::Ballot;
pub use candidates::{Candidate, CandidateSet};
pub use error::VoteError;
pub use results::CandidateResult;
pub use voting::VotingSystem;
