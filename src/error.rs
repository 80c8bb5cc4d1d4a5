use thiserror::Error;

/// Failures of the voting systems themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// The candidate set cannot be used with the requested method.
    #[error("{method} cannot run with {count} candidates: {reason}")]
    InvalidInput {
        method : &'static str,
        count : usize,
        reason : &'static str,
    },

    /// A random draw was requested over zero total weight.
    #[error("cannot draw a winner from an empty distribution")]
    EmptyDistribution,
}
