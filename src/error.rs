//! Contract violations raised by the game core.
//!
//! None of these are recoverable: each one means a caller let something
//! through that the boundary should have rejected, or that the rule table
//! itself is broken. They propagate with `?` up to the binary, which reports
//! them and exits.
use crate::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move code outside {R, P, S} reached the core.
    #[error("Invalid move code: {0:?}")]
    InvalidMove(String),
    /// The rule table could not classify a pair of distinct moves.
    #[error("Invalid outcome combination: user={user}, comp={computer}")]
    InvalidOutcome { user: Move, computer: Move },
    /// The ledger has no per-move record for this move.
    #[error("Unknown move in ledger: {0}")]
    UnknownMove(Move),
}
