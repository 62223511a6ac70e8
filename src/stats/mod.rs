//! Win/loss/tie bookkeeping, overall and broken down by the user's move.
mod ledger;
mod record;
mod snapshot;

pub use ledger::*;
pub use record::*;
pub use snapshot::*;
