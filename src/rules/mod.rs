//! The three moves, the outcomes between them, and the rule table that
//! decides which move beats which.
mod moves;
mod outcome;
mod rule;

pub use moves::*;
pub use outcome::*;
pub use rule::*;
