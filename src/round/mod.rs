//! One round of play and the streak/milestone state carried between rounds.
mod counters;
mod engine;
mod narration;
mod notice;

pub use counters::*;
pub use engine::*;
pub use narration::*;
pub use notice::*;
