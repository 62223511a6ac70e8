//! The interactive front end: prompts, menu parsing, reports, and the loop
//! that feeds validated moves into [`crate::play_round`].
mod command;
mod consent;
mod console;
mod lines;
mod prompt;
mod report;
mod session;
#[cfg(feature = "cli")]
mod terminal;

pub use command::*;
pub use consent::*;
pub use console::*;
pub use lines::*;
pub use prompt::*;
pub use report::*;
pub use session::*;
#[cfg(feature = "cli")]
pub use terminal::*;
