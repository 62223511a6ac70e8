//! Fixed lines of the transcript.
//!
//! Prompts omit their trailing `": "`; each [`crate::Console`] adds its own.

pub const CONSENT: &str = "Shall we play a game? (Y/N)";
pub const CONSENT_RETRY: &str = "Response must be Y or N";
pub const GREETING: &str = "Great, the game is Roshambo! What is your name?";
pub const NAME: &str = "Enter your name";
pub const MENU: &str =
    "R is for Rock, P is for Paper, S is for Scissors. Q is to Quit. I is for INFO";
pub const COMMAND_RETRY: &str = "Invalid response. Please enter R, P, S, Q, or I.";
pub const AGAIN: &str = "Let's play again";
pub const GOODBYE: &str = "Goodbye";
pub const FAILURE: &str = "An unexpected error occurred. The game will exit now.";

/// Menu prompt for the first command of a session.
pub fn first_prompt(player: &str) -> String {
    format!(
        "Hello {}, let's get started. When you are ready, enter your choice.\n{}",
        player, MENU
    )
}

/// Menu prompt for every later command.
pub fn next_prompt() -> String {
    format!("Enter your choice. {}", MENU)
}
