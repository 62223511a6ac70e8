//! Rock-Paper-Scissors ("Roshambo") against a uniformly random opponent.
//!
//! ## Core
//!
//! - [`Move`] and [`Rule`]: The three throws and the fixed beats-relation
//! - [`resolve`]: Pure outcome classification with the matching rule sentence
//! - [`Ledger`]: Win/loss/tie records, overall and per move
//! - [`play_round`]: One round: draw, resolve, record, streaks, milestone
//!
//! ## Session
//!
//! - [`Session`]: The interactive loop over a [`Console`]
//! - [`Lines`]: Plain line-oriented console over any reader/writer pair
//! - [`Terminal`]: Interactive console with validated prompts (requires `cli` feature)
mod error;
mod round;
mod rules;
mod session;
mod stats;

#[cfg(feature = "cli")]
mod args;

pub use error::*;
pub use round::*;
pub use rules::*;
pub use session::*;
pub use stats::*;

#[cfg(feature = "cli")]
pub use args::*;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Consecutive wins (or losses) that earn a streak notice.
pub const STREAK_LENGTH: u32 = 3;
/// Resolved rounds after which the one-time milestone notice fires.
pub const MILESTONE_ROUNDS: u32 = 15;
/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER: &str = "Player";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging: terminal on stderr, plus a timestamped file under
/// `dir` at DEBUG level when one is given.
///
/// The terminal stays at WARN unless `verbose`, so the game transcript on
/// stdout is not interleaved with log lines.
#[cfg(feature = "cli")]
pub fn log(verbose: bool, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    use simplelog::LevelFilter;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create log directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))
            .context("create log file")?;
        loggers.push(simplelog::WriteLogger::new(LevelFilter::Debug, config, file));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
