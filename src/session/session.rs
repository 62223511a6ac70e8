use crate::*;
use anyhow::Context;
use rand::Rng;

/// How INFO reports and the closing summary are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Session options gathered before play starts.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    /// Skips the name prompt when set.
    pub name: Option<String>,
    pub format: Format,
}

#[derive(serde::Serialize)]
struct Summary<'a> {
    player: &'a str,
    counters: Counters,
    statistics: Snapshot,
}

/// One player's game, from name entry to quit.
///
/// Owns its ledger, counters, and random source outright, so any number of
/// sessions can run side by side.
pub struct Session<R> {
    player: String,
    ledger: Ledger,
    counters: Counters,
    rng: R,
    format: Format,
}

impl<R> Session<R>
where
    R: Rng,
{
    /// A blank name falls back to [`DEFAULT_PLAYER`].
    pub fn new(player: &str, rng: R, format: Format) -> Self {
        let player = match player.trim() {
            "" => DEFAULT_PLAYER.to_string(),
            name => name.to_string(),
        };
        Self {
            player,
            ledger: Ledger::default(),
            counters: Counters::default(),
            rng,
            format,
        }
    }
    /// Asks whether to play and who is playing. `None` if the player declines.
    pub fn open<C>(console: &mut C, rng: R, settings: Settings) -> anyhow::Result<Option<Self>>
    where
        C: Console,
    {
        if console.consent()? == Consent::No {
            console.say(GOODBYE)?;
            return Ok(None);
        }
        let name = match settings.name {
            Some(name) => name,
            None => {
                console.say(GREETING)?;
                console.name()?
            }
        };
        let session = Self::new(&name, rng, settings.format);
        log::info!("session opened for {}", session.player);
        Ok(Some(session))
    }
    /// Runs the menu loop until the player quits.
    pub fn play<C>(&mut self, console: &mut C) -> anyhow::Result<()>
    where
        C: Console,
    {
        let mut command = console.command(&first_prompt(&self.player))?;
        while self.handle(command, console)? {
            command = console.command(&next_prompt())?;
        }
        Ok(())
    }
    /// Carries out one validated command. `false` once the session is over.
    pub fn handle<C>(&mut self, command: Command, console: &mut C) -> anyhow::Result<bool>
    where
        C: Console,
    {
        match command {
            Command::Quit => {
                self.close(console)?;
                console.say(GOODBYE)?;
                Ok(false)
            }
            Command::Info => {
                self.report(console)?;
                console.say(AGAIN)?;
                Ok(true)
            }
            Command::Play(choice) => {
                let narration = play_round(
                    &mut self.ledger,
                    &mut self.counters,
                    &self.player,
                    choice,
                    &mut self.rng,
                )?;
                console.narrate(&narration)?;
                console.say(AGAIN)?;
                Ok(true)
            }
        }
    }
    fn report<C>(&self, console: &mut C) -> anyhow::Result<()>
    where
        C: Console,
    {
        let snapshot = self.ledger.snapshot();
        match self.format {
            Format::Text => console.say(&Report::new(&self.player, &snapshot).to_string()),
            Format::Json => console.say(
                &serde_json::to_string_pretty(&snapshot).context("serialize statistics")?,
            ),
        }
    }
    fn close<C>(&self, console: &mut C) -> anyhow::Result<()>
    where
        C: Console,
    {
        log::info!(
            "session closed for {} after {} games ({})",
            self.player,
            self.counters.games_played(),
            self.ledger.overall(),
        );
        match self.format {
            Format::Text => Ok(()),
            Format::Json => console.say(
                &serde_json::to_string_pretty(&Summary {
                    player: &self.player,
                    counters: self.counters,
                    statistics: self.ledger.snapshot(),
                })
                .context("serialize summary")?,
            ),
        }
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn counters(&self) -> &Counters {
        &self.counters
    }
}

/// Plays a whole session on `console`: the opening question, the name, and
/// the menu loop through goodbye.
pub fn run<C, R>(console: &mut C, rng: R, settings: Settings) -> anyhow::Result<()>
where
    C: Console,
    R: Rng,
{
    match Session::open(console, rng, settings)? {
        Some(mut session) => session.play(console),
        None => Ok(()),
    }
}
