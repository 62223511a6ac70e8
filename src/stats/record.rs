use crate::*;

/// Win/loss/tie counts. Counts only ever go up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Record {
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }
    /// Rounds that were not ties.
    pub fn decisions(&self) -> u32 {
        self.wins + self.losses
    }
    /// Share of decisions won, in percent. Zero when nothing has been decided.
    pub fn win_percentage(&self) -> f64 {
        match self.decisions() {
            0 => 0.0,
            n => self.wins as f64 / n as f64 * 100.0,
        }
    }
    pub fn register(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

impl std::ops::Add for Record {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            ties: self.ties + other.ties,
        }
    }
}

impl std::iter::Sum for Record {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

/// W-L-T
impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}
