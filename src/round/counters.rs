use crate::*;

/// Per-session state that survives between rounds.
///
/// Owned by whoever drives the session and handed to each round by `&mut`,
/// so independent sessions never share it. Starts at `(0, 0, 0, false)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Counters {
    games_played: u32,
    win_streak: u32,
    loss_streak: u32,
    milestone_shown: bool,
}

impl Counters {
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }
    pub fn loss_streak(&self) -> u32 {
        self.loss_streak
    }
    pub fn milestone_shown(&self) -> bool {
        self.milestone_shown
    }
    /// Advances the streaks past `outcome`.
    ///
    /// A notice is earned only on the round a streak becomes exactly
    /// [`STREAK_LENGTH`]; longer streaks stay quiet, but a broken streak
    /// rebuilt to that length earns it again.
    pub fn streak(&mut self, outcome: Outcome) -> Option<Notice> {
        match outcome {
            Outcome::Win => {
                self.win_streak += 1;
                self.loss_streak = 0;
                (self.win_streak == STREAK_LENGTH).then_some(Notice::HotStreak)
            }
            Outcome::Lose => {
                self.loss_streak += 1;
                self.win_streak = 0;
                (self.loss_streak == STREAK_LENGTH).then_some(Notice::LosingStreak)
            }
            Outcome::Tie => {
                self.win_streak = 0;
                self.loss_streak = 0;
                None
            }
        }
    }
    /// Counts one resolved round. Earns the milestone notice once per session.
    pub fn tick(&mut self) -> Option<Notice> {
        self.games_played += 1;
        match self.games_played == MILESTONE_ROUNDS && !self.milestone_shown {
            true => {
                self.milestone_shown = true;
                Some(Notice::Milestone)
            }
            false => None,
        }
    }
}
