use crate::*;

/// Everything a caller needs to describe a finished round.
///
/// Holds data, not text; [`std::fmt::Display`] gives the plain transcript
/// form and consoles are free to style the pieces themselves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Narration {
    player: String,
    user: Move,
    computer: Move,
    outcome: Outcome,
    rule: Option<&'static str>,
    streak: Option<Notice>,
    milestone: Option<Notice>,
}

impl Narration {
    pub fn new(
        player: &str,
        (user, computer): (Move, Move),
        (outcome, rule): (Outcome, Option<&'static str>),
        streak: Option<Notice>,
        milestone: Option<Notice>,
    ) -> Self {
        Self {
            player: player.to_string(),
            user,
            computer,
            outcome,
            rule,
            streak,
            milestone,
        }
    }
    pub fn user(&self) -> Move {
        self.user
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }
    pub fn streak(&self) -> Option<Notice> {
        self.streak
    }
    pub fn milestone(&self) -> Option<Notice> {
        self.milestone
    }
    /// Which move each side threw.
    pub fn matchup(&self) -> String {
        format!(
            "You chose {}, computer chose {}.",
            self.user.label(),
            self.computer.label()
        )
    }
    /// The result, addressed to the player.
    pub fn verdict(&self) -> String {
        match self.outcome {
            Outcome::Win => format!("Great job {}, you win!", self.player),
            Outcome::Lose => format!("Sorry {}, you lose!", self.player),
            Outcome::Tie => String::from(
                "It is a tie. A strange game. The only winning move is not to play.",
            ),
        }
    }
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.matchup())?;
        if let Some(streak) = self.streak {
            write!(f, "\n{}", streak)?;
        }
        write!(f, "\n{}", self.verdict())?;
        if let Some(rule) = self.rule {
            write!(f, "\n{}", rule)?;
        }
        if let Some(milestone) = self.milestone {
            write!(f, "\n{}", milestone)?;
        }
        Ok(())
    }
}
