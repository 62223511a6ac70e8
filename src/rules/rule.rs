use crate::*;

/// One entry of the beats-relation: `winner` defeats `loser`, and `text`
/// is the sentence announcing it.
///
/// Each unordered pair of distinct moves has exactly one entry. The same
/// sentence is reported whichever side of the pair the user was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    winner: Move,
    loser: Move,
    text: &'static str,
}

const RULES: [Rule; 3] = [
    Rule {
        winner: Move::Paper,
        loser: Move::Rock,
        text: "Paper covers Rock — Paper wins!",
    },
    Rule {
        winner: Move::Scissors,
        loser: Move::Paper,
        text: "Scissors cut Paper — Scissors win!",
    },
    Rule {
        winner: Move::Rock,
        loser: Move::Scissors,
        text: "Rock smashes Scissors — Rock wins!",
    },
];

impl Rule {
    /// The full rule table.
    pub const fn all() -> [Self; 3] {
        RULES
    }
    /// The entry covering `a` and `b`, in either order.
    pub fn between(a: Move, b: Move) -> Option<Self> {
        RULES
            .iter()
            .find(|rule| rule.covers(a, b) || rule.covers(b, a))
            .copied()
    }
    fn covers(&self, winner: Move, loser: Move) -> bool {
        self.winner == winner && self.loser == loser
    }
    pub fn winner(&self) -> Move {
        self.winner
    }
    pub fn loser(&self) -> Move {
        self.loser
    }
    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Classifies a round from the user's perspective.
///
/// Ties carry no rule text. Pure: the same pair always yields the same answer.
pub fn resolve(user: Move, computer: Move) -> Result<(Outcome, Option<&'static str>), GameError> {
    if user == computer {
        return Ok((Outcome::Tie, None));
    }
    match Rule::between(user, computer) {
        Some(rule) if rule.winner() == user => Ok((Outcome::Win, Some(rule.text()))),
        Some(rule) if rule.winner() == computer => Ok((Outcome::Lose, Some(rule.text()))),
        _ => Err(GameError::InvalidOutcome { user, computer }),
    }
}

/// [`resolve`] over raw menu codes, for callers that have not parsed them.
pub fn resolve_codes(
    user: &str,
    computer: &str,
) -> Result<(Outcome, Option<&'static str>), GameError> {
    resolve(Move::try_from(user)?, Move::try_from(computer)?)
}
