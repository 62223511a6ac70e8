use crate::*;
use rand::Rng;

/// A single throw.
///
/// The declaration order (Rock < Paper < Scissors) is the order statistics
/// are reported in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Move {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// All three moves in reporting order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Single-letter menu code.
    pub const fn code(&self) -> char {
        match self {
            Self::Rock => 'R',
            Self::Paper => 'P',
            Self::Scissors => 'S',
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
    /// Uniform draw over the three moves.
    pub fn draw<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let moves = Self::all();
        moves[rng.random_range(0..moves.len())]
    }
}

/// char isomorphism
impl TryFrom<char> for Move {
    type Error = GameError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Self::Rock),
            'P' => Ok(Self::Paper),
            'S' => Ok(Self::Scissors),
            _ => Err(GameError::InvalidMove(c.to_string())),
        }
    }
}
impl From<Move> for char {
    fn from(m: Move) -> char {
        m.code()
    }
}

/// str isomorphism, case-insensitive and trimmed
impl TryFrom<&str> for Move {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| GameError::InvalidMove(s.to_string())),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
