/// Extra commentary a round can earn on top of its result.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Notice {
    /// Win streak just reached [`crate::STREAK_LENGTH`].
    HotStreak,
    /// Loss streak just reached [`crate::STREAK_LENGTH`].
    LosingStreak,
    /// [`crate::MILESTONE_ROUNDS`] rounds played this session.
    Milestone,
}

impl Notice {
    pub const fn text(&self) -> &'static str {
        match self {
            Self::HotStreak => "Wow, hot streak!!",
            Self::LosingStreak => "Lost again, maybe try solitaire!",
            Self::Milestone => "Don't you have anything else to do?!",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
