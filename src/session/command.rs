use crate::*;

/// A validated menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Info,
    Quit,
}

/// str isomorphism, case-insensitive and trimmed
impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "Q" => Ok(Self::Quit),
            "I" => Ok(Self::Info),
            code => Move::try_from(code)
                .map(Self::Play)
                .map_err(|_| format!("invalid command: {}", s)),
        }
    }
}
