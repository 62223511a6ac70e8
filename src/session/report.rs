use crate::*;

/// The INFO screen: overall record, then each move in Rock, Paper,
/// Scissors order. Percentages are rounded for display only.
pub struct Report<'a> {
    player: &'a str,
    snapshot: &'a Snapshot,
}

impl<'a> Report<'a> {
    pub fn new(player: &'a str, snapshot: &'a Snapshot) -> Self {
        Self { player, snapshot }
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let overall = self.snapshot.overall();
        writeln!(f)?;
        writeln!(f, "{}, here are your statistics:", self.player)?;
        writeln!(f, "Overall:")?;
        writeln!(f, "  Win-Loss-Tie: {}", overall)?;
        writeln!(f, "  Winning percentage (excluding ties): {:.2}%", overall.win_percentage())?;
        writeln!(f)?;
        writeln!(f, "By choice:")?;
        for (choice, record) in self.snapshot.iter() {
            writeln!(f, "  {}:", choice.label())?;
            writeln!(f, "    Win-Loss-Tie: {}", record)?;
            writeln!(f, "    Winning percentage (excluding ties): {:.2}%", record.win_percentage())?;
        }
        Ok(())
    }
}
