use crate::*;
use std::collections::BTreeMap;

/// Running statistics for one session.
///
/// Every recorded round lands in exactly two places: the overall record and
/// the record for the move the user threw. The per-move keys are fixed at
/// construction, so the overall record always equals the sum of the per-move
/// records.
#[derive(Debug, Clone)]
pub struct Ledger {
    overall: Record,
    per_move: BTreeMap<Move, Record>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            overall: Record::default(),
            per_move: Move::all()
                .into_iter()
                .map(|m| (m, Record::default()))
                .collect(),
        }
    }
}

impl Ledger {
    /// Counts one round under `choice`, the user's move.
    ///
    /// Nothing is touched unless the per-move entry exists.
    pub fn record_outcome(&mut self, choice: Move, outcome: Outcome) -> Result<(), GameError> {
        let record = self
            .per_move
            .get_mut(&choice)
            .ok_or(GameError::UnknownMove(choice))?;
        record.register(outcome);
        self.overall.register(outcome);
        debug_assert_eq!(self.overall, self.per_move.values().copied().sum::<Record>());
        Ok(())
    }
    /// Read-only copy for reporting.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
    pub fn overall(&self) -> Record {
        self.overall
    }
    pub fn per_move(&self) -> &BTreeMap<Move, Record> {
        &self.per_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_loss_in_both_places() {
        let mut ledger = Ledger::default();
        ledger.record_outcome(Move::Rock, Outcome::Lose).unwrap();
        assert_eq!(ledger.overall().losses(), 1);
        assert_eq!(ledger.per_move()[&Move::Rock].losses(), 1);
        assert_eq!(ledger.per_move()[&Move::Paper], Record::default());
        assert_eq!(ledger.per_move()[&Move::Scissors], Record::default());
    }

    #[test]
    fn overall_is_sum_of_moves() {
        let mut ledger = Ledger::default();
        let outcomes = [Outcome::Win, Outcome::Lose, Outcome::Tie];
        for i in 0..30 {
            let choice = Move::all()[i % 3];
            let outcome = outcomes[(i * 7 + i / 3) % 3];
            ledger.record_outcome(choice, outcome).unwrap();
            let sum = ledger.per_move().values().copied().sum::<Record>();
            assert_eq!(ledger.overall(), sum);
        }
        assert_eq!(ledger.overall().decisions() + ledger.overall().ties(), 30);
    }

    #[test]
    fn keys_are_fixed() {
        let ledger = Ledger::default();
        assert_eq!(
            ledger.per_move().keys().copied().collect::<Vec<_>>(),
            Move::all().to_vec()
        );
    }
}
