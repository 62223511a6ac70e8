use crate::*;
use std::collections::BTreeMap;

/// Point-in-time copy of a [`Ledger`], detached from further rounds.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Snapshot {
    overall: Record,
    per_move: BTreeMap<Move, Record>,
}

impl From<&Ledger> for Snapshot {
    fn from(ledger: &Ledger) -> Self {
        Self {
            overall: ledger.overall(),
            per_move: ledger.per_move().clone(),
        }
    }
}

impl Snapshot {
    pub fn overall(&self) -> Record {
        self.overall
    }
    /// Record for one move; moves never played read as empty.
    pub fn get(&self, choice: Move) -> Record {
        self.per_move.get(&choice).copied().unwrap_or_default()
    }
    /// Per-move records in Rock, Paper, Scissors order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Record)> + '_ {
        Move::all().into_iter().map(|m| (m, self.get(m)))
    }
}
