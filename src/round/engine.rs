use crate::*;
use rand::Rng;

/// Plays one round against a uniformly random computer.
///
/// The draw is the only nondeterministic step; everything after it is
/// [`settle`].
pub fn play_round<R>(
    ledger: &mut Ledger,
    counters: &mut Counters,
    player: &str,
    user: Move,
    rng: &mut R,
) -> Result<Narration, GameError>
where
    R: Rng + ?Sized,
{
    let computer = Move::draw(rng);
    settle(ledger, counters, player, user, computer)
}

/// Resolves a round whose computer move is already known, then updates the
/// ledger, streaks, and games played, in that order.
pub fn settle(
    ledger: &mut Ledger,
    counters: &mut Counters,
    player: &str,
    user: Move,
    computer: Move,
) -> Result<Narration, GameError> {
    let (outcome, rule) = resolve(user, computer)?;
    ledger.record_outcome(user, outcome)?;
    let streak = counters.streak(outcome);
    let milestone = counters.tick();
    log::debug!(
        "round {}: {} vs {} -> {} (streaks +{} -{})",
        counters.games_played(),
        user,
        computer,
        outcome,
        counters.win_streak(),
        counters.loss_streak(),
    );
    Ok(Narration::new(
        player,
        (user, computer),
        (outcome, rule),
        streak,
        milestone,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    struct Table {
        ledger: Ledger,
        counters: Counters,
    }

    impl Table {
        fn new() -> Self {
            Self {
                ledger: Ledger::default(),
                counters: Counters::default(),
            }
        }
        fn settle(&mut self, user: Move, computer: Move) -> Narration {
            settle(&mut self.ledger, &mut self.counters, "Ada", user, computer).unwrap()
        }
    }

    #[test]
    fn rock_against_paper() {
        let mut table = Table::new();
        let narration = table.settle(Move::Rock, Move::Paper);
        assert_eq!(narration.outcome(), Outcome::Lose);
        assert_eq!(narration.rule(), Some("Paper covers Rock — Paper wins!"));
        assert_eq!(table.ledger.overall().losses(), 1);
        assert_eq!(table.ledger.snapshot().get(Move::Rock).losses(), 1);
        assert_eq!(table.counters.loss_streak(), 1);
    }

    #[test]
    fn three_wins_then_fourth_then_loss() {
        let mut table = Table::new();
        assert_eq!(table.settle(Move::Paper, Move::Rock).streak(), None);
        assert_eq!(table.settle(Move::Rock, Move::Scissors).streak(), None);
        assert_eq!(
            table.settle(Move::Scissors, Move::Paper).streak(),
            Some(Notice::HotStreak)
        );
        assert_eq!(table.settle(Move::Paper, Move::Rock).streak(), None);
        table.settle(Move::Paper, Move::Scissors);
        assert_eq!(table.counters.win_streak(), 0);
        assert_eq!(table.counters.loss_streak(), 1);
    }

    #[test]
    fn milestone_on_fifteenth_round_only() {
        let mut table = Table::new();
        for i in 1..=20 {
            let narration = table.settle(Move::Rock, Move::Rock);
            assert_eq!(narration.milestone().is_some(), i == MILESTONE_ROUNDS);
        }
        assert_eq!(table.counters.games_played(), 20);
        assert_eq!(table.ledger.overall().ties(), 20);
    }

    #[test]
    fn random_rounds_keep_ledger_consistent() {
        let mut table = Table::new();
        let ref mut rng = SmallRng::seed_from_u64(7);
        for i in 0..300 {
            let user = Move::all()[i % 3];
            let narration = play_round(
                &mut table.ledger,
                &mut table.counters,
                "Ada",
                user,
                rng,
            )
            .unwrap();
            assert_eq!(narration.user(), user);
            assert_eq!(
                narration.outcome(),
                resolve(user, narration.computer()).unwrap().0
            );
            let sum = table.ledger.per_move().values().copied().sum::<Record>();
            assert_eq!(table.ledger.overall(), sum);
        }
        assert_eq!(table.counters.games_played(), 300);
    }
}
