//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and are checked after every round
//! transition in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with every
    /// violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod history_consistent;
pub mod single_winner;
pub mod turn_alternation;

pub use history_consistent::HistoryConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_alternation::TurnAlternationInvariant;

/// Invariants that hold for any board reachable by legal play.
pub type BoardInvariants = (SingleWinnerInvariant, TurnAlternationInvariant);

/// All round invariants as a composable set.
pub type RoundInvariants = (
    SingleWinnerInvariant,
    TurnAlternationInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Player, Position, Round, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_round() {
        let round = Round::new();
        assert!(RoundInvariants::check_all(&round).is_ok());
        assert!(BoardInvariants::check_all(round.board()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [Move::new(0, 0), Move::new(1, 1), Move::new(0, 2)];
        let round = Round::replay(&moves).unwrap();
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut round = Round::new();
        // Two O marks with nothing in the history.
        round.board.set(Position::TopLeft, Square::Occupied(Player::O));
        round.board.set(Position::Center, Square::Occupied(Player::O));

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            <TurnAlternationInvariant as Invariant<Round>>::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            HistoryConsistentInvariant::description()
        )));
    }

    #[test]
    fn test_board_set_detects_double_winner() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows([[x, x, x], [o, o, o], [e, e, e]]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <SingleWinnerInvariant as Invariant<Board>>::description()
            )]
        );
    }
}
