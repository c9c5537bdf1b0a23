//! Exhaustive minimax search.
//!
//! Every line of play is explored to the end of the game; there is no
//! pruning and no depth limit. Exploration happens on a private scratch
//! copy of the caller's board: each candidate is placed, scored, and
//! removed again before the next one is tried, so sibling branches never
//! observe each other's marks.

use super::action::{GameError, Move};
use super::position::Position;
use super::rules;
use super::types::{Board, Outcome, Player, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a position: [`WIN`], [`DRAW`] or [`LOSS`].
pub type Score = i8;

/// The perspective player wins with best play.
pub const WIN: Score = 1;
/// Neither side can force a win.
pub const DRAW: Score = 0;
/// The perspective player loses with best play.
pub const LOSS: Score = -1;

/// A candidate move and its minimax value for the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ScoredMove {
    /// The candidate.
    pub mv: Move,
    /// Value of the position after `mv`, from the mover's perspective.
    pub score: Score,
}

/// Everything one search learned about a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SearchReport {
    mover: Player,
    best: ScoredMove,
    candidates: Vec<ScoredMove>,
    nodes: u64,
}

impl SearchReport {
    /// The player the search moved for.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// The chosen move: the first candidate, in row-major order, with the
    /// highest score.
    pub fn best(&self) -> ScoredMove {
        self.best
    }

    /// Every legal move with its score, in row-major order.
    pub fn candidates(&self) -> &[ScoredMove] {
        &self.candidates
    }

    /// Number of positions evaluated, the root's children included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Returns the optimal move for `mark_to_move`.
///
/// # Errors
///
/// Returns [`GameError::NoLegalMoves`] if the board is already won or drawn.
pub fn best_move(board: &Board, mark_to_move: Player) -> Result<Move, GameError> {
    analyze(board, mark_to_move).map(|report| report.best().mv)
}

/// Scores every legal move for `mark_to_move` and picks the best one.
///
/// Ties are broken in favour of the earliest move in row-major order.
///
/// # Errors
///
/// Returns [`GameError::NoLegalMoves`] if the board is already won or drawn.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, mark_to_move: Player) -> Result<SearchReport, GameError> {
    let outcome = rules::outcome(board);
    if outcome.is_terminal() {
        return Err(GameError::NoLegalMoves(outcome));
    }

    let mut scratch = board.clone();
    let mut nodes = 0;
    let mut candidates = Vec::with_capacity(9);
    let mut best: Option<ScoredMove> = None;

    for pos in Position::valid_moves(board) {
        scratch.set(pos, Square::Occupied(mark_to_move));
        let score = minimax(
            &mut scratch,
            mark_to_move.opponent(),
            mark_to_move,
            &mut nodes,
        );
        scratch.set(pos, Square::Empty);

        let candidate = ScoredMove::new(pos.into(), score);
        candidates.push(candidate);
        if best.is_none_or(|b| score > b.score) {
            best = Some(candidate);
        }
    }
    debug_assert_eq!(&scratch, board, "search must restore every branch");

    // An in-progress board always has a free cell.
    let best = best.ok_or(GameError::NoLegalMoves(outcome))?;
    debug!(best = %best.mv, score = best.score, nodes, "Search complete");
    Ok(SearchReport::new(mark_to_move, best, candidates, nodes))
}

/// Minimax value of `board` for `perspective`, both sides playing
/// optimally. The side to move is derived from the mark counts.
pub fn score(board: &Board, perspective: Player) -> Score {
    let mut scratch = board.clone();
    let mut nodes = 0;
    minimax(&mut scratch, board.to_move(), perspective, &mut nodes)
}

/// Maximizes when `to_move == perspective`, minimizes otherwise. The mover
/// flips at every level. `board` is restored before returning.
fn minimax(board: &mut Board, to_move: Player, perspective: Player, nodes: &mut u64) -> Score {
    *nodes += 1;
    match rules::outcome(board) {
        Outcome::Win(player) if player == perspective => return WIN,
        Outcome::Win(_) => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let maximizing = to_move == perspective;
    let mut best = if maximizing { LOSS } else { WIN };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let value = minimax(board, to_move.opponent(), perspective, nodes);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}
