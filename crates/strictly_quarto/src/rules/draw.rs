//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every field is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.placed().count() == board.rows() * board.columns()
}

/// Checks if the pool has run dry.
///
/// A token still held in the selection slot does not count as available.
#[instrument(skip(board))]
pub fn is_exhausted(board: &Board) -> bool {
    !board.has_available_tokens()
}

/// Checks whether play cannot continue after a non-winning placement.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) || is_exhausted(board)
}
