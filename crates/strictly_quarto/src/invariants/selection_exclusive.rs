//! Selection exclusivity: a held token is never also available.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the selected token is absent from the pool.
pub struct SelectionExclusiveInvariant;

impl Invariant<Board> for SelectionExclusiveInvariant {
    fn holds(board: &Board) -> bool {
        match board.selected() {
            Some(selected) => !board.pool().contains(selected),
            None => true,
        }
    }

    fn description() -> &'static str {
        "The selected token is not in the pool"
    }
}

impl Invariant<Game> for SelectionExclusiveInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
