//! Token conservation: every token sits in exactly one place.

use super::Invariant;
use crate::{Board, Game};
use std::collections::HashSet;

/// Invariant: each token id `0..token_count` is in exactly one of the pool,
/// the selection slot, or a field.
pub struct TokenConservationInvariant;

impl Invariant<Board> for TokenConservationInvariant {
    fn holds(board: &Board) -> bool {
        let ids: Vec<u64> = board
            .pool()
            .iter()
            .chain(board.selected())
            .chain(board.placed())
            .map(|t| u64::from(t.id()))
            .collect();

        let unique: HashSet<u64> = ids.iter().copied().collect();
        unique.len() == ids.len()
            && ids.len() == board.token_count()
            && ids.iter().all(|id| *id < board.token_count() as u64)
    }

    fn description() -> &'static str {
        "Every token is in exactly one of pool, selection, or field"
    }
}

impl Invariant<Game> for TokenConservationInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
