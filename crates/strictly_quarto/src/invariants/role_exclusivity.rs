//! Role exclusivity: one selector and one placer while play continues.

use super::Invariant;
use crate::player::Status;
use crate::Game;

/// Invariant: with two or more players and the game in progress, exactly one
/// player is selecting and exactly one is placing. After a win exactly one
/// player is winning, unless the roster is too small to have had a placer.
pub struct RoleExclusivityInvariant;

impl Invariant<Game> for RoleExclusivityInvariant {
    fn holds(game: &Game) -> bool {
        let count = |status: Status| game.players().iter().filter(|p| p.status() == status).count();

        if game.is_won() {
            let expected = usize::from(game.players().len() >= 2);
            return count(Status::Winning) == expected;
        }
        if game.players().len() < 2 || game.is_draw() {
            return count(Status::Winning) == 0;
        }
        count(Status::Selecting) == 1 && count(Status::Placing) == 1 && count(Status::Winning) == 0
    }

    fn description() -> &'static str {
        "Exactly one player selects and one places while the game is in progress"
    }
}
