//! Players and their turn roles.

use serde::{Deserialize, Serialize};

/// Stable 1-based player identity.
pub type PlayerNumber = u32;

/// Role a player currently holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Status {
    /// Chooses the token the opponent must place.
    Selecting,
    /// Places the token chosen by the opponent.
    Placing,
    /// Completed a winning line.
    Winning,
    /// Takes no part in the exchange.
    #[default]
    Default,
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    number: PlayerNumber,
    status: Status,
}

impl Player {
    /// Creates player `number` holding `status`.
    pub fn new(number: PlayerNumber, status: Status) -> Self {
        Self { number, status }
    }

    /// Builds a roster of `count` players.
    ///
    /// Player 1 starts selecting and player 2 starts placing; anyone else
    /// stays in the default role.
    pub fn roster(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|n| {
                let status = match n {
                    1 => Status::Selecting,
                    2 => Status::Placing,
                    _ => Status::Default,
                };
                Player::new(PlayerNumber::try_from(n).unwrap_or(PlayerNumber::MAX), status)
            })
            .collect()
    }

    /// Returns the player number.
    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    /// Returns the current role.
    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.number)
    }
}
