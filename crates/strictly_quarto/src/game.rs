//! Game coordinator: turn order and termination on top of a board.
//!
//! Player 1 selects a token, player 2 places it; after every placement that
//! does not end the game the two roles swap. The game ends when a placement
//! completes a line ([`GameStatus::Won`]) or when the board is full or the
//! pool is empty ([`GameStatus::Draw`]). Both terminal states are sticky.

use crate::board::Board;
use crate::error::QuartoError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::player::{Player, PlayerNumber, Status};
use crate::rules;
use crate::token::TokenId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Selections and placements are accepted.
    #[default]
    InProgress,
    /// A placement completed a line.
    Won,
    /// The board filled up or the pool ran dry without a winner.
    Draw,
}

impl GameStatus {
    /// Checks whether the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Play continues with swapped roles.
    Continue,
    /// The placing player completed a line.
    Won {
        /// Player who placed the winning token, if the roster had one.
        winner: Option<PlayerNumber>,
        /// Completed exchanges before the winning one.
        moves: u32,
    },
    /// No further play is possible.
    Draw,
}

impl std::fmt::Display for PlaceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceOutcome::Continue => write!(f, "OK"),
            PlaceOutcome::Won {
                winner: Some(number),
                moves,
            } => write!(f, "P{} wins\n{}", number, moves),
            PlaceOutcome::Won {
                winner: None,
                moves,
            } => write!(f, "won\n{}", moves),
            PlaceOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A Quarto game: one board and its players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    move_count: u32,
    status: GameStatus,
}

impl Game {
    /// Creates a game with `player_count` players on `board`.
    ///
    /// Rosters smaller than two are accepted; role bookkeeping then only
    /// covers the players that exist.
    #[instrument(skip(board))]
    pub fn new(player_count: usize, board: Board) -> Self {
        if player_count < 2 {
            warn!(player_count, "Game created with fewer than two players");
        }
        Self {
            board,
            players: Player::roster(player_count),
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has been won.
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Checks whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Returns the number of completed exchanges.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the winning player.
    pub fn winner(&self) -> Option<&Player> {
        self.player_with(Status::Winning)
    }

    /// Returns the player currently placing.
    pub fn placing_player(&self) -> Option<&Player> {
        self.player_with(Status::Placing)
    }

    /// Returns the player currently selecting.
    pub fn selecting_player(&self) -> Option<&Player> {
        self.player_with(Status::Selecting)
    }

    fn player_with(&self, status: Status) -> Option<&Player> {
        self.players.iter().find(|p| p.status() == status)
    }

    fn ensure_in_progress(&self) -> Result<(), QuartoError> {
        if self.status.is_over() {
            return Err(QuartoError::GameOver);
        }
        Ok(())
    }

    /// Selects the available token `id` for the placing player.
    ///
    /// # Errors
    ///
    /// - [`QuartoError::GameOver`] once the game has ended.
    /// - [`QuartoError::NotFound`] if no available token has this id.
    /// - [`QuartoError::AlreadySelected`] if a token is already held.
    #[instrument(skip(self))]
    pub fn select_token(&mut self, id: TokenId) -> Result<(), QuartoError> {
        self.ensure_in_progress()?;
        let token = self
            .board
            .find_available(id)
            .cloned()
            .ok_or(QuartoError::NotFound(id))?;
        self.board.select(&token)?;
        self.check_invariants();
        Ok(())
    }

    /// Places the selected token at raw coordinates.
    ///
    /// On error nothing changes and the token stays selected; callers that
    /// abandon the attempt should call [`Game::reset_move`].
    ///
    /// # Errors
    ///
    /// - [`QuartoError::GameOver`] once the game has ended.
    /// - Any error of [`Board::place`].
    #[instrument(skip(self))]
    pub fn place_token(&mut self, row: i64, column: i64) -> Result<PlaceOutcome, QuartoError> {
        self.ensure_in_progress()?;
        let (r, c) = self.board.place(row, column)?;

        let outcome = if rules::check_win(&self.board, r, c) {
            self.status = GameStatus::Won;
            let winner = self.players.iter_mut().find(|p| p.status() == Status::Placing);
            let winner = winner.map(|p| {
                p.set_status(Status::Winning);
                p.number()
            });
            info!(?winner, moves = self.move_count, "Game won");
            PlaceOutcome::Won {
                winner,
                moves: self.move_count,
            }
        } else if rules::is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.move_count, "Game drawn");
            PlaceOutcome::Draw
        } else {
            self.swap_roles();
            self.move_count += 1;
            debug!(moves = self.move_count, "Roles swapped");
            PlaceOutcome::Continue
        };

        self.check_invariants();
        Ok(outcome)
    }

    /// Returns a selected but unplaced token to the pool.
    ///
    /// Does nothing when no token is selected.
    #[instrument(skip(self))]
    pub fn reset_move(&mut self) {
        if let Some(id) = self.board.reset_selection() {
            debug!(token = id, "Move reset");
        }
        self.check_invariants();
    }

    fn swap_roles(&mut self) {
        let placing = self.players.iter().position(|p| p.status() == Status::Placing);
        let selecting = self.players.iter().position(|p| p.status() == Status::Selecting);
        if let (Some(placing), Some(selecting)) = (placing, selecting) {
            self.players[placing].set_status(Status::Selecting);
            self.players[selecting].set_status(Status::Placing);
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            panic!("Game invariants violated: {:?}", violations);
        }
    }
}
