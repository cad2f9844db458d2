//! Strictly Quarto - board and turn logic for the Quarto family of games
//!
//! Players alternately choose a token for their opponent to place. Whoever
//! places the fourth token of a line in which all four share a property wins.
//!
//! # Architecture
//!
//! - **Property / Token**: properties derived from a token's id bits
//! - **Topology**: bounded or toroidal coordinate normalization
//! - **Board**: grid, pool, selection slot; placement and win detection
//! - **Rules**: pure win and draw checks
//! - **Game**: turn roles, termination, rollback of an unplaced selection
//! - **Invariants**: state properties checked after every transition
//!
//! # Example
//!
//! ```
//! use strictly_quarto::{Board, Game, PlaceOutcome, TopologyKind};
//!
//! # fn example() -> Result<(), strictly_quarto::QuartoError> {
//! let board = Board::new(TopologyKind::Bounded, 16, 4, 6, 6)?;
//! let mut game = Game::new(2, board);
//!
//! game.select_token(0)?;
//! assert_eq!(game.place_token(0, 0)?, PlaceOutcome::Continue);
//! assert_eq!(game.move_count(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod player;
mod property;
mod token;
mod topology;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Errors
pub use error::{QuartoError, QuartoErrorKind};

// Crate-level exports - Tokens
pub use property::{Property, PropertyPadding, STANDARD_PROPERTY_COUNT, derive_properties};
pub use token::{Token, TokenId};

// Crate-level exports - Board
pub use board::{Board, EMPTY_FIELD};
pub use topology::{Normalize, Topology, TopologyKind};

// Crate-level exports - Game
pub use game::{Game, GameStatus, PlaceOutcome};
pub use player::{Player, PlayerNumber, Status};
