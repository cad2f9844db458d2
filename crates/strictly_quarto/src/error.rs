//! Error type shared by the board and the game coordinator.
//!
//! Every failure is recoverable. A failed operation leaves the board and the
//! game exactly as they were before the call.

use crate::token::TokenId;
use serde::{Deserialize, Serialize};

/// Error that can occur when building a board or applying a game action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum QuartoError {
    /// Malformed construction parameter or display query.
    #[display("Error, {}", _0)]
    InvalidArgument(String),

    /// The referenced token is not in the pool of available tokens.
    #[display("Error, token {} is not available, it has already been used.", _0)]
    NotFound(TokenId),

    /// Another token is already held as the selection.
    #[display("Error, token {} has already been selected. Please place the token now.", _0)]
    AlreadySelected(TokenId),

    /// A placement was requested without a selected token.
    #[display("Error, a token has to be selected first.")]
    NoSelection,

    /// The target field already holds a token.
    #[display("Error, a token has already been placed at field {};{}.", row, column)]
    FieldOccupied {
        /// Normalized row of the field.
        row: usize,
        /// Normalized column of the field.
        column: usize,
    },

    /// The coordinates fall outside a bounded grid.
    #[display("Error, field {};{} does not exist.", row, column)]
    OutOfRange {
        /// Row as given by the caller.
        row: i64,
        /// Column as given by the caller.
        column: i64,
    },

    /// The game has already been won or drawn.
    #[display("Error, the game is already over.")]
    GameOver,
}

impl std::error::Error for QuartoError {}

/// Fieldless discriminant of [`QuartoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum QuartoErrorKind {
    /// See [`QuartoError::InvalidArgument`].
    InvalidArgument,
    /// See [`QuartoError::NotFound`].
    NotFound,
    /// See [`QuartoError::AlreadySelected`].
    AlreadySelected,
    /// See [`QuartoError::NoSelection`].
    NoSelection,
    /// See [`QuartoError::FieldOccupied`].
    FieldOccupied,
    /// See [`QuartoError::OutOfRange`].
    OutOfRange,
    /// See [`QuartoError::GameOver`].
    GameOver,
}

impl QuartoError {
    /// Creates an invalid-argument error from any message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> QuartoErrorKind {
        match self {
            Self::InvalidArgument(_) => QuartoErrorKind::InvalidArgument,
            Self::NotFound(_) => QuartoErrorKind::NotFound,
            Self::AlreadySelected(_) => QuartoErrorKind::AlreadySelected,
            Self::NoSelection => QuartoErrorKind::NoSelection,
            Self::FieldOccupied { .. } => QuartoErrorKind::FieldOccupied,
            Self::OutOfRange { .. } => QuartoErrorKind::OutOfRange,
            Self::GameOver => QuartoErrorKind::GameOver,
        }
    }
}
