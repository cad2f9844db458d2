//! Board state: grid, pool of available tokens and the selection slot.
//!
//! Every token of a board lives in exactly one of three places: the pool,
//! the selection slot, or a field. Fields are written once and never cleared.

use crate::error::QuartoError;
use crate::property::PropertyPadding;
use crate::rules;
use crate::token::{Token, TokenId};
use crate::topology::{Topology, TopologyKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Marker rendered for an empty field.
pub const EMPTY_FIELD: &str = "#";

/// A token held for the opponent to place.
///
/// Remembers where in the pool the token came from so a rollback restores
/// the pool order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Selection {
    token: Token,
    pool_index: usize,
}

/// Rectangular game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    topology: Topology,
    token_count: usize,
    property_count: usize,
    /// Fields in row-major order.
    fields: Vec<Option<Token>>,
    /// Unplaced, unselected tokens in insertion order.
    pool: Vec<Token>,
    selected: Option<Selection>,
}

impl Board {
    /// Creates a board whose padded properties are drawn at random.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if any count or extent is zero.
    pub fn new(
        kind: TopologyKind,
        token_count: usize,
        property_count: usize,
        rows: usize,
        columns: usize,
    ) -> Result<Self, QuartoError> {
        Self::with_padding(
            kind,
            token_count,
            property_count,
            rows,
            columns,
            PropertyPadding::default(),
        )
    }

    /// Creates a board, filling properties beyond the fourth per `padding`.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if any count or extent is zero.
    #[instrument]
    pub fn with_padding(
        kind: TopologyKind,
        token_count: usize,
        property_count: usize,
        rows: usize,
        columns: usize,
        padding: PropertyPadding,
    ) -> Result<Self, QuartoError> {
        if rows == 0 || columns == 0 {
            return Err(QuartoError::invalid(
                "both the number of rows and the number of columns have to be greater than zero.",
            ));
        }
        if token_count == 0 {
            return Err(QuartoError::invalid("at least one token has to be used."));
        }
        if property_count == 0 {
            return Err(QuartoError::invalid(
                "the number of properties has to be at least one.",
            ));
        }
        let field_count = rows
            .checked_mul(columns)
            .ok_or_else(|| QuartoError::invalid("the board is too large."))?;
        let last_id = TokenId::try_from(token_count - 1)
            .map_err(|_| QuartoError::invalid("too many tokens."))?;

        let mut rng = padding.generator();
        let pool = (0..=last_id)
            .map(|id| Token::new(id, property_count, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%kind, rows, columns, token_count, property_count, "Board created");
        Ok(Self {
            topology: Topology::new(kind, rows, columns),
            token_count,
            property_count,
            fields: vec![None; field_count],
            pool,
            selected: None,
        })
    }

    /// Returns the topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.topology.rows()
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.topology.columns()
    }

    /// Returns the number of tokens the board was built with.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Returns the number of properties each token has.
    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Returns the currently selected token.
    pub fn selected(&self) -> Option<&Token> {
        self.selected.as_ref().map(|s| &s.token)
    }

    /// Returns the pool of available tokens in insertion order.
    pub fn pool(&self) -> &[Token] {
        &self.pool
    }

    /// Returns the ids of the available tokens in insertion order.
    pub fn available_tokens(&self) -> Vec<TokenId> {
        self.pool.iter().map(Token::id).collect()
    }

    /// Finds the first available token with `id`.
    pub fn find_available(&self, id: TokenId) -> Option<&Token> {
        self.pool.iter().find(|t| t.id() == id)
    }

    /// Returns the token on the field at grid indices `row`, `column`.
    pub fn field(&self, row: usize, column: usize) -> Option<&Token> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.fields[row * self.columns() + column].as_ref()
    }

    /// Returns the token at raw coordinates after normalization.
    ///
    /// Coordinates that do not name a field yield `None`.
    pub fn token_at(&self, row: i64, column: i64) -> Option<&Token> {
        let (row, column) = self.topology.resolve(row, column)?;
        self.field(row, column)
    }

    /// Iterates over every placed token.
    pub fn placed(&self) -> impl Iterator<Item = &Token> {
        self.fields.iter().flatten()
    }

    /// Moves `token` from the pool into the selection slot.
    ///
    /// # Errors
    ///
    /// - [`QuartoError::NotFound`] if `token` is not in the pool.
    /// - [`QuartoError::AlreadySelected`] if another token is held.
    #[instrument(skip(self), fields(token = token.id()))]
    pub fn select(&mut self, token: &Token) -> Result<(), QuartoError> {
        let pool_index = self
            .pool
            .iter()
            .position(|t| t == token)
            .ok_or(QuartoError::NotFound(token.id()))?;
        if let Some(held) = &self.selected {
            return Err(QuartoError::AlreadySelected(held.token.id()));
        }

        let token = self.pool.remove(pool_index);
        debug!(token = token.id(), pool_index, "Token selected");
        self.selected = Some(Selection { token, pool_index });
        Ok(())
    }

    /// Places the selected token at raw coordinates.
    ///
    /// Returns the normalized grid indices of the field written.
    ///
    /// # Errors
    ///
    /// - [`QuartoError::OutOfRange`] if the coordinates name no field.
    /// - [`QuartoError::FieldOccupied`] if the field already holds a token.
    /// - [`QuartoError::NoSelection`] if no token is selected.
    ///
    /// On error the selection is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: i64, column: i64) -> Result<(usize, usize), QuartoError> {
        let (r, c) = self
            .topology
            .resolve(row, column)
            .ok_or(QuartoError::OutOfRange { row, column })?;
        let index = r * self.columns() + c;
        if self.fields[index].is_some() {
            return Err(QuartoError::FieldOccupied { row: r, column: c });
        }
        let selection = self.selected.take().ok_or(QuartoError::NoSelection)?;

        debug!(token = selection.token.id(), row = r, column = c, "Token placed");
        self.fields[index] = Some(selection.token);
        Ok((r, c))
    }

    /// Returns the selected token to the pool at its original position.
    ///
    /// Returns the id of the restored token, or `None` if nothing was held.
    #[instrument(skip(self))]
    pub fn reset_selection(&mut self) -> Option<TokenId> {
        let Selection { token, pool_index } = self.selected.take()?;
        let id = token.id();
        let index = pool_index.min(self.pool.len());
        self.pool.insert(index, token);
        debug!(token = id, pool_index = index, "Selection returned to pool");
        Some(id)
    }

    /// Checks whether the token at raw coordinates completes a winning line.
    ///
    /// Returns `false` for empty fields and for coordinates that name no
    /// field.
    #[instrument(skip(self))]
    pub fn check_win(&self, row: i64, column: i64) -> bool {
        match self.topology.resolve(row, column) {
            Some((r, c)) => rules::check_win(self, r, c),
            None => {
                warn!(row, column, "Win check outside the grid");
                false
            }
        }
    }

    /// Checks whether every field is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks whether the pool still holds tokens.
    pub fn has_available_tokens(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Returns row `row` as token ids, `None` for empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if the row does not exist.
    pub fn row_view(&self, row: i64) -> Result<Vec<Option<TokenId>>, QuartoError> {
        let row = usize::try_from(row)
            .ok()
            .filter(|r| *r < self.rows())
            .ok_or_else(|| QuartoError::invalid("invalid row number."))?;
        Ok((0..self.columns())
            .map(|c| self.field(row, c).map(Token::id))
            .collect())
    }

    /// Returns column `column` as token ids, `None` for empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if the column does not exist.
    pub fn column_view(&self, column: i64) -> Result<Vec<Option<TokenId>>, QuartoError> {
        let column = usize::try_from(column)
            .ok()
            .filter(|c| *c < self.columns())
            .ok_or_else(|| QuartoError::invalid("invalid column number."))?;
        Ok((0..self.rows())
            .map(|r| self.field(r, column).map(Token::id))
            .collect())
    }

    /// Renders row `row` as space-joined ids with `#` for empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if the row does not exist.
    pub fn render_row(&self, row: i64) -> Result<String, QuartoError> {
        self.row_view(row).map(|line| render_line(&line))
    }

    /// Renders column `column` as space-joined ids with `#` for empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if the column does not exist.
    pub fn render_column(&self, column: i64) -> Result<String, QuartoError> {
        self.column_view(column).map(|line| render_line(&line))
    }

    /// Renders the available token ids, space-joined.
    pub fn render_pool(&self) -> String {
        self.pool
            .iter()
            .map(|t| t.id().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn render_line(line: &[Option<TokenId>]) -> String {
    line.iter()
        .map(|field| match field {
            Some(id) => id.to_string(),
            None => EMPTY_FIELD.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            let line: Vec<Option<TokenId>> = (0..self.columns())
                .map(|c| self.field(row, c).map(Token::id))
                .collect();
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", render_line(&line))?;
        }
        Ok(())
    }
}
