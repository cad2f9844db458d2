//! Win detection.
//!
//! A placement wins when, for some property of the placed token, the run of
//! consecutive tokens sharing that property through the placed field reaches
//! [`WINNING_LENGTH`] along one of the four orientations. Runs stop at empty
//! fields, at tokens lacking the property and, on bounded boards, at the
//! edge. On toroidal boards a run never counts a field twice.

use crate::board::Board;
use crate::property::Property;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of aligned tokens needed to win.
pub const WINNING_LENGTH: usize = 4;

/// Direction of a line through a field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Orientation {
    /// Along a column.
    Vertical,
    /// Along a row.
    Horizontal,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Bottom-left to top-right (`/`).
    AntiDiagonal,
}

impl Orientation {
    /// Row and column offset of one step forward.
    pub fn step(self) -> (i64, i64) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (-1, 1),
        }
    }

    /// Number of distinct fields on a wrapped line of this orientation.
    fn cycle_length(self, rows: usize, columns: usize) -> usize {
        match self {
            Orientation::Vertical => rows,
            Orientation::Horizontal => columns,
            Orientation::Diagonal | Orientation::AntiDiagonal => lcm(rows, columns),
        }
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: usize, b: usize) -> usize {
    match gcd(a, b) {
        0 => 0,
        divisor => (a / divisor).saturating_mul(b),
    }
}

/// Counts the run of tokens with `property` through field `row`, `column`.
///
/// The field itself is included when it holds a matching token. Scans both
/// directions of `orientation`; on toroidal boards the count is capped at the
/// number of distinct fields on the wrapped line.
#[instrument(skip(board), level = "trace")]
pub fn run_length(
    board: &Board,
    row: usize,
    column: usize,
    property: Property,
    orientation: Orientation,
) -> usize {
    if !board.field(row, column).is_some_and(|t| t.has(property)) {
        return 0;
    }

    let limit = if board.topology().wraps() {
        orientation.cycle_length(board.rows(), board.columns())
    } else {
        usize::MAX
    };
    let (dr, dc) = orientation.step();
    let (origin_row, origin_column) = (row as i64, column as i64);
    let mut count = 1;

    for direction in [1, -1] {
        let mut distance: i64 = 1;
        while count < limit {
            let r = origin_row + dr * direction * distance;
            let c = origin_column + dc * direction * distance;
            match board.token_at(r, c) {
                Some(token) if token.has(property) => {
                    count += 1;
                    distance += 1;
                }
                _ => break,
            }
        }
    }

    count
}

/// Checks whether the token on field `row`, `column` completes a line.
///
/// Returns `false` for an empty field. Stops at the first qualifying
/// property and orientation.
#[instrument(skip(board))]
pub fn check_win(board: &Board, row: usize, column: usize) -> bool {
    let Some(token) = board.field(row, column) else {
        return false;
    };

    for &property in token.properties() {
        for orientation in Orientation::iter() {
            let length = run_length(board, row, column, property, orientation);
            if length >= WINNING_LENGTH {
                debug!(%property, %orientation, length, "Winning line found");
                return true;
            }
        }
    }

    false
}
