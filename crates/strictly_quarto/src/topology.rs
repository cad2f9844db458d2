//! Board topologies: how raw coordinates map onto the grid.
//!
//! A bounded board leaves coordinates untouched and rejects anything outside
//! the grid. A toroidal board wraps both axes independently, so every integer
//! coordinate names a field.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Coordinate normalization capability.
pub trait Normalize {
    /// Maps a raw row onto the grid's row axis.
    fn normalize_row(&self, row: i64) -> i64;

    /// Maps a raw column onto the grid's column axis.
    fn normalize_column(&self, column: i64) -> i64;
}

/// Which topology a board uses, chosen at construction time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    /// Edges are hard limits.
    #[default]
    #[strum(to_string = "standard", serialize = "bounded")]
    #[serde(alias = "standard")]
    Bounded,
    /// Opposite edges are glued together.
    #[strum(to_string = "torus", serialize = "toroidal")]
    #[serde(alias = "torus")]
    Toroidal,
}

/// A topology together with the grid extents it normalizes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Coordinates pass through unchanged.
    Bounded {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },
    /// Coordinates wrap around both axes.
    Toroidal {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },
}

impl Topology {
    /// Creates a topology of `kind` for a `rows` x `columns` grid.
    pub fn new(kind: TopologyKind, rows: usize, columns: usize) -> Self {
        match kind {
            TopologyKind::Bounded => Topology::Bounded { rows, columns },
            TopologyKind::Toroidal => Topology::Toroidal { rows, columns },
        }
    }

    /// Returns the kind of this topology.
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Bounded { .. } => TopologyKind::Bounded,
            Topology::Toroidal { .. } => TopologyKind::Toroidal,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        match *self {
            Topology::Bounded { rows, .. } | Topology::Toroidal { rows, .. } => rows,
        }
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        match *self {
            Topology::Bounded { columns, .. } | Topology::Toroidal { columns, .. } => columns,
        }
    }

    /// Checks whether lines continue across the edges.
    pub fn wraps(&self) -> bool {
        matches!(self, Topology::Toroidal { .. })
    }

    /// Normalizes both coordinates and returns grid indices if they exist.
    #[instrument(level = "trace")]
    pub fn resolve(&self, row: i64, column: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(self.normalize_row(row)).ok()?;
        let column = usize::try_from(self.normalize_column(column)).ok()?;
        (row < self.rows() && column < self.columns()).then_some((row, column))
    }
}

impl Normalize for Topology {
    fn normalize_row(&self, row: i64) -> i64 {
        match self {
            Topology::Bounded { .. } => row,
            Topology::Toroidal { rows, .. } => wrap(row, *rows),
        }
    }

    fn normalize_column(&self, column: i64) -> i64 {
        match self {
            Topology::Bounded { .. } => column,
            Topology::Toroidal { columns, .. } => wrap(column, *columns),
        }
    }
}

/// Wraps `coordinate` into `0..extent`.
///
/// Negative coordinates count back from the far edge, so `-1` is the last
/// index. An extent of zero leaves the coordinate untouched.
fn wrap(coordinate: i64, extent: usize) -> i64 {
    let Ok(extent) = i64::try_from(extent) else {
        return coordinate;
    };
    if extent == 0 {
        return coordinate;
    }
    if coordinate >= 0 {
        coordinate % extent
    } else {
        (extent - 1) - ((-(coordinate + 1)) % extent)
    }
}
