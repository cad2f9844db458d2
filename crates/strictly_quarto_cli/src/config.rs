//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_quarto::{Board, Game, PropertyPadding, QuartoError, TopologyKind};
use tracing::{debug, info, instrument};

/// Board and roster parameters for a session.
///
/// Every key is optional in the file; missing keys take the standard preset
/// of 16 tokens with 4 properties on a 6x6 grid for two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tokens in the pool.
    token_count: usize,

    /// Number of properties per token.
    property_count: usize,

    /// Number of grid rows.
    rows: usize,

    /// Number of grid columns.
    columns: usize,

    /// Number of players on the roster.
    players: usize,

    /// Seed for properties beyond the fourth; random when absent.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            token_count: 16,
            property_count: 4,
            rows: 6,
            columns: 6,
            players: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the padding seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Returns how padded properties are drawn.
    pub fn padding(&self) -> PropertyPadding {
        match self.seed {
            Some(seed) => PropertyPadding::Seeded(seed),
            None => PropertyPadding::Random,
        }
    }

    /// Builds a fresh game on a board of `kind`.
    #[instrument(skip(self))]
    pub fn build(&self, kind: TopologyKind) -> Result<Game, QuartoError> {
        let board = Board::with_padding(
            kind,
            self.token_count,
            self.property_count,
            self.rows,
            self.columns,
            self.padding(),
        )?;
        Ok(Game::new(self.players, board))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
