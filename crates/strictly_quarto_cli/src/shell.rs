//! Line-based session loop driving a [`Game`].

use crate::command::{Command, CommandError};
use std::io::{BufRead, Write};
use strictly_quarto::{Game, QuartoError};
use tracing::{debug, info, instrument, warn};

/// Response to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text for the player.
    Output(String),
    /// Error message for the player; the session continues.
    Error(String),
    /// The session ends.
    Quit,
}

/// Failure while handling a line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ShellError {
    /// The line was not a valid command.
    #[display("{}", _0)]
    Command(CommandError),
    /// The game rejected the action.
    #[display("{}", _0)]
    Game(QuartoError),
}

impl std::error::Error for ShellError {}

/// An interactive session over one game.
#[derive(Debug, Clone)]
pub struct Shell {
    game: Game,
}

impl Shell {
    /// Creates a session for `game`.
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles one input line without touching any I/O.
    #[instrument(skip(self))]
    pub fn execute(&mut self, line: &str) -> Reply {
        match self.dispatch(line) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "Command failed");
                Reply::Error(error.to_string())
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Reply, ShellError> {
        let command = line.parse::<Command>().inspect_err(|error| {
            if error.aborts_placement() {
                self.game.reset_move();
            }
        })?;
        debug!(?command, "Parsed command");

        match command {
            Command::Quit => Ok(Reply::Quit),
            Command::Select(id) => {
                self.game.select_token(id)?;
                Ok(Reply::Output("OK".to_string()))
            }
            Command::Place { row, column } => match self.game.place_token(row, column) {
                Ok(outcome) => Ok(Reply::Output(outcome.to_string())),
                Err(error) => {
                    self.game.reset_move();
                    Err(error.into())
                }
            },
            Command::Bag => Ok(Reply::Output(self.game.board().render_pool())),
            Command::RowPrint(row) => Ok(Reply::Output(self.game.board().render_row(row)?)),
            Command::ColPrint(column) => {
                Ok(Reply::Output(self.game.board().render_column(column)?))
            }
        }
    }

    /// Reads commands from `input` until `quit` or end of input, writing
    /// every reply line to `output`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Session started");
        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Output(text) | Reply::Error(text) => {
                    writeln!(output, "{}", text)?;
                    output.flush()?;
                }
                Reply::Quit => {
                    info!("Session ended by quit");
                    return Ok(());
                }
            }
        }
        info!("Session ended at end of input");
        Ok(())
    }
}
