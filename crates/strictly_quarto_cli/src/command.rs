//! Text commands accepted by the shell.
//!
//! A line holds a command word, optionally followed by a single argument
//! after the first whitespace character. Argument syntax is validated here so
//! the shell only ever sees well-formed commands.

use std::str::FromStr;
use strictly_quarto::TokenId;
use tracing::instrument;

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Choose a token for the opponent.
    Select(TokenId),
    /// Place the selected token.
    Place {
        /// Raw row coordinate.
        row: i64,
        /// Raw column coordinate.
        column: i64,
    },
    /// List the available tokens.
    Bag,
    /// Print one board row.
    RowPrint(i64),
    /// Print one board column.
    ColPrint(i64),
}

/// Malformed command input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Error, please enter a command")]
    Empty,

    /// Command word not recognised.
    #[display(
        "Error, only the following commands are allowed: quit, select, place, bag, rowprint, colprint."
    )]
    Unknown,

    /// Command needs an argument but got none.
    #[display(
        "Error, the command {} requires exactly one parameter to work, but you provided none.",
        _0
    )]
    MissingArgument(&'static str),

    /// Command takes no argument but got one.
    #[display(
        "Error, the command {} does not accept any parameter, but you provided some.",
        _0
    )]
    UnexpectedArgument(&'static str),

    /// Argument is not an integer.
    #[display("Error, {} is not a valid integer number.", _0)]
    NotAnInteger(String),

    /// Token number outside the id range.
    #[display("Error, the token number {} does not exist.", _0)]
    UnknownToken(i64),

    /// `place` argument without exactly one `;`.
    #[display(
        "Error, the command place requires exactly 2 semicolon-separated parameters to work, but you provided {}.",
        _0
    )]
    PlaceArity(usize),

    /// `place` coordinates that are not integers.
    #[display("Error, {} or {} are not valid integer numbers.", _0, _1)]
    PlaceCoordinates(String, String),
}

impl std::error::Error for CommandError {}

impl CommandError {
    /// Checks whether this error came from malformed `place` coordinates.
    ///
    /// A failed placement abandons the pending selection. A bare `place`
    /// fails the argument count check first and keeps it.
    pub fn aborts_placement(&self) -> bool {
        matches!(
            self,
            CommandError::PlaceArity(_) | CommandError::PlaceCoordinates(_, _)
        )
    }
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, argument) = match line.split_once(char::is_whitespace) {
            Some((word, argument)) => (word, Some(argument)),
            None => (line, None),
        };

        match word {
            "quit" => no_argument("quit", argument).map(|()| Command::Quit),
            "bag" => no_argument("bag", argument).map(|()| Command::Bag),
            "select" => parse_token(one_argument("select", argument)?).map(Command::Select),
            "place" => {
                let (row, column) = parse_field(one_argument("place", argument)?)?;
                Ok(Command::Place { row, column })
            }
            "rowprint" => parse_integer(one_argument("rowprint", argument)?).map(Command::RowPrint),
            "colprint" => parse_integer(one_argument("colprint", argument)?).map(Command::ColPrint),
            _ => Err(CommandError::Unknown),
        }
    }
}

fn no_argument(word: &'static str, argument: Option<&str>) -> Result<(), CommandError> {
    match argument {
        None => Ok(()),
        Some(_) => Err(CommandError::UnexpectedArgument(word)),
    }
}

fn one_argument<'a>(word: &'static str, argument: Option<&'a str>) -> Result<&'a str, CommandError> {
    argument.ok_or(CommandError::MissingArgument(word))
}

fn parse_integer(text: &str) -> Result<i64, CommandError> {
    text.parse()
        .map_err(|_| CommandError::NotAnInteger(text.to_string()))
}

fn parse_token(text: &str) -> Result<TokenId, CommandError> {
    let number = parse_integer(text)?;
    TokenId::try_from(number).map_err(|_| CommandError::UnknownToken(number))
}

fn parse_field(text: &str) -> Result<(i64, i64), CommandError> {
    let parts: Vec<&str> = text.trim().split(';').collect();
    match parts.as_slice() {
        [row, column] => match (row.parse(), column.parse()) {
            (Ok(row), Ok(column)) => Ok((row, column)),
            _ => Err(CommandError::PlaceCoordinates(
                row.to_string(),
                column.to_string(),
            )),
        },
        _ => Err(CommandError::PlaceArity(parts.len())),
    }
}
