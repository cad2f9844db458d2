//! Strictly Quarto CLI - a line-based shell around the game core
//!
//! Reads one command per line, applies it to a [`strictly_quarto::Game`] and
//! prints the protocol reply (`OK`, `draw`, `P1 wins`, ...). Errors are
//! reported as `Error, ...` lines and the session continues.
//!
//! # Example
//!
//! ```
//! use strictly_quarto::TopologyKind;
//! use strictly_quarto_cli::{GameConfig, Reply, Shell};
//!
//! # fn example() -> anyhow::Result<()> {
//! let game = GameConfig::default().build(TopologyKind::Toroidal)?;
//! let mut shell = Shell::new(game);
//!
//! assert_eq!(shell.execute("select 7"), Reply::Output("OK".to_string()));
//! assert_eq!(shell.execute("place -1;-1"), Reply::Output("OK".to_string()));
//! assert_eq!(shell.execute("quit"), Reply::Quit);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod shell;

pub use cli::Cli;
pub use command::{Command, CommandError};
pub use config::{ConfigError, GameConfig};
pub use shell::{Reply, Shell, ShellError};
