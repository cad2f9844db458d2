//! Game rules for Quarto.
//!
//! Pure functions evaluating a board. Rules are kept apart from board storage
//! so the coordinator and the board can both consult them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_exhausted, is_full};
pub use win::{Orientation, WINNING_LENGTH, check_win, run_length};
