//! Core Connect Four logic: the column-stack board, the two markers, and the
//! game state machine that drives a single match.

mod board;
mod marker;
mod state;

pub use board::{line_of_four, Board, BoardError, Cell, PlaceError, COLS, LINE_LENGTH, ROWS};
pub use marker::Marker;
pub use state::{ConnectFour, MoveError, Phase};
