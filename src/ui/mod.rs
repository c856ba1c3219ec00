//! Terminal UI: a menu, the Connect Four board view, and one screen for each
//! party game.

mod app;
pub mod board_widget;
mod game_view;
mod party_view;

pub use app::{App, Screen};
