//! # Party Games
//!
//! A handful of single-screen party games for the terminal. Connect Four is
//! the centrepiece; Pass the Parcel, a coin flip, a chocolate wheel and Pin
//! the Tail round out the set. The UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Connect Four: column-stack board, markers, game state machine
//! - [`party`] — The smaller games: parcel, coin, wheel, pin the tail
//! - [`ui`] — Terminal UI: menu, board view, party game screens
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod party;
pub mod ui;
