//! Widgets composing the terminal UI.
pub mod board;
pub mod controls;
pub mod endgame;
pub mod header;
pub mod messages;
