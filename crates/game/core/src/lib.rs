//! Board model and geometry shared by the host runtime and every frontend.
//!
//! `game-core` knows nothing about the cat's search or the rules of the game;
//! the server owns those. This crate defines what travels over the wire
//! ([`Grid`], [`Request`] payloads), how tiles map to pixels ([`HexLayout`])
//! and how a fresh board is seeded ([`Grid::generate`]). It performs no I/O.
pub mod action;
pub mod error;
pub mod grid;
pub mod hex;
pub mod outcome;
pub mod tile;

pub use action::{EditAction, EditRequest, MoveRequest, Request, Strategy, UnknownStrategy};
pub use error::{GridError, LayoutError};
pub use grid::{Grid, MAX_BLOCKED_RATIO, MIN_BLOCKED_RATIO, TilePos, blocked_range};
pub use hex::{Extent, HexLayout, Point};
pub use outcome::Outcome;
pub use tile::Tile;
