//! Error types for the board model.
//!
//! Grid errors cover malformed tile data and out-of-range edits; layout
//! errors cover hex geometry that would make the pixel → tile lookup
//! ambiguous.

use thiserror::Error;

use crate::grid::TilePos;

/// Failures raised while building or mutating a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A tile code outside the known set `{0, 1, 6}`.
    #[error("unknown tile code {0}")]
    UnknownTileCode(u8),

    /// The tile is not part of the grid.
    #[error("tile ({}, {}) is outside the grid", .0.row, .0.col)]
    OutOfBounds(TilePos),

    /// Boards must have at least one tile.
    #[error("grid size must be at least 1")]
    EmptySize,
}

/// Invalid hex layout parameters.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("hex radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Acceptance disks of neighbouring tiles would overlap.
    #[error("click tolerance {factor} must be positive and below {max}")]
    InvalidTolerance { factor: f64, max: f64 },
}
