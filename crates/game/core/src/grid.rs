//! Row-major board of tiles.
//!
//! The grid is the only state exchanged with the server. It is replaced
//! wholesale on every server update, so it stays a plain owned value with
//! no incremental bookkeeping.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GridError;
use crate::tile::Tile;

/// Lower bound of the blocked-tile share in a freshly generated board.
pub const MIN_BLOCKED_RATIO: f64 = 0.067;
/// Upper bound of the blocked-tile share in a freshly generated board.
pub const MAX_BLOCKED_RATIO: f64 = 0.13;

/// `(row, col)` index of a tile. Encoded as `[row, col]` on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[usize; 2]", into = "[usize; 2]")
)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Odd rows are shifted half a hex to the right.
    pub const fn is_offset_row(&self) -> bool {
        self.row % 2 == 1
    }
}

impl From<[usize; 2]> for TilePos {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<TilePos> for [usize; 2] {
    fn from(pos: TilePos) -> Self {
        [pos.row, pos.col]
    }
}

/// Board contents. Rows may in principle differ in length; a tile is valid
/// when its row exists and its column lies inside that row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Square board of empty tiles.
    pub fn empty(size: usize) -> Self {
        Self {
            rows: vec![vec![Tile::Empty; size]; size],
        }
    }

    /// Fresh `size × size` board: the cat in the center and a random number
    /// of blocked tiles between `⌊0.067·N²⌋` and `⌊0.13·N²⌋`.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptySize);
        }

        let mut grid = Self::empty(size);
        let cat = TilePos::new(size / 2, size / 2);
        grid.set(cat, Tile::Cat)?;

        let (min, max) = blocked_range(size);
        let count = rng.gen_range(min..=max);

        let mut candidates: Vec<TilePos> = grid.positions().filter(|pos| *pos != cat).collect();
        candidates.shuffle(rng);
        for pos in candidates.into_iter().take(count) {
            grid.set(pos, Tile::Blocked)?;
        }

        Ok(grid)
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        self.rows.get(pos.row).is_some_and(|row| pos.col < row.len())
    }

    pub fn get(&self, pos: TilePos) -> Option<Tile> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrites a tile and returns its previous state.
    pub fn set(&mut self, pos: TilePos, tile: Tile) -> Result<Tile, GridError> {
        let slot = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(GridError::OutOfBounds(pos))?;
        Ok(std::mem::replace(slot, tile))
    }

    /// All valid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| (0..tiles.len()).map(move |col| TilePos::new(row, col)))
    }

    /// Every tile with its position, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (TilePos, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (TilePos::new(row, col), *tile))
        })
    }

    pub fn count(&self, kind: Tile) -> usize {
        self.tiles().filter(|(_, tile)| *tile == kind).count()
    }

    /// First cat tile in row-major order.
    pub fn cat_position(&self) -> Option<TilePos> {
        self.tiles().find(|(_, tile)| tile.is_cat()).map(|(pos, _)| pos)
    }

    /// True when exactly one tile holds the cat.
    pub fn is_well_formed(&self) -> bool {
        self.count(Tile::Cat) == 1
    }
}

/// Inclusive bounds on the blocked-tile count of a generated board.
pub fn blocked_range(size: usize) -> (usize, usize) {
    let area = (size * size) as f64;
    let min = (MIN_BLOCKED_RATIO * area).floor() as usize;
    let max = (MAX_BLOCKED_RATIO * area).floor() as usize;
    // The cat occupies one tile, everything else may be blocked.
    let free = (size * size).saturating_sub(1);
    (min.min(free), max.min(free))
}
