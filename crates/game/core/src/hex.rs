//! Pointy-top hex geometry for offset-row boards.
//!
//! Tiles sit in a brick pattern: every odd row is shifted right by half a
//! hex width. Pixel space has its origin in the top-left corner with `y`
//! growing downwards.

use std::f64::consts::PI;

use crate::error::LayoutError;
use crate::grid::{Grid, TilePos};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in layout pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of the area covered by a board.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Maps tile indices to pixel centers and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    radius: f64,
    origin: Point,
    tolerance: f64,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            origin: Self::DEFAULT_ORIGIN,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl HexLayout {
    pub const DEFAULT_RADIUS: f64 = 30.0;
    pub const DEFAULT_ORIGIN: Point = Point::new(0.0, 5.0);
    pub const DEFAULT_TOLERANCE: f64 = 0.85;

    /// Half of the smallest center-to-center distance, in units of the radius.
    /// Click tolerances must stay strictly below it.
    pub const MAX_TOLERANCE: f64 = SQRT_3 / 2.0;

    pub fn new(radius: f64, origin: Point, tolerance: f64) -> Result<Self, LayoutError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LayoutError::InvalidRadius(radius));
        }
        if !(tolerance > 0.0 && tolerance < Self::MAX_TOLERANCE) {
            return Err(LayoutError::InvalidTolerance {
                factor: tolerance,
                max: Self::MAX_TOLERANCE,
            });
        }
        Ok(Self {
            radius,
            origin,
            tolerance,
        })
    }

    /// Default origin and tolerance with a custom radius.
    pub fn with_radius(radius: f64) -> Result<Self, LayoutError> {
        Self::new(radius, Self::DEFAULT_ORIGIN, Self::DEFAULT_TOLERANCE)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn hex_width(&self) -> f64 {
        SQRT_3 * self.radius
    }

    pub fn hex_height(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn row_spacing(&self) -> f64 {
        0.75 * self.hex_height()
    }

    /// Pixel center of a tile.
    pub fn center(&self, pos: TilePos) -> Point {
        let width = self.hex_width();
        let shift = if pos.is_offset_row() { width / 2.0 } else { 0.0 };
        Point::new(
            pos.col as f64 * width + shift + self.radius + self.origin.x,
            pos.row as f64 * self.row_spacing() + self.radius + self.origin.y,
        )
    }

    /// Tile whose acceptance disk contains `point`.
    ///
    /// Linear scan over the grid; fine for boards in the tens of tiles.
    pub fn tile_at(&self, point: Point, grid: &Grid) -> Option<TilePos> {
        let limit = self.tolerance * self.radius;
        grid.positions()
            .find(|pos| self.center(*pos).distance(point) < limit)
    }

    /// Outline corners, starting at -30° and going clockwise in screen space.
    pub fn vertices(&self, center: Point) -> [Point; 6] {
        std::array::from_fn(|i| {
            let angle = PI / 3.0 * i as f64 - PI / 6.0;
            Point::new(
                center.x + self.radius * angle.cos(),
                center.y + self.radius * angle.sin(),
            )
        })
    }

    /// Whether `point` lies inside the hexagon centered at `center`.
    pub fn hex_contains(&self, center: Point, point: Point) -> bool {
        let dx = (point.x - center.x).abs();
        let dy = (point.y - center.y).abs();
        let half_width = self.hex_width() / 2.0;
        dx <= half_width && dy <= self.radius - dx / SQRT_3
    }

    /// Area needed to draw every tile of `grid`, measured from pixel (0, 0).
    pub fn extent(&self, grid: &Grid) -> Extent {
        let rows = grid.row_count();
        if rows == 0 {
            return Extent::default();
        }
        Extent {
            width: grid.col_count() as f64 * self.hex_width() + self.radius + self.origin.x,
            height: (rows - 1) as f64 * self.row_spacing() + self.hex_height() + self.origin.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn centers_follow_offset_rows() {
        let layout = HexLayout::default();
        let width = layout.hex_width();

        let first = layout.center(TilePos::new(0, 0));
        assert_close(first.x, 30.0);
        assert_close(first.y, 35.0);

        let shifted = layout.center(TilePos::new(1, 0));
        assert_close(shifted.x, width / 2.0 + 30.0);
        assert_close(shifted.y, 45.0 + 35.0);

        let far = layout.center(TilePos::new(2, 3));
        assert_close(far.x, 3.0 * width + 30.0);
        assert_close(far.y, 2.0 * 45.0 + 35.0);
    }

    #[test]
    fn inverse_mapping_round_trips_every_tile() {
        for size in [1, 2, 7, 11, 15] {
            let grid = Grid::empty(size);
            let layout = HexLayout::default();
            for pos in grid.positions() {
                assert_eq!(layout.tile_at(layout.center(pos), &grid), Some(pos));
            }
        }
    }

    #[test]
    fn points_near_a_center_resolve_to_that_tile() {
        let grid = Grid::empty(5);
        let layout = HexLayout::default();
        let center = layout.center(TilePos::new(2, 2));
        let nudged = Point::new(center.x + 20.0, center.y - 10.0);
        assert_eq!(layout.tile_at(nudged, &grid), Some(TilePos::new(2, 2)));
    }

    #[test]
    fn points_outside_the_board_have_no_tile() {
        let grid = Grid::empty(3);
        let layout = HexLayout::default();
        assert_eq!(layout.tile_at(Point::new(-100.0, -100.0), &grid), None);
        assert_eq!(layout.tile_at(Point::new(1_000.0, 40.0), &grid), None);
    }

    #[test]
    fn acceptance_disks_never_overlap() {
        let grid = Grid::empty(6);
        let layout = HexLayout::default();
        let limit = 2.0 * HexLayout::DEFAULT_TOLERANCE * layout.radius();
        let centers: Vec<_> = grid.positions().map(|pos| layout.center(pos)).collect();
        for (i, a) in centers.iter().enumerate() {
            for b in &centers[i + 1..] {
                assert!(a.distance(*b) > limit);
            }
        }
    }

    #[test]
    fn rejects_ambiguous_tolerance_and_bad_radius() {
        assert!(matches!(
            HexLayout::new(30.0, Point::default(), 0.95),
            Err(LayoutError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            HexLayout::with_radius(0.0),
            Err(LayoutError::InvalidRadius(_))
        ));
        assert!(HexLayout::with_radius(12.5).is_ok());
    }

    #[test]
    fn vertices_form_a_pointy_top_hexagon() {
        let layout = HexLayout::default();
        let center = Point::new(100.0, 100.0);
        let corners = layout.vertices(center);

        for corner in corners {
            assert_close(corner.distance(center), layout.radius());
        }
        // Corner 2 points straight down (screen space), corner 5 straight up.
        assert_close(corners[2].x, 100.0);
        assert_close(corners[2].y, 130.0);
        assert_close(corners[5].y, 70.0);
        // Flat sides face left and right.
        assert_close(corners[0].x, corners[1].x);
    }

    #[test]
    fn hex_contains_matches_outline() {
        let layout = HexLayout::default();
        let center = Point::new(0.0, 0.0);
        assert!(layout.hex_contains(center, center));
        assert!(layout.hex_contains(center, Point::new(0.0, 29.0)));
        assert!(!layout.hex_contains(center, Point::new(0.0, 31.0)));
        assert!(!layout.hex_contains(center, Point::new(26.0, 20.0)));
    }

    #[test]
    fn extent_covers_outermost_tiles() {
        let layout = HexLayout::default();
        let mut grid = Grid::empty(3);
        grid.set(TilePos::new(1, 2), Tile::Cat).unwrap();
        let extent = layout.extent(&grid);

        for pos in grid.positions() {
            for corner in layout.vertices(layout.center(pos)) {
                assert!(corner.x <= extent.width + 1e-9);
                assert!(corner.y <= extent.height + 1e-9);
            }
        }
        assert_eq!(layout.extent(&Grid::default()), Extent::default());
    }
}
