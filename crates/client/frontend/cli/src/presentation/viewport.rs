//! Mapping between terminal cells and board layout pixels.
//!
//! The board canvas is letter-boxed inside its panel so hexagons keep their
//! shape. Terminal cells are assumed to be twice as tall as they are wide.
use game_core::{Extent, Point};
use ratatui::layout::Rect;

/// Height of a terminal cell in units of its width.
pub const CELL_ASPECT: f64 = 2.0;

/// The rectangle the board was last drawn into, with the layout extent it shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardViewport {
    area: Rect,
    extent: Extent,
}

impl BoardViewport {
    /// Largest centered rectangle inside `container` with the aspect of `extent`.
    ///
    /// Returns `None` for an empty container or an empty board.
    pub fn fit(container: Rect, extent: Extent) -> Option<Self> {
        if container.width == 0
            || container.height == 0
            || extent.width <= 0.0
            || extent.height <= 0.0
        {
            return None;
        }

        let cols = f64::from(container.width);
        let rows = f64::from(container.height);
        // Rows needed to show the full width at the right aspect.
        let rows_for_width = cols * extent.height / (extent.width * CELL_ASPECT);

        let (width, height) = if rows_for_width <= rows {
            (cols, rows_for_width.round().max(1.0))
        } else {
            let cols_for_height = rows * extent.width * CELL_ASPECT / extent.height;
            (cols_for_height.round().max(1.0).min(cols), rows)
        };
        let (width, height) = (width as u16, height as u16);

        let area = Rect {
            x: container.x + (container.width - width) / 2,
            y: container.y + (container.height - height) / 2,
            width,
            height,
        };
        Some(Self { area, extent })
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Layout pixel at the center of the terminal cell (`column`, `row`).
    pub fn cell_to_point(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let dx = f64::from(column - area.x) + 0.5;
        let dy = f64::from(row - area.y) + 0.5;
        Some(Point::new(
            dx * self.extent.width / f64::from(area.width),
            dy * self.extent.height / f64::from(area.height),
        ))
    }

    /// Layout pixels covered by one horizontal and one vertical canvas dot.
    ///
    /// `dots_per_row` is the vertical resolution of the canvas marker.
    pub fn dot_size(&self, dots_per_row: u16) -> (f64, f64) {
        (
            self.extent.width / f64::from(self.area.width),
            self.extent.height / (f64::from(self.area.height) * f64::from(dots_per_row.max(1))),
        )
    }
}
