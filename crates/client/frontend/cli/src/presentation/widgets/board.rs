//! Hex board drawn on a ratatui canvas.
//!
//! Canvas coordinates equal layout pixels with the y axis flipped, since the
//! canvas grows upwards and the layout grows downwards.

use game_core::{Grid, HexLayout, Point, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use crate::presentation::{
    theme::{CAT_GLYPH, RatatuiTheme},
    viewport::BoardViewport,
};

/// Vertical canvas dots per terminal row with [`Marker::HalfBlock`].
const DOTS_PER_ROW: u16 = 2;

/// Render the board and return the viewport it was drawn into.
///
/// Returns `None` when there is nothing to draw (no board yet or no room).
pub fn render(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    layout: &HexLayout,
    theme: &RatatuiTheme,
) -> Option<BoardViewport> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .style(theme.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(viewport) = BoardViewport::fit(inner, layout.extent(grid)) else {
        let placeholder = Paragraph::new("No board yet. Press n to start a new game.")
            .style(theme.muted())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return None;
    };

    let extent = viewport.extent();
    let (dot_width, dot_height) = viewport.dot_size(DOTS_PER_ROW);
    let flip = |point: Point| (point.x, extent.height - point.y);

    let mut fills: Vec<(Color, Vec<(f64, f64)>)> = Vec::new();
    for (pos, tile) in grid.tiles() {
        let center = layout.center(pos);
        let coords = fill_points(layout, center, dot_width, dot_height)
            .into_iter()
            .map(flip)
            .collect();
        fills.push((theme.tile_fill(tile), coords));
    }

    let mut outlines = Vec::new();
    for pos in grid.positions() {
        let corners = layout.vertices(layout.center(pos));
        for (i, from) in corners.iter().enumerate() {
            let (x1, y1) = flip(*from);
            let (x2, y2) = flip(corners[(i + 1) % corners.len()]);
            outlines.push(CanvasLine::new(x1, y1, x2, y2, theme.outline()));
        }
    }

    let cat = grid.cat_position().map(|pos| flip(layout.center(pos)));
    let cat_style = Style::default()
        .fg(Color::Black)
        .bg(theme.tile_fill(Tile::Cat));

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(theme.background)
        .x_bounds([0.0, extent.width])
        .y_bounds([0.0, extent.height])
        .paint(|ctx| {
            for (color, coords) in &fills {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
            for line in &outlines {
                ctx.draw(line);
            }
            if let Some((x, y)) = cat {
                ctx.print(x, y, Span::styled(CAT_GLYPH, cat_style));
            }
        });

    frame.render_widget(canvas, viewport.area());
    Some(viewport)
}

/// Centers of the canvas dots that fall inside the hexagon at `center`.
///
/// Dots sit on a lattice anchored at the layout origin so neighbouring tiles
/// never claim the same dot twice.
fn fill_points(layout: &HexLayout, center: Point, dot_width: f64, dot_height: f64) -> Vec<Point> {
    if dot_width <= 0.0 || dot_height <= 0.0 {
        return Vec::new();
    }
    let half_width = layout.hex_width() / 2.0;
    let radius = layout.radius();

    let first_col = ((center.x - half_width) / dot_width).floor().max(0.0) as usize;
    let last_col = ((center.x + half_width) / dot_width).ceil().max(0.0) as usize;
    let first_row = ((center.y - radius) / dot_height).floor().max(0.0) as usize;
    let last_row = ((center.y + radius) / dot_height).ceil().max(0.0) as usize;

    let mut points = Vec::new();
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            let dot = Point::new(
                (col as f64 + 0.5) * dot_width,
                (row as f64 + 0.5) * dot_height,
            );
            if layout.hex_contains(center, dot) {
                points.push(dot);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use game_core::TilePos;

    use super::*;

    #[test]
    fn fill_stays_inside_the_hexagon() {
        let layout = HexLayout::default();
        let center = layout.center(TilePos::new(1, 1));
        let points = fill_points(&layout, center, 2.0, 3.0);

        assert!(!points.is_empty());
        assert!(points.iter().all(|p| layout.hex_contains(center, *p)));
        assert!(
            points
                .iter()
                .all(|p| center.distance(*p) <= layout.radius() + 1e-9)
        );
    }

    #[test]
    fn neighbouring_fills_do_not_overlap() {
        let layout = HexLayout::default();
        let grid = Grid::empty(3);
        let mut seen = std::collections::HashSet::new();
        for pos in grid.positions() {
            for point in fill_points(&layout, layout.center(pos), 1.5, 2.5) {
                // Dots exactly on a shared edge may belong to both hexes.
                let key = ((point.x * 100.0) as i64, (point.y * 100.0) as i64);
                let on_edge = grid
                    .positions()
                    .filter(|other| layout.hex_contains(layout.center(*other), point))
                    .count()
                    > 1;
                assert!(seen.insert(key) || on_edge, "dot {point:?} claimed twice");
            }
        }
    }
}
