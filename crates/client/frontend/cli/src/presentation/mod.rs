//! Terminal presentation layer: setup, styling, layout and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod viewport;
pub mod widgets;
