//! UI rendering entry point composing every widget.
use anyhow::Result;
use game_core::HexLayout;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::presentation::{
    terminal::Tui, theme::RatatuiTheme, viewport::BoardViewport, widgets,
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Width of the controls panel in columns.
const CONTROLS_WIDTH: u16 = 30;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub layout: &'a HexLayout,
    pub message_panel_height: u16,
}

/// Redraw the whole screen, returning the board viewport for click mapping.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<Option<BoardViewport>> {
    let mut viewport = None;
    terminal.draw(|frame| {
        viewport = render_frame(frame, ctx);
    })?;
    Ok(viewport)
}

fn render_frame(frame: &mut Frame, ctx: &RenderContext) -> Option<BoardViewport> {
    let theme = RatatuiTheme::from_theme(&ctx.view_model.theme);
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Board + controls
            Constraint::Length(ctx.message_panel_height), // Messages
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(CONTROLS_WIDTH)])
        .split(rows[1]);

    widgets::header::render(frame, rows[0], ctx.view_model, &theme);
    let viewport = widgets::board::render(
        frame,
        columns[0],
        &ctx.view_model.grid,
        ctx.layout,
        &theme,
    );
    widgets::controls::render(frame, columns[1], ctx.view_model, &theme);

    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent: Vec<_> = ctx.messages.recent(visible).cloned().collect();
    widgets::messages::render(frame, rows[2], &recent, &theme);

    if let Some(outcome) = ctx.view_model.endgame {
        widgets::endgame::render(frame, frame.area(), outcome, &theme);
    }

    viewport
}
