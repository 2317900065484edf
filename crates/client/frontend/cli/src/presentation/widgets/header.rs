//! Header widget displaying connection, waiting and edit state.

use client_frontend_core::{EditState, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::styled("Server: ", theme.base()),
        Span::styled(
            view_model.status.to_string(),
            theme.connection(view_model.status),
        ),
    ];

    if view_model.waiting {
        spans.push(Span::styled(" | ", theme.base()));
        spans.push(Span::styled("waiting for the cat...", theme.muted()));
    }

    let mode_text = match view_model.interaction().state() {
        EditState::Normal => None,
        EditState::EditIdle => Some(" [EDIT MODE]"),
        EditState::AwaitingCatPlacement => Some(" [EDIT MODE: PLACE THE CAT]"),
    };
    if let Some(mode_text) = mode_text {
        spans.push(Span::styled(mode_text, theme.highlight()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Cat Trap ", theme.title())),
    );

    frame.render_widget(paragraph, area);
}
