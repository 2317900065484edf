//! Message log panel.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

/// Render messages newest-last; `recent` is ordered newest-first.
pub fn render(frame: &mut Frame, area: Rect, recent: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.message(entry.level))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(theme.base())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Messages "));

    frame.render_widget(paragraph, area);
}
