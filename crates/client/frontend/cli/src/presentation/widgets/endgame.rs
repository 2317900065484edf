//! Modal dialog announcing how the game ended.

use game_core::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, outcome: Outcome, theme: &RatatuiTheme) {
    let popup = centered_rect(50, 7, area);
    let title = if outcome.is_win() {
        " You Win "
    } else {
        " Game Over "
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(outcome.message(), theme.title())),
        Line::default(),
        Line::from(Span::styled("[ OK ]", theme.highlight())),
    ];

    let paragraph = Paragraph::new(lines)
        .style(theme.base())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Centered rectangle `percent_x` wide and `height` rows tall.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
