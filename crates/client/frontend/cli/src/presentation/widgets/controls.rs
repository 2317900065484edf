//! Settings panel with the key bindings that change them.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let controls = &view_model.controls;
    let interaction = view_model.interaction();

    let edit_value = match (interaction.is_edit_mode(), interaction.can_toggle_edit()) {
        (false, _) => "off".to_owned(),
        (true, true) => "on".to_owned(),
        (true, false) => "on (locked)".to_owned(),
    };

    let settings = [
        ("+/-", "Size", controls.size.to_string()),
        ("[/]", "Deadline", format!("{:.1}s", controls.deadline)),
        ("s", "Strategy", controls.strategy.to_string()),
        ("</>", "Depth", controls.depth.to_string()),
        (
            "a",
            "Alpha-beta",
            if controls.alpha_beta { "on" } else { "off" }.to_owned(),
        ),
        ("e", "Edit mode", edit_value),
    ];

    let mut lines: Vec<Line> = settings
        .into_iter()
        .map(|(key, label, value)| {
            Line::from(vec![
                Span::styled(format!("{key:>3} "), theme.muted()),
                Span::styled(format!("{label:<11}"), theme.base()),
                Span::styled(value, theme.highlight()),
            ])
        })
        .collect();

    lines.push(Line::default());
    for hint in [
        "n   new game",
        "t   toggle theme",
        "q   quit",
        "click a tile to play",
    ] {
        lines.push(Line::from(Span::styled(hint, theme.muted())));
    }

    let paragraph = Paragraph::new(lines)
        .style(theme.base())
        .block(Block::default().borders(Borders::ALL).title(" Controls "));

    frame.render_widget(paragraph, area);
}
