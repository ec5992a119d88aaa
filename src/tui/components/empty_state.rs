// Empty-state component
//
// A query with no matches is a normal UI state, not an error. Shows the
// page's "nothing found" message and the clear-filters affordance.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_empty_state(f: &mut Frame, area: Rect, theme: &Theme, title: &str, hint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("x {}", hint),
            Style::default().fg(theme.muted),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(widget, chunks[1]);
}
