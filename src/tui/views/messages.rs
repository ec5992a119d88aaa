// Messages view - conversation list and thread
//
// Left pane: conversations, most recent first. Right pane: the selected
// thread with a composer at the bottom. Sending is synchronous; the new
// message lands in the catalog and the thread floats to the top.

use crate::tui::app::App;
use crate::tui::components::{format_time_ago, render_text_field, truncate_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    if app.catalog.conversations.is_empty() {
        let widget = Paragraph::new(locale.t("messages.empty"))
            .style(Style::default().fg(theme.muted))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
        return;
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    render_conversations(f, panes[0], app, &theme);
    render_thread(f, panes[1], app, &theme);
}

fn render_conversations(f: &mut Frame, area: Rect, app: &App, theme: &crate::tui::theme::Theme) {
    let conversations = app.sorted_conversations();
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, conv) in conversations.iter().enumerate() {
        let selected = i == app.conversation_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(
                truncate_width(&conv.with_name, width.saturating_sub(10)),
                if selected {
                    Style::default()
                        .fg(theme.selected_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                },
            ),
        ];
        if conv.unread > 0 {
            spans.push(Span::styled(
                format!(" ({})", conv.unread),
                Style::default().fg(theme.highlight),
            ));
        }
        let mut line = Line::from(spans);
        if selected {
            line.style = Style::default().bg(theme.selected_bg);
        }
        lines.push(line);
        lines.push(Line::from(Span::styled(
            format!("    {}", format_time_ago(conv.updated_at)),
            Style::default().fg(theme.muted),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if app.composer_focused {
                Style::default().fg(theme.border)
            } else {
                Style::default().fg(theme.border_focused)
            })
            .title(format!(" {} ", app.locale.t("page.messages"))),
    );
    f.render_widget(widget, area);
}

fn render_thread(f: &mut Frame, area: Rect, app: &mut App, theme: &crate::tui::theme::Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let Some(conversation_id) = app.selected_conversation_id() else {
        return;
    };
    let with_name = app
        .sorted_conversations()
        .get(app.conversation_cursor)
        .map(|c| c.with_name.clone())
        .unwrap_or_default();

    let mut lines: Vec<Line> = Vec::new();
    for message in app.catalog.thread(&conversation_id) {
        let mine = message.sender_id == "me";
        let (who, style) = if mine {
            ("you", Style::default().fg(theme.accent))
        } else {
            (with_name.as_str(), Style::default().fg(theme.highlight))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", who), style.add_modifier(Modifier::BOLD)),
            Span::styled(message.body.clone(), Style::default().fg(theme.fg)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", format_time_ago(message.sent_at)),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
    }

    // Keep the newest messages in view
    let viewport = chunks[0].height.saturating_sub(2) as usize;
    let offset = lines.len().saturating_sub(viewport) as u16;

    let thread = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {} ", with_name)),
        );
    f.render_widget(thread, chunks[0]);

    let label = app.locale.t(app.composer.label_key).to_string();
    render_text_field(
        f,
        chunks[1],
        theme,
        &label,
        &app.composer,
        app.composer_focused,
    );
}
