// Informational pages: about, support (contact form), terms, privacy,
// not-found
//
// Static copy lives here rather than in the locale table; these pages are
// long-form text, not chrome.

use crate::tui::app::App;
use crate::tui::components::render_text_field;
use crate::tui::markdown::render_markdown;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ABOUT: &str = "\
# About timesouk

timesouk is a time-based service exchange: members trade hours of their
skills instead of money. One hour given is one hour earned, whatever the
skill.

## How it works

1. Offer a service or post a project
2. Agree on scope in messages
3. Exchange the hours and leave a review

The marketplace runs on trust: profiles, reviews and completed exchanges
are public.";

const TERMS: &str = "\
# Terms of Service

By using timesouk you agree to exchange time credits honestly.

- One hour of any member's time is worth one credit
- Completed exchanges must be confirmed by both sides
- Reviews must describe real exchanges
- Accounts that game the credit system are suspended

These demo terms are illustrative, not legal advice.";

const PRIVACY: &str = "\
# Privacy Policy

This demo build keeps everything in memory.

- No data leaves your terminal
- Nothing is written to disk except the config file and optional logs
- Closing the app forgets the session

A production deployment would document retention and sharing here.";

pub fn render_about(f: &mut Frame, area: Rect, app: &mut App) {
    render_markdown_page(f, area, app, ABOUT);
}

pub fn render_terms(f: &mut Frame, area: Rect, app: &mut App) {
    render_markdown_page(f, area, app, TERMS);
}

pub fn render_privacy(f: &mut Frame, area: Rect, app: &mut App) {
    render_markdown_page(f, area, app, PRIVACY);
}

fn render_markdown_page(f: &mut Frame, area: Rect, app: &mut App, body: &str) {
    let theme = app.theme.clone();
    let lines = render_markdown(body, &theme);

    app.detail_scroll
        .update_dimensions(lines.len(), area.height.saturating_sub(2) as usize);
    let offset = app.detail_scroll.offset() as u16;

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(widget, area);
}

/// Support page: contact form with the app's one simulated network call
pub fn render_support(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    let form_area = centered(area, 56, 16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form_area);

    for (i, field) in app.contact_form.fields.iter().enumerate() {
        let label = locale.t(field.label_key).to_string();
        render_text_field(
            f,
            chunks[i],
            &theme,
            &label,
            field,
            app.contact_form.focus == i,
        );
    }

    let status = if app.contact_sending {
        Span::styled(
            locale.t("support.sending"),
            Style::default().fg(theme.log_warn),
        )
    } else {
        Span::styled(
            format!("⏎ {}", locale.t("form.submit")),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let submit = Paragraph::new(Line::from(status)).alignment(Alignment::Center);
    f.render_widget(submit, chunks[3]);
}

/// The navigation fallback: never an error, always a way back
pub fn render_not_found(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            locale.t("page.not_found"),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            locale.t("not_found.body"),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            "1 → home  ·  ⌫ back",
            Style::default().fg(theme.accent),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(widget, chunks[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
