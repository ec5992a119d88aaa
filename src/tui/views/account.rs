// Account views: dashboard, wallet, sign-in and registration forms

use crate::catalog::{TransactionKind, TransactionStatus};
use crate::tui::app::{App, FormState};
use crate::tui::components::{format_hours, format_time_ago, render_text_field};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_login(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    let form_area = centered(area, 48, 12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form_area);

    render_form_fields(f, &chunks[..2], app, |app| &app.login_form, &theme);

    let submit = Paragraph::new(format!("⏎ {}", locale.t("form.submit")))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
    f.render_widget(submit, chunks[2]);

    let hint = Paragraph::new(vec![
        Line::from("demo: sara@timesouk.example / hourglass"),
        Line::from(format!("→ {}", locale.t("page.register"))),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme.muted));
    f.render_widget(hint, chunks[3]);
}

pub fn render_register(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    let form_area = centered(area, 48, 14);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form_area);

    render_form_fields(f, &chunks[..3], app, |app| &app.register_form, &theme);

    let submit = Paragraph::new(format!("⏎ {}", locale.t("form.submit")))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
    f.render_widget(submit, chunks[3]);
}

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;
    // Resolution guarantees a session on this page
    let Some(account) = app.session.account().cloned() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    // Profile summary
    let profile_lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}", account.name),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", account.email),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", locale.t("wallet.balance")),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format_hours(account.balance_hours),
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", locale.t("common.member_since")),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                account.joined_at.format("%B %Y").to_string(),
                Style::default().fg(theme.fg),
            ),
        ]),
    ];
    let profile = Paragraph::new(profile_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", locale.t("page.dashboard"))),
    );
    f.render_widget(profile, top[0]);

    // Notifications
    let mut notification_lines: Vec<Line> = Vec::new();
    for note in &app.catalog.notifications {
        let style = if note.read {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        };
        notification_lines.push(Line::from(vec![
            Span::raw(format!(" {} ", note.kind.icon())),
            Span::styled(note.title.clone(), style),
            Span::styled(
                format!("  {}", format_time_ago(note.created_at)),
                Style::default().fg(theme.muted),
            ),
        ]));
    }
    let notifications = Paragraph::new(notification_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", locale.t("dashboard.notifications"))),
    );
    f.render_widget(notifications, top[1]);

    // Recent activity + system log strip
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let mut activity_lines: Vec<Line> = Vec::new();
    for tx in app.catalog.transactions.iter().take(6) {
        activity_lines.push(transaction_line(tx, &theme));
    }
    let activity = Paragraph::new(activity_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", locale.t("dashboard.activity"))),
    );
    f.render_widget(activity, bottom[0]);

    let log_lines: Vec<Line> = if app.log_buffer.is_empty() {
        vec![Line::from(Span::styled(
            " (quiet)",
            Style::default().fg(theme.muted),
        ))]
    } else {
        app.log_buffer
            .recent(bottom[1].height.saturating_sub(2) as usize)
            .into_iter()
            .map(|entry| {
                let color = match entry.level {
                    crate::logging::LogLevel::Error => theme.log_error,
                    crate::logging::LogLevel::Warn => theme.log_warn,
                    _ => theme.log_info,
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {:5} ", entry.level.as_str()),
                        Style::default().fg(color),
                    ),
                    Span::styled(entry.message, Style::default().fg(theme.muted)),
                ])
            })
            .collect()
    };
    let logs = Paragraph::new(log_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Log "),
    );
    f.render_widget(logs, bottom[1]);
}

pub fn render_wallet(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;
    let Some(account) = app.session.account().cloned() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let balance = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", locale.t("wallet.balance")),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format_hours(account.balance_hours),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", locale.t("page.wallet"))),
    );
    f.render_widget(balance, chunks[0]);

    let mut history: Vec<&crate::catalog::Transaction> = app.catalog.transactions.iter().collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));

    let mut lines: Vec<Line> = Vec::new();
    for tx in history {
        lines.push(transaction_line(tx, &theme));
        lines.push(Line::from(Span::styled(
            format!("      {} · {}", tx.counterparty, format_time_ago(tx.date)),
            Style::default().fg(theme.muted),
        )));
    }
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", locale.t("wallet.history"))),
    );
    f.render_widget(widget, chunks[1]);
}

fn transaction_line(tx: &crate::catalog::Transaction, theme: &crate::tui::theme::Theme) -> Line<'static> {
    let (sign, color) = match tx.kind {
        TransactionKind::Credit => ("+", theme.credit),
        TransactionKind::Debit => ("-", theme.debit),
    };
    let mut spans = vec![
        Span::styled(
            format!(" {}{} ", sign, format_hours(tx.hours)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(tx.description.clone(), Style::default().fg(theme.fg)),
    ];
    if tx.status == TransactionStatus::Pending {
        spans.push(Span::styled(
            " (pending)",
            Style::default().fg(theme.log_warn),
        ));
    }
    Line::from(spans)
}

/// Draw a form's fields into consecutive 3-row chunks
fn render_form_fields(
    f: &mut Frame,
    chunks: &[Rect],
    app: &App,
    form: impl Fn(&App) -> &FormState,
    theme: &crate::tui::theme::Theme,
) {
    let form = form(app);
    for (i, field) in form.fields.iter().enumerate() {
        if let Some(chunk) = chunks.get(i) {
            let label = app.locale.t(field.label_key).to_string();
            render_text_field(f, *chunk, theme, &label, field, form.focus == i);
        }
    }
}

/// Center a fixed-size box inside an area
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
