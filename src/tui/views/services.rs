// Services listing and detail views

use super::{mark_selected, prepare_listing};
use crate::catalog::Service;
use crate::tui::app::{App, ListingKind};
use crate::tui::components::{format_hours, format_stars, format_time_ago, truncate_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_listing(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(viewport) = prepare_listing(f, area, app, ListingKind::Services) else {
        return;
    };

    let theme = app.theme.clone();
    let cursor = app.services.cursor;
    let rows = app.filtered_services();

    let mut lines: Vec<Line> = Vec::new();
    let width = viewport.list_area.width as usize;
    for (i, service) in rows[viewport.start..viewport.end].iter().enumerate() {
        let index = viewport.start + i;
        let mut record_lines = vec![
            Line::from(vec![
                Span::styled(
                    truncate_width(&service.title, width.saturating_sub(24)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_stars(service.rating)),
                    Style::default().fg(theme.star),
                ),
                Span::styled(
                    format!(" ({})", service.reviews),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("  {}", format_hours(service.hourly_rate)),
                    Style::default().fg(theme.highlight),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("  {} · {} · {}", service.category, service.provider_name, service.location),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    service
                        .tags
                        .iter()
                        .map(|t| format!(" #{}", t))
                        .collect::<String>(),
                    Style::default().fg(theme.tag),
                ),
            ]),
        ];
        mark_selected(&mut record_lines, index == cursor, theme.selected_bg);
        lines.append(&mut record_lines);
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), viewport.list_area);
}

pub fn render_detail(f: &mut Frame, area: Rect, app: &mut App, id: &str) {
    let Some(service) = app.catalog.service(id).cloned() else {
        super::info::render_not_found(f, area, app);
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;
    let lines = detail_lines(&service, &theme, &locale, app.session.is_logged_in());

    app.detail_scroll
        .update_dimensions(lines.len(), area.height.saturating_sub(2) as usize);
    let offset = app.detail_scroll.offset() as u16;

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {} ", truncate_width(&service.title, 60))),
        );
    f.render_widget(widget, area);
}

fn detail_lines(
    service: &Service,
    theme: &crate::tui::theme::Theme,
    locale: &crate::locale::Locale,
    logged_in: bool,
) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.fg);

    let action = if logged_in {
        locale.t("services.book")
    } else {
        locale.t("services.login_to_book")
    };

    vec![
        Line::default(),
        Line::from(Span::styled(
            service.description.clone(),
            Style::default().fg(theme.fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{}: ", locale.t("common.category")), label),
            Span::styled(service.category.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Rate: ", label),
            Span::styled(
                format!("{} {}", format_hours(service.hourly_rate), locale.t("common.per_hour")),
                Style::default().fg(theme.highlight),
            ),
        ]),
        Line::from(vec![
            Span::styled("Provider: ", label),
            Span::styled(service.provider_name.clone(), value),
            Span::styled(format!(" · {}", service.location), label),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(
                format_stars(service.rating),
                Style::default().fg(theme.star),
            ),
            Span::styled(
                format!(" ({} {})", service.reviews, locale.t("common.reviews")),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled("Listed: ", label),
            Span::styled(format_time_ago(service.created_at), value),
        ]),
        Line::from(Span::styled(
            service
                .tags
                .iter()
                .map(|t| format!("#{} ", t))
                .collect::<String>(),
            Style::default().fg(theme.tag),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("⏎ {}", action),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}
