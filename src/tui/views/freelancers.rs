// Freelancers listing and profile views

use super::{mark_selected, prepare_listing};
use crate::catalog::Freelancer;
use crate::tui::app::{App, ListingKind};
use crate::tui::components::{format_hours, format_stars, truncate_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_listing(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(viewport) = prepare_listing(f, area, app, ListingKind::Freelancers) else {
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;
    let cursor = app.freelancers.cursor;
    let rows = app.filtered_freelancers();

    let mut lines: Vec<Line> = Vec::new();
    let width = viewport.list_area.width as usize;
    for (i, freelancer) in rows[viewport.start..viewport.end].iter().enumerate() {
        let index = viewport.start + i;
        let mut record_lines = vec![
            Line::from(vec![
                Span::styled(
                    truncate_width(&freelancer.name, width.saturating_sub(30)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_stars(freelancer.rating)),
                    Style::default().fg(theme.star),
                ),
                Span::styled(
                    format!(" ({})", freelancer.total_reviews),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!(
                        "  {} {}",
                        format_hours(freelancer.hourly_rate),
                        locale.t("common.per_hour")
                    ),
                    Style::default().fg(theme.highlight),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(
                        "  {} · {} {}",
                        freelancer.location,
                        freelancer.completed_services,
                        locale.t("freelancers.completed"),
                    ),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    freelancer
                        .skills
                        .iter()
                        .take(4)
                        .map(|s| format!(" #{}", s))
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

pub fn render_profile(f: &mut Frame, area: Rect, app: &mut App, id: &str) {
    let Some(freelancer) = app.catalog.freelancer(id).cloned() else {
        super::info::render_not_found(f, area, app);
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;

    // Services this member offers, joined by provider id
    let offered: Vec<String> = app
        .catalog
        .services
        .iter()
        .filter(|s| s.provider_id == freelancer.id)
        .map(|s| s.title.clone())
        .collect();

    let lines = profile_lines(&freelancer, &offered, &theme, &locale);

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
                .title(format!(" {} ", truncate_width(&freelancer.name, 40))),
        );
    f.render_widget(widget, area);
}

fn profile_lines(
    freelancer: &Freelancer,
    offered: &[String],
    theme: &crate::tui::theme::Theme,
    locale: &crate::locale::Locale,
) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.fg);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            freelancer.bio.clone(),
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(
                format_stars(freelancer.rating),
                Style::default().fg(theme.star),
            ),
            Span::styled(
                format!(" ({} {})", freelancer.total_reviews, locale.t("common.reviews")),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled("Rate: ", label),
            Span::styled(
                format!(
                    "{} {}",
                    format_hours(freelancer.hourly_rate),
                    locale.t("common.per_hour")
                ),
                Style::default().fg(theme.highlight),
            ),
        ]),
        Line::from(vec![
            Span::styled("Location: ", label),
            Span::styled(freelancer.location.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Completed: ", label),
            Span::styled(
                format!(
                    "{} {}",
                    freelancer.completed_services,
                    locale.t("freelancers.completed")
                ),
                value,
            ),
            Span::styled(
                format!(
                    " · {} {}",
                    locale.t("freelancers.responds"),
                    freelancer.response_time
                ),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", locale.t("common.member_since")), label),
            Span::styled(freelancer.joined_at.format("%B %Y").to_string(), value),
        ]),
        Line::from(Span::styled(
            freelancer
                .skills
                .iter()
                .map(|s| format!("#{} ", s))
                .collect::<String>(),
            Style::default().fg(theme.tag),
        )),
    ];

    if !offered.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            locale.t("home.featured").to_string(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )));
        for title in offered {
            lines.push(Line::from(Span::styled(
                format!("  • {}", title),
                Style::default().fg(theme.fg),
            )));
        }
    }

    lines
}
