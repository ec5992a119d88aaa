// Projects listing and detail views

use super::{mark_selected, prepare_listing};
use crate::catalog::Project;
use crate::tui::app::{App, ListingKind};
use crate::tui::components::{format_deadline, format_stars, format_time_ago, truncate_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_listing(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(viewport) = prepare_listing(f, area, app, ListingKind::Projects) else {
        return;
    };

    let theme = app.theme.clone();
    let cursor = app.projects.cursor;
    let rows = app.filtered_projects();

    let mut lines: Vec<Line> = Vec::new();
    let width = viewport.list_area.width as usize;
    for (i, project) in rows[viewport.start..viewport.end].iter().enumerate() {
        let index = viewport.start + i;
        let urgent = project.tags.iter().any(|t| t == "urgent");

        let mut title_spans = vec![Span::styled(
            truncate_width(&project.title, width.saturating_sub(30)),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        if urgent {
            title_spans.push(Span::styled(
                " [urgent]",
                Style::default().fg(theme.debit),
            ));
        }
        title_spans.push(Span::styled(
            format!(
                "  {}-{}h ({})",
                project.budget.min,
                project.budget.max,
                project.budget.kind.as_str()
            ),
            Style::default().fg(theme.highlight),
        ));

        let mut record_lines = vec![
            Line::from(title_spans),
            Line::from(vec![
                Span::styled(
                    format!(
                        "  {} · {} {} · {} · {}",
                        project.category,
                        project.client_name,
                        format_stars(project.client_rating),
                        format_time_ago(project.created_at),
                        format_deadline(project.deadline),
                    ),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    project
                        .skills_required
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

pub fn render_detail(f: &mut Frame, area: Rect, app: &mut App, id: &str) {
    let Some(project) = app.catalog.project(id).cloned() else {
        super::info::render_not_found(f, area, app);
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;
    let lines = detail_lines(&project, &theme, &locale, app.session.is_logged_in());

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
                .title(format!(" {} ", truncate_width(&project.title, 60))),
        );
    f.render_widget(widget, area);
}

fn detail_lines(
    project: &Project,
    theme: &crate::tui::theme::Theme,
    locale: &crate::locale::Locale,
    logged_in: bool,
) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.fg);

    let action = if logged_in {
        locale.t("projects.apply")
    } else {
        locale.t("projects.login_to_apply")
    };

    vec![
        Line::default(),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{}: ", locale.t("projects.budget")), label),
            Span::styled(
                format!(
                    "{}-{} {} ({})",
                    project.budget.min,
                    project.budget.max,
                    locale.t("common.hours"),
                    project.budget.kind.as_str()
                ),
                Style::default().fg(theme.highlight),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", locale.t("common.category")), label),
            Span::styled(project.category.clone(), value),
            Span::styled(format!(" · {}", project.location), label),
        ]),
        Line::from(vec![
            Span::styled("Client: ", label),
            Span::styled(project.client_name.clone(), value),
            Span::styled(
                format!(" {}", format_stars(project.client_rating)),
                Style::default().fg(theme.star),
            ),
            Span::styled(
                format!(" ({} {})", project.client_reviews, locale.t("common.reviews")),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", locale.t("projects.deadline")), label),
            Span::styled(format_deadline(project.deadline), value),
            Span::styled(
                format!(" · posted {}", format_time_ago(project.created_at)),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(project.status.as_str().to_string(), value),
        ]),
        Line::from(Span::styled(
            project
                .skills_required
                .iter()
                .map(|s| format!("#{} ", s))
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
