// Home view - hero, featured services, open projects, latest posts
//
// Purely presentational: the quickest paths into the catalog, plus the
// marketplace numbers. Navigation happens through the tab keys.

use crate::tui::app::App;
use crate::tui::components::{format_hours, format_stars, format_time_ago};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let locale = app.locale;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    // Hero
    let hero = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                "⏳ timesouk — ",
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                locale.t("home.tagline"),
                Style::default().fg(theme.fg),
            ),
            Span::styled(
                format!(
                    "   ({} services · {} projects · {} members)",
                    app.catalog.services.len(),
                    app.catalog.projects.len(),
                    app.catalog.freelancers.len(),
                ),
                Style::default().fg(theme.muted),
            ),
        ]),
    ])
    .alignment(if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    });
    f.render_widget(hero, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(32),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    render_featured(f, columns[0], app, &theme);
    render_open_projects(f, columns[1], app, &theme);
    render_latest_posts(f, columns[2], app, &theme);
}

/// Top-rated services, the storefront window
fn render_featured(f: &mut Frame, area: Rect, app: &App, theme: &crate::tui::theme::Theme) {
    let mut services: Vec<&crate::catalog::Service> = app.catalog.services.iter().collect();
    services.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let mut lines: Vec<Line> = Vec::new();
    for service in services.iter().take(4) {
        lines.push(Line::from(Span::styled(
            format!(" {}", service.title),
            Style::default().fg(theme.fg),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} · {} · {}",
                format_stars(service.rating),
                format_hours(service.hourly_rate),
                service.provider_name
            ),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " 2 → all services",
        Style::default().fg(theme.accent),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", app.locale.t("home.featured"))),
    );
    f.render_widget(widget, area);
}

fn render_open_projects(f: &mut Frame, area: Rect, app: &App, theme: &crate::tui::theme::Theme) {
    let mut lines: Vec<Line> = Vec::new();
    for project in &app.catalog.projects {
        lines.push(Line::from(Span::styled(
            format!(" {}", project.title),
            Style::default().fg(theme.fg),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "   {}-{}h · {}",
                project.budget.min, project.budget.max, project.category
            ),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " 3 → all projects",
        Style::default().fg(theme.accent),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", app.locale.t("home.open_projects"))),
    );
    f.render_widget(widget, area);
}

fn render_latest_posts(f: &mut Frame, area: Rect, app: &App, theme: &crate::tui::theme::Theme) {
    let mut posts: Vec<&crate::catalog::BlogPost> = app.catalog.posts.iter().collect();
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let mut lines: Vec<Line> = Vec::new();
    for post in posts.iter().take(3) {
        lines.push(Line::from(Span::styled(
            format!(" {}", post.title),
            Style::default().fg(theme.fg),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {} · {}", post.author, format_time_ago(post.published_at)),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " 5 → blog",
        Style::default().fg(theme.accent),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", app.locale.t("home.latest_posts"))),
    );
    f.render_widget(widget, area);
}
