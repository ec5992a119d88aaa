// Blog listing and article views
//
// Article bodies are markdown, rendered through the shared renderer.

use super::{mark_selected, prepare_listing};
use crate::tui::app::{App, ListingKind};
use crate::tui::components::{format_time_ago, truncate_width};
use crate::tui::markdown::render_markdown;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_listing(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(viewport) = prepare_listing(f, area, app, ListingKind::Blog) else {
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;
    let cursor = app.blog.cursor;
    let rows = app.filtered_posts();

    let mut lines: Vec<Line> = Vec::new();
    let width = viewport.list_area.width as usize;
    for (i, post) in rows[viewport.start..viewport.end].iter().enumerate() {
        let index = viewport.start + i;
        let mut record_lines = vec![
            Line::from(vec![
                Span::styled(
                    truncate_width(&post.title, width.saturating_sub(20)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", post.category),
                    Style::default().fg(theme.tag),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "  {} · {} · 👁 {} · ♥ {} · {} {}",
                    post.author,
                    format_time_ago(post.published_at),
                    post.views,
                    post.likes,
                    post.read_minutes,
                    locale.t("blog.min_read"),
                ),
                Style::default().fg(theme.muted),
            )),
        ];
        mark_selected(&mut record_lines, index == cursor, theme.selected_bg);
        lines.append(&mut record_lines);
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), viewport.list_area);
}

pub fn render_post(f: &mut Frame, area: Rect, app: &mut App, id: &str) {
    let Some(post) = app.catalog.post(id).cloned() else {
        super::info::render_not_found(f, area, app);
        return;
    };

    let theme = app.theme.clone();
    let locale = app.locale;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(
                "{} · {} · {} {}",
                post.author,
                format_time_ago(post.published_at),
                post.read_minutes,
                locale.t("blog.min_read"),
            ),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            post.tags.iter().map(|t| format!("#{} ", t)).collect::<String>(),
            Style::default().fg(theme.tag),
        )),
        Line::default(),
    ];
    lines.extend(render_markdown(&post.content, &theme));

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
                .title(format!(" {} ", truncate_width(&post.title, 60))),
        );
    f.render_widget(widget, area);
}
