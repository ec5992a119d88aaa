// Filter bar component
//
// One bordered line above every listing showing the live query state:
// search text, category, tag, rating threshold, sort and the result count.

use crate::tui::app::{App, ListingKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_filter_bar(f: &mut Frame, area: Rect, app: &App, kind: ListingKind, count: usize) {
    let theme = &app.theme;
    let listing = app.listing(kind);
    let query = &listing.query;

    let mut spans: Vec<Span> = Vec::new();
    let sep = || Span::styled(" │ ", Style::default().fg(theme.border));

    // Search box
    spans.push(Span::styled("🔍 ", Style::default().fg(theme.accent)));
    if query.text.is_empty() && !listing.search_focused {
        spans.push(Span::styled(
            format!("{}…", app.locale.t("common.search")),
            Style::default().fg(theme.muted),
        ));
    } else {
        spans.push(Span::styled(
            query.text.clone(),
            Style::default().fg(theme.fg),
        ));
    }
    if listing.search_focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Category
    if !kind.categories().is_empty() {
        spans.push(sep());
        spans.push(Span::styled(
            format!("{}: ", app.locale.t("common.category")),
            Style::default().fg(theme.muted),
        ));
        let (label, style) = match &query.category {
            Some(category) => (category.clone(), Style::default().fg(theme.highlight)),
            None => (
                app.locale.t("common.all_categories").to_string(),
                Style::default().fg(theme.fg),
            ),
        };
        spans.push(Span::styled(label, style));
    }

    // Tag
    spans.push(sep());
    spans.push(Span::styled(
        format!("{}: ", app.locale.t("common.tag")),
        Style::default().fg(theme.muted),
    ));
    match query.tags.iter().next() {
        Some(tag) => spans.push(Span::styled(
            format!("#{}", tag),
            Style::default().fg(theme.tag),
        )),
        None => spans.push(Span::styled("—", Style::default().fg(theme.fg))),
    }

    // Rating threshold (blog posts carry none)
    if kind != ListingKind::Blog {
        spans.push(sep());
        spans.push(Span::styled(
            format!("{}: ", app.locale.t("common.min_rating")),
            Style::default().fg(theme.muted),
        ));
        match query.min_rating {
            Some(min) => spans.push(Span::styled(
                format!("★{:.1}+", min),
                Style::default().fg(theme.star),
            )),
            None => spans.push(Span::styled("—", Style::default().fg(theme.fg))),
        }
    }

    // Sort
    spans.push(sep());
    spans.push(Span::styled(
        format!("{}: ", app.locale.t("common.sort")),
        Style::default().fg(theme.muted),
    ));
    spans.push(Span::styled(
        format!(
            "{} {}",
            app.locale.t(sort_label_key(query.sort_key)),
            query.sort_dir.arrow()
        ),
        Style::default().fg(theme.fg),
    ));

    // Result count, plus the clear affordance once anything filters
    spans.push(sep());
    spans.push(Span::styled(
        format!("{} {}", count, app.locale.t("common.results")),
        Style::default().fg(theme.accent),
    ));
    if query.is_filtering() {
        spans.push(Span::styled(
            format!("  [x {}]", app.locale.t("common.clear_filters")),
            Style::default().fg(theme.muted),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if listing.search_focused {
                Style::default().fg(theme.border_focused)
            } else {
                Style::default().fg(theme.border)
            }),
    );
    f.render_widget(widget, area);
}

fn sort_label_key(key: crate::catalog::SortKey) -> &'static str {
    match key {
        crate::catalog::SortKey::Rating => "sort.rating",
        crate::catalog::SortKey::Newest => "sort.newest",
        crate::catalog::SortKey::Price => "sort.price",
    }
}
