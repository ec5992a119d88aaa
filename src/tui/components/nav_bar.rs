// Navigation bar component
//
// Tab strip over the top-level pages. Detail pages highlight their parent
// tab; pages outside the tab set (login, footer pages) highlight none.

use crate::router::Page;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_nav_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let titles: Vec<String> = Page::nav_tabs()
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let mut label = format!(" {}│{} ", i + 1, app.locale.t(page.title_key()));
            if *page == Page::Messages {
                let unread = app.catalog.unread_messages();
                if unread > 0 {
                    label = format!(" {}│{} ({}) ", i + 1, app.locale.t(page.title_key()), unread);
                }
            }
            label
        })
        .collect();

    let selected = app.router.active().tab_index().unwrap_or(usize::MAX);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .select(selected)
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .divider("");

    f.render_widget(tabs, area);
}
