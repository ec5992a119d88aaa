// Title bar component
//
// One line: brand and active page on the left, language / theme / session
// on the right. In RTL mode the page title is right-aligned under the
// session block, mirroring the reading direction.

use super::format_hours;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let page_title = app.locale.t(app.router.active().title_key());

    let left = Line::from(vec![
        Span::styled(
            " ⏳ timesouk ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.border)),
        Span::styled(page_title, Style::default().fg(theme.fg)),
    ]);

    let session_label = match app.session.account() {
        Some(account) => format!(
            "{} · {}",
            account.name,
            format_hours(account.balance_hours)
        ),
        None => app.locale.t("page.login").to_string(),
    };

    let right = Line::from(vec![
        Span::styled(
            app.locale.lang.code().to_uppercase(),
            Style::default().fg(theme.accent),
        ),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        Span::styled(app.theme_kind.name(), Style::default().fg(theme.muted)),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        Span::styled(session_label, Style::default().fg(theme.highlight)),
        Span::raw(" "),
    ]);

    let alignment = if app.locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    };
    f.render_widget(Paragraph::new(left).alignment(alignment), area);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}
