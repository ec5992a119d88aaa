// Frame shell - chrome layout and view dispatch
//
// Structure: title bar, navigation tabs, content slot, status bar. The
// content slot is handed to the view resolved by the router; the toast
// overlay renders on top of everything.

use super::app::App;
use super::components::{render_nav_bar, render_status_bar, render_title_bar};
use super::views;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // nav tabs
            Constraint::Min(5),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    render_nav_bar(f, chunks[1], app);
    views::render(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    let frame_area = f.area();
    if let Some(toast) = &app.toast {
        toast.render(f, frame_area, &app.theme);
    }
    app.clear_expired_toast();
}
