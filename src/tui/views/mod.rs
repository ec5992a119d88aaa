// Views - screen-level rendering
//
// One module per page family. `render` dispatches on the router's resolved
// view; a detail page whose record id no longer exists degrades to the
// not-found screen.

mod account;
mod blog;
mod freelancers;
mod home;
mod info;
mod messages;
mod projects;
mod services;

use super::app::{App, ListingKind};
use super::components::{render_empty_state, render_filter_bar};
use crate::router::Resolved;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::Frame;

/// Render the content slot for the currently resolved view
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    match app.resolved() {
        Resolved::Home => home::render(f, area, app),
        Resolved::Services => services::render_listing(f, area, app),
        Resolved::ServiceDetail(id) => services::render_detail(f, area, app, &id),
        Resolved::Projects => projects::render_listing(f, area, app),
        Resolved::ProjectDetail(id) => projects::render_detail(f, area, app, &id),
        Resolved::Freelancers => freelancers::render_listing(f, area, app),
        Resolved::UserProfile(id) => freelancers::render_profile(f, area, app, &id),
        Resolved::Blog => blog::render_listing(f, area, app),
        Resolved::BlogPost(id) => blog::render_post(f, area, app, &id),
        Resolved::Messages => messages::render(f, area, app),
        Resolved::Dashboard => account::render_dashboard(f, area, app),
        Resolved::Wallet => account::render_wallet(f, area, app),
        Resolved::Login => account::render_login(f, area, app),
        Resolved::Register => account::render_register(f, area, app),
        Resolved::About => info::render_about(f, area, app),
        Resolved::Support => info::render_support(f, area, app),
        Resolved::Terms => info::render_terms(f, area, app),
        Resolved::Privacy => info::render_privacy(f, area, app),
        Resolved::NotFound => info::render_not_found(f, area, app),
    }
}

/// Rows each record occupies in a listing (two content lines + separator)
const ROWS_PER_RECORD: usize = 3;

/// Visible slice of a listing after the filter bar and scroll are applied
pub(crate) struct ListingViewport {
    pub start: usize,
    pub end: usize,
    pub list_area: Rect,
}

/// Shared scaffold for the four listing pages: draws the filter bar,
/// handles the empty state, clamps the cursor and scrolls to it.
/// Returns None when there is nothing further to draw.
pub(crate) fn prepare_listing(
    f: &mut Frame,
    area: Rect,
    app: &mut App,
    kind: ListingKind,
) -> Option<ListingViewport> {
    let count = app.filtered_len(kind);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_filter_bar(f, chunks[0], app, kind, count);

    if count == 0 {
        let title = app.locale.t(kind.empty_key()).to_string();
        let hint = app.locale.t("common.clear_filters").to_string();
        let theme = app.theme.clone();
        render_empty_state(f, chunks[1], &theme, &title, &hint);
        return None;
    }

    let list_area = chunks[1];
    let viewport = (list_area.height as usize / ROWS_PER_RECORD).max(1);

    let listing = app.listing_mut(kind);
    listing.cursor = listing.cursor.min(count - 1);
    let cursor = listing.cursor;
    listing.scroll.update_dimensions(count, viewport);
    listing.scroll.follow_cursor(cursor);
    let (start, end) = listing.scroll.visible_range();

    Some(ListingViewport {
        start,
        end,
        list_area,
    })
}

/// Apply the selection background to a record's lines
pub(crate) fn mark_selected(lines: &mut [Line], selected: bool, bg: ratatui::style::Color) {
    if selected {
        for line in lines {
            line.style = Style::default().bg(bg);
        }
    }
}
