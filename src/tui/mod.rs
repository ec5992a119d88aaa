// TUI module - Terminal User Interface
//
// Owns the terminal lifecycle and the event loop. All page transitions and
// query changes happen synchronously inside the key handlers here; the
// event channel exists only for the contact form's simulated round trip.
//
// Key dispatch is layered: typing capture → global keys → view keys.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod markdown;
pub mod scroll;
pub mod theme;
pub mod ui;
pub mod views;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::router::{Page, Resolved};
use anyhow::{Context, Result};
use app::{App, ListingKind};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Events delivered to the loop outside the keyboard: the contact form's
/// acknowledgement after its artificial delay
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    ContactDelivered,
}

/// Run the TUI: set up the terminal, run the event loop, clean up
pub async fn run_tui(config: Config, catalog: Catalog, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel(16);
    let mut app = App::new(&config, catalog, log_buffer, tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut rx, config.tick_ms).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: keyboard input, redraw ticks and app events
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
    tick_ms: u64,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_ms.max(50)));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick so toasts expire and relative times refresh
            _ = tick_interval.tick() => {}

            // Simulated round trips completing
            Some(event) = rx.recv() => {
                match event {
                    AppEvent::ContactDelivered => app.contact_delivered(),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered dispatch: typing capture → global → view-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: an active text field captures printable keys
    if app.is_typing() {
        handle_typing(app, key_event.code);
        return;
    }

    // Layer 2: global keys, identical on every page
    if handle_global_keys(app, key_event.code) {
        return;
    }

    // Layer 3: view-specific keys
    handle_view_keys(app, key_event.code);
}

/// Route keys into the focused text field
fn handle_typing(app: &mut App, key: KeyCode) {
    // Listing search box
    if let Some(kind) = app.active_listing() {
        if app.listing(kind).search_focused {
            match key {
                KeyCode::Char(c) => app.search_input(kind, c),
                KeyCode::Backspace => app.search_backspace(kind),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                    if app.handle_key_press(key) {
                        app.listing_mut(kind).search_focused = false;
                    }
                }
                _ => {}
            }
            return;
        }
    }

    match app.resolved() {
        Resolved::Login => match key {
            KeyCode::Char(c) => app.login_form.focused_mut().insert(c),
            KeyCode::Backspace => app.login_form.focused_mut().backspace(),
            KeyCode::Tab | KeyCode::BackTab => {
                if app.handle_key_press(key) {
                    app.login_form.next_focus();
                }
            }
            KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.submit_login();
                }
            }
            // No account yet: over to registration
            KeyCode::Right => {
                if app.handle_key_press(key) {
                    app.nav_to(Page::Register);
                }
            }
            KeyCode::Esc => {
                if app.handle_key_press(key) {
                    app.go_back();
                }
            }
            _ => {}
        },
        Resolved::Register => match key {
            KeyCode::Char(c) => app.register_form.focused_mut().insert(c),
            KeyCode::Backspace => app.register_form.focused_mut().backspace(),
            KeyCode::Tab | KeyCode::BackTab => {
                if app.handle_key_press(key) {
                    app.register_form.next_focus();
                }
            }
            KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.submit_register();
                }
            }
            KeyCode::Esc => {
                if app.handle_key_press(key) {
                    app.go_back();
                }
            }
            _ => {}
        },
        Resolved::Support => match key {
            KeyCode::Char(c) => app.contact_form.focused_mut().insert(c),
            KeyCode::Backspace => app.contact_form.focused_mut().backspace(),
            KeyCode::Tab | KeyCode::BackTab => {
                if app.handle_key_press(key) {
                    app.contact_form.next_focus();
                }
            }
            KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.submit_contact();
                }
            }
            KeyCode::Esc => {
                if app.handle_key_press(key) {
                    app.go_back();
                }
            }
            _ => {}
        },
        Resolved::Messages => match key {
            KeyCode::Char(c) => app.composer.insert(c),
            KeyCode::Backspace => app.composer.backspace(),
            KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.send_message();
                }
            }
            KeyCode::Esc | KeyCode::Tab => {
                if app.handle_key_press(key) {
                    app.composer_focused = false;
                }
            }
            _ => {}
        },
        _ => {}
    }
}

/// Global keys - returns true if handled
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Nav tabs 1-7
        KeyCode::Char(c @ '1'..='7') => {
            if app.handle_key_press(key) {
                let index = (c as usize) - ('1' as usize);
                if let Some(&page) = Page::nav_tabs().get(index) {
                    app.nav_to(page);
                }
            }
            true
        }
        // Wallet
        KeyCode::Char('8') => {
            if app.handle_key_press(key) {
                app.nav_to(Page::Wallet);
            }
            true
        }
        // Footer pages
        KeyCode::F(1) => {
            if app.handle_key_press(key) {
                app.nav_to(Page::About);
            }
            true
        }
        KeyCode::F(2) => {
            if app.handle_key_press(key) {
                app.nav_to(Page::Support);
            }
            true
        }
        KeyCode::F(3) => {
            if app.handle_key_press(key) {
                app.nav_to(Page::Terms);
            }
            true
        }
        KeyCode::F(4) => {
            if app.handle_key_press(key) {
                app.nav_to(Page::Privacy);
            }
            true
        }
        // Single-level back
        KeyCode::Backspace | KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.go_back();
            }
            true
        }
        // Session, theme, language
        KeyCode::Char('a') => {
            if app.handle_key_press(key) {
                app.toggle_session();
            }
            true
        }
        KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.cycle_theme();
            }
            true
        }
        KeyCode::Char('G') => {
            if app.handle_key_press(key) {
                app.toggle_language();
            }
            true
        }
        // Clipboard: y = readable, Y = JSON
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                if let Some(text) = app.copy_current_readable() {
                    app.copy_to_clipboard(&text);
                }
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                if let Some(json) = app.copy_current_json() {
                    app.copy_to_clipboard(&json);
                }
            }
            true
        }
        _ => false,
    }
}

/// View-specific keys
fn handle_view_keys(app: &mut App, key: KeyCode) {
    if !app.handle_key_press(key) {
        return;
    }

    // Listing pages
    if let Some(kind) = app.active_listing() {
        handle_listing_keys(app, kind, key);
        return;
    }

    match app.resolved() {
        // Detail pages and long-form text scroll
        Resolved::ServiceDetail(_)
        | Resolved::ProjectDetail(_)
        | Resolved::UserProfile(_)
        | Resolved::BlogPost(_)
        | Resolved::About
        | Resolved::Terms
        | Resolved::Privacy
        | Resolved::Wallet
        | Resolved::Dashboard => match key {
            KeyCode::Up => app.detail_scroll.scroll_up(),
            KeyCode::Down => app.detail_scroll.scroll_down(),
            KeyCode::PageUp => app.detail_scroll.page_up(),
            KeyCode::PageDown => app.detail_scroll.page_down(),
            KeyCode::Home => app.detail_scroll.scroll_to_top(),
            KeyCode::Enter => handle_detail_action(app),
            _ => {}
        },
        Resolved::Messages => match key {
            KeyCode::Up => app.conversation_up(),
            KeyCode::Down => app.conversation_down(),
            KeyCode::Enter => app.mark_selected_read(),
            KeyCode::Tab => app.composer_focused = true,
            _ => {}
        },
        _ => {}
    }
}

fn handle_listing_keys(app: &mut App, kind: ListingKind, key: KeyCode) {
    match key {
        KeyCode::Up => app.cursor_up(kind),
        KeyCode::Down => app.cursor_down(kind),
        KeyCode::Enter => app.open_cursor_detail(kind),
        KeyCode::Char('/') => app.focus_search(kind),
        KeyCode::Char('c') => app.cycle_category(kind),
        KeyCode::Char('t') => app.cycle_tag(kind),
        KeyCode::Char('m') => app.cycle_min_rating(kind),
        KeyCode::Char('o') => app.cycle_sort(kind),
        KeyCode::Char('d') => app.toggle_sort_dir(kind),
        KeyCode::Char('x') => app.clear_filters(kind),
        KeyCode::PageUp => {
            for _ in 0..5 {
                app.cursor_up(kind);
            }
        }
        KeyCode::PageDown => {
            for _ in 0..5 {
                app.cursor_down(kind);
            }
        }
        _ => {}
    }
}

/// Enter on a detail page: request the booking/proposal, or route to the
/// sign-in page first - the original "sign in to apply" flow
fn handle_detail_action(app: &mut App) {
    let action = match app.resolved() {
        Resolved::ServiceDetail(_) => Some("services.book"),
        Resolved::ProjectDetail(_) => Some("projects.apply"),
        _ => None,
    };
    let Some(action) = action else {
        return;
    };

    if app.session.is_logged_in() {
        let message = format!("✓ {}", app.locale.t(action));
        app.show_toast(message);
    } else {
        app.nav_to(Page::Login);
    }
}
