// TUI application state
//
// Owns the router, the catalog, the session and the per-page listing state.
// All transitions happen synchronously inside the input handlers; the render
// pass only reads. Query results are recomputed from (catalog, query) on
// demand - there is no cached result to invalidate.

use super::clipboard;
use super::components::{format_hours, format_stars, TextField, Toast};
use super::input::InputHandler;
use super::scroll::ScrollState;
use super::theme::{Theme, ThemeKind};
use super::AppEvent;
use crate::catalog::{
    run_query, Account, Catalog, ChatMessage, Conversation, Listable, Query, SortDirection,
    SortKey, BLOG_CATEGORIES, CATEGORIES,
};
use crate::config::Config;
use crate::locale::Locale;
use crate::logging::LogBuffer;
use crate::router::{Page, Resolved, Router, Selection};
use crate::session::{looks_like_email, LoginOutcome, Session};
use chrono::Utc;
use std::collections::BTreeSet;
use tokio::sync::mpsc;

/// The four listing pages driven by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Services,
    Projects,
    Freelancers,
    Blog,
}

impl ListingKind {
    /// Categories offered by this page's category filter
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            ListingKind::Services | ListingKind::Projects => CATEGORIES,
            ListingKind::Freelancers => &[],
            ListingKind::Blog => BLOG_CATEGORIES,
        }
    }

    pub fn empty_key(&self) -> &'static str {
        match self {
            ListingKind::Services => "services.empty",
            ListingKind::Projects => "projects.empty",
            ListingKind::Freelancers => "freelancers.empty",
            ListingKind::Blog => "blog.empty",
        }
    }
}

/// Filter, cursor and scroll state of one listing page
#[derive(Debug, Clone)]
pub struct ListingState {
    pub query: Query,
    pub cursor: usize,
    pub scroll: ScrollState,
    pub search_focused: bool,
}

impl ListingState {
    fn new(sort_key: SortKey, sort_dir: SortDirection) -> Self {
        Self {
            query: Query::new(sort_key, sort_dir),
            cursor: 0,
            scroll: ScrollState::new(),
            search_focused: false,
        }
    }

    /// Any filter mutation invalidates the cursor position
    fn on_query_change(&mut self) {
        self.cursor = 0;
        self.scroll.reset();
    }
}

/// A simple multi-field form with one focused field
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<TextField>,
    pub focus: usize,
}

impl FormState {
    fn new(fields: Vec<TextField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        &mut self.fields[self.focus]
    }

    pub fn next_focus(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
    }
}

/// Main application state for the TUI
pub struct App {
    pub catalog: Catalog,
    pub router: Router,
    pub session: Session,
    pub locale: Locale,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub should_quit: bool,
    pub log_buffer: LogBuffer,
    input_handler: InputHandler,

    // Listing pages
    pub services: ListingState,
    pub projects: ListingState,
    pub freelancers: ListingState,
    pub blog: ListingState,

    /// Scroll for detail pages, blog bodies and other long text
    pub detail_scroll: ScrollState,

    // Messages page
    pub conversation_cursor: usize,
    pub composer: TextField,
    pub composer_focused: bool,

    // Forms
    pub login_form: FormState,
    pub register_form: FormState,
    pub contact_form: FormState,
    pub contact_sending: bool,

    pub toast: Option<Toast>,

    events_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        catalog: Catalog,
        log_buffer: LogBuffer,
        events_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            catalog,
            router: Router::new(config.landing_page()),
            session: Session::default(),
            locale: Locale::new(config.lang()),
            theme_kind,
            theme: theme_kind.theme(),
            should_quit: false,
            log_buffer,
            input_handler: InputHandler::default(),

            // Per-page default sort mirrors what each page is browsed by:
            // services and freelancers by reputation, projects and blog by
            // recency.
            services: ListingState::new(SortKey::Rating, SortDirection::Desc),
            projects: ListingState::new(SortKey::Newest, SortDirection::Desc),
            freelancers: ListingState::new(SortKey::Rating, SortDirection::Desc),
            blog: ListingState::new(SortKey::Newest, SortDirection::Desc),

            detail_scroll: ScrollState::new(),

            conversation_cursor: 0,
            composer: TextField::new("messages.compose"),
            composer_focused: false,

            login_form: FormState::new(vec![
                TextField::new("form.email"),
                TextField::masked("form.password"),
            ]),
            register_form: FormState::new(vec![
                TextField::new("form.name"),
                TextField::new("form.email"),
                TextField::masked("form.password"),
            ]),
            contact_form: FormState::new(vec![
                TextField::new("form.name"),
                TextField::new("form.email"),
                TextField::new("form.message"),
            ]),
            contact_sending: false,

            toast: None,
            events_tx,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Resolve the active page against the current session
    pub fn resolved(&self) -> Resolved {
        self.router.resolve(self.session.is_logged_in())
    }

    pub fn nav_to(&mut self, page: Page) {
        self.router.go_to(page, Selection::default());
        self.detail_scroll.reset();
    }

    pub fn go_back(&mut self) {
        self.router.go_back();
        self.detail_scroll.reset();
    }

    /// Which listing page is currently resolved, if any
    pub fn active_listing(&self) -> Option<ListingKind> {
        match self.resolved() {
            Resolved::Services => Some(ListingKind::Services),
            Resolved::Projects => Some(ListingKind::Projects),
            Resolved::Freelancers => Some(ListingKind::Freelancers),
            Resolved::Blog => Some(ListingKind::Blog),
            _ => None,
        }
    }

    pub fn listing(&self, kind: ListingKind) -> &ListingState {
        match kind {
            ListingKind::Services => &self.services,
            ListingKind::Projects => &self.projects,
            ListingKind::Freelancers => &self.freelancers,
            ListingKind::Blog => &self.blog,
        }
    }

    pub fn listing_mut(&mut self, kind: ListingKind) -> &mut ListingState {
        match kind {
            ListingKind::Services => &mut self.services,
            ListingKind::Projects => &mut self.projects,
            ListingKind::Freelancers => &mut self.freelancers,
            ListingKind::Blog => &mut self.blog,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query results (recomputed, never cached)
    // ─────────────────────────────────────────────────────────────────────

    pub fn filtered_services(&self) -> Vec<&crate::catalog::Service> {
        run_query(&self.catalog.services, &self.services.query)
    }

    pub fn filtered_projects(&self) -> Vec<&crate::catalog::Project> {
        run_query(&self.catalog.projects, &self.projects.query)
    }

    pub fn filtered_freelancers(&self) -> Vec<&crate::catalog::Freelancer> {
        run_query(&self.catalog.freelancers, &self.freelancers.query)
    }

    pub fn filtered_posts(&self) -> Vec<&crate::catalog::BlogPost> {
        run_query(&self.catalog.posts, &self.blog.query)
    }

    pub fn filtered_len(&self, kind: ListingKind) -> usize {
        match kind {
            ListingKind::Services => self.filtered_services().len(),
            ListingKind::Projects => self.filtered_projects().len(),
            ListingKind::Freelancers => self.filtered_freelancers().len(),
            ListingKind::Blog => self.filtered_posts().len(),
        }
    }

    /// Id of the record under the cursor
    fn cursor_id(&self, kind: ListingKind) -> Option<String> {
        let cursor = self.listing(kind).cursor;
        match kind {
            ListingKind::Services => self
                .filtered_services()
                .get(cursor)
                .map(|r| r.id().to_string()),
            ListingKind::Projects => self
                .filtered_projects()
                .get(cursor)
                .map(|r| r.id().to_string()),
            ListingKind::Freelancers => self
                .filtered_freelancers()
                .get(cursor)
                .map(|r| r.id().to_string()),
            ListingKind::Blog => self
                .filtered_posts()
                .get(cursor)
                .map(|r| r.id().to_string()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listing interactions
    // ─────────────────────────────────────────────────────────────────────

    pub fn cursor_up(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.cursor = listing.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, kind: ListingKind) {
        let max = self.filtered_len(kind).saturating_sub(1);
        let listing = self.listing_mut(kind);
        listing.cursor = (listing.cursor + 1).min(max);
    }

    /// Open the detail page for the record under the cursor
    pub fn open_cursor_detail(&mut self, kind: ListingKind) {
        let Some(id) = self.cursor_id(kind) else {
            return;
        };
        self.detail_scroll.reset();
        match kind {
            ListingKind::Services => self
                .router
                .go_to(Page::ServiceDetail, Selection::service(id)),
            ListingKind::Projects => self
                .router
                .go_to(Page::ProjectDetail, Selection::project(id)),
            ListingKind::Freelancers => self
                .router
                .go_to(Page::UserProfile, Selection::freelancer(id)),
            ListingKind::Blog => self.router.go_to(Page::BlogPost, Selection::post(id)),
        }
    }

    pub fn focus_search(&mut self, kind: ListingKind) {
        self.listing_mut(kind).search_focused = true;
    }

    pub fn search_input(&mut self, kind: ListingKind, c: char) {
        let listing = self.listing_mut(kind);
        listing.query.text.push(c);
        listing.on_query_change();
    }

    pub fn search_backspace(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.query.text.pop();
        listing.on_query_change();
    }

    /// Step the category filter: All → each category → All
    pub fn cycle_category(&mut self, kind: ListingKind) {
        let categories = kind.categories();
        if categories.is_empty() {
            return;
        }
        let listing = self.listing_mut(kind);
        listing.query.category = match listing.query.category.as_deref() {
            None => Some(categories[0].to_string()),
            Some(current) => categories
                .iter()
                .position(|&c| c == current)
                .and_then(|i| categories.get(i + 1))
                .map(|c| c.to_string()),
        };
        listing.on_query_change();
    }

    /// Distinct filterable tags of the collection, sorted
    pub fn available_tags(&self, kind: ListingKind) -> Vec<String> {
        fn collect<T: Listable>(records: &[T]) -> Vec<String> {
            let set: BTreeSet<&str> = records.iter().flat_map(|r| r.tags()).collect();
            set.into_iter().map(|t| t.to_string()).collect()
        }
        match kind {
            ListingKind::Services => collect(&self.catalog.services),
            ListingKind::Projects => collect(&self.catalog.projects),
            ListingKind::Freelancers => collect(&self.catalog.freelancers),
            ListingKind::Blog => collect(&self.catalog.posts),
        }
    }

    /// Step the tag filter through the collection's tags: none → each → none.
    /// The engine accepts a set; the keyboard UI drives one tag at a time.
    pub fn cycle_tag(&mut self, kind: ListingKind) {
        let tags = self.available_tags(kind);
        if tags.is_empty() {
            return;
        }
        let listing = self.listing_mut(kind);
        let current = listing.query.tags.iter().next().cloned();
        listing.query.tags.clear();
        let next = match current {
            None => Some(tags[0].clone()),
            Some(current) => tags
                .iter()
                .position(|t| *t == current)
                .and_then(|i| tags.get(i + 1))
                .cloned(),
        };
        if let Some(tag) = next {
            listing.query.toggle_tag(&tag);
        }
        listing.on_query_change();
    }

    pub fn cycle_sort(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.query.sort_key = listing.query.sort_key.next();
        tracing::debug!(sort = listing.query.sort_key.as_str(), "sort changed");
        listing.on_query_change();
    }

    pub fn toggle_sort_dir(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.query.sort_dir = listing.query.sort_dir.toggle();
        listing.on_query_change();
    }

    pub fn cycle_min_rating(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.query.cycle_min_rating();
        listing.on_query_change();
    }

    pub fn clear_filters(&mut self, kind: ListingKind) {
        let listing = self.listing_mut(kind);
        listing.query.clear();
        listing.search_focused = false;
        listing.on_query_change();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session and forms
    // ─────────────────────────────────────────────────────────────────────

    /// `a` key: sign in when signed out, sign out when signed in
    pub fn toggle_session(&mut self) {
        if self.session.is_logged_in() {
            self.session.logout();
            let message = self.locale.t("login.signed_out").to_string();
            self.show_toast(message);
        } else {
            self.nav_to(Page::Login);
        }
    }

    pub fn submit_login(&mut self) {
        let email = self.login_form.value(0).to_string();
        let password = self.login_form.value(1).to_string();
        let outcome = self.session.login(&self.catalog.accounts, &email, &password);
        let message = match outcome {
            LoginOutcome::SignedIn => {
                self.login_form.clear();
                self.nav_to(Page::Dashboard);
                self.locale.t("login.signed_in")
            }
            LoginOutcome::InvalidCredentials => self.locale.t("login.invalid"),
            LoginOutcome::MissingFields => self.locale.t("login.missing"),
        };
        self.show_toast(message.to_string());
    }

    pub fn submit_register(&mut self) {
        let name = self.register_form.value(0).trim().to_string();
        let email = self.register_form.value(1).trim().to_string();
        let password = self.register_form.value(2).to_string();

        if name.is_empty() || !looks_like_email(&email) || password.len() < 4 {
            let message = self.locale.t("register.invalid").to_string();
            self.show_toast(message);
            return;
        }

        let account = Account {
            id: format!("acc-{}", self.catalog.accounts.len() + 1),
            name,
            email: email.clone(),
            password: password.clone(),
            balance_hours: 1.0,
            joined_at: Utc::now(),
        };
        self.catalog.accounts.push(account);
        self.register_form.clear();
        self.session.login(&self.catalog.accounts, &email, &password);
        self.nav_to(Page::Dashboard);
        let message = self.locale.t("register.done").to_string();
        self.show_toast(message);
    }

    /// Submit the contact form. The only asynchronous operation in the app:
    /// a spawned task sleeps to simulate the network round trip, then sends
    /// an acknowledgement back through the event channel. No retry, no
    /// cancellation.
    pub fn submit_contact(&mut self) {
        if self.contact_sending {
            return;
        }
        let email = self.contact_form.value(1).trim().to_string();
        let message = self.contact_form.value(2).trim().to_string();
        if !looks_like_email(&email) || message.is_empty() {
            let message = self.locale.t("support.invalid").to_string();
            self.show_toast(message);
            return;
        }

        self.contact_sending = true;
        tracing::info!(from = %email, "contact form submitted");
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(700)).await;
            let _ = tx.send(AppEvent::ContactDelivered).await;
        });
    }

    /// Called when the simulated round trip completes
    pub fn contact_delivered(&mut self) {
        self.contact_sending = false;
        self.contact_form.clear();
        let message = self.locale.t("support.sent").to_string();
        self.show_toast(message);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Messages page
    // ─────────────────────────────────────────────────────────────────────

    /// Conversations ordered most recent first
    pub fn sorted_conversations(&self) -> Vec<&Conversation> {
        let mut conversations: Vec<&Conversation> = self.catalog.conversations.iter().collect();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations
    }

    pub fn selected_conversation_id(&self) -> Option<String> {
        self.sorted_conversations()
            .get(self.conversation_cursor)
            .map(|c| c.id.clone())
    }

    pub fn conversation_up(&mut self) {
        self.conversation_cursor = self.conversation_cursor.saturating_sub(1);
    }

    pub fn conversation_down(&mut self) {
        let max = self.catalog.conversations.len().saturating_sub(1);
        self.conversation_cursor = (self.conversation_cursor + 1).min(max);
    }

    pub fn mark_selected_read(&mut self) {
        let Some(id) = self.selected_conversation_id() else {
            return;
        };
        if let Some(conv) = self.catalog.conversations.iter_mut().find(|c| c.id == id) {
            conv.unread = 0;
        }
    }

    /// Append the composed message to the selected thread
    pub fn send_message(&mut self) {
        let body = self.composer.value.trim().to_string();
        if body.is_empty() {
            return;
        }
        let Some(conversation_id) = self.selected_conversation_id() else {
            return;
        };
        let message = ChatMessage {
            id: format!("msg-{}", self.catalog.messages.len() + 1),
            conversation_id: conversation_id.clone(),
            sender_id: "me".to_string(),
            body,
            sent_at: Utc::now(),
        };
        self.catalog.messages.push(message);
        if let Some(conv) = self
            .catalog
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conv.updated_at = Utc::now();
        }
        self.composer.clear();
        // The thread we just wrote to floats to the top
        self.conversation_cursor = 0;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Theme, language, toast, clipboard
    // ─────────────────────────────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn toggle_language(&mut self) {
        self.locale.lang = self.locale.lang.toggle();
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Readable summary of the record in view, for the `y` copy key
    pub fn copy_current_readable(&self) -> Option<String> {
        match self.resolved() {
            Resolved::Services | Resolved::ServiceDetail(_) => {
                let service = self.current_service()?;
                Some(format!(
                    "{} — {} · {} · {} ({} reviews) · {}",
                    service.title,
                    service.category,
                    format_hours(service.hourly_rate),
                    format_stars(service.rating),
                    service.reviews,
                    service.provider_name,
                ))
            }
            Resolved::Projects | Resolved::ProjectDetail(_) => {
                let project = self.current_project()?;
                Some(format!(
                    "{} — {} · {}-{} hours ({}) · {}",
                    project.title,
                    project.category,
                    project.budget.min,
                    project.budget.max,
                    project.budget.kind.as_str(),
                    project.client_name,
                ))
            }
            Resolved::Freelancers | Resolved::UserProfile(_) => {
                let freelancer = self.current_freelancer()?;
                Some(format!(
                    "{} — {} · {} · {}",
                    freelancer.name,
                    freelancer.skills.join(", "),
                    format_stars(freelancer.rating),
                    freelancer.location,
                ))
            }
            Resolved::Blog | Resolved::BlogPost(_) => {
                let post = self.current_post()?;
                Some(format!("{} — {} · {}", post.title, post.author, post.excerpt))
            }
            _ => None,
        }
    }

    /// JSON export of the record in view, for the `Y` copy key
    pub fn copy_current_json(&self) -> Option<String> {
        match self.resolved() {
            Resolved::Services | Resolved::ServiceDetail(_) => {
                serde_json::to_string_pretty(self.current_service()?).ok()
            }
            Resolved::Projects | Resolved::ProjectDetail(_) => {
                serde_json::to_string_pretty(self.current_project()?).ok()
            }
            Resolved::Freelancers | Resolved::UserProfile(_) => {
                serde_json::to_string_pretty(self.current_freelancer()?).ok()
            }
            Resolved::Blog | Resolved::BlogPost(_) => {
                serde_json::to_string_pretty(self.current_post()?).ok()
            }
            _ => None,
        }
    }

    pub fn copy_to_clipboard(&mut self, text: &str) {
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => self.show_toast("✓ Copied to clipboard"),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e:#}");
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    // Record in view: the detail selection if on a detail page, otherwise
    // the listing cursor.

    fn current_service(&self) -> Option<&crate::catalog::Service> {
        match self.resolved() {
            Resolved::ServiceDetail(id) => self.catalog.service(&id),
            _ => {
                let id = self.cursor_id(ListingKind::Services)?;
                self.catalog.service(&id)
            }
        }
    }

    fn current_project(&self) -> Option<&crate::catalog::Project> {
        match self.resolved() {
            Resolved::ProjectDetail(id) => self.catalog.project(&id),
            _ => {
                let id = self.cursor_id(ListingKind::Projects)?;
                self.catalog.project(&id)
            }
        }
    }

    fn current_freelancer(&self) -> Option<&crate::catalog::Freelancer> {
        match self.resolved() {
            Resolved::UserProfile(id) => self.catalog.freelancer(&id),
            _ => {
                let id = self.cursor_id(ListingKind::Freelancers)?;
                self.catalog.freelancer(&id)
            }
        }
    }

    fn current_post(&self) -> Option<&crate::catalog::BlogPost> {
        match self.resolved() {
            Resolved::BlogPost(id) => self.catalog.post(&id),
            _ => {
                let id = self.cursor_id(ListingKind::Blog)?;
                self.catalog.post(&id)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Typing state
    // ─────────────────────────────────────────────────────────────────────

    /// Whether a text field currently captures printable keys
    pub fn is_typing(&self) -> bool {
        if let Some(kind) = self.active_listing() {
            if self.listing(kind).search_focused {
                return true;
            }
        }
        match self.resolved() {
            Resolved::Login | Resolved::Register | Resolved::Support => true,
            Resolved::Messages => self.composer_focused,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (tx, _rx) = mpsc::channel(8);
        App::new(
            &Config::default(),
            Catalog::seeded(),
            LogBuffer::new(),
            tx,
        )
    }

    #[test]
    fn starts_on_configured_landing_page() {
        let app = app();
        assert_eq!(app.router.active(), Page::Home);
        assert_eq!(app.resolved(), Resolved::Home);
    }

    #[test]
    fn search_input_resets_cursor() {
        let mut app = app();
        app.nav_to(Page::Services);
        app.cursor_down(ListingKind::Services);
        assert_eq!(app.services.cursor, 1);

        app.search_input(ListingKind::Services, 'w');
        assert_eq!(app.services.cursor, 0);
        assert_eq!(app.services.query.text, "w");
    }

    #[test]
    fn category_cycle_wraps_back_to_all() {
        let mut app = app();
        assert_eq!(app.services.query.category, None);
        for _ in 0..CATEGORIES.len() {
            app.cycle_category(ListingKind::Services);
            assert!(app.services.query.category.is_some());
        }
        app.cycle_category(ListingKind::Services);
        assert_eq!(app.services.query.category, None);
    }

    #[test]
    fn freelancers_have_no_category_filter() {
        let mut app = app();
        app.cycle_category(ListingKind::Freelancers);
        assert_eq!(app.freelancers.query.category, None);
    }

    #[test]
    fn tag_cycle_visits_each_tag_once() {
        let mut app = app();
        let tags = app.available_tags(ListingKind::Blog);
        assert!(!tags.is_empty());
        for tag in &tags {
            app.cycle_tag(ListingKind::Blog);
            assert_eq!(app.blog.query.tags.iter().next(), Some(tag));
        }
        app.cycle_tag(ListingKind::Blog);
        assert!(app.blog.query.tags.is_empty());
    }

    #[test]
    fn open_detail_routes_with_selection() {
        let mut app = app();
        app.nav_to(Page::Services);
        app.open_cursor_detail(ListingKind::Services);
        assert_eq!(app.router.active(), Page::ServiceDetail);
        assert!(matches!(app.resolved(), Resolved::ServiceDetail(_)));
    }

    #[test]
    fn filtered_out_listing_cannot_open_detail() {
        let mut app = app();
        app.nav_to(Page::Services);
        app.services.query.text = "zzz-no-such-service".to_string();
        app.open_cursor_detail(ListingKind::Services);
        // No match under the cursor: navigation does not happen
        assert_eq!(app.router.active(), Page::Services);
    }

    #[test]
    fn login_gates_account_pages() {
        let mut app = app();
        app.nav_to(Page::Dashboard);
        assert_eq!(app.resolved(), Resolved::Login);

        app.login_form.fields[0].value = "sara@timesouk.example".to_string();
        app.login_form.fields[1].value = "hourglass".to_string();
        app.submit_login();
        assert!(app.session.is_logged_in());
        assert_eq!(app.resolved(), Resolved::Dashboard);
    }

    #[test]
    fn register_creates_account_and_signs_in() {
        let mut app = app();
        let before = app.catalog.accounts.len();
        app.register_form.fields[0].value = "New Member".to_string();
        app.register_form.fields[1].value = "new@timesouk.example".to_string();
        app.register_form.fields[2].value = "secret".to_string();
        app.submit_register();

        assert_eq!(app.catalog.accounts.len(), before + 1);
        assert!(app.session.is_logged_in());
        assert_eq!(app.resolved(), Resolved::Dashboard);
    }

    #[test]
    fn register_rejects_bad_email() {
        let mut app = app();
        let before = app.catalog.accounts.len();
        app.register_form.fields[0].value = "New Member".to_string();
        app.register_form.fields[1].value = "not-an-email".to_string();
        app.register_form.fields[2].value = "secret".to_string();
        app.submit_register();
        assert_eq!(app.catalog.accounts.len(), before);
        assert!(!app.session.is_logged_in());
    }

    #[test]
    fn send_message_appends_to_thread_and_bumps_conversation() {
        let mut app = app();
        app.conversation_cursor = 1;
        let conversation_id = app.selected_conversation_id().unwrap();
        let before = app.catalog.thread(&conversation_id).len();

        app.composer.value = "See you Thursday".to_string();
        app.send_message();

        assert_eq!(app.catalog.thread(&conversation_id).len(), before + 1);
        // The thread floats to the top of the sorted list
        assert_eq!(app.sorted_conversations()[0].id, conversation_id);
        assert_eq!(app.conversation_cursor, 0);
        assert!(app.composer.value.is_empty());
    }

    #[test]
    fn empty_composer_sends_nothing() {
        let mut app = app();
        let before = app.catalog.messages.len();
        app.composer.value = "   ".to_string();
        app.send_message();
        assert_eq!(app.catalog.messages.len(), before);
    }

    #[test]
    fn typing_state_follows_focus() {
        let mut app = app();
        assert!(!app.is_typing());
        app.nav_to(Page::Services);
        app.focus_search(ListingKind::Services);
        assert!(app.is_typing());
        app.services.search_focused = false;

        app.nav_to(Page::Login);
        assert!(app.is_typing());
    }
}
