// Navigation controller - which page is on screen and what it points at
//
// The router owns the active page, the single-slot previous page and the
// auxiliary selection ids that parameterize detail views. Transitions happen
// only through `go_to`/`go_back`; rendering asks `resolve` which view to
// draw. Resolution is total: unknown slugs, missing selection ids and
// signed-out access to account pages all degrade to a safe page instead of
// erroring.

use serde::{Deserialize, Serialize};

/// Every routable view. Closed set; `NotFound` is the fallback for
/// identifiers arriving as strings (config, future deep links).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Services,
    ServiceDetail,
    Projects,
    ProjectDetail,
    Freelancers,
    UserProfile,
    Blog,
    BlogPost,
    Messages,
    Dashboard,
    Wallet,
    Login,
    Register,
    About,
    Support,
    Terms,
    Privacy,
    NotFound,
}

impl Page {
    /// Total slug parser: anything not in the known set maps to `NotFound`
    pub fn from_slug(slug: &str) -> Page {
        match slug {
            "home" => Page::Home,
            "services" => Page::Services,
            "service-detail" => Page::ServiceDetail,
            "projects" => Page::Projects,
            "project-detail" => Page::ProjectDetail,
            "freelancers" => Page::Freelancers,
            "user-profile" => Page::UserProfile,
            "blog" => Page::Blog,
            "blog-post" => Page::BlogPost,
            "messages" => Page::Messages,
            "dashboard" => Page::Dashboard,
            "wallet" => Page::Wallet,
            "login" => Page::Login,
            "register" => Page::Register,
            "about" => Page::About,
            "support" => Page::Support,
            "terms" => Page::Terms,
            "privacy" => Page::Privacy,
            _ => Page::NotFound,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::ServiceDetail => "service-detail",
            Page::Projects => "projects",
            Page::ProjectDetail => "project-detail",
            Page::Freelancers => "freelancers",
            Page::UserProfile => "user-profile",
            Page::Blog => "blog",
            Page::BlogPost => "blog-post",
            Page::Messages => "messages",
            Page::Dashboard => "dashboard",
            Page::Wallet => "wallet",
            Page::Login => "login",
            Page::Register => "register",
            Page::About => "about",
            Page::Support => "support",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::NotFound => "not-found",
        }
    }

    /// Locale key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "page.home",
            Page::Services | Page::ServiceDetail => "page.services",
            Page::Projects | Page::ProjectDetail => "page.projects",
            Page::Freelancers | Page::UserProfile => "page.freelancers",
            Page::Blog | Page::BlogPost => "page.blog",
            Page::Messages => "page.messages",
            Page::Dashboard => "page.dashboard",
            Page::Wallet => "page.wallet",
            Page::Login => "page.login",
            Page::Register => "page.register",
            Page::About => "page.about",
            Page::Support => "page.support",
            Page::Terms => "page.terms",
            Page::Privacy => "page.privacy",
            Page::NotFound => "page.not_found",
        }
    }

    /// Pages reachable from the navigation bar, in tab order
    pub fn nav_tabs() -> &'static [Page] {
        &[
            Page::Home,
            Page::Services,
            Page::Projects,
            Page::Freelancers,
            Page::Blog,
            Page::Messages,
            Page::Dashboard,
        ]
    }

    /// Which nav tab a page highlights (detail pages light up their listing)
    pub fn tab_index(&self) -> Option<usize> {
        let tab = match self {
            Page::Home => Page::Home,
            Page::Services | Page::ServiceDetail => Page::Services,
            Page::Projects | Page::ProjectDetail => Page::Projects,
            Page::Freelancers | Page::UserProfile => Page::Freelancers,
            Page::Blog | Page::BlogPost => Page::Blog,
            Page::Messages => Page::Messages,
            Page::Dashboard | Page::Wallet => Page::Dashboard,
            _ => return None,
        };
        Page::nav_tabs().iter().position(|&p| p == tab)
    }

    /// Account pages that need a signed-in session
    pub fn requires_login(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Wallet | Page::Messages)
    }
}

/// Auxiliary ids carried alongside the active page. Each detail view reads
/// only the id relevant to it; the others are left untouched by `go_to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub service_id: Option<String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub freelancer_id: Option<String>,
    pub post_id: Option<String>,
}

impl Selection {
    pub fn service(id: impl Into<String>) -> Self {
        Self {
            service_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn project(id: impl Into<String>) -> Self {
        Self {
            project_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn freelancer(id: impl Into<String>) -> Self {
        Self {
            freelancer_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn post(id: impl Into<String>) -> Self {
        Self {
            post_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Merge a patch: only ids present in the patch overwrite
    fn merge(&mut self, patch: Selection) {
        if patch.service_id.is_some() {
            self.service_id = patch.service_id;
        }
        if patch.user_id.is_some() {
            self.user_id = patch.user_id;
        }
        if patch.project_id.is_some() {
            self.project_id = patch.project_id;
        }
        if patch.freelancer_id.is_some() {
            self.freelancer_id = patch.freelancer_id;
        }
        if patch.post_id.is_some() {
            self.post_id = patch.post_id;
        }
    }

    fn clear(&mut self) {
        *self = Selection::default();
    }
}

/// What the active page resolves to for rendering. Detail variants carry the
/// validated selection id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Home,
    Services,
    ServiceDetail(String),
    Projects,
    ProjectDetail(String),
    Freelancers,
    UserProfile(String),
    Blog,
    BlogPost(String),
    Messages,
    Dashboard,
    Wallet,
    Login,
    Register,
    About,
    Support,
    Terms,
    Privacy,
    NotFound,
}

/// Navigation state: active page, one-slot history, selection ids
#[derive(Debug, Clone)]
pub struct Router {
    active: Page,
    previous: Page,
    selection: Selection,
}

impl Router {
    /// Start on the configured landing page. `previous` begins at the
    /// services listing so an immediate back press lands somewhere useful.
    pub fn new(landing: Page) -> Self {
        Self {
            active: landing,
            previous: Page::Services,
            selection: Selection::default(),
        }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn previous(&self) -> Page {
        self.previous
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Forward transition. Remembers the page we were on and merges the
    /// selection patch; unrelated selection ids are deliberately kept.
    pub fn go_to(&mut self, page: Page, patch: Selection) {
        self.previous = self.active;
        self.active = page;
        self.selection.merge(patch);
        tracing::debug!(from = self.previous.slug(), to = page.slug(), "navigate");
    }

    /// Single-level back: restores `previous` and drops all selection ids.
    /// `previous` itself is not rewound, so a second call is a no-op.
    pub fn go_back(&mut self) {
        self.active = self.previous;
        self.selection.clear();
    }

    /// Resolve the active page to a renderable view. Total over `Page`:
    /// - a detail page without its selection id resolves to that entity's
    ///   listing page (graceful degradation, not an error)
    /// - account pages resolve to Login without a session
    pub fn resolve(&self, logged_in: bool) -> Resolved {
        if self.active.requires_login() && !logged_in {
            return Resolved::Login;
        }

        match self.active {
            Page::Home => Resolved::Home,
            Page::Services => Resolved::Services,
            Page::ServiceDetail => match &self.selection.service_id {
                Some(id) => Resolved::ServiceDetail(id.clone()),
                None => Resolved::Services,
            },
            Page::Projects => Resolved::Projects,
            Page::ProjectDetail => match &self.selection.project_id {
                Some(id) => Resolved::ProjectDetail(id.clone()),
                None => Resolved::Projects,
            },
            Page::Freelancers => Resolved::Freelancers,
            Page::UserProfile => {
                // A profile can be reached as a member (user_id) or from the
                // freelancer listing (freelancer_id); either satisfies it.
                let id = self
                    .selection
                    .user_id
                    .clone()
                    .or_else(|| self.selection.freelancer_id.clone());
                match id {
                    Some(id) => Resolved::UserProfile(id),
                    None => Resolved::Freelancers,
                }
            }
            Page::Blog => Resolved::Blog,
            Page::BlogPost => match &self.selection.post_id {
                Some(id) => Resolved::BlogPost(id.clone()),
                None => Resolved::Blog,
            },
            Page::Messages => Resolved::Messages,
            Page::Dashboard => Resolved::Dashboard,
            Page::Wallet => Resolved::Wallet,
            Page::Login => Resolved::Login,
            Page::Register => Resolved::Register,
            Page::About => Resolved::About,
            Page::Support => Resolved::Support,
            Page::Terms => Resolved::Terms,
            Page::Privacy => Resolved::Privacy,
            Page::NotFound => Resolved::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slugs_fall_back_to_not_found() {
        for slug in ["", "admin", "serviceDetail", "HOME", "settings"] {
            assert_eq!(Page::from_slug(slug), Page::NotFound, "slug {:?}", slug);
        }
        assert_eq!(Page::from_slug("services"), Page::Services);
    }

    #[test]
    fn every_page_round_trips_through_its_slug() {
        for &page in &[
            Page::Home,
            Page::Services,
            Page::ServiceDetail,
            Page::Projects,
            Page::ProjectDetail,
            Page::Freelancers,
            Page::UserProfile,
            Page::Blog,
            Page::BlogPost,
            Page::Messages,
            Page::Dashboard,
            Page::Wallet,
            Page::Login,
            Page::Register,
            Page::About,
            Page::Support,
            Page::Terms,
            Page::Privacy,
        ] {
            assert_eq!(Page::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn go_to_records_previous_page() {
        let mut router = Router::new(Page::Home);
        router.go_to(Page::Services, Selection::default());
        assert_eq!(router.active(), Page::Services);
        assert_eq!(router.previous(), Page::Home);

        router.go_to(Page::ServiceDetail, Selection::service("svc-1"));
        assert_eq!(router.previous(), Page::Services);
    }

    #[test]
    fn go_to_merges_selection_without_clearing_unrelated_ids() {
        let mut router = Router::new(Page::Home);
        router.go_to(Page::ServiceDetail, Selection::service("svc-1"));
        router.go_to(Page::UserProfile, Selection::user("fr-2"));

        // The service id survives the unrelated transition
        assert_eq!(router.selection().service_id.as_deref(), Some("svc-1"));
        assert_eq!(router.selection().user_id.as_deref(), Some("fr-2"));
    }

    #[test]
    fn go_back_restores_previous_exactly_once() {
        let mut router = Router::new(Page::Home);
        router.go_to(Page::Services, Selection::default());
        router.go_to(Page::ServiceDetail, Selection::service("svc-1"));

        router.go_back();
        assert_eq!(router.active(), Page::Services);
        assert_eq!(router.selection(), &Selection::default());

        // No history stack: previous is not rewound further
        router.go_back();
        assert_eq!(router.active(), Page::Services);
        router.go_back();
        assert_eq!(router.active(), Page::Services);
    }

    #[test]
    fn detail_without_selection_resolves_to_its_listing() {
        let mut router = Router::new(Page::Home);
        router.go_to(Page::ServiceDetail, Selection::default());
        assert_eq!(router.resolve(false), Resolved::Services);

        router.go_to(Page::ProjectDetail, Selection::default());
        assert_eq!(router.resolve(false), Resolved::Projects);

        router.go_to(Page::BlogPost, Selection::default());
        assert_eq!(router.resolve(false), Resolved::Blog);

        router.go_to(Page::UserProfile, Selection::default());
        assert_eq!(router.resolve(false), Resolved::Freelancers);
    }

    #[test]
    fn detail_with_selection_resolves_to_detail() {
        let mut router = Router::new(Page::Home);
        router.go_to(Page::ServiceDetail, Selection::service("svc-9"));
        assert_eq!(
            router.resolve(false),
            Resolved::ServiceDetail("svc-9".to_string())
        );
    }

    #[test]
    fn profile_accepts_freelancer_selection() {
        let mut router = Router::new(Page::Freelancers);
        router.go_to(Page::UserProfile, Selection::freelancer("fr-4"));
        assert_eq!(
            router.resolve(false),
            Resolved::UserProfile("fr-4".to_string())
        );
    }

    #[test]
    fn account_pages_resolve_to_login_when_signed_out() {
        for page in [Page::Dashboard, Page::Wallet, Page::Messages] {
            let mut router = Router::new(Page::Home);
            router.go_to(page, Selection::default());
            assert_eq!(router.resolve(false), Resolved::Login);
            assert_ne!(router.resolve(true), Resolved::Login);
        }
    }

    #[test]
    fn not_found_resolves_to_not_found() {
        let router = Router::new(Page::from_slug("no-such-page"));
        assert_eq!(router.resolve(false), Resolved::NotFound);
    }
}
