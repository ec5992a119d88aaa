// List query engine - the one filter/search/sort pipeline shared by every
// listing page
//
// Each listing page owns a `Query` and derives its visible rows by running
// the full catalog through `run_query`. The pipeline is a pure function of
// (records, query): no hidden state, recomputed on every change. Stage order
// is fixed: text search, category/tag filters, rating threshold, stable sort.

use super::types::{BlogPost, Freelancer, Project, Service};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sort orderings a listing page can offer. Closed set: the UI can only
/// cycle through these, so an invalid sort key cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rating,
    Newest,
    Price,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Rating, SortKey::Newest, SortKey::Price]
    }

    /// Next key in the cycle (wraps)
    pub fn next(self) -> Self {
        let keys = Self::all();
        let current = keys.iter().position(|&k| k == self).unwrap_or(0);
        keys[(current + 1) % keys.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// User-editable filter and sort state for one listing page.
///
/// Owned by the page, ephemeral, reset by `clear()`. The default sort is
/// fixed at construction so clearing restores the page's own default order
/// rather than a global one (projects default to newest, services to rating).
#[derive(Debug, Clone)]
pub struct Query {
    pub text: String,
    pub category: Option<String>,
    pub tags: BTreeSet<String>,
    pub min_rating: Option<f64>,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
    default_sort: (SortKey, SortDirection),
}

impl Query {
    pub fn new(sort_key: SortKey, sort_dir: SortDirection) -> Self {
        Self {
            text: String::new(),
            category: None,
            tags: BTreeSet::new(),
            min_rating: None,
            sort_key,
            sort_dir,
            default_sort: (sort_key, sort_dir),
        }
    }

    /// Reset every filter and restore the page's default sort
    pub fn clear(&mut self) {
        self.text.clear();
        self.category = None;
        self.tags.clear();
        self.min_rating = None;
        self.sort_key = self.default_sort.0;
        self.sort_dir = self.default_sort.1;
    }

    /// Whether any filter narrows the result (sort alone does not count)
    pub fn is_filtering(&self) -> bool {
        !self.text.trim().is_empty()
            || self.category.is_some()
            || !self.tags.is_empty()
            || self.min_rating.is_some()
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    /// Step the minimum-rating threshold through the fixed ladder
    /// None → 3.0 → 4.0 → 4.5 → None
    pub fn cycle_min_rating(&mut self) {
        self.min_rating = match self.min_rating {
            None => Some(3.0),
            Some(r) if r < 4.0 => Some(4.0),
            Some(r) if r < 4.5 => Some(4.5),
            Some(_) => None,
        };
    }
}

/// A record that can flow through the query pipeline.
///
/// Each implementor declares which text fields are searchable, which field
/// set the tag filter intersects with, and how the sort keys map onto it.
pub trait Listable {
    fn id(&self) -> &str;

    /// Fields scanned by the case-insensitive text search
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str>;

    /// Values the tag filter intersects with
    fn tags(&self) -> Vec<&str>;

    /// Ranking field used by the minimum-rating threshold and rating sort
    fn rating(&self) -> Option<f64>;

    /// Price-like field used by the price sort
    fn price(&self) -> Option<f64>;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Run the staged pipeline over `records`, returning references in sorted
/// order. Pure: same inputs, same output. An empty source or an
/// all-filtered-out result is an empty vec, never an error.
pub fn run_query<'a, T: Listable>(records: &'a [T], query: &Query) -> Vec<&'a T> {
    let needle = query.text.trim().to_lowercase();

    let mut result: Vec<&T> = records
        .iter()
        .filter(|r| matches_text(*r, &needle))
        .filter(|r| matches_category(*r, query))
        .filter(|r| matches_tags(*r, query))
        .filter(|r| matches_rating(*r, query))
        .collect();

    // Vec::sort_by is stable, so equal-key records keep source order.
    // Reversing the comparator (not the slice) preserves that for Desc.
    result.sort_by(|a, b| compare(*a, *b, query.sort_key, query.sort_dir));
    result
}

/// Case-insensitive substring match over the record's searchable fields.
/// An empty needle matches everything.
fn matches_text<T: Listable>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category<T: Listable>(record: &T, query: &Query) -> bool {
    match &query.category {
        Some(wanted) => record.category() == Some(wanted.as_str()),
        None => true,
    }
}

/// Non-empty intersection between the active tag set and the record's tags
fn matches_tags<T: Listable>(record: &T, query: &Query) -> bool {
    if query.tags.is_empty() {
        return true;
    }
    record.tags().iter().any(|tag| query.tags.contains(*tag))
}

/// Threshold on the ranking field; an absent or zero threshold admits all,
/// and a record without a rating counts as zero.
fn matches_rating<T: Listable>(record: &T, query: &Query) -> bool {
    match query.min_rating {
        Some(min) if min > 0.0 => record.rating().unwrap_or(0.0) >= min,
        _ => true,
    }
}

fn compare<T: Listable>(a: &T, b: &T, key: SortKey, dir: SortDirection) -> Ordering {
    let ord = match key {
        SortKey::Rating => a
            .rating()
            .unwrap_or(0.0)
            .total_cmp(&b.rating().unwrap_or(0.0)),
        SortKey::Price => a.price().unwrap_or(0.0).total_cmp(&b.price().unwrap_or(0.0)),
        SortKey::Newest => a.created_at().cmp(&b.created_at()),
    };
    match dir {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Listable implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Listable for Service {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn price(&self) -> Option<f64> {
        Some(self.hourly_rate)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.skills_required.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    // Skills are what a browsing freelancer filters projects by
    fn tags(&self) -> Vec<&str> {
        self.skills_required.iter().map(String::as_str).collect()
    }

    // The only rating a project row carries is its client's
    fn rating(&self) -> Option<f64> {
        Some(self.client_rating)
    }

    // Price sort orders by the top of the budget range
    fn price(&self) -> Option<f64> {
        Some(f64::from(self.budget.max))
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listable for Freelancer {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.bio.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    // Freelancers are not categorized; the category filter admits them all
    fn category(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> Vec<&str> {
        self.skills.iter().map(String::as_str).collect()
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn price(&self) -> Option<f64> {
        Some(self.hourly_rate)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

impl Listable for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    // Posts have no star rating; the threshold filter admits them all
    fn rating(&self) -> Option<f64> {
        None
    }

    fn price(&self) -> Option<f64> {
        None
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Budget, BudgetKind, ProjectStatus};
    use chrono::{Duration, TimeZone};

    fn service(id: &str, title: &str, category: &str, rating: f64, rate: f64) -> Service {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Service {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} offered as a time exchange", title),
            category: category.to_string(),
            tags: vec!["remote".to_string()],
            provider_id: "f1".to_string(),
            provider_name: "Provider".to_string(),
            hourly_rate: rate,
            location: "Remote".to_string(),
            rating,
            reviews: 10,
            created_at: base + Duration::days(id.len() as i64),
        }
    }

    fn project(id: &str, min: u32, max: u32, days_old: i64) -> Project {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: "A posted project".to_string(),
            category: "Web Development".to_string(),
            client_id: "c1".to_string(),
            client_name: "Client".to_string(),
            client_rating: 4.5,
            client_reviews: 12,
            budget: Budget {
                min,
                max,
                kind: BudgetKind::Fixed,
            },
            duration_days: 14,
            skills_required: vec!["React".to_string()],
            tags: vec![],
            location: "Remote".to_string(),
            status: ProjectStatus::Open,
            deadline: base + Duration::days(30),
            created_at: base - Duration::days(days_old),
        }
    }

    fn query() -> Query {
        Query::new(SortKey::Rating, SortDirection::Desc)
    }

    #[test]
    fn empty_text_matches_everything() {
        let services = vec![
            service("a", "Guitar Lessons", "Consulting", 4.0, 2.0),
            service("b", "Logo Design", "Design", 4.5, 3.0),
        ];
        let result = run_query(&services, &query());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn text_search_is_case_insensitive_and_any_field() {
        let services = vec![
            service("a", "Guitar Lessons", "Consulting", 4.0, 2.0),
            service("b", "Logo Design", "Design", 4.5, 3.0),
        ];
        let mut q = query();
        q.text = "GUITAR".to_string();
        let result = run_query(&services, &q);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");

        // Matches the description field too
        q.text = "time exchange".to_string();
        assert_eq!(run_query(&services, &q).len(), 2);
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        let services = vec![
            service("a", "Guitar Lessons", "Consulting", 4.8, 2.0),
            service("b", "Logo Design", "Design", 3.2, 3.0),
            service("c", "Web Design", "Design", 4.6, 4.0),
        ];
        let mut q = query();
        q.category = Some("Design".to_string());
        q.min_rating = Some(4.0);
        let result = run_query(&services, &q);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);

        // Every returned record points into the source
        for record in result {
            assert!(services.iter().any(|s| std::ptr::eq(s, record)));
        }
    }

    #[test]
    fn zero_threshold_admits_all() {
        let services = vec![service("a", "Guitar Lessons", "Consulting", 0.0, 2.0)];
        let mut q = query();
        q.min_rating = Some(0.0);
        assert_eq!(run_query(&services, &q).len(), 1);
    }

    #[test]
    fn tag_filter_requires_nonempty_intersection() {
        let mut with_tag = service("a", "Guitar Lessons", "Consulting", 4.0, 2.0);
        with_tag.tags = vec!["music".to_string(), "remote".to_string()];
        let mut without = service("b", "Logo Design", "Design", 4.5, 3.0);
        without.tags = vec!["branding".to_string()];
        let services = vec![with_tag, without];

        let mut q = query();
        q.toggle_tag("music");
        q.toggle_tag("video");
        let ids: Vec<&str> = run_query(&services, &q).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["a"]);

        // Toggling both off restores the full set
        q.toggle_tag("music");
        q.toggle_tag("video");
        assert_eq!(run_query(&services, &q).len(), 2);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let services = vec![
            service("first", "Alpha", "Design", 4.5, 2.0),
            service("second", "Beta", "Design", 4.5, 3.0),
            service("third", "Gamma", "Design", 4.5, 4.0),
        ];
        let mut q = query();
        q.sort_key = SortKey::Rating;
        q.sort_dir = SortDirection::Desc;
        let ids: Vec<&str> = run_query(&services, &q).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);

        q.sort_dir = SortDirection::Asc;
        let ids: Vec<&str> = run_query(&services, &q).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn budget_ordering_example() {
        // Three projects with budgets 20-30, 10-15 and 5-8 hours; price desc
        // must come back in exactly that order.
        let projects = vec![
            project("mid", 10, 15, 1),
            project("big", 20, 30, 2),
            project("small", 5, 8, 0),
        ];
        let mut q = Query::new(SortKey::Newest, SortDirection::Desc);
        q.sort_key = SortKey::Price;
        q.sort_dir = SortDirection::Desc;
        let ids: Vec<&str> = run_query(&projects, &q).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["big", "mid", "small"]);
    }

    #[test]
    fn newest_sort_orders_by_timestamp() {
        let projects = vec![
            project("old", 10, 15, 10),
            project("new", 10, 15, 0),
            project("mid", 10, 15, 5),
        ];
        let q = Query::new(SortKey::Newest, SortDirection::Desc);
        let ids: Vec<&str> = run_query(&projects, &q).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn unmatched_category_yields_empty_not_error() {
        let projects = vec![project("a", 10, 15, 1)];
        let mut q = Query::new(SortKey::Newest, SortDirection::Desc);
        q.category = Some("Translation".to_string());
        assert!(run_query(&projects, &q).is_empty());
    }

    #[test]
    fn empty_source_yields_empty() {
        let projects: Vec<Project> = vec![];
        assert!(run_query(&projects, &query()).is_empty());
    }

    #[test]
    fn clear_restores_full_set_in_default_order() {
        let services = vec![
            service("a", "Guitar Lessons", "Consulting", 3.0, 2.0),
            service("b", "Logo Design", "Design", 5.0, 3.0),
        ];
        let mut q = query();
        q.text = "logo".to_string();
        q.category = Some("Design".to_string());
        q.min_rating = Some(4.5);
        q.sort_key = SortKey::Price;
        q.sort_dir = SortDirection::Asc;

        q.clear();
        assert!(!q.is_filtering());
        let ids: Vec<&str> = run_query(&services, &q).iter().map(|s| s.id()).collect();
        // Default sort for this page is rating desc
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn min_rating_ladder_cycles() {
        let mut q = query();
        assert_eq!(q.min_rating, None);
        q.cycle_min_rating();
        assert_eq!(q.min_rating, Some(3.0));
        q.cycle_min_rating();
        assert_eq!(q.min_rating, Some(4.0));
        q.cycle_min_rating();
        assert_eq!(q.min_rating, Some(4.5));
        q.cycle_min_rating();
        assert_eq!(q.min_rating, None);
    }
}
