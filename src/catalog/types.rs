// Domain records for the marketplace catalogs
//
// These are the entities the listing pages browse: services offered for time
// credits, posted projects, freelancer profiles, and blog posts. Using plain
// serde structs keeps them trivially clonable and exportable as JSON from the
// clipboard commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories a service or project can be posted under.
/// Closed list shared by the category filter dropdowns.
pub const CATEGORIES: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Design",
    "Writing",
    "Marketing",
    "Translation",
    "Data Entry",
    "Consulting",
];

/// Categories for the blog, distinct from the service taxonomy.
pub const BLOG_CATEGORIES: &[&str] = &["Community", "Tutorials", "Tips", "News"];

/// A service offered on the marketplace, priced in time credits per hour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Freelancer offering the service (joins to `Freelancer::id`)
    pub provider_id: String,
    pub provider_name: String,
    /// Time credits charged per hour of work
    pub hourly_rate: f64,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub created_at: DateTime<Utc>,
}

/// Budget range for a posted project, in time credits
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Budget {
    pub min: u32,
    pub max: u32,
    pub kind: BudgetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetKind {
    Fixed,
    Hourly,
}

impl BudgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetKind::Fixed => "fixed",
            BudgetKind::Hourly => "hourly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

/// A project posted by a client looking for freelancers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub client_id: String,
    pub client_name: String,
    /// Rating of the posting client; this is the rating a project row shows
    pub client_rating: f64,
    pub client_reviews: u32,
    pub budget: Budget,
    /// Expected duration in days
    pub duration_days: u32,
    pub skills_required: Vec<String>,
    pub tags: Vec<String>,
    pub location: String,
    pub status: ProjectStatus,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A freelancer profile browsable on the freelancers page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freelancer {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub location: String,
    pub hourly_rate: f64,
    pub rating: f64,
    pub total_reviews: u32,
    pub completed_services: u32,
    pub response_time: String,
    pub joined_at: DateTime<Utc>,
}

/// A blog article; `content` is markdown rendered on the detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub views: u32,
    pub likes: u32,
    pub read_minutes: u32,
    pub published_at: DateTime<Utc>,
}

/// A message thread between the signed-in user and another member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub with_id: String,
    pub with_name: String,
    pub unread: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    /// "me" for the signed-in user, otherwise the other participant's id
    pub sender_id: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Booking,
    Message,
    Payment,
    Review,
    System,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "📅",
            NotificationKind::Message => "✉",
            NotificationKind::Payment => "⏳",
            NotificationKind::Review => "★",
            NotificationKind::System => "ℹ",
        }
    }
}

/// Dashboard notification item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

/// A time-credit movement shown on the wallet page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Hours of time credit moved
    pub hours: f64,
    pub description: String,
    pub counterparty: String,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
}

/// A sign-in identity known to the mock auth collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Current time-credit balance in hours
    pub balance_hours: f64,
    pub joined_at: DateTime<Utc>,
}
