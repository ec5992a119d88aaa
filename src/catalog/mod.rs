// Catalog module - in-memory data the pages browse
//
// The catalog is seeded once at startup from mock data and never persisted.
// Pages hold references into it; the query engine derives their visible rows.

pub mod mock;
pub mod query;
pub mod types;

pub use query::{run_query, Listable, Query, SortDirection, SortKey};
pub use types::{
    Account, BlogPost, Budget, BudgetKind, ChatMessage, Conversation, Freelancer, Notification,
    Project, ProjectStatus, Service, Transaction, TransactionKind, TransactionStatus,
    BLOG_CATEGORIES, CATEGORIES,
};

/// All marketplace data held in memory for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub freelancers: Vec<Freelancer>,
    pub posts: Vec<BlogPost>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<ChatMessage>,
    pub notifications: Vec<Notification>,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
}

impl Catalog {
    /// Seed the catalog with the built-in mock data
    pub fn seeded() -> Self {
        mock::seed()
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn freelancer(&self, id: &str) -> Option<&Freelancer> {
        self.freelancers.iter().find(|f| f.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Messages of one conversation, oldest first
    pub fn thread(&self, conversation_id: &str) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .collect()
    }

    pub fn unread_messages(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_all_collections() {
        let catalog = Catalog::seeded();
        assert!(!catalog.services.is_empty());
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.freelancers.is_empty());
        assert!(!catalog.posts.is_empty());
        assert!(!catalog.conversations.is_empty());
        assert!(!catalog.accounts.is_empty());
    }

    #[test]
    fn every_record_id_is_unique_within_its_collection() {
        let catalog = Catalog::seeded();
        let mut ids: Vec<&str> = catalog.services.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.services.len());

        let mut ids: Vec<&str> = catalog.projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.projects.len());
    }

    #[test]
    fn service_providers_join_to_freelancers() {
        let catalog = Catalog::seeded();
        for service in &catalog.services {
            assert!(
                catalog.freelancer(&service.provider_id).is_some(),
                "service {} has dangling provider {}",
                service.id,
                service.provider_id
            );
        }
    }

    #[test]
    fn threads_resolve_their_conversations() {
        let catalog = Catalog::seeded();
        for message in &catalog.messages {
            assert!(catalog
                .conversations
                .iter()
                .any(|c| c.id == message.conversation_id));
        }
    }
}
