// Mock catalog: realistic seed data for showcasing the client without a
// backend
//
// Timestamps are expressed relative to process start so "2 days ago" style
// labels stay fresh. Ids are stable strings; selection state and the
// conversation threads join on them.

use super::types::*;
use super::Catalog;
use chrono::{DateTime, Duration, Utc};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the full mock catalog
pub fn seed() -> Catalog {
    let now = Utc::now();

    Catalog {
        services: services(now),
        projects: projects(now),
        freelancers: freelancers(now),
        posts: posts(now),
        conversations: conversations(now),
        messages: messages(now),
        notifications: notifications(now),
        transactions: transactions(now),
        accounts: accounts(now),
    }
}

#[allow(clippy::too_many_arguments)]
fn service(
    now: DateTime<Utc>,
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    provider_id: &str,
    provider_name: &str,
    hourly_rate: f64,
    location: &str,
    rating: f64,
    reviews: u32,
    days_old: i64,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: strings(tags),
        provider_id: provider_id.to_string(),
        provider_name: provider_name.to_string(),
        hourly_rate,
        location: location.to_string(),
        rating,
        reviews,
        created_at: now - Duration::days(days_old),
    }
}

fn services(now: DateTime<Utc>) -> Vec<Service> {
    vec![
        service(
            now,
            "svc-1",
            "Responsive Website Development",
            "Modern responsive websites with clean code. Landing pages, \
             portfolios and small shops, one hour of my time per hour of yours.",
            "Web Development",
            &["react", "responsive", "remote"],
            "fr-1",
            "Layla Nasser",
            2.0,
            "Dubai, UAE",
            4.9,
            47,
            12,
        ),
        service(
            now,
            "svc-2",
            "Brand Identity & Logo Design",
            "Complete brand kits: logo, palette, typography and usage guide. \
             Two revision rounds included.",
            "Design",
            &["branding", "logo", "figma"],
            "fr-2",
            "Omar Khalil",
            1.5,
            "Abu Dhabi, UAE",
            4.7,
            31,
            25,
        ),
        service(
            now,
            "svc-3",
            "Arabic-English Translation",
            "Certified translation of documents, websites and marketing copy \
             between Arabic and English.",
            "Translation",
            &["arabic", "english", "remote"],
            "fr-3",
            "Fatima Al-Zahra",
            1.0,
            "Sharjah, UAE",
            4.8,
            62,
            40,
        ),
        service(
            now,
            "svc-4",
            "SEO Content Writing",
            "Blog posts and landing copy that rank. Keyword research included, \
             tech and lifestyle niches.",
            "Writing",
            &["seo", "content", "remote"],
            "fr-3",
            "Fatima Al-Zahra",
            1.2,
            "Remote",
            4.6,
            18,
            6,
        ),
        service(
            now,
            "svc-5",
            "Flutter Mobile App Development",
            "Cross-platform mobile apps from a single codebase. UI, state \
             management and store submission support.",
            "Mobile Development",
            &["flutter", "mobile"],
            "fr-4",
            "Yusuf Haddad",
            2.5,
            "Dubai, UAE",
            4.5,
            22,
            3,
        ),
        service(
            now,
            "svc-6",
            "Social Media Strategy Session",
            "A working session to plan your content calendar, channel mix and \
             growth targets for the next quarter.",
            "Marketing",
            &["strategy", "social"],
            "fr-2",
            "Omar Khalil",
            1.0,
            "Remote",
            4.2,
            9,
            18,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    now: DateTime<Utc>,
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    client: (&str, &str, f64, u32),
    budget: Budget,
    duration_days: u32,
    skills: &[&str],
    tags: &[&str],
    location: &str,
    deadline_days: i64,
    days_old: i64,
) -> Project {
    let (client_id, client_name, client_rating, client_reviews) = client;
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        client_id: client_id.to_string(),
        client_name: client_name.to_string(),
        client_rating,
        client_reviews,
        budget,
        duration_days,
        skills_required: strings(skills),
        tags: strings(tags),
        location: location.to_string(),
        status: ProjectStatus::Open,
        deadline: now + Duration::days(deadline_days),
        created_at: now - Duration::days(days_old),
    }
}

fn projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        project(
            now,
            "prj-1",
            "E-commerce Website Development",
            "Looking for an experienced developer to build a modern e-commerce \
             website with payment integration, inventory management and an \
             admin dashboard.",
            "Web Development",
            ("cl-1", "Sarah Ahmed", 4.8, 12),
            Budget {
                min: 20,
                max: 30,
                kind: BudgetKind::Fixed,
            },
            30,
            &["React", "Node.js", "MongoDB", "Stripe"],
            &["urgent", "long-term"],
            "Dubai, UAE",
            30,
            2,
        ),
        project(
            now,
            "prj-2",
            "Mobile App UI/UX Design",
            "Need a creative designer to craft a modern and intuitive UI/UX \
             for a fitness tracking mobile application.",
            "Design",
            ("cl-2", "Ahmed Hassan", 4.6, 8),
            Budget {
                min: 10,
                max: 15,
                kind: BudgetKind::Fixed,
            },
            14,
            &["Figma", "Adobe XD", "Prototyping", "User Research"],
            &["design", "mobile"],
            "Abu Dhabi, UAE",
            14,
            1,
        ),
        project(
            now,
            "prj-3",
            "Content Writing for Tech Blog",
            "Seeking a skilled content writer to create engaging articles \
             about emerging technologies and software development trends.",
            "Writing",
            ("cl-3", "Fatima Al-Zahra", 4.9, 15),
            Budget {
                min: 5,
                max: 8,
                kind: BudgetKind::Hourly,
            },
            7,
            &["Technical Writing", "SEO", "Research", "WordPress"],
            &["writing", "tech", "remote"],
            "Remote",
            7,
            0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn freelancer(
    now: DateTime<Utc>,
    id: &str,
    name: &str,
    bio: &str,
    skills: &[&str],
    location: &str,
    hourly_rate: f64,
    rating: f64,
    total_reviews: u32,
    completed: u32,
    response_time: &str,
    days_member: i64,
) -> Freelancer {
    Freelancer {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        skills: strings(skills),
        location: location.to_string(),
        hourly_rate,
        rating,
        total_reviews,
        completed_services: completed,
        response_time: response_time.to_string(),
        joined_at: now - Duration::days(days_member),
    }
}

fn freelancers(now: DateTime<Utc>) -> Vec<Freelancer> {
    vec![
        freelancer(
            now,
            "fr-1",
            "Layla Nasser",
            "Full-stack developer who trades code for cooking lessons. Eight \
             years building for the web, fluent in React and Rust.",
            &["React", "TypeScript", "Node.js", "Rust"],
            "Dubai, UAE",
            2.0,
            4.9,
            58,
            112,
            "within an hour",
            640,
        ),
        freelancer(
            now,
            "fr-2",
            "Omar Khalil",
            "Brand designer and illustrator. I believe every neighbourhood \
             bakery deserves a beautiful identity.",
            &["Figma", "Illustrator", "Branding"],
            "Abu Dhabi, UAE",
            1.5,
            4.7,
            40,
            75,
            "within 3 hours",
            410,
        ),
        freelancer(
            now,
            "fr-3",
            "Fatima Al-Zahra",
            "Bilingual writer and certified translator. Words are the only \
             currency that appreciates when you spend it.",
            &["Technical Writing", "SEO", "Arabic", "Translation"],
            "Sharjah, UAE",
            1.0,
            4.8,
            71,
            134,
            "within an hour",
            820,
        ),
        freelancer(
            now,
            "fr-4",
            "Yusuf Haddad",
            "Mobile developer, Flutter early adopter. Weekends I teach kids \
             to code at the community centre.",
            &["Flutter", "Dart", "Firebase"],
            "Dubai, UAE",
            2.5,
            4.5,
            26,
            41,
            "within a day",
            150,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    now: DateTime<Utc>,
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author: &str,
    category: &str,
    tags: &[&str],
    views: u32,
    likes: u32,
    read_minutes: u32,
    days_old: i64,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        tags: strings(tags),
        views,
        likes,
        read_minutes,
        published_at: now - Duration::days(days_old),
    }
}

fn posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    vec![
        post(
            now,
            "post-1",
            "What an Hour Is Worth",
            "Time banking flips the usual question: instead of asking what \
             your hour costs, ask what it could buy.",
            "# What an Hour Is Worth\n\n\
             Time banking flips the usual question. Instead of asking what \
             your hour *costs*, ask what it could *buy*.\n\n\
             ## The core idea\n\n\
             - Every member's hour is worth one credit\n\
             - Credits are earned by helping and spent by being helped\n\
             - Skills circulate instead of money\n\n\
             > An hour of plumbing and an hour of poetry weigh the same here.\n\n\
             Start small: offer the thing you would do for free anyway.",
            "Layla Nasser",
            "Community",
            &["time-banking", "community"],
            1843,
            214,
            4,
            9,
        ),
        post(
            now,
            "post-2",
            "Writing a Service Listing That Gets Booked",
            "Your listing is a promise. Here is how to make it specific, \
             believable and easy to say yes to.",
            "# Writing a Service Listing That Gets Booked\n\n\
             Your listing is a promise. Make it specific.\n\n\
             ## Three rules\n\n\
             1. Lead with the outcome, not the tool\n\
             2. Name your turnaround time\n\
             3. Show one real example\n\n\
             A listing titled `I will fix your flaky CSS` beats \
             `Front-end services` every single week.",
            "Omar Khalil",
            "Tips",
            &["listings", "writing"],
            977,
            102,
            3,
            16,
        ),
        post(
            now,
            "post-3",
            "From First Message to Five-Star Review",
            "A walkthrough of one real exchange on the platform, from the \
             opening message to the review that followed.",
            "# From First Message to Five-Star Review\n\n\
             This is the story of one real exchange.\n\n\
             ## The ask\n\n\
             Sarah needed a product page. Yusuf had four spare hours.\n\n\
             ## What made it work\n\n\
             - Clear scope agreed in the first thread\n\
             - A midpoint check-in\n\
             - Honest review afterwards\n\n\
             ---\n\n\
             *Five stars, four hours, zero dirhams.*",
            "Fatima Al-Zahra",
            "Community",
            &["stories", "reviews"],
            1411,
            188,
            6,
            3,
        ),
        post(
            now,
            "post-4",
            "Setting Up Your Profile for Trust",
            "Members with complete profiles receive three times as many \
             first messages. A checklist.",
            "# Setting Up Your Profile for Trust\n\n\
             Members with complete profiles receive three times as many \
             first messages.\n\n\
             ## Checklist\n\n\
             - A real photo or a consistent avatar\n\
             - Skills listed with the level you actually have\n\
             - One sentence about why you joined\n\n\
             `Verified` badges appear after your first completed exchange.",
            "Yusuf Haddad",
            "Tutorials",
            &["profile", "trust"],
            654,
            71,
            3,
            27,
        ),
    ]
}

fn conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    vec![
        Conversation {
            id: "conv-1".to_string(),
            with_id: "fr-1".to_string(),
            with_name: "Layla Nasser".to_string(),
            unread: 2,
            updated_at: now - Duration::hours(1),
        },
        Conversation {
            id: "conv-2".to_string(),
            with_id: "cl-2".to_string(),
            with_name: "Ahmed Hassan".to_string(),
            unread: 0,
            updated_at: now - Duration::days(1),
        },
        Conversation {
            id: "conv-3".to_string(),
            with_id: "fr-3".to_string(),
            with_name: "Fatima Al-Zahra".to_string(),
            unread: 1,
            updated_at: now - Duration::days(3),
        },
    ]
}

fn messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    let msg = |id: &str, conv: &str, sender: &str, body: &str, hours_ago: i64| ChatMessage {
        id: id.to_string(),
        conversation_id: conv.to_string(),
        sender_id: sender.to_string(),
        body: body.to_string(),
        sent_at: now - Duration::hours(hours_ago),
    };

    vec![
        msg(
            "msg-1",
            "conv-1",
            "me",
            "Hi Layla, is the website service still available this month?",
            26,
        ),
        msg(
            "msg-2",
            "conv-1",
            "fr-1",
            "Hello! Yes, I have around ten hours free after Thursday.",
            25,
        ),
        msg(
            "msg-3",
            "conv-1",
            "fr-1",
            "Send over your content and I can sketch a layout first.",
            1,
        ),
        msg(
            "msg-4",
            "conv-2",
            "cl-2",
            "Thanks again for the quick turnaround on the mockups!",
            30,
        ),
        msg("msg-5", "conv-2", "me", "Any time. Good luck with the launch!", 24),
        msg(
            "msg-6",
            "conv-3",
            "fr-3",
            "I finished the translation draft, two hours logged.",
            70,
        ),
    ]
}

fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let note = |id: &str,
                kind: NotificationKind,
                title: &str,
                body: &str,
                read: bool,
                hours_ago: i64| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        body: body.to_string(),
        read,
        created_at: now - Duration::hours(hours_ago),
    };

    vec![
        note(
            "ntf-1",
            NotificationKind::Message,
            "New message from Layla Nasser",
            "Send over your content and I can sketch a layout first.",
            false,
            1,
        ),
        note(
            "ntf-2",
            NotificationKind::Booking,
            "Booking confirmed",
            "Arabic-English Translation, Thursday 14:00, 2 hours.",
            false,
            8,
        ),
        note(
            "ntf-3",
            NotificationKind::Payment,
            "3 hours credited",
            "Fatima Al-Zahra transferred 3.0h for SEO Content Writing.",
            true,
            50,
        ),
        note(
            "ntf-4",
            NotificationKind::Review,
            "You received a 5-star review",
            "\"Professional and fast, would exchange again.\"",
            true,
            96,
        ),
    ]
}

fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let tx = |id: &str,
              kind: TransactionKind,
              hours: f64,
              description: &str,
              counterparty: &str,
              status: TransactionStatus,
              days_ago: i64| Transaction {
        id: id.to_string(),
        kind,
        hours,
        description: description.to_string(),
        counterparty: counterparty.to_string(),
        status,
        date: now - Duration::days(days_ago),
    };

    vec![
        tx(
            "txn-1",
            TransactionKind::Credit,
            3.0,
            "SEO Content Writing",
            "Fatima Al-Zahra",
            TransactionStatus::Completed,
            2,
        ),
        tx(
            "txn-2",
            TransactionKind::Debit,
            2.0,
            "Brand Identity & Logo Design",
            "Omar Khalil",
            TransactionStatus::Completed,
            5,
        ),
        tx(
            "txn-3",
            TransactionKind::Credit,
            4.5,
            "Responsive Website Development",
            "Sarah Ahmed",
            TransactionStatus::Completed,
            11,
        ),
        tx(
            "txn-4",
            TransactionKind::Debit,
            1.0,
            "Social Media Strategy Session",
            "Omar Khalil",
            TransactionStatus::Pending,
            0,
        ),
    ]
}

fn accounts(now: DateTime<Utc>) -> Vec<Account> {
    vec![
        Account {
            id: "acc-1".to_string(),
            name: "Sara Mansour".to_string(),
            email: "sara@timesouk.example".to_string(),
            password: "hourglass".to_string(),
            balance_hours: 12.5,
            joined_at: now - Duration::days(220),
        },
        Account {
            id: "acc-2".to_string(),
            name: "Demo Member".to_string(),
            email: "demo@timesouk.example".to_string(),
            password: "demo".to_string(),
            balance_hours: 4.0,
            joined_at: now - Duration::days(30),
        },
    ]
}
