// Shared UI components and formatters
//
// Components are plain render functions taking the frame, an area and the
// app state. Formatters live here because every view needs them.

mod empty_state;
mod filter_bar;
mod nav_bar;
mod status_bar;
mod text_field;
mod title_bar;
mod toast;

pub use empty_state::render_empty_state;
pub use filter_bar::render_filter_bar;
pub use nav_bar::render_nav_bar;
pub use status_bar::render_status_bar;
pub use text_field::{render_text_field, TextField};
pub use title_bar::render_title_bar;
pub use toast::Toast;

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

/// Relative age label for timestamps ("3 hours ago", "just now")
pub fn format_time_ago(date: DateTime<Utc>) -> String {
    let diff = Utc::now() - date;
    let days = diff.num_days();
    let hours = diff.num_hours();

    if days > 1 {
        format!("{} days ago", days)
    } else if days == 1 {
        "1 day ago".to_string()
    } else if hours > 1 {
        format!("{} hours ago", hours)
    } else if hours == 1 {
        "1 hour ago".to_string()
    } else {
        "just now".to_string()
    }
}

/// Countdown label for deadlines ("Expired", "Today", "5 days left")
pub fn format_deadline(date: DateTime<Utc>) -> String {
    let days = (date - Utc::now()).num_days();
    if days < 0 {
        "Expired".to_string()
    } else if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Tomorrow".to_string()
    } else {
        format!("{} days left", days)
    }
}

/// Time-credit amount, e.g. "12.5h"
pub fn format_hours(hours: f64) -> String {
    if (hours - hours.trunc()).abs() < f64::EPSILON {
        format!("{:.0}h", hours)
    } else {
        format!("{:.1}h", hours)
    }
}

/// Star rating label, e.g. "★ 4.8"
pub fn format_stars(rating: f64) -> String {
    format!("★ {:.1}", rating)
}

/// Truncate to a display width, unicode-aware, appending an ellipsis when
/// something was cut
pub fn truncate_width(s: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_ago_labels() {
        assert_eq!(format_time_ago(Utc::now()), "just now");
        assert_eq!(
            format_time_ago(Utc::now() - Duration::hours(3)),
            "3 hours ago"
        );
        assert_eq!(format_time_ago(Utc::now() - Duration::days(2)), "2 days ago");
    }

    #[test]
    fn deadline_labels() {
        assert_eq!(format_deadline(Utc::now() - Duration::days(1)), "Expired");
        assert_eq!(
            format_deadline(Utc::now() + Duration::days(5) + Duration::hours(1)),
            "5 days left"
        );
    }

    #[test]
    fn hours_drop_trailing_zero() {
        assert_eq!(format_hours(2.0), "2h");
        assert_eq!(format_hours(12.5), "12.5h");
    }

    #[test]
    fn truncation_respects_width_and_marks_cut() {
        assert_eq!(truncate_width("short", 10), "short");
        let cut = truncate_width("a rather long title", 8);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 8);
    }
}
