// Status bar component
//
// Bottom line with context-sensitive key hints; the most recent warning
// from the log buffer takes the line over when present.

use crate::router::Resolved;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // A fresh warning outranks the hints
    if let Some(entry) = app.log_buffer.last_warning() {
        let age = chrono::Utc::now() - entry.timestamp;
        if age.num_seconds() < 5 {
            let line = format!(" {} {}", entry.level.as_str(), entry.message);
            let status = Paragraph::new(line)
                .style(Style::default().fg(theme.log_warn))
                .block(Block::default().borders(Borders::TOP));
            f.render_widget(status, area);
            return;
        }
    }

    let hints = if app.is_typing() {
        match app.resolved() {
            Resolved::Messages => " type │ ⏎ send │ ⇥ threads │ esc done",
            Resolved::Login | Resolved::Register | Resolved::Support => {
                " type │ ⇥ next field │ ⏎ submit │ esc back"
            }
            _ => " type to search │ ⏎/esc done",
        }
    } else {
        match app.resolved() {
            Resolved::Services | Resolved::Projects | Resolved::Freelancers | Resolved::Blog => {
                " ↑↓ select │ ⏎ open │ / search │ c category │ t tag │ m rating │ o sort │ d dir │ x clear │ q quit"
            }
            Resolved::ServiceDetail(_) | Resolved::ProjectDetail(_) => {
                " ↑↓ scroll │ ⏎ request │ ⌫ back │ y/Y copy │ q quit"
            }
            Resolved::UserProfile(_) | Resolved::BlogPost(_) => {
                " ↑↓ scroll │ ⌫ back │ y/Y copy │ q quit"
            }
            Resolved::Messages => " ↑↓ threads │ ⏎ mark read │ ⇥ compose │ ⌫ back │ q quit",
            _ => " 1-7 pages │ 8 wallet │ F1-F4 info │ a account │ T theme │ G lang │ ⌫ back │ q quit"
        }
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
