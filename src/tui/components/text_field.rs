// Single-line text field used by the search box, the forms and the
// message composer
//
// State and rendering are split: the field owns its value, the render
// function draws it with a label and a cursor marker when focused.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Editable single-line value with a locale key for its label
#[derive(Debug, Clone)]
pub struct TextField {
    pub label_key: &'static str,
    pub value: String,
    /// Render as bullets (passwords)
    pub masked: bool,
}

impl TextField {
    pub fn new(label_key: &'static str) -> Self {
        Self {
            label_key,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(label_key: &'static str) -> Self {
        Self {
            label_key,
            value: String::new(),
            masked: true,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value as shown on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Render a bordered field with its label as the block title
pub fn render_text_field(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    field: &TextField,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let mut spans = vec![Span::styled(
        field.display_value(),
        Style::default().fg(theme.fg),
    )];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", label)),
    );
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_round_trip() {
        let mut field = TextField::new("form.email");
        field.insert('a');
        field.insert('b');
        assert_eq!(field.value, "ab");
        field.backspace();
        assert_eq!(field.value, "a");
        field.clear();
        assert!(field.value.is_empty());
        // Backspace on empty is a no-op
        field.backspace();
        assert!(field.value.is_empty());
    }

    #[test]
    fn masked_field_hides_value() {
        let mut field = TextField::masked("form.password");
        field.insert('s');
        field.insert('e');
        field.insert('t');
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.value, "set");
    }
}
