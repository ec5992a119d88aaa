// Markdown rendering for blog post bodies
//
// Converts markdown into styled ratatui Lines using pulldown-cmark.
// Wrapping is left to Paragraph::wrap, so this only decides line breaks at
// block boundaries. Supports headings, paragraphs, bold/italic, inline
// code, fenced code blocks, lists, blockquotes, links and rules.

use crate::tui::theme::Theme;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render markdown into styled lines
pub fn render_markdown(markdown: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = Vec::new();

    // Inline accumulation state
    let mut inline: Vec<Span<'static>> = Vec::new();
    let mut bold = false;
    let mut italic = false;
    let mut in_quote = false;

    // Block state
    let mut in_heading = false;
    let mut heading_buf = String::new();
    let mut in_code_block = false;
    let mut code_buf = String::new();
    // Stack of (ordered, next_number) for nested lists
    let mut list_stack: Vec<(bool, u64)> = Vec::new();
    let mut item_prefix: Option<String> = None;

    // Link state
    let mut link_url: Option<String> = None;

    let options = Options::ENABLE_STRIKETHROUGH;

    let flush = |out: &mut Vec<Line<'static>>,
                 inline: &mut Vec<Span<'static>>,
                 item_prefix: &mut Option<String>,
                 in_quote: bool,
                 theme: &Theme| {
        if inline.is_empty() && item_prefix.is_none() {
            return;
        }
        let mut spans: Vec<Span<'static>> = Vec::new();
        if in_quote {
            spans.push(Span::styled(
                "│ ".to_string(),
                Style::default().fg(theme.muted),
            ));
        }
        if let Some(prefix) = item_prefix.take() {
            spans.push(Span::styled(prefix, Style::default().fg(theme.accent)));
        }
        spans.append(inline);
        out.push(Line::from(spans));
    };

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                in_heading = true;
                heading_buf.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                if !out.is_empty() {
                    out.push(Line::default());
                }
                out.push(Line::from(Span::styled(
                    heading_buf.clone(),
                    Style::default()
                        .fg(theme.title)
                        .add_modifier(Modifier::BOLD),
                )));
                out.push(Line::default());
            }

            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                in_code_block = true;
                code_buf.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                for code_line in code_buf.lines() {
                    out.push(Line::from(Span::styled(
                        format!("  {}", code_line),
                        Style::default().fg(theme.highlight),
                    )));
                }
                out.push(Line::default());
            }

            Event::Start(Tag::List(first_number)) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                list_stack.push((first_number.is_some(), first_number.unwrap_or(1)));
            }
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
                if list_stack.is_empty() {
                    out.push(Line::default());
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                let depth = list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth + 1);
                let marker = match list_stack.last_mut() {
                    Some((true, number)) => {
                        let marker = format!("{}{}. ", indent, number);
                        *number += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                item_prefix = Some(marker);
            }
            Event::End(TagEnd::Item) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
            }

            Event::Start(Tag::BlockQuote) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                in_quote = true;
            }
            Event::End(TagEnd::BlockQuote) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                in_quote = false;
                out.push(Line::default());
            }

            Event::Start(Tag::Strong) => bold = true,
            Event::End(TagEnd::Strong) => bold = false,
            Event::Start(Tag::Emphasis) => italic = true,
            Event::End(TagEnd::Emphasis) => italic = false,

            Event::Start(Tag::Link { dest_url, .. }) => {
                link_url = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = link_url.take() {
                    inline.push(Span::styled(
                        format!(" ({})", url),
                        Style::default().fg(theme.muted),
                    ));
                }
            }

            Event::Text(text) if in_code_block => code_buf.push_str(&text),
            Event::Text(text) if in_heading => heading_buf.push_str(&text),
            Event::Text(text) => {
                let mut style = Style::default().fg(theme.fg);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if italic || in_quote {
                    style = style.add_modifier(Modifier::ITALIC);
                }
                if link_url.is_some() {
                    style = style
                        .fg(theme.accent)
                        .add_modifier(Modifier::UNDERLINED);
                }
                inline.push(Span::styled(text.to_string(), style));
            }

            Event::Code(code) => {
                if in_heading {
                    heading_buf.push_str(&code);
                } else {
                    inline.push(Span::styled(
                        code.to_string(),
                        Style::default().fg(theme.highlight),
                    ));
                }
            }

            Event::SoftBreak | Event::HardBreak => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
            }

            Event::End(TagEnd::Paragraph) => {
                flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);
                if !in_quote {
                    out.push(Line::default());
                }
            }

            Event::Rule => {
                out.push(Line::from(Span::styled(
                    "────────────".to_string(),
                    Style::default().fg(theme.border),
                )));
                out.push(Line::default());
            }

            _ => {}
        }
    }

    flush(&mut out, &mut inline, &mut item_prefix, in_quote, theme);

    // Trim trailing blank lines
    while out.last().is_some_and(|line| line.spans.is_empty()) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn heading_and_paragraph() {
        let lines = render_markdown("# Title\n\nBody text here.", &Theme::dark());
        let text = plain(&lines);
        assert!(text.contains(&"Title".to_string()));
        assert!(text.contains(&"Body text here.".to_string()));
    }

    #[test]
    fn bullets_get_markers() {
        let lines = render_markdown("- first\n- second\n", &Theme::dark());
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.contains("• first")));
        assert!(text.iter().any(|l| l.contains("• second")));
    }

    #[test]
    fn ordered_lists_count_up() {
        let lines = render_markdown("1. one\n2. two\n", &Theme::dark());
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.contains("1. one")));
        assert!(text.iter().any(|l| l.contains("2. two")));
    }

    #[test]
    fn blockquote_is_prefixed() {
        let lines = render_markdown("> quoted wisdom\n", &Theme::dark());
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.starts_with("│ ")));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render_markdown("", &Theme::dark()).is_empty());
    }
}
