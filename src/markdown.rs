//! Minimal markdown renderer
//!
//! Turns blog bodies and project details into styled terminal lines.
//! Headings, emphasis, lists, links, inline code and fenced blocks are
//! enough for the content this site carries; HTML, images and tables are
//! ignored.

use crate::text::{Line, Span, TextStyle};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render markdown into styled lines.
pub fn render(text: &str) -> Vec<Line> {
    let parser = Parser::new_ext(text, Options::empty());
    let mut lines: Vec<Line> = vec![Line::new()];

    // Style stack for nested formatting
    let mut style_stack: Vec<TextStyle> = vec![TextStyle::Plain];
    // One entry per open list: next ordinal for ordered lists, None for bullets
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut link_url: Option<String> = None;
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Strong => style_stack.push(TextStyle::Bold),
                Tag::Emphasis => style_stack.push(TextStyle::Emphasis),
                Tag::Heading { .. } => style_stack.push(TextStyle::Heading),
                Tag::Link { dest_url, .. } => {
                    link_url = Some(dest_url.to_string());
                }
                Tag::List(start) => list_stack.push(start),
                Tag::Item => {
                    start_fresh_line(&mut lines);
                    match list_stack.last_mut() {
                        Some(Some(n)) => {
                            current(&mut lines).push(format!("{}. ", n), TextStyle::Plain);
                            *n += 1;
                        }
                        _ => current(&mut lines).push("\u{2022} ", TextStyle::Plain),
                    }
                }
                Tag::Paragraph => {
                    if lines.iter().any(|l| !l.is_empty()) {
                        lines.push(Line::new());
                    }
                }
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                    start_fresh_line(&mut lines);
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Heading(_) => {
                    style_stack.pop();
                }
                TagEnd::Link => {
                    link_url = None;
                }
                TagEnd::List(_) => {
                    list_stack.pop();
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    lines.push(Line::new());
                }
                TagEnd::Paragraph => {
                    lines.push(Line::new());
                }
                _ => {}
            },
            Event::Text(text) => {
                let style = if in_code_block {
                    TextStyle::Code
                } else {
                    *style_stack.last().unwrap_or(&TextStyle::Plain)
                };
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Line::new());
                    }
                    if !part.is_empty() {
                        current(&mut lines).push_span(Span {
                            text: part.to_string(),
                            style,
                            link: link_url.clone(),
                        });
                    }
                }
            }
            Event::Code(code) => {
                current(&mut lines).push(format!("`{}`", code), TextStyle::Code);
            }
            Event::SoftBreak => {
                current(&mut lines).push(" ", TextStyle::Plain);
            }
            Event::HardBreak => {
                lines.push(Line::new());
            }
            Event::Rule => {
                lines.push(Line::new());
                current(&mut lines).push("\u{2500}".repeat(40), TextStyle::Dim);
                lines.push(Line::new());
            }
            _ => {}
        }
    }

    while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
        lines.pop();
    }

    lines
}

/// Push a new line unless the current one is still empty.
fn start_fresh_line(lines: &mut Vec<Line>) {
    if !lines.last().map(|l| l.is_empty()).unwrap_or(true) {
        lines.push(Line::new());
    }
}

fn current(lines: &mut Vec<Line>) -> &mut Line {
    if lines.is_empty() {
        lines.push(Line::new());
    }
    let last = lines.len() - 1;
    &mut lines[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.text()).collect()
    }

    #[test]
    fn heading_is_styled() {
        let lines = render("# Pivoting Shells");
        assert_eq!(lines[0].text(), "Pivoting Shells");
        assert_eq!(lines[0].spans[0].style, TextStyle::Heading);
    }

    #[test]
    fn bullet_items_get_bullets() {
        let lines = render("- one\n- two");
        let texts = texts(&lines);
        assert!(texts.contains(&"\u{2022} one".to_string()));
        assert!(texts.contains(&"\u{2022} two".to_string()));
    }

    #[test]
    fn ordered_items_keep_numbers() {
        let lines = render("1. first\n2. second\n3. third");
        let texts = texts(&lines);
        assert!(texts.contains(&"1. first".to_string()));
        assert!(texts.contains(&"3. third".to_string()));
    }

    #[test]
    fn links_carry_their_url() {
        let lines = render("see [repo](https://example.com/r)");
        let span = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.link.is_some())
            .expect("a link span");
        assert_eq!(span.text, "repo");
        assert_eq!(span.link.as_deref(), Some("https://example.com/r"));
    }

    #[test]
    fn inline_code_keeps_backticks() {
        let lines = render("run `ls` now");
        let span = lines[0]
            .spans
            .iter()
            .find(|s| s.style == TextStyle::Code)
            .expect("a code span");
        assert_eq!(span.text, "`ls`");
    }

    #[test]
    fn fenced_block_renders_as_code_lines() {
        let lines = render("```\nnc -lvnp 4444\n```");
        let span = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.text.contains("nc -lvnp"))
            .expect("code line");
        assert_eq!(span.style, TextStyle::Code);
    }

    #[test]
    fn paragraphs_are_separated() {
        let lines = render("first\n\nsecond");
        let texts = texts(&lines);
        assert!(texts.contains(&"first".to_string()));
        assert!(texts.contains(&"second".to_string()));
        assert!(texts.iter().any(|t| t.is_empty()));
    }

    #[test]
    fn strong_text_is_bold() {
        let lines = render("**loud** quiet");
        assert_eq!(lines[0].spans[0].style, TextStyle::Bold);
        assert_eq!(lines[0].spans[0].text, "loud");
    }

    #[test]
    fn no_trailing_blank_lines() {
        let lines = render("hello\n\n");
        assert!(!lines.last().unwrap().is_empty());
    }
}
