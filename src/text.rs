//! Styled text model shared by commands and the markdown renderer.
//!
//! Commands produce `Line`s of styled `Span`s instead of markup strings;
//! the web layer turns spans into DOM nodes, tests read them directly.

/// Visual style of a span. Mapped to CSS classes by the web layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Bold,
    Emphasis,
    Heading,
    Code,
    Dim,
}

/// A run of text with one style, optionally acting as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
    /// Target URL if this span is a link
    pub link: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::Plain)
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            style: TextStyle::Plain,
            link: Some(url.into()),
        }
    }
}

/// One output line: a sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            spans: vec![Span::styled(text, style)],
        }
    }

    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        self.spans.push(Span::styled(text, style));
    }

    pub fn push_span(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn push_link(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.spans.push(Span::link(label, url));
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Concatenated text of all spans, styling dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::plain(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::plain(text)
    }
}
