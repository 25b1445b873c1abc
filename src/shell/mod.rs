//! Shell - the command interpreter behind the terminal
//!
//! A small content-navigation shell:
//! - Tokenizer with quote handling
//! - Command registry with aliases
//! - Session state (scrollback, history, completion, theme)
//!
//! No pipes, redirection or environment variables; commands only read the
//! content catalog and return printable lines or a UI request.

pub mod parser;
pub mod programs;
pub mod registry;
pub mod session;

pub use parser::{Invocation, ParseError, parse, tokenize};
pub use registry::{CommandFn, CommandRegistry, CommandSpec};
pub use session::{Effect, LineKind, Session, TermLine};

use crate::text::Line;

/// Page theme, toggled by the `theme` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Cyber,
    Matrix,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Cyber => "cyber",
            Theme::Matrix => "matrix",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cyber" => Some(Theme::Cyber),
            "matrix" => Some(Theme::Matrix),
            _ => None,
        }
    }
}

/// State the commands can see.
#[derive(Debug, Default)]
pub struct ShellState {
    pub theme: Theme,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of running a command. Requests (clear, theme, open) are carried
/// back to the session instead of being performed in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdResult {
    /// Lines to append to the scrollback
    Output(Vec<Line>),
    /// Error message
    Error(String),
    /// Request to empty the scrollback
    Clear,
    /// Request to switch the page theme
    SetTheme(Theme),
    /// Request to open a URL in a new tab
    OpenUrl(String),
}
