//! Terminal session
//!
//! Owns the scrollback, command history, completion and dispatch. The web
//! layer feeds it submitted lines and key-driven requests and renders
//! whatever it holds; tests drive it the same way without a browser.

use std::collections::VecDeque;

use crate::content;
use crate::text::Line;

use super::registry::CommandRegistry;
use super::{CmdResult, ParseError, ShellState, Theme, parser};

/// Maximum lines kept in the scrollback. Oldest lines drop first.
const MAX_LINES: usize = 1000;

/// Maximum command history entries. Stored newest-first.
const MAX_HISTORY: usize = 100;

/// How a scrollback line came to be, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of what the user typed
    Input,
    Output,
    Error,
}

/// A line in the scrollback
#[derive(Debug, Clone)]
pub struct TermLine {
    pub line: Line,
    pub kind: LineKind,
}

impl TermLine {
    pub fn input(line: impl Into<Line>) -> Self {
        Self {
            line: line.into(),
            kind: LineKind::Input,
        }
    }

    pub fn output(line: impl Into<Line>) -> Self {
        Self {
            line: line.into(),
            kind: LineKind::Output,
        }
    }

    pub fn error(line: impl Into<Line>) -> Self {
        Self {
            line: line.into(),
            kind: LineKind::Error,
        }
    }
}

/// A UI request produced by a command, performed by the web layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ThemeChanged(Theme),
    OpenUrl(String),
}

/// Terminal session state
pub struct Session {
    registry: CommandRegistry,
    state: ShellState,

    /// Output buffer (scrollback)
    lines: VecDeque<TermLine>,

    /// Command history, newest first
    history: VecDeque<String>,
    /// Position in history while navigating
    history_pos: Option<usize>,
    /// Input saved when navigation started
    saved_input: String,

    /// Pending UI requests
    effects: Vec<Effect>,

    prompt: String,
}

impl Session {
    pub fn new() -> Self {
        let (prompt, name) = content::with(|c| {
            (
                format!("{}@{}:~$ ", c.profile.prompt_user, c.profile.prompt_host),
                c.profile.name.clone(),
            )
        });

        let mut session = Self {
            registry: CommandRegistry::new(),
            state: ShellState::new(),
            lines: VecDeque::with_capacity(MAX_LINES),
            history: VecDeque::with_capacity(MAX_HISTORY),
            history_pos: None,
            saved_input: String::new(),
            effects: Vec::new(),
            prompt,
        };

        session.print(format!("Welcome to {}'s terminal.", name));
        session.print("Type 'help' to explore - try 'projects', 'blogs', 'resume'.");
        session.print("");
        session
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn lines(&self) -> impl Iterator<Item = &TermLine> {
        self.lines.iter()
    }

    /// Drain pending UI requests.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Append an output line.
    pub fn print(&mut self, line: impl Into<Line>) {
        self.push_line(TermLine::output(line));
    }

    fn print_error(&mut self, text: &str) {
        self.push_line(TermLine::error(Line::plain(text)));
    }

    fn push_line(&mut self, line: TermLine) {
        self.lines.push_back(line);
        while self.lines.len() > MAX_LINES {
            self.lines.pop_front();
        }
    }

    /// Submit a line of input: echo it, record history, dispatch.
    pub fn submit(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }

        self.push_line(TermLine::input(format!("{}{}", self.prompt, raw)));
        self.record_history(raw);
        self.history_pos = None;
        self.saved_input.clear();

        match parser::parse(raw) {
            Ok(invocation) => self.dispatch(invocation),
            Err(ParseError::EmptyCommand) => {}
            Err(e) => self.print_error(&format!("parse error: {}", e)),
        }
    }

    fn dispatch(&mut self, invocation: parser::Invocation) {
        let run = match self.registry.resolve(&invocation.program) {
            Some(spec) => spec.run,
            None => {
                self.print_error(&format!(
                    "Command not found: {}. Try 'help'.",
                    invocation.program
                ));
                return;
            }
        };

        match run(&self.state, &invocation.args) {
            CmdResult::Output(lines) => {
                for line in lines {
                    self.print(line);
                }
            }
            CmdResult::Error(message) => self.print_error(&message),
            CmdResult::Clear => self.lines.clear(),
            CmdResult::SetTheme(theme) => {
                self.state.theme = theme;
                self.print(format!("Theme set to {}.", theme.as_str()));
                self.effects.push(Effect::ThemeChanged(theme));
            }
            CmdResult::OpenUrl(url) => {
                self.print(format!("Opening {}...", url));
                self.effects.push(Effect::OpenUrl(url));
            }
        }
    }

    fn record_history(&mut self, raw: &str) {
        // Collapse consecutive duplicates
        if self.history.front().map(|s| s.as_str()) == Some(raw) {
            return;
        }
        self.history.push_front(raw.to_string());
        while self.history.len() > MAX_HISTORY {
            self.history.pop_back();
        }
    }

    /// Walk to the previous (older) history entry. `current` is saved so it
    /// can be restored when walking back down.
    pub fn history_prev(&mut self, current: &str) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }

        match self.history_pos {
            None => {
                self.saved_input = current.to_string();
                self.history_pos = Some(0);
                Some(self.history[0].clone())
            }
            Some(pos) if pos + 1 < self.history.len() => {
                self.history_pos = Some(pos + 1);
                Some(self.history[pos + 1].clone())
            }
            Some(_) => None,
        }
    }

    /// Walk to the next (newer) history entry, restoring the saved input
    /// past the newest one.
    pub fn history_next(&mut self) -> Option<String> {
        match self.history_pos {
            Some(0) => {
                self.history_pos = None;
                Some(std::mem::take(&mut self.saved_input))
            }
            Some(pos) => {
                self.history_pos = Some(pos - 1);
                Some(self.history[pos - 1].clone())
            }
            None => None,
        }
    }

    /// Tab completion. A unique match returns the completed input; multiple
    /// candidates are printed to the scrollback instead.
    pub fn complete(&mut self, current: &str) -> Option<String> {
        let parts: Vec<&str> = current.split_whitespace().collect();

        // `cat project <prefix>` completes over project titles
        if parts.len() >= 2 && parts[0] == "cat" && parts[1] == "project" {
            let prefix = parts[2..].join(" ").to_lowercase();
            let matches: Vec<String> = content::with(|c| {
                c.project_titles()
                    .iter()
                    .filter(|t| t.to_lowercase().starts_with(&prefix))
                    .map(|t| t.to_string())
                    .collect()
            });
            return match matches.len() {
                0 => None,
                1 => Some(format!("cat project {}", matches[0])),
                _ => {
                    self.print(matches.join("  "));
                    None
                }
            };
        }

        // First word completes over command names
        if parts.len() <= 1 && !current.ends_with(' ') {
            let prefix = parts.first().copied().unwrap_or("").to_lowercase();
            if prefix.is_empty() {
                return None;
            }
            let matches: Vec<&str> = self
                .registry
                .names()
                .into_iter()
                .filter(|name| name.starts_with(&prefix))
                .collect();
            return match matches.len() {
                0 => None,
                1 => Some(format!("{} ", matches[0])),
                _ => {
                    self.print(matches.join("  "));
                    None
                }
            };
        }

        None
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
