//! Terminal commands
//!
//! Commands about the terminal itself: help, theme, clock, clear, open.

use chrono::Local;

use crate::clock;
use crate::text::{Line, TextStyle};

use super::super::{CmdResult, ShellState, Theme};
use super::COMMANDS;

pub fn cmd_help(_state: &ShellState, _args: &[String]) -> CmdResult {
    let mut lines = vec![Line::plain("Available commands:")];
    for spec in COMMANDS {
        let mut line = Line::new();
        line.push(format!("  {:<22}", spec.usage), TextStyle::Bold);
        line.push(spec.summary, TextStyle::Plain);
        lines.push(line);
    }
    CmdResult::Output(lines)
}

pub fn cmd_theme(state: &ShellState, args: &[String]) -> CmdResult {
    let choice = args.first().map(|s| s.as_str()).unwrap_or("");
    match Theme::from_name(choice) {
        Some(theme) if theme == state.theme => {
            CmdResult::Output(vec![Line::plain(format!("Theme is already {}.", theme.as_str()))])
        }
        Some(theme) => CmdResult::SetTheme(theme),
        None => CmdResult::Error("Usage: theme cyber | theme matrix".into()),
    }
}

pub fn cmd_date(_state: &ShellState, _args: &[String]) -> CmdResult {
    let today = Local::now().format("%a %b %d %Y").to_string();
    CmdResult::Output(vec![Line::plain(today)])
}

pub fn cmd_time(_state: &ShellState, _args: &[String]) -> CmdResult {
    let now = Local::now().format("%H:%M:%S").to_string();
    CmdResult::Output(vec![Line::plain(now)])
}

pub fn cmd_uptime(_state: &ShellState, _args: &[String]) -> CmdResult {
    let uptime = clock::format_uptime(clock::uptime_secs());
    CmdResult::Output(vec![Line::plain(format!("up {}", uptime))])
}

pub fn cmd_clear(_state: &ShellState, _args: &[String]) -> CmdResult {
    CmdResult::Clear
}

pub fn cmd_open(_state: &ShellState, args: &[String]) -> CmdResult {
    let url = args.join(" ");
    if is_http_url(&url) {
        CmdResult::OpenUrl(url)
    } else {
        CmdResult::Error("Usage: open https://example.com".into())
    }
}

/// Only http(s) links may leave the page.
fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_accepted() {
        assert!(is_http_url("https://example.com"));
        assert!(is_http_url("HTTP://EXAMPLE.COM/path"));
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("file:///etc/passwd"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(""));
    }
}
