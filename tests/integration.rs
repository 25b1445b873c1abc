//! Integration tests for the termfolio shell
//!
//! Drives whole sessions the way the browser layer does: submit a line,
//! read back the scrollback and effects.

use termfolio::shell::{Effect, LineKind, Session, Theme};

/// Helper to run a command and get the lines it appended (echo included)
fn run_cmd(session: &mut Session, cmd: &str) -> Vec<String> {
    let before = session.lines().count();
    session.submit(cmd);
    session
        .lines()
        .skip(before)
        .map(|l| l.line.text())
        .collect()
}

fn output_after(session: &mut Session, cmd: &str) -> Vec<String> {
    // Drop the echoed input line
    run_cmd(session, cmd).into_iter().skip(1).collect()
}

// ============================================================================
// Basic dispatch
// ============================================================================

#[test]
fn test_welcome_banner_on_start() {
    let session = Session::new();
    let first = session.lines().next().expect("welcome line");
    assert!(first.line.text().contains("terminal"));
}

#[test]
fn test_input_is_echoed_with_prompt() {
    let mut session = Session::new();
    let lines = run_cmd(&mut session, "help");
    assert!(lines[0].ends_with("help"));
    assert!(lines[0].contains("@"));
    assert_eq!(
        session
            .lines()
            .filter(|l| l.kind == LineKind::Input)
            .count(),
        1
    );
}

#[test]
fn test_blank_input_is_ignored() {
    let mut session = Session::new();
    let lines = run_cmd(&mut session, "   ");
    assert!(lines.is_empty());
}

#[test]
fn test_unknown_command() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "sudo rm -rf /");
    assert_eq!(lines, vec!["Command not found: sudo. Try 'help'."]);
}

#[test]
fn test_unknown_command_is_error_styled() {
    let mut session = Session::new();
    session.submit("nope");
    assert!(session.lines().any(|l| l.kind == LineKind::Error));
}

#[test]
fn test_command_lookup_is_case_insensitive() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "HELP");
    assert!(lines[0].contains("Available commands"));
}

#[test]
fn test_unterminated_quote_reports_parse_error() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat \"blog");
    assert!(lines[0].contains("parse error"));
}

// ============================================================================
// Content commands
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let mut session = Session::new();
    let text = output_after(&mut session, "help").join("\n");
    for name in ["projects", "blogs", "resume", "theme", "clear"] {
        assert!(text.contains(name), "help is missing {}", name);
    }
}

#[test]
fn test_help_aliases() {
    let mut session = Session::new();
    let direct = output_after(&mut session, "help");
    let via_alias = output_after(&mut session, "?");
    assert_eq!(direct, via_alias);
}

#[test]
fn test_whoami_matches_about() {
    let mut session = Session::new();
    let about = output_after(&mut session, "about");
    let whoami = output_after(&mut session, "whoami");
    assert_eq!(about, whoami);
}

#[test]
fn test_banner_names_the_author() {
    let mut session = Session::new();
    let text = output_after(&mut session, "banner").join("\n");
    assert!(text.contains("::"));
}

#[test]
fn test_resume_sections() {
    let mut session = Session::new();
    let text = output_after(&mut session, "resume").join("\n");
    assert!(text.contains("== Education =="));
    assert!(text.contains("== Skills =="));
    assert!(text.contains("== Experience =="));
    assert!(text.contains("Skills: "));
}

#[test]
fn test_services_are_bulleted() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "services");
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.starts_with('\u{2022}')));
}

#[test]
fn test_projects_carry_repo_links() {
    let mut session = Session::new();
    let before = session.lines().count();
    session.submit("projects");
    let has_link = session
        .lines()
        .skip(before)
        .flat_map(|l| l.line.spans.iter())
        .any(|s| {
            s.link
                .as_deref()
                .map(|u| u.starts_with("https://"))
                .unwrap_or(false)
        });
    assert!(has_link);
}

#[test]
fn test_blogs_listed_newest_first() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "blogs");
    assert!(lines.len() >= 2);
    // Newest post (2025-02-01, id 2) sorts before id 1
    assert!(lines[0].starts_with("2. "));
    assert!(lines[1].starts_with("1. "));
}

#[test]
fn test_blog_alias() {
    let mut session = Session::new();
    let blogs = output_after(&mut session, "blogs");
    let posts = output_after(&mut session, "posts");
    assert_eq!(blogs, posts);
}

#[test]
fn test_cat_blog_renders_markdown() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat blog 1");
    assert_eq!(lines[0], "Pivoting Shells: From Foothold to Root");
    assert!(lines.iter().any(|l| l.starts_with("1. ")));
}

#[test]
fn test_cat_blog_unknown_id() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat blog 99");
    assert_eq!(lines, vec!["No blog found with id 99"]);
}

#[test]
fn test_cat_blog_non_numeric_id() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat blog foo");
    assert_eq!(lines, vec!["No blog found with id foo"]);
}

#[test]
fn test_cat_project_case_insensitive() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat project ghostdoor");
    assert_eq!(lines[0], "GhostDoor");
    assert!(lines.iter().any(|l| l.starts_with("Repo: ")));
}

#[test]
fn test_cat_project_unknown_name() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat project warpdrive");
    assert_eq!(lines, vec!["No project found with name 'warpdrive'"]);
}

#[test]
fn test_cat_usage() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "cat");
    assert_eq!(lines, vec!["Usage: cat blog <id> | cat project <name>"]);
}

#[test]
fn test_ls_lists_sections() {
    let mut session = Session::new();
    let text = output_after(&mut session, "ls").join("\n");
    for section in ["resume", "services", "projects", "blogs", "contact"] {
        assert!(text.contains(section));
    }
}

#[test]
fn test_social_has_links() {
    let mut session = Session::new();
    let before = session.lines().count();
    session.submit("social");
    let links: Vec<String> = session
        .lines()
        .skip(before)
        .flat_map(|l| l.line.spans.iter())
        .filter_map(|s| s.link.clone())
        .collect();
    assert!(!links.is_empty());
    assert!(links.iter().any(|u| u.starts_with("mailto:")));
}

#[test]
fn test_contact_aliases_social() {
    let mut session = Session::new();
    let social = output_after(&mut session, "social");
    let contact = output_after(&mut session, "contact");
    assert_eq!(social, contact);
}

// ============================================================================
// Terminal commands
// ============================================================================

#[test]
fn test_theme_switch() {
    let mut session = Session::new();
    assert_eq!(session.theme(), Theme::Cyber);

    let lines = output_after(&mut session, "theme matrix");
    assert_eq!(lines, vec!["Theme set to matrix."]);
    assert_eq!(session.theme(), Theme::Matrix);
    assert_eq!(
        session.take_effects(),
        vec![Effect::ThemeChanged(Theme::Matrix)]
    );
}

#[test]
fn test_theme_usage_on_bad_choice() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "theme neon");
    assert_eq!(lines, vec!["Usage: theme cyber | theme matrix"]);
    assert_eq!(session.theme(), Theme::Cyber);
    assert!(session.take_effects().is_empty());
}

#[test]
fn test_date_and_time_print_something() {
    let mut session = Session::new();
    assert!(!output_after(&mut session, "date")[0].is_empty());
    let time = &output_after(&mut session, "time")[0];
    assert_eq!(time.len(), 8); // HH:MM:SS
}

#[test]
fn test_uptime_counts_days() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "uptime");
    assert!(lines[0].starts_with("up "));
    assert!(lines[0].contains("days"));
}

#[test]
fn test_open_requests_new_tab() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "open https://example.com");
    assert_eq!(lines, vec!["Opening https://example.com..."]);
    assert_eq!(
        session.take_effects(),
        vec![Effect::OpenUrl("https://example.com".into())]
    );
}

#[test]
fn test_open_rejects_non_http() {
    let mut session = Session::new();
    let lines = output_after(&mut session, "open javascript:alert(1)");
    assert_eq!(lines, vec!["Usage: open https://example.com"]);
    assert!(session.take_effects().is_empty());
}

#[test]
fn test_clear_empties_scrollback() {
    let mut session = Session::new();
    session.submit("help");
    session.submit("clear");
    assert_eq!(session.lines().count(), 0);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_navigation() {
    let mut session = Session::new();
    session.submit("help");
    session.submit("projects");

    assert_eq!(session.history_prev("dra").as_deref(), Some("projects"));
    assert_eq!(session.history_prev("").as_deref(), Some("help"));
    // Past the oldest entry stays put
    assert_eq!(session.history_prev(""), None);

    assert_eq!(session.history_next().as_deref(), Some("projects"));
    // Walking down past the newest restores the saved draft
    assert_eq!(session.history_next().as_deref(), Some("dra"));
    assert_eq!(session.history_next(), None);
}

#[test]
fn test_history_collapses_duplicates() {
    let mut session = Session::new();
    session.submit("help");
    session.submit("help");
    assert_eq!(session.history_prev("").as_deref(), Some("help"));
    assert_eq!(session.history_prev(""), None);
}

#[test]
fn test_history_empty() {
    let mut session = Session::new();
    assert_eq!(session.history_prev(""), None);
    assert_eq!(session.history_next(), None);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_complete_unique_command() {
    let mut session = Session::new();
    assert_eq!(session.complete("pro").as_deref(), Some("projects "));
}

#[test]
fn test_complete_multiple_candidates_are_printed() {
    let mut session = Session::new();
    let before = session.lines().count();
    assert_eq!(session.complete("b"), None);
    let printed: Vec<String> = session
        .lines()
        .skip(before)
        .map(|l| l.line.text())
        .collect();
    assert_eq!(printed.len(), 1);
    assert!(printed[0].contains("banner"));
    assert!(printed[0].contains("blogs"));
}

#[test]
fn test_complete_no_match() {
    let mut session = Session::new();
    let before = session.lines().count();
    assert_eq!(session.complete("zzz"), None);
    assert_eq!(session.lines().count(), before);
}

#[test]
fn test_complete_project_titles() {
    let mut session = Session::new();
    assert_eq!(
        session.complete("cat project gho").as_deref(),
        Some("cat project GhostDoor")
    );
}

#[test]
fn test_complete_empty_input() {
    let mut session = Session::new();
    assert_eq!(session.complete(""), None);
}

// ============================================================================
// Scrollback bounds
// ============================================================================

#[test]
fn test_scrollback_is_capped() {
    let mut session = Session::new();
    for _ in 0..600 {
        session.submit("about");
    }
    assert!(session.lines().count() <= 1000);
}
