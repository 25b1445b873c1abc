//! Content commands
//!
//! Everything here is a read of the content catalog formatted into styled
//! lines. No state is touched.

use crate::content;
use crate::markdown;
use crate::text::{Line, TextStyle};

use super::super::{CmdResult, ShellState};

const BANNER: &[&str] = &[
    r" █████╗ ██╗     ███████╗██╗  ██╗",
    r"██╔══██╗██║     ██╔════╝╚██╗██╔╝",
    r"███████║██║     █████╗   ╚███╔╝ ",
    r"██╔══██║██║     ██╔══╝   ██╔██╗ ",
    r"██║  ██║███████╗███████╗██╔╝ ██╗",
    r"╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝",
];

pub fn cmd_banner(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let mut lines: Vec<Line> = BANNER
            .iter()
            .map(|row| Line::styled(*row, TextStyle::Bold))
            .collect();
        lines.push(Line::plain(format!(
            ":: {} - {}",
            c.profile.name, c.profile.role
        )));
        lines.push(Line::new());
        CmdResult::Output(lines)
    })
}

pub fn cmd_about(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let mut lines = vec![Line::plain(format!(
            "{} - {}",
            c.profile.name, c.profile.role
        ))];
        if let Some(motto) = &c.profile.motto {
            lines.push(Line::plain(format!("\"{}\"", motto)));
        }
        lines.push(Line::new());
        CmdResult::Output(lines)
    })
}

pub fn cmd_resume(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let mut lines = vec![Line::styled("== Education ==", TextStyle::Heading)];
        for entry in &c.resume.education {
            lines.push(Line::plain(format!("- {}", entry)));
        }

        lines.push(Line::new());
        lines.push(Line::styled("== Skills ==", TextStyle::Heading));
        lines.push(Line::plain(format!(
            "Skills: {}",
            c.resume.skills.join(", ")
        )));

        lines.push(Line::new());
        lines.push(Line::styled("== Experience ==", TextStyle::Heading));
        for job in &c.resume.experience {
            let mut head = Line::new();
            head.push("\u{2022} ", TextStyle::Plain);
            head.push(job.role.clone(), TextStyle::Bold);
            head.push(format!(" @ {} ({})", job.company, job.years), TextStyle::Plain);
            lines.push(head);
            for bullet in &job.bullets {
                lines.push(Line::plain(format!("   - {}", bullet)));
            }
        }

        CmdResult::Output(lines)
    })
}

pub fn cmd_services(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let lines = c
            .services
            .iter()
            .map(|s| {
                let mut line = Line::new();
                line.push("\u{2022} ", TextStyle::Plain);
                line.push(s.name.clone(), TextStyle::Bold);
                line.push(format!(" - {}", s.desc), TextStyle::Plain);
                line
            })
            .collect();
        CmdResult::Output(lines)
    })
}

pub fn cmd_projects(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let lines = c
            .projects
            .iter()
            .map(|p| {
                let mut line = Line::new();
                line.push("\u{2022} ", TextStyle::Plain);
                line.push(p.title.clone(), TextStyle::Bold);
                line.push(format!(" - {} [", p.desc), TextStyle::Plain);
                line.push_link("repo", p.repo.clone());
                line.push("]", TextStyle::Plain);
                line
            })
            .collect();
        CmdResult::Output(lines)
    })
}

pub fn cmd_blogs(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let lines = c
            .blogs_by_date()
            .iter()
            .map(|b| {
                let mut line = Line::new();
                line.push(format!("{}. ", b.id), TextStyle::Plain);
                line.push(b.title.clone(), TextStyle::Bold);
                line.push(" - ", TextStyle::Plain);
                line.push(b.date.clone(), TextStyle::Dim);
                line.push(format!("  [{}]", b.tags.join(", ")), TextStyle::Plain);
                line
            })
            .collect();
        CmdResult::Output(lines)
    })
}

pub fn cmd_cat(_state: &ShellState, args: &[String]) -> CmdResult {
    match args.first().map(|s| s.as_str()) {
        Some("blog") => cat_blog(&args[1..]),
        Some("project") => cat_project(&args[1..]),
        _ => CmdResult::Error("Usage: cat blog <id> | cat project <name>".into()),
    }
}

fn cat_blog(rest: &[String]) -> CmdResult {
    let raw = rest.first().map(|s| s.as_str()).unwrap_or("");
    let post = raw
        .parse::<u32>()
        .ok()
        .and_then(|id| content::with(|c| c.blog(id).cloned()));

    match post {
        Some(post) => CmdResult::Output(markdown::render(&post.content)),
        None => CmdResult::Error(format!("No blog found with id {}", raw)),
    }
}

fn cat_project(rest: &[String]) -> CmdResult {
    let name = rest.join(" ");
    content::with(|c| match c.project(&name) {
        Some(p) => {
            let mut lines = vec![Line::styled(p.title.clone(), TextStyle::Bold)];
            match &p.details {
                Some(details) => lines.extend(markdown::render(details.trim())),
                None => lines.push(Line::plain(p.desc.clone())),
            }
            let mut repo = Line::new();
            repo.push("Repo: ", TextStyle::Plain);
            repo.push_link(p.repo.clone(), p.repo.clone());
            lines.push(repo);
            CmdResult::Output(lines)
        }
        None => CmdResult::Error(format!("No project found with name '{}'", name)),
    })
}

pub fn cmd_ls(_state: &ShellState, _args: &[String]) -> CmdResult {
    let mut lines = vec![Line::plain("Sections:")];
    for section in ["resume", "services", "projects", "blogs", "contact"] {
        lines.push(Line::plain(format!("  {}", section)));
    }
    lines.push(Line::new());
    CmdResult::Output(lines)
}

pub fn cmd_social(_state: &ShellState, _args: &[String]) -> CmdResult {
    content::with(|c| {
        let mut lines = Vec::new();
        if let Some(email) = &c.profile.email {
            let mut line = Line::new();
            line.push("Email: ", TextStyle::Plain);
            line.push_link(email.clone(), format!("mailto:{}", email));
            lines.push(line);
        }
        for social in &c.profile.socials {
            let mut line = Line::new();
            line.push(format!("{}: ", social.label), TextStyle::Plain);
            line.push_link(social.url.clone(), social.url.clone());
            lines.push(line);
        }
        if lines.is_empty() {
            lines.push(Line::plain("No socials configured."));
        }
        CmdResult::Output(lines)
    })
}
