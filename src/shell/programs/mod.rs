//! The command set
//!
//! Split by topic: `portfolio` for content commands, `system` for everything
//! about the terminal itself. `COMMANDS` is the single source of truth; its
//! order is the order `help` prints.

pub mod portfolio;
pub mod system;

use super::registry::CommandSpec;

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "show this help",
        run: system::cmd_help,
    },
    CommandSpec {
        name: "banner",
        usage: "banner",
        summary: "show the banner",
        run: portfolio::cmd_banner,
    },
    CommandSpec {
        name: "about",
        usage: "about",
        summary: "about me",
        run: portfolio::cmd_about,
    },
    CommandSpec {
        name: "whoami",
        usage: "whoami",
        summary: "about me",
        run: portfolio::cmd_about,
    },
    CommandSpec {
        name: "resume",
        usage: "resume",
        summary: "education, skills, experience",
        run: portfolio::cmd_resume,
    },
    CommandSpec {
        name: "services",
        usage: "services",
        summary: "what I offer",
        run: portfolio::cmd_services,
    },
    CommandSpec {
        name: "projects",
        usage: "projects",
        summary: "list projects",
        run: portfolio::cmd_projects,
    },
    CommandSpec {
        name: "blogs",
        usage: "blogs",
        summary: "list blog posts",
        run: portfolio::cmd_blogs,
    },
    CommandSpec {
        name: "cat",
        usage: "cat blog <id> | cat project <name>",
        summary: "read a blog post or project",
        run: portfolio::cmd_cat,
    },
    CommandSpec {
        name: "ls",
        usage: "ls",
        summary: "list sections",
        run: portfolio::cmd_ls,
    },
    CommandSpec {
        name: "open",
        usage: "open <url>",
        summary: "open a link in a new tab",
        run: system::cmd_open,
    },
    CommandSpec {
        name: "social",
        usage: "social",
        summary: "social links",
        run: portfolio::cmd_social,
    },
    CommandSpec {
        name: "theme",
        usage: "theme <cyber|matrix>",
        summary: "switch theme",
        run: system::cmd_theme,
    },
    CommandSpec {
        name: "date",
        usage: "date",
        summary: "show the date",
        run: system::cmd_date,
    },
    CommandSpec {
        name: "time",
        usage: "time",
        summary: "show the time",
        run: system::cmd_time,
    },
    CommandSpec {
        name: "uptime",
        usage: "uptime",
        summary: "time since this site went live",
        run: system::cmd_uptime,
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        summary: "clear the screen",
        run: system::cmd_clear,
    },
];

pub static ALIASES: &[(&str, &str)] = &[
    ("?", "help"),
    ("h", "help"),
    ("blog", "blogs"),
    ("posts", "blogs"),
    ("proj", "projects"),
    ("contact", "social"),
];
