//! Command registry
//!
//! One static table of command specs drives dispatch, `help`, and tab
//! completion, so the three can never disagree about the command set.

use super::programs;
use super::{CmdResult, ShellState};
use std::collections::HashMap;

/// A command handler
pub type CommandFn = fn(&ShellState, &[String]) -> CmdResult;

/// A registered command
pub struct CommandSpec {
    pub name: &'static str,
    /// Synopsis shown by `help`, e.g. `cat blog <id>`
    pub usage: &'static str,
    pub summary: &'static str,
    pub run: CommandFn,
}

/// Registry of available commands
pub struct CommandRegistry {
    commands: HashMap<&'static str, &'static CommandSpec>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands = HashMap::new();
        for spec in programs::COMMANDS {
            commands.insert(spec.name, spec);
        }

        let mut aliases = HashMap::new();
        for (alias, target) in programs::ALIASES {
            debug_assert!(commands.contains_key(target), "alias target missing");
            aliases.insert(*alias, *target);
        }

        Self { commands, aliases }
    }

    /// Look up a command word, case-insensitively, following aliases.
    pub fn resolve(&self, word: &str) -> Option<&'static CommandSpec> {
        let lower = word.to_ascii_lowercase();
        match self.aliases.get(lower.as_str()) {
            Some(target) => self.commands.get(target).copied(),
            None => self.commands.get(lower.as_str()).copied(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).is_some()
    }

    /// Canonical command names, sorted. Drives completion.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_names() {
        let reg = CommandRegistry::new();
        assert!(reg.contains("help"));
        assert!(reg.contains("projects"));
        assert!(reg.contains("cat"));
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.resolve("HELP").map(|s| s.name), Some("help"));
        assert_eq!(reg.resolve("Projects").map(|s| s.name), Some("projects"));
    }

    #[test]
    fn aliases_resolve_to_targets() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.resolve("?").map(|s| s.name), Some("help"));
        assert_eq!(reg.resolve("posts").map(|s| s.name), Some("blogs"));
        assert_eq!(reg.resolve("proj").map(|s| s.name), Some("projects"));
        assert_eq!(reg.resolve("contact").map(|s| s.name), Some("social"));
    }

    #[test]
    fn unknown_word_is_none() {
        let reg = CommandRegistry::new();
        assert!(reg.resolve("sudo").is_none());
    }

    #[test]
    fn names_are_sorted_and_canonical() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(!names.contains(&"posts"), "aliases are not canonical names");
    }
}
