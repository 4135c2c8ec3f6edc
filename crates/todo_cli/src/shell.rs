//! Line parser for the interactive shell.

use todo_core::{Intent, TodoId};

pub const HELP: &str =
    "commands: add <title> | search [term] | toggle <id> | delete <id> | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Intent(Intent),
    Help,
    Quit,
    Empty,
}

/// Parses one input line. Errors are user-facing messages.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(ShellCommand::Empty);
    }

    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Ok(ShellCommand::Intent(Intent::Add(rest.to_string()))),
        // Search keeps inner whitespace; an empty rest clears the filter.
        "search" | "s" => Ok(ShellCommand::Intent(Intent::Search(rest.to_string()))),
        "toggle" | "t" => parse_id(rest).map(|id| ShellCommand::Intent(Intent::Toggle(id))),
        "delete" | "d" | "rm" => parse_id(rest).map(|id| ShellCommand::Intent(Intent::Delete(id))),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_id(raw: &str) -> Result<TodoId, String> {
    let raw = raw.trim();
    raw.parse::<TodoId>()
        .map_err(|_| format!("expected a numeric todo id, got `{raw}`"))
}
