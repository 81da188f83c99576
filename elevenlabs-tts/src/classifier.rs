//! Turns a hook event into a short sentence to speak.
//!
//! Sentences describe what is happening in coarse terms. Full command lines
//! and full paths are never spoken: at most the binary name, a git
//! subcommand, or a file name.

use crate::hook::{EventKind, HookEvent, ToolRequest};

pub const FINISHED: &str = "I just finished up!";

const PACKAGE_MANAGERS: &[&str] = &["npm", "bun", "pnpm", "yarn"];
const DOCKER_TOOLS: &[&str] = &["docker", "docker-compose"];

/// Build the sentence for an event. Never fails.
pub fn classify(event: &HookEvent) -> String {
    let tool = match (&event.kind, &event.tool) {
        (EventKind::Stop, _) | (_, None) => return FINISHED.to_string(),
        (_, Some(tool)) => tool,
    };

    match tool {
        ToolRequest::Shell { command } => describe_command(command),
        ToolRequest::Write { file_path } => {
            format!("I want to create a file called {}.", file_name(file_path))
        }
        ToolRequest::Edit { file_path } => format!("I want to edit {}.", file_name(file_path)),
        ToolRequest::Other { .. } => "I need your approval.".to_string(),
    }
}

/// Prefix a sentence with "Hey <listener>, " when a listener is set.
pub fn address(listener: Option<&str>, sentence: &str) -> String {
    match listener.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Hey {name}, {sentence}"),
        None => sentence.to_string(),
    }
}

fn describe_command(command: &str) -> String {
    let mut words = command.split_whitespace();
    let binary = words.next().map(file_name).unwrap_or_default();

    match binary {
        "git" => describe_git(words.next().unwrap_or_default()),
        bin if PACKAGE_MANAGERS.contains(&bin) => {
            "I need to run a package manager command.".to_string()
        }
        "rm" => "I need to delete some files.".to_string(),
        "mkdir" => "I need to create a directory.".to_string(),
        bin if DOCKER_TOOLS.contains(&bin) => "I need to run a Docker command.".to_string(),
        bin => format!("I need to run a {bin} command."),
    }
}

fn describe_git(subcommand: &str) -> String {
    match subcommand {
        "push" => "I want to push to the remote.".to_string(),
        "commit" => "I want to make a commit.".to_string(),
        "checkout" | "switch" => "I want to switch branches.".to_string(),
        sub => format!("I need to run a git {sub} command."),
    }
}

/// Final `/`-delimited segment (e.g. /usr/bin/git -> git).
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
