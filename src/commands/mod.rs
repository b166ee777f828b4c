// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User-facing commands: parsing a command line, executing it, and
//! presenting the outcome.

pub mod find;

use anyhow::{Result, bail};

use crate::models::person::Person;

pub use find::FindCommand;

/// Offset between list positions and the 1-based indices shown to users.
const DISPLAYED_INDEX_OFFSET: usize = 1;

/// Outcome of a command: feedback text and the persons it selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult<'a> {
    pub feedback: String,
    pub persons: Vec<&'a Person>,
}

impl<'a> CommandResult<'a> {
    pub fn new(feedback: String, persons: Vec<&'a Person>) -> Self {
        Self { feedback, persons }
    }
}

/// Summary line for a listing of `count` persons.
pub fn persons_listed_summary(count: usize) -> String {
    format!("{count} persons listed!")
}

/// Message for arguments that do not fit a command's usage.
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format!\n{usage}")
}

/// Parse a full command line such as `find alice bob`.
///
/// Only `find` is understood; anything else is rejected with the usage text.
pub fn parse_command(line: &str) -> Result<FindCommand> {
    let line = line.trim();
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (line, ""),
    };

    if word != find::COMMAND_WORD {
        bail!("Unknown command: {:?}\n{}", word, find::MESSAGE_USAGE);
    }
    find::parse_find_args(args)
}

/// Render persons as a 1-based numbered list, one per line, private fields hidden.
pub fn format_person_list(persons: &[&Person]) -> String {
    persons
        .iter()
        .enumerate()
        .map(|(idx, person)| {
            format!(
                "{}. {}",
                idx + DISPLAYED_INDEX_OFFSET,
                person.as_text_hide_private()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
