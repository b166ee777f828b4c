// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! `find` command: list persons whose name words, tags, phone, or email
//! match any of the given keywords.

use std::collections::HashSet;

use anyhow::{Result, anyhow};

use super::{CommandResult, invalid_command_format, persons_listed_summary};
use crate::logic::find::filter;
use crate::models::keywords::KeywordSet;
use crate::storage::AddressBook;

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find:\n\
    Finds all persons whose names, tags, phone numbers or emails match any of \
    the specified keywords (case-sensitive) and displays them as a list with index numbers.\n\t\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\t\
    Example: find alice bob charlie";

/// Keyword search over the whole address book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindCommand {
    keywords: KeywordSet,
}

impl FindCommand {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    /// Copy of the keywords this command searches for.
    pub fn keywords(&self) -> HashSet<String> {
        self.keywords.keywords()
    }

    /// Run the search against `book`.
    ///
    /// The feedback count always equals the number of persons returned.
    pub fn execute<'a>(&self, book: &'a AddressBook) -> CommandResult<'a> {
        let persons = filter(book.all_persons(), &self.keywords);
        CommandResult::new(persons_listed_summary(persons.len()), persons)
    }
}

/// Parse the arguments following the `find` command word.
///
/// Arguments are split on whitespace and used verbatim. Blank arguments are
/// rejected with the usage message.
pub fn parse_find_args(args: &str) -> Result<FindCommand> {
    let keywords: KeywordSet = args.split_whitespace().collect();
    if keywords.is_empty() {
        return Err(anyhow!(invalid_command_format(MESSAGE_USAGE)));
    }
    Ok(FindCommand::new(keywords))
}

#[cfg(test)]
mod tests {
    use super::{FindCommand, MESSAGE_USAGE, parse_find_args};
    use crate::models::keywords::KeywordSet;
    use crate::models::person::{Address, Email, Name, Person, Phone, Tag};
    use crate::storage::AddressBook;

    fn book() -> AddressBook {
        let alice = Person::new(
            Name::new("Alice Tan").unwrap(),
            Phone::new("91234567", false).unwrap(),
            Email::new("alice@example.com", false).unwrap(),
            Address::new("1 Main Street", false).unwrap(),
            Vec::new(),
        );
        let bob = Person::new(
            Name::new("Bob Lee").unwrap(),
            Phone::new("98765432", false).unwrap(),
            Email::new("bob@example.com", false).unwrap(),
            Address::new("2 Side Road", false).unwrap(),
            vec![Tag::new("friend").unwrap()],
        );
        AddressBook::new(vec![alice, bob]).unwrap()
    }

    #[test]
    fn execute_reports_matches_and_count() {
        let book = book();
        let command = FindCommand::new(KeywordSet::new(["alice@example.com", "98765432"]));

        let result = command.execute(&book);

        assert_eq!(result.persons.len(), 2);
        assert_eq!(result.persons[0].name().as_str(), "Bob Lee");
        assert_eq!(result.persons[1].name().as_str(), "Alice Tan");
        assert_eq!(result.feedback, "2 persons listed!");
    }

    // No match is a normal outcome with a zero count.
    #[test]
    fn execute_without_matches_lists_zero() {
        let book = book();
        let command = FindCommand::new(KeywordSet::new(["Charlie"]));

        let result = command.execute(&book);

        assert!(result.persons.is_empty());
        assert_eq!(result.feedback, "0 persons listed!");
    }

    #[test]
    fn execute_on_empty_book_lists_zero() {
        let book = AddressBook::default();
        let command = FindCommand::new(KeywordSet::new(["Tan"]));

        assert!(command.execute(&book).persons.is_empty());
    }

    #[test]
    fn keywords_accessor_returns_copy() {
        let command = FindCommand::new(KeywordSet::new(["Tan"]));

        let mut copy = command.keywords();
        copy.clear();

        assert!(command.keywords().contains("Tan"));
    }

    #[test]
    fn parse_splits_on_whitespace() {
        let command = parse_find_args("  Tan \t friend  Tan ").unwrap();
        let keywords = command.keywords();

        assert_eq!(keywords.len(), 2);
        assert!(keywords.contains("Tan"));
        assert!(keywords.contains("friend"));
    }

    #[test]
    fn parse_rejects_blank_arguments() {
        let err = parse_find_args("   ").unwrap_err();
        let message = err.to_string();

        assert!(message.starts_with("Invalid command format!"));
        assert!(message.contains(MESSAGE_USAGE));
    }
}
