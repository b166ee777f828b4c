// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Keyword filter selecting persons by name words, tags, phone, or email.
//!
//! Responsibilities:
//! - Run four matching passes in a fixed order: name, tags, phone, email.
//! - Keep each person at most once, in the order it was first matched.
//! - Compare case-sensitively; names and tags per word/label, phone and
//!   email as whole values.

use std::collections::HashSet;

use crate::models::keywords::KeywordSet;
use crate::models::person::Person;

/// Ordered matches plus the input positions already taken.
#[derive(Debug, Default)]
struct Matches<'a> {
    persons: Vec<&'a Person>,
    taken: HashSet<usize>,
}

impl<'a> Matches<'a> {
    fn len(&self) -> usize {
        self.persons.len()
    }

    fn into_vec(self) -> Vec<&'a Person> {
        self.persons
    }
}

/// Return every person matching at least one keyword on any searched field.
///
/// Empty `persons` or empty `keywords` yield an empty result.
///
/// # Examples
///
/// ```rust,ignore
/// let found = filter(book.all_persons(), &KeywordSet::new(["Tan"]));
/// assert!(found.iter().all(|p| p.name().words().contains("Tan")));
/// ```
pub fn filter<'a>(persons: &'a [Person], keywords: &KeywordSet) -> Vec<&'a Person> {
    if persons.is_empty() || keywords.is_empty() {
        return Vec::new();
    }

    let matches = name_pass(persons, keywords, Matches::default());
    let after_name = matches.len();
    let matches = tag_pass(persons, keywords, matches);
    let after_tags = matches.len();
    let matches = phone_pass(persons, keywords, matches);
    let after_phone = matches.len();
    let matches = email_pass(persons, keywords, matches);

    tracing::debug!(
        persons = persons.len(),
        keywords = keywords.len(),
        by_name = after_name,
        by_tags = after_tags - after_name,
        by_phone = after_phone - after_tags,
        by_email = matches.len() - after_phone,
        "keyword filter finished"
    );

    matches.into_vec()
}

fn name_pass<'a>(
    persons: &'a [Person],
    keywords: &KeywordSet,
    matches: Matches<'a>,
) -> Matches<'a> {
    extend_matches(persons, matches, |p| keywords.intersects(p.name().words()))
}

fn tag_pass<'a>(
    persons: &'a [Person],
    keywords: &KeywordSet,
    matches: Matches<'a>,
) -> Matches<'a> {
    extend_matches(persons, matches, |p| keywords.intersects(p.tag_names()))
}

fn phone_pass<'a>(
    persons: &'a [Person],
    keywords: &KeywordSet,
    matches: Matches<'a>,
) -> Matches<'a> {
    extend_matches(persons, matches, |p| keywords.contains(p.phone().as_str()))
}

fn email_pass<'a>(
    persons: &'a [Person],
    keywords: &KeywordSet,
    matches: Matches<'a>,
) -> Matches<'a> {
    extend_matches(persons, matches, |p| keywords.contains(p.email().as_str()))
}

/// Append persons satisfying `is_match` that are not yet in `matches`, in input order.
fn extend_matches<'a, F>(
    persons: &'a [Person],
    mut matches: Matches<'a>,
    is_match: F,
) -> Matches<'a>
where
    F: Fn(&Person) -> bool,
{
    for (idx, person) in persons.iter().enumerate() {
        if !matches.taken.contains(&idx) && is_match(person) {
            matches.taken.insert(idx);
            matches.persons.push(person);
        }
    }
    matches
}
