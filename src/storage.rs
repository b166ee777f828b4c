// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Address book repository backed by a JSON snapshot on disk.
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "persons": [
//!     {
//!       "name": "Alice Tan",
//!       "phone": { "value": "91234567", "private": true },
//!       "email": "alice@example.com",
//!       "address": "1 Main Street",
//!       "tags": ["friend"]
//!     }
//!   ]
//! }
//! ```
//!
//! `phone`, `email`, and `address` accept either a plain string (public) or an
//! object with `value` and `private`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::models::person::{Address, Email, Name, Person, Phone, Tag};

/// In-memory collection of persons, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    /// Build an address book, rejecting duplicate persons.
    pub fn new(persons: Vec<Person>) -> Result<Self> {
        assert_unique_persons(&persons)?;
        Ok(Self { persons })
    }

    /// Parse an address book from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let env: AddressBookEnvelope =
            serde_json::from_str(json).context("Failed to parse address book JSON")?;

        let persons = env
            .persons
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| {
                raw.into_person()
                    .with_context(|| format!("Invalid person at position {}", idx + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(persons)
    }

    /// Full snapshot of every stored person.
    pub fn all_persons(&self) -> &[Person] {
        &self.persons
    }
}

/// Read and parse an address book file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or
/// contains an invalid or duplicate person.
pub fn load_address_book(path: &Path) -> Result<AddressBook> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read address book file: {:?}", path))?;
    let book = AddressBook::from_json(&json)
        .with_context(|| format!("Failed to load address book: {:?}", path))?;
    tracing::info!(
        path = %path.display(),
        persons = book.all_persons().len(),
        "address book loaded"
    );
    Ok(book)
}

/// Ensure no person appears twice in the book.
fn assert_unique_persons(persons: &[Person]) -> Result<()> {
    let mut seen = HashSet::new();
    for person in persons {
        if !seen.insert(person) {
            return Err(anyhow!(
                "Duplicate person in address book: {}",
                person.name()
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct AddressBookEnvelope {
    #[serde(default)]
    persons: Vec<RawPerson>,
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    phone: RawField,
    email: RawField,
    address: RawField,
    #[serde(default)]
    tags: Vec<String>,
}

impl RawPerson {
    fn into_person(self) -> Result<Person> {
        let name = Name::new(&self.name)?;
        let (phone, phone_private) = self.phone.into_parts();
        let (email, email_private) = self.email.into_parts();
        let (address, address_private) = self.address.into_parts();
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>>>()?;

        Ok(Person::new(
            name,
            Phone::new(&phone, phone_private)?,
            Email::new(&email, email_private)?,
            Address::new(&address, address_private)?,
            tags,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Plain(String),
    Detailed {
        value: String,
        #[serde(default)]
        private: bool,
    },
}

impl RawField {
    fn into_parts(self) -> (String, bool) {
        match self {
            RawField::Plain(value) => (value, false),
            RawField::Detailed { value, private } => (value, private),
        }
    }
}
