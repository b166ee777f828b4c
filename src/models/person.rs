// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact record model and field validation (storage-agnostic).

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use anyhow::{Result, bail};
use email_address::EmailAddress;

/// A person's full name, made of one or more whitespace-separated words.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    full_name: String,
}

impl Name {
    /// Validate and wrap a full name.
    ///
    /// Names must be non-blank and contain only alphanumerics and spaces.
    pub fn new(full_name: &str) -> Result<Self> {
        if full_name.trim().is_empty() {
            bail!("Person names must not be empty");
        }
        if !full_name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == ' ')
        {
            bail!(
                "Person names should be spaces or alphanumeric characters: {:?}",
                full_name
            );
        }
        Ok(Self {
            full_name: full_name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.full_name
    }

    /// The distinct words making up the name.
    pub fn words(&self) -> HashSet<&str> {
        self.full_name.split_whitespace().collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Phone number, compared as a whole string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    private: bool,
}

impl Phone {
    pub fn new(value: &str, private: bool) -> Result<Self> {
        if value.is_empty() || !value.chars().all(|ch| ch.is_ascii_digit()) {
            bail!("Person phone numbers should only contain numbers: {:?}", value);
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Email address, compared as a whole string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    private: bool,
}

impl Email {
    pub fn new(value: &str, private: bool) -> Result<Self> {
        if EmailAddress::parse_with_options(value, Default::default()).is_err() {
            bail!("Person email is not a valid address: {:?}", value);
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Postal address. Displayed but never searched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    private: bool,
}

impl Address {
    pub fn new(value: &str, private: bool) -> Result<Self> {
        if value.trim().is_empty() {
            bail!("Person addresses must not be empty");
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Single alphanumeric label attached to a person.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            bail!("Tag names should be alphanumeric: {:?}", name);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// A contact entry in the address book.
///
/// Two persons are equal when their field values match and they carry the
/// same set of tags. Tag order and privacy flags are ignored.
#[derive(Clone, Debug)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: Vec<Tag>,
}

impl Person {
    /// Build a person; repeated tags are dropped, keeping first-seen order.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: Vec<Tag>) -> Self {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .filter(|tag| seen.insert(tag.name.clone()))
            .collect();
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tag labels as plain strings.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(Tag::as_str)
    }

    /// One-line summary that omits fields flagged as private.
    pub fn as_text_hide_private(&self) -> String {
        let mut out = self.name.to_string();
        if !self.phone.is_private() {
            out.push_str(&format!(" Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            out.push_str(&format!(" Email: {}", self.email));
        }
        if !self.address.is_private() {
            out.push_str(&format!(" Address: {}", self.address));
        }
        out.push_str(" Tags: ");
        for tag in self.tags() {
            out.push_str(&tag.to_string());
        }
        out
    }

    fn identity(&self) -> (&str, &str, &str, &str, BTreeSet<&str>) {
        (
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.tag_names().collect(),
        )
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, Name, Person, Phone, Tag};

    fn alice(phone_private: bool) -> Person {
        Person::new(
            Name::new("Alice Tan").unwrap(),
            Phone::new("91234567", phone_private).unwrap(),
            Email::new("alice@example.com", false).unwrap(),
            Address::new("1 Main Street", false).unwrap(),
            vec![Tag::new("friend").unwrap(), Tag::new("colleague").unwrap()],
        )
    }

    #[test]
    fn name_words_split_on_any_whitespace() {
        let name = Name::new("Alice  Mary Tan").unwrap();
        let words = name.words();

        assert_eq!(words.len(), 3);
        assert!(words.contains("Alice"));
        assert!(words.contains("Mary"));
        assert!(words.contains("Tan"));
    }

    #[test]
    fn name_rejects_blank_and_punctuation() {
        assert!(Name::new("   ").is_err());
        assert!(Name::new("Alice-Tan").is_err());
    }

    #[test]
    fn phone_accepts_digits_only() {
        assert!(Phone::new("91234567", false).is_ok());
        assert!(Phone::new("9123 4567", false).is_err());
        assert!(Phone::new("", false).is_err());
    }

    #[test]
    fn email_is_validated() {
        assert!(Email::new("alice@example.com", false).is_ok());
        assert!(Email::new("not-an-email", false).is_err());
    }

    #[test]
    fn tag_rejects_non_alphanumeric() {
        assert!(Tag::new("friend").is_ok());
        assert!(Tag::new("best friend").is_err());
        assert!(Tag::new("").is_err());
    }

    // Repeated tags are kept once, in the order first given.
    #[test]
    fn person_dedups_tags_in_order() {
        let person = Person::new(
            Name::new("Bob Lee").unwrap(),
            Phone::new("98765432", false).unwrap(),
            Email::new("bob@example.com", false).unwrap(),
            Address::new("2 Side Road", false).unwrap(),
            vec![
                Tag::new("friend").unwrap(),
                Tag::new("gym").unwrap(),
                Tag::new("friend").unwrap(),
            ],
        );

        assert_eq!(person.tag_names().collect::<Vec<_>>(), vec!["friend", "gym"]);
    }

    #[test]
    fn name_and_tag_reject_non_ascii_letters() {
        assert!(Name::new("Zoë Tan").is_err());
        assert!(Tag::new("café").is_err());
    }

    // Equality ignores tag order and privacy flags.
    #[test]
    fn person_equality_uses_values_and_tag_set() {
        let reordered = Person::new(
            Name::new("Alice Tan").unwrap(),
            Phone::new("91234567", false).unwrap(),
            Email::new("alice@example.com", false).unwrap(),
            Address::new("1 Main Street", false).unwrap(),
            vec![Tag::new("colleague").unwrap(), Tag::new("friend").unwrap()],
        );

        assert_eq!(alice(false), reordered);
        assert_eq!(alice(false), alice(true));
    }

    #[test]
    fn text_summary_lists_public_fields_and_tags() {
        let text = alice(false).as_text_hide_private();

        assert_eq!(
            text,
            "Alice Tan Phone: 91234567 Email: alice@example.com Address: 1 Main Street Tags: [friend][colleague]"
        );
    }

    #[test]
    fn text_summary_hides_private_fields() {
        let text = alice(true).as_text_hide_private();

        assert!(!text.contains("91234567"));
        assert!(text.contains("Email: alice@example.com"));
    }
}
