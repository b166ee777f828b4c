// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Keyword collection domain helper.

use std::collections::HashSet;

/// Immutable set of search keywords.
///
/// Keywords are kept verbatim: no trimming, no case folding. `"Tan"` and
/// `"tan"` are distinct entries and match different records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    items: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Return an independent copy of the keywords.
    ///
    /// Mutating the returned set never affects this `KeywordSet`.
    pub fn keywords(&self) -> HashSet<String> {
        self.items.clone()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.items.contains(candidate)
    }

    /// True when at least one candidate is a keyword.
    pub fn intersects<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates.into_iter().any(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
