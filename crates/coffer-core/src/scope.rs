//! Entity selection: scoping every query to one organization or to all.
//!
//! The selector is the first stage of every list and lookup. Scoping by
//! an unknown organization is not an error; it yields an empty result
//! set, which downstream stages treat as a valid state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved selector meaning "across all organizations".
///
/// No organization may use this as its id; the dataset integrity check
/// enforces that.
pub const ALL_SELECTOR: &str = "all";

/// A record owned by one organization.
pub trait Owned {
    /// Slug of the owning organization.
    fn owner(&self) -> &str;
}

/// Which organization's records a query should see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntitySelector {
    /// Every organization's records
    All,

    /// One organization, by slug
    One(String),
}

impl EntitySelector {
    /// Parse a selector from user input.
    ///
    /// Whitespace is trimmed and the `all` sentinel is matched
    /// case-insensitively; anything else is an organization slug taken
    /// as-is.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SELECTOR) {
            EntitySelector::All
        } else {
            EntitySelector::One(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, EntitySelector::All)
    }

    /// The selector as a display string (`all` or the slug).
    pub fn as_str(&self) -> &str {
        match self {
            EntitySelector::All => ALL_SELECTOR,
            EntitySelector::One(slug) => slug,
        }
    }

    /// Whether a record owned by `entity` is in scope.
    pub fn matches(&self, entity: &str) -> bool {
        match self {
            EntitySelector::All => true,
            EntitySelector::One(slug) => slug == entity,
        }
    }
}

impl Default for EntitySelector {
    fn default() -> Self {
        EntitySelector::All
    }
}

impl fmt::Display for EntitySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrow the records the selector keeps, preserving input order.
///
/// `All` returns every record; a slug returns exactly the records it
/// owns; an unknown slug returns an empty vec.
pub fn scoped<'a, T: Owned>(records: &'a [T], selector: &EntitySelector) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| selector.matches(record.owner()))
        .collect()
}
