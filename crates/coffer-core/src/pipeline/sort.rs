//! Sort direction and key comparators.
//!
//! All sorting goes through a stable `sort_by` with a comparator built
//! from these helpers. Descending order flips the comparator, never the
//! sorted array, so rows with equal keys keep their input order in both
//! directions.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CofferError;

/// Sort direction for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending-order comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown sort direction: {} (expected asc or desc)",
                other
            ))),
        }
    }
}

/// Compare two names case-insensitively.
pub fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare optional names, ranking a missing name above every present one.
///
/// The missing state is a maximal sentinel, so ascending order puts it
/// last and descending order (the flipped comparator) puts it first.
pub fn cmp_optional_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_names(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare optional dates with the same maximal-sentinel rule as names.
pub fn cmp_optional_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply() {
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn test_names_compare_case_insensitively() {
        assert_eq!(cmp_names("alice", "Bob"), Ordering::Less);
        assert_eq!(cmp_names("ALICE", "alice"), Ordering::Equal);
    }

    #[test]
    fn test_missing_name_ranks_above_every_present_name() {
        assert_eq!(cmp_optional_names(Some("Zoe"), None), Ordering::Less);
        assert_eq!(cmp_optional_names(None, Some("Zoe")), Ordering::Greater);
        assert_eq!(cmp_optional_names(None, None), Ordering::Equal);
    }

    #[test]
    fn test_optional_name_sort_in_both_directions() {
        let mut rows = vec![Some("Bob"), None, Some("Alice")];
        rows.sort_by(|a, b| SortDirection::Ascending.apply(cmp_optional_names(*a, *b)));
        assert_eq!(rows, vec![Some("Alice"), Some("Bob"), None]);

        let mut rows = vec![Some("Bob"), None, Some("Alice")];
        rows.sort_by(|a, b| SortDirection::Descending.apply(cmp_optional_names(*a, *b)));
        assert_eq!(rows, vec![None, Some("Bob"), Some("Alice")]);
    }

    #[test]
    fn test_equal_keys_keep_input_order_in_both_directions() {
        // Tuples with the same name must not swap when the direction flips.
        let rows = vec![("ann", 1), ("ann", 2), ("ann", 3)];

        let mut ascending = rows.clone();
        ascending.sort_by(|a, b| SortDirection::Ascending.apply(cmp_names(a.0, b.0)));
        assert_eq!(ascending, rows);

        let mut descending = rows.clone();
        descending.sort_by(|a, b| SortDirection::Descending.apply(cmp_names(a.0, b.0)));
        assert_eq!(descending, rows);
    }
}
