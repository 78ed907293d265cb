//! Donor list queries.

use std::str::FromStr;

use crate::error::CofferError;
use crate::model::{Donor, DonorKind, DonorStatus};
use crate::pipeline::filter::matches_text;
use crate::pipeline::sort::{cmp_names, cmp_optional_dates, SortDirection};

/// Sort key for donor lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DonorSortKey {
    #[default]
    Name,
    Total,
    Gifts,
    Joined,
    LastGift,
}

impl FromStr for DonorSortKey {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(DonorSortKey::Name),
            "total" => Ok(DonorSortKey::Total),
            "gifts" => Ok(DonorSortKey::Gifts),
            "joined" => Ok(DonorSortKey::Joined),
            "last_gift" | "last-gift" => Ok(DonorSortKey::LastGift),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donor sort key: {} (expected name, total, gifts, joined, or last_gift)",
                other
            ))),
        }
    }
}

/// Totals folded over the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonorTotals {
    /// Number of donors after filtering
    pub count: usize,

    /// Sum of lifetime giving in minor units
    pub total_given_minor: i64,

    /// How many are in active status
    pub active: usize,
}

/// A filtered, sorted donor list with its totals.
#[derive(Debug)]
pub struct DonorView<'a> {
    pub rows: Vec<&'a Donor>,
    pub totals: DonorTotals,
}

/// Filter and sort settings for a donor list.
#[derive(Debug, Clone, Default)]
pub struct DonorQuery {
    /// Free-text search over name and email
    pub text: String,

    /// Status filter; `None` keeps every status
    pub status: Option<DonorStatus>,

    /// Kind filter; `None` keeps every kind
    pub kind: Option<DonorKind>,

    /// Active sort key
    pub sort: DonorSortKey,

    /// Sort direction
    pub direction: SortDirection,
}

impl DonorQuery {
    /// Run the query: filter, sort, and fold totals.
    pub fn apply<'a>(&self, rows: &[&'a Donor]) -> DonorView<'a> {
        let mut kept: Vec<&'a Donor> = rows
            .iter()
            .filter(|d| self.keeps(d))
            .copied()
            .collect();

        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                DonorSortKey::Name => cmp_names(&a.name, &b.name),
                DonorSortKey::Total => a.total_given_minor.cmp(&b.total_given_minor),
                DonorSortKey::Gifts => a.gift_count.cmp(&b.gift_count),
                DonorSortKey::Joined => a.joined_on.cmp(&b.joined_on),
                DonorSortKey::LastGift => cmp_optional_dates(a.last_gift_on, b.last_gift_on),
            };
            self.direction.apply(ordering)
        });

        let totals = fold_totals(&kept);
        DonorView { rows: kept, totals }
    }

    fn keeps(&self, donor: &Donor) -> bool {
        let fields = [Some(donor.name.as_str()), Some(donor.email.as_str())];
        matches_text(&self.text, &fields)
            && self.status.map_or(true, |s| donor.status == s)
            && self.kind.map_or(true, |k| donor.kind == k)
    }
}

fn fold_totals(rows: &[&Donor]) -> DonorTotals {
    rows.iter().fold(DonorTotals::default(), |mut acc, d| {
        acc.count += 1;
        acc.total_given_minor += d.total_given_minor;
        if d.status == DonorStatus::Active {
            acc.active += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn donor(id: &str, name: &str, status: DonorStatus, total: i64) -> Donor {
        Donor {
            id: id.to_string(),
            entity: "awakenings".to_string(),
            name: name.to_string(),
            email: format!("{}@example.org", id),
            phone: None,
            kind: DonorKind::Individual,
            status,
            total_given_minor: total,
            gift_count: 1,
            joined_on: date("2023-01-15"),
            last_gift_on: None,
        }
    }

    fn rows(donors: &[Donor]) -> Vec<&Donor> {
        donors.iter().collect()
    }

    #[test]
    fn test_status_filter_wildcard_is_none() {
        let donors = vec![
            donor("d1", "Alice", DonorStatus::Active, 100),
            donor("d2", "Bob", DonorStatus::Lapsed, 200),
        ];
        let all = DonorQuery::default().apply(&rows(&donors));
        assert_eq!(all.rows.len(), 2);

        let active = DonorQuery {
            status: Some(DonorStatus::Active),
            ..Default::default()
        }
        .apply(&rows(&donors));
        assert_eq!(active.rows.len(), 1);
        assert_eq!(active.rows[0].name, "Alice");
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let donors = vec![
            donor("d1", "bob lowercase", DonorStatus::Active, 0),
            donor("d2", "Alice Uppercase", DonorStatus::Active, 0),
        ];
        let view = DonorQuery::default().apply(&rows(&donors));
        let names: Vec<_> = view.rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Uppercase", "bob lowercase"]);
    }

    #[test]
    fn test_last_gift_sort_puts_missing_dates_last_ascending() {
        let mut with_gift = donor("d1", "Alice", DonorStatus::Active, 100);
        with_gift.last_gift_on = Some(date("2025-06-01"));
        let never_gave = donor("d2", "Bob", DonorStatus::Prospective, 0);

        let donors = vec![never_gave, with_gift];
        let query = DonorQuery {
            sort: DonorSortKey::LastGift,
            ..Default::default()
        };
        let view = query.apply(&rows(&donors));
        let names: Vec<_> = view.rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let query = DonorQuery {
            sort: DonorSortKey::LastGift,
            direction: SortDirection::Descending,
            ..Default::default()
        };
        let view = query.apply(&rows(&donors));
        let names: Vec<_> = view.rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_totals_match_filtered_rows() {
        let donors = vec![
            donor("d1", "Alice", DonorStatus::Active, 100),
            donor("d2", "Bob", DonorStatus::Active, 250),
            donor("d3", "Cleo", DonorStatus::Lapsed, 400),
        ];
        let view = DonorQuery {
            status: Some(DonorStatus::Active),
            ..Default::default()
        }
        .apply(&rows(&donors));
        assert_eq!(view.totals.count, 2);
        assert_eq!(view.totals.total_given_minor, 350);
        assert_eq!(view.totals.active, 2);
    }
}
