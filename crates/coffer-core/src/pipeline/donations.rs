//! Donation list queries.

use std::str::FromStr;

use crate::error::CofferError;
use crate::model::{Donation, DonationKind, DonationStatus, PaymentMethod};
use crate::pipeline::filter::matches_text;
use crate::pipeline::sort::{cmp_optional_names, SortDirection};

/// Filter on whether a donation has a donor attached.
///
/// `Assigned` requires a donor name to be present and `Unassigned`
/// requires it to be absent. An empty-string donor name counts as
/// assigned; absence is the only unassigned state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

impl AssignmentFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentFilter::All => "all",
            AssignmentFilter::Assigned => "assigned",
            AssignmentFilter::Unassigned => "unassigned",
        }
    }

    fn keeps(&self, donor: Option<&str>) -> bool {
        match self {
            AssignmentFilter::All => true,
            AssignmentFilter::Assigned => donor.is_some(),
            AssignmentFilter::Unassigned => donor.is_none(),
        }
    }
}

impl FromStr for AssignmentFilter {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(AssignmentFilter::All),
            "assigned" => Ok(AssignmentFilter::Assigned),
            "unassigned" => Ok(AssignmentFilter::Unassigned),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown assignment filter: {} (expected all, assigned, or unassigned)",
                other
            ))),
        }
    }
}

/// Sort key for donation lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DonationSortKey {
    #[default]
    Date,
    Amount,
    Donor,
}

impl FromStr for DonationSortKey {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(DonationSortKey::Date),
            "amount" => Ok(DonationSortKey::Amount),
            "donor" => Ok(DonationSortKey::Donor),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donation sort key: {} (expected date, amount, or donor)",
                other
            ))),
        }
    }
}

/// Totals folded over the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonationTotals {
    /// Number of donations after filtering
    pub count: usize,

    /// Sum of amounts in minor units
    pub amount_minor: i64,

    /// How many are in completed status
    pub completed: usize,

    /// How many have no donor attached
    pub unassigned: usize,
}

/// A filtered, sorted donation list with its totals.
#[derive(Debug)]
pub struct DonationView<'a> {
    pub rows: Vec<&'a Donation>,
    pub totals: DonationTotals,
}

/// Filter and sort settings for a donation list.
#[derive(Debug, Clone, Default)]
pub struct DonationQuery {
    /// Free-text search over id, purpose, and donor name
    pub text: String,

    /// Status filter; `None` keeps every status
    pub status: Option<DonationStatus>,

    /// Kind filter; `None` keeps every kind
    pub kind: Option<DonationKind>,

    /// Payment method filter; `None` keeps every method
    pub method: Option<PaymentMethod>,

    /// Assignment filter
    pub assignment: AssignmentFilter,

    /// Active sort key
    pub sort: DonationSortKey,

    /// Sort direction
    pub direction: SortDirection,
}

impl DonationQuery {
    /// Run the query: filter, sort, and fold totals.
    ///
    /// Filters AND together and the totals are recomputed from the
    /// filtered rows, so they agree with the visible list for every
    /// filter combination.
    pub fn apply<'a>(&self, rows: &[&'a Donation]) -> DonationView<'a> {
        let mut kept: Vec<&'a Donation> = rows
            .iter()
            .filter(|d| self.keeps(d))
            .copied()
            .collect();

        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                DonationSortKey::Date => a.date.cmp(&b.date),
                DonationSortKey::Amount => a.amount_minor.cmp(&b.amount_minor),
                DonationSortKey::Donor => cmp_optional_names(a.donor.as_deref(), b.donor.as_deref()),
            };
            self.direction.apply(ordering)
        });

        let totals = fold_totals(&kept);
        DonationView { rows: kept, totals }
    }

    fn keeps(&self, donation: &Donation) -> bool {
        let fields = [
            Some(donation.id.as_str()),
            Some(donation.purpose.as_str()),
            donation.donor.as_deref(),
        ];
        matches_text(&self.text, &fields)
            && self.status.map_or(true, |s| donation.status == s)
            && self.kind.map_or(true, |k| donation.kind == k)
            && self.method.map_or(true, |m| donation.method == m)
            && self.assignment.keeps(donation.donor.as_deref())
    }
}

fn fold_totals(rows: &[&Donation]) -> DonationTotals {
    rows.iter().fold(DonationTotals::default(), |mut acc, d| {
        acc.count += 1;
        acc.amount_minor += d.amount_minor;
        if d.status == DonationStatus::Completed {
            acc.completed += 1;
        }
        if d.donor.is_none() {
            acc.unassigned += 1;
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

    fn gift(id: &str, donor: Option<&str>, amount_minor: i64, status: DonationStatus) -> Donation {
        Donation {
            id: id.to_string(),
            entity: "awakenings".to_string(),
            donor: donor.map(|s| s.to_string()),
            amount_minor,
            date: date("2025-03-01"),
            method: PaymentMethod::CreditCard,
            status,
            kind: DonationKind::OneTime,
            purpose: "General Fund".to_string(),
        }
    }

    fn rows(donations: &[Donation]) -> Vec<&Donation> {
        donations.iter().collect()
    }

    #[test]
    fn test_default_query_keeps_everything() {
        let donations = vec![
            gift("g1", Some("Alice"), 100, DonationStatus::Completed),
            gift("g2", None, 200, DonationStatus::Pending),
        ];
        let view = DonationQuery::default().apply(&rows(&donations));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.totals.count, 2);
        assert_eq!(view.totals.amount_minor, 300);
    }

    #[test]
    fn test_unassigned_means_absent_not_empty() {
        let donations = vec![
            gift("g1", Some("Alice"), 100, DonationStatus::Completed),
            gift("g2", Some(""), 200, DonationStatus::Completed),
            gift("g3", None, 300, DonationStatus::Completed),
        ];
        let query = DonationQuery {
            assignment: AssignmentFilter::Unassigned,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let ids: Vec<_> = view.rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["g3"]);

        let query = DonationQuery {
            assignment: AssignmentFilter::Assigned,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let ids: Vec<_> = view.rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }

    #[test]
    fn test_filters_and_together() {
        let mut pending = gift("g2", Some("Alice"), 200, DonationStatus::Pending);
        pending.method = PaymentMethod::Cash;
        let donations = vec![
            gift("g1", Some("Alice"), 100, DonationStatus::Completed),
            pending,
            gift("g3", Some("Bob"), 300, DonationStatus::Completed),
        ];
        let query = DonationQuery {
            text: "alice".to_string(),
            status: Some(DonationStatus::Completed),
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let ids: Vec<_> = view.rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["g1"]);
    }

    #[test]
    fn test_totals_fold_over_filtered_set_only() {
        let donations = vec![
            gift("g1", Some("Alice"), 100, DonationStatus::Completed),
            gift("g2", None, 200, DonationStatus::Completed),
            gift("g3", None, 400, DonationStatus::Pending),
        ];
        let query = DonationQuery {
            assignment: AssignmentFilter::Unassigned,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        assert_eq!(view.totals.count, 2);
        assert_eq!(view.totals.amount_minor, 600);
        assert_eq!(view.totals.completed, 1);
        assert_eq!(view.totals.unassigned, 2);
    }

    #[test]
    fn test_donor_sort_ranks_missing_name_as_maximal() {
        let donations = vec![
            gift("g1", Some("Bob"), 100, DonationStatus::Completed),
            gift("g2", None, 200, DonationStatus::Completed),
            gift("g3", Some("Alice"), 300, DonationStatus::Completed),
        ];

        let query = DonationQuery {
            sort: DonationSortKey::Donor,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let donors: Vec<_> = view.rows.iter().map(|d| d.donor.as_deref()).collect();
        assert_eq!(donors, vec![Some("Alice"), Some("Bob"), None]);

        let query = DonationQuery {
            sort: DonationSortKey::Donor,
            direction: SortDirection::Descending,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let donors: Vec<_> = view.rows.iter().map(|d| d.donor.as_deref()).collect();
        assert_eq!(donors, vec![None, Some("Bob"), Some("Alice")]);
    }

    #[test]
    fn test_amount_sort_ties_keep_input_order() {
        let donations = vec![
            gift("g1", Some("Alice"), 200, DonationStatus::Completed),
            gift("g2", Some("Bob"), 200, DonationStatus::Completed),
            gift("g3", Some("Cleo"), 100, DonationStatus::Completed),
        ];
        let query = DonationQuery {
            sort: DonationSortKey::Amount,
            direction: SortDirection::Descending,
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        let ids: Vec<_> = view.rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2", "g3"]);
    }

    #[test]
    fn test_text_filter_searches_id_purpose_and_donor() {
        let mut relief = gift("g2", None, 200, DonationStatus::Completed);
        relief.purpose = "Disaster Relief".to_string();
        let donations = vec![
            gift("g1", Some("Alice"), 100, DonationStatus::Completed),
            relief,
        ];
        let query = DonationQuery {
            text: "relief".to_string(),
            ..Default::default()
        };
        let view = query.apply(&rows(&donations));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "g2");
    }
}
