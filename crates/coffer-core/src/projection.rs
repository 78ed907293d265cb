//! Profile lookups and computed profile views.
//!
//! Lookups are by exact name within the active entity scope. A name that
//! exists under a different organization is invisible, and a miss is
//! `None`, never an error: callers decide how to present "not found".
//!
//! Views fold the profile's embedded history and report the folded
//! figures. The stored totals on the profile are fixture data; when they
//! disagree with the history, the history wins (the integrity checker
//! flags the drift separately).

use chrono::NaiveDate;

use crate::model::{DonorProfile, VolunteerProfile};
use crate::scope::{EntitySelector, Owned};

/// A record that can be looked up by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for DonorProfile {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for VolunteerProfile {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Find a profile by exact name within the selector's scope.
///
/// With a specific entity selected, only that entity's profiles are
/// visible. With `All`, the first matching profile wins; same-name
/// profiles under different organizations are distinct records.
pub fn find_profile<'a, P>(
    profiles: &'a [P],
    name: &str,
    selector: &EntitySelector,
) -> Option<&'a P>
where
    P: Owned + Named,
{
    profiles
        .iter()
        .find(|p| p.name() == name && selector.matches(p.owner()))
}

/// Computed figures for a donor profile.
#[derive(Debug, Clone)]
pub struct DonorProfileView<'a> {
    pub profile: &'a DonorProfile,

    /// Lifetime total folded from history (authoritative)
    pub lifetime_total_minor: i64,

    /// Gift count folded from history (authoritative)
    pub gift_count: usize,

    /// Earliest gift date in history
    pub first_gift_on: Option<NaiveDate>,

    /// Latest gift date in history
    pub last_gift_on: Option<NaiveDate>,
}

/// Fold a donor profile's history into its view.
pub fn donor_profile_view(profile: &DonorProfile) -> DonorProfileView<'_> {
    let lifetime_total_minor = profile.history.iter().map(|g| g.amount_minor).sum();
    let gift_count = profile.history.len();
    let first_gift_on = profile.history.iter().map(|g| g.date).min();
    let last_gift_on = profile.history.iter().map(|g| g.date).max();

    DonorProfileView {
        profile,
        lifetime_total_minor,
        gift_count,
        first_gift_on,
        last_gift_on,
    }
}

/// Computed figures for a volunteer profile.
#[derive(Debug, Clone)]
pub struct VolunteerProfileView<'a> {
    pub profile: &'a VolunteerProfile,

    /// Total hours folded from sessions (authoritative)
    pub hours: u64,

    /// Session count
    pub session_count: usize,

    /// Latest session date
    pub last_session_on: Option<NaiveDate>,
}

/// Fold a volunteer profile's sessions into its view.
pub fn volunteer_profile_view(profile: &VolunteerProfile) -> VolunteerProfileView<'_> {
    let hours = profile.sessions.iter().map(|s| u64::from(s.hours)).sum();
    let session_count = profile.sessions.len();
    let last_session_on = profile.sessions.iter().map(|s| s.date).max();

    VolunteerProfileView {
        profile,
        hours,
        session_count,
        last_session_on,
    }
}

/// A session-scoped correction line (e.g., a refund reversal).
///
/// Adjustments live only in the current session; they are merged into a
/// display copy of the history and never written back to the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub date: NaiveDate,

    /// Signed amount in minor units; refund reversals are negative
    pub amount_minor: i64,

    pub note: String,
}

/// One line of a merged history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLine {
    pub date: NaiveDate,

    pub amount_minor: i64,

    /// Gift purpose, or the adjustment note
    pub detail: String,

    /// True when the line came from an adjustment
    pub adjustment: bool,
}

/// Merge base history with session adjustments, newest first.
///
/// The profile is read, never mutated; every call rebuilds the merged
/// list from scratch. Lines sharing a date keep base-before-adjustment
/// order via the stable sort.
pub fn merged_history(profile: &DonorProfile, adjustments: &[Adjustment]) -> Vec<HistoryLine> {
    let mut lines: Vec<HistoryLine> = profile
        .history
        .iter()
        .map(|gift| HistoryLine {
            date: gift.date,
            amount_minor: gift.amount_minor,
            detail: gift.purpose.clone(),
            adjustment: false,
        })
        .collect();

    lines.extend(adjustments.iter().map(|adj| HistoryLine {
        date: adj.date,
        amount_minor: adj.amount_minor,
        detail: adj.note.clone(),
        adjustment: true,
    }));

    lines.sort_by(|a, b| b.date.cmp(&a.date));
    lines
}

/// Lifetime total including session adjustments.
pub fn adjusted_total_minor(profile: &DonorProfile, adjustments: &[Adjustment]) -> i64 {
    let base: i64 = profile.history.iter().map(|g| g.amount_minor).sum();
    let delta: i64 = adjustments.iter().map(|a| a.amount_minor).sum();
    base + delta
}
