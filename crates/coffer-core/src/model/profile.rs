//! Stored profile records with embedded history.
//!
//! Profiles carry denormalized totals alongside their full history. The
//! stored totals are treated as fixture data: the projection layer folds
//! the history and reports the folded figures, and the integrity checker
//! flags any disagreement between the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::donation::{DonationKind, PaymentMethod};
use crate::scope::Owned;

/// One gift in a donor's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    /// Date the gift was received
    pub date: NaiveDate,

    /// Amount in minor currency units (cents)
    pub amount_minor: i64,

    /// Payment method
    pub method: PaymentMethod,

    /// One-time or recurring
    pub kind: DonationKind,

    /// Purpose or fund designation
    pub purpose: String,
}

/// A donor profile: identity plus giving history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorProfile {
    /// Full display name; profile lookups match this exactly
    pub name: String,

    /// Owning organization slug
    pub entity: String,

    /// Contact email
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// Date the donor joined
    pub since: NaiveDate,

    /// Stored lifetime total in minor units (fixture data; may drift)
    pub total_given_minor: i64,

    /// Stored gift count (fixture data; may drift)
    pub gift_count: u32,

    /// Full giving history
    pub history: Vec<Gift>,
}

impl Owned for DonorProfile {
    fn owner(&self) -> &str {
        &self.entity
    }
}

/// One logged volunteer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Date of the session
    pub date: NaiveDate,

    /// Hours worked
    pub hours: u32,

    /// What the session was (e.g., "food bank shift")
    pub activity: String,
}

/// A volunteer profile: identity plus session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerProfile {
    /// Full display name; profile lookups match this exactly
    pub name: String,

    /// Owning organization slug
    pub entity: String,

    /// Contact email
    pub email: String,

    /// Date the volunteer joined
    pub since: NaiveDate,

    /// Stored total hours (fixture data; may drift)
    pub hours_logged: u32,

    /// Full session history
    pub sessions: Vec<Session>,
}

impl Owned for VolunteerProfile {
    fn owner(&self) -> &str {
        &self.entity
    }
}
