//! Volunteer records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CofferError;
use crate::scope::Owned;

/// Standing of a volunteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerStatus {
    Active,
    Inactive,
    Applicant,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "active",
            VolunteerStatus::Inactive => "inactive",
            VolunteerStatus::Applicant => "applicant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "Active",
            VolunteerStatus::Inactive => "Inactive",
            VolunteerStatus::Applicant => "Applicant",
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VolunteerStatus {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(VolunteerStatus::Active),
            "inactive" => Ok(VolunteerStatus::Inactive),
            "applicant" => Ok(VolunteerStatus::Applicant),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown volunteer status: {} (expected active, inactive, or applicant)",
                other
            ))),
        }
    }
}

/// A volunteer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    /// Unique identifier (e.g., "v-001")
    pub id: String,

    /// Owning organization slug
    pub entity: String,

    /// Full display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Standing
    pub status: VolunteerStatus,

    /// Skills offered (e.g., "tutoring", "event setup")
    pub skills: Vec<String>,

    /// Total hours logged across all sessions
    pub hours_logged: u32,

    /// Date the volunteer joined
    pub joined_on: NaiveDate,

    /// Date of the most recent session, if any
    pub last_session_on: Option<NaiveDate>,
}

impl Owned for Volunteer {
    fn owner(&self) -> &str {
        &self.entity
    }
}
