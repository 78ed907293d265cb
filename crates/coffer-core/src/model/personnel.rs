//! Staff records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CofferError;
use crate::scope::Owned;

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    Active,
    OnLeave,
    Ended,
}

impl PersonnelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelStatus::Active => "active",
            PersonnelStatus::OnLeave => "on_leave",
            PersonnelStatus::Ended => "ended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonnelStatus::Active => "Active",
            PersonnelStatus::OnLeave => "On Leave",
            PersonnelStatus::Ended => "Ended",
        }
    }
}

impl fmt::Display for PersonnelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonnelStatus {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(PersonnelStatus::Active),
            "on_leave" | "on-leave" => Ok(PersonnelStatus::OnLeave),
            "ended" => Ok(PersonnelStatus::Ended),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown personnel status: {} (expected active, on_leave, or ended)",
                other
            ))),
        }
    }
}

/// Employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    FullTime,
    PartTime,
    Contractor,
}

impl EmploymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentKind::FullTime => "full_time",
            EmploymentKind::PartTime => "part_time",
            EmploymentKind::Contractor => "contractor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentKind::FullTime => "Full-Time",
            EmploymentKind::PartTime => "Part-Time",
            EmploymentKind::Contractor => "Contractor",
        }
    }
}

impl fmt::Display for EmploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentKind {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full_time" | "full-time" => Ok(EmploymentKind::FullTime),
            "part_time" | "part-time" => Ok(EmploymentKind::PartTime),
            "contractor" => Ok(EmploymentKind::Contractor),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown employment kind: {} (expected full_time, part_time, or contractor)",
                other
            ))),
        }
    }
}

/// A staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier (e.g., "p-001")
    pub id: String,

    /// Owning organization slug
    pub entity: String,

    /// Full display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Job title (e.g., "Program Director")
    pub role: String,

    /// Employment status
    pub status: PersonnelStatus,

    /// Employment arrangement
    pub employment: EmploymentKind,

    /// Date employment started
    pub started_on: NaiveDate,
}

impl Owned for Person {
    fn owner(&self) -> &str {
        &self.entity
    }
}
