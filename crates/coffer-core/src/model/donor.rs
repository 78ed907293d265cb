//! Donor records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CofferError;
use crate::scope::Owned;

/// Whether a donor is a person or an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonorKind {
    Individual,
    Organization,
    Foundation,
}

impl DonorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorKind::Individual => "individual",
            DonorKind::Organization => "organization",
            DonorKind::Foundation => "foundation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonorKind::Individual => "Individual",
            DonorKind::Organization => "Organization",
            DonorKind::Foundation => "Foundation",
        }
    }
}

impl fmt::Display for DonorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonorKind {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(DonorKind::Individual),
            "organization" => Ok(DonorKind::Organization),
            "foundation" => Ok(DonorKind::Foundation),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donor kind: {} (expected individual, organization, or foundation)",
                other
            ))),
        }
    }
}

/// Giving status of a donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonorStatus {
    Active,
    Lapsed,
    Prospective,
}

impl DonorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorStatus::Active => "active",
            DonorStatus::Lapsed => "lapsed",
            DonorStatus::Prospective => "prospective",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonorStatus::Active => "Active",
            DonorStatus::Lapsed => "Lapsed",
            DonorStatus::Prospective => "Prospective",
        }
    }
}

impl fmt::Display for DonorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonorStatus {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DonorStatus::Active),
            "lapsed" => Ok(DonorStatus::Lapsed),
            "prospective" => Ok(DonorStatus::Prospective),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donor status: {} (expected active, lapsed, or prospective)",
                other
            ))),
        }
    }
}

/// A donor record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    /// Unique identifier (e.g., "d-001")
    pub id: String,

    /// Owning organization slug
    pub entity: String,

    /// Full display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// Individual, organization, or foundation
    pub kind: DonorKind,

    /// Giving status
    pub status: DonorStatus,

    /// Lifetime giving in minor currency units (cents)
    pub total_given_minor: i64,

    /// Number of recorded gifts
    pub gift_count: u32,

    /// Date the donor joined
    pub joined_on: NaiveDate,

    /// Date of the most recent gift, if any
    pub last_gift_on: Option<NaiveDate>,
}

impl Owned for Donor {
    fn owner(&self) -> &str {
        &self.entity
    }
}
