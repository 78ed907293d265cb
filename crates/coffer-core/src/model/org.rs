//! Organizations: the tenants every other record belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CofferError;

/// What sort of organization a tenant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgKind {
    Nonprofit,
    Collective,
    Fund,
}

impl OrgKind {
    /// Stable lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgKind::Nonprofit => "nonprofit",
            OrgKind::Collective => "collective",
            OrgKind::Fund => "fund",
        }
    }

    /// Human-facing label for table output.
    pub fn label(&self) -> &'static str {
        match self {
            OrgKind::Nonprofit => "Nonprofit",
            OrgKind::Collective => "Collective",
            OrgKind::Fund => "Fund",
        }
    }
}

impl fmt::Display for OrgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrgKind {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nonprofit" => Ok(OrgKind::Nonprofit),
            "collective" => Ok(OrgKind::Collective),
            "fund" => Ok(OrgKind::Fund),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown organization kind: {} (expected nonprofit, collective, or fund)",
                other
            ))),
        }
    }
}

/// A tenant organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Stable slug used as the entity key on every owned record
    pub id: String,

    /// Display name (e.g., "Awakenings Foundation")
    pub name: String,

    /// Organization kind
    pub kind: OrgKind,
}
