//! The on-disk dataset and its integrity checks.
//!
//! A dataset is one JSON file holding every organization and all of
//! their records. Reads load the whole file; the pipeline and
//! projection layers then work over borrowed slices. Writes go through
//! an atomic replace so a partial write never clobbers a valid file.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CofferError, Result};
use crate::fs::write_atomic;
use crate::model::{Donation, Donor, DonorProfile, Organization, Person, Volunteer, VolunteerProfile};
use crate::scope::{scoped, EntitySelector, Owned, ALL_SELECTOR};

/// Everything in one dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub organizations: Vec<Organization>,

    #[serde(default)]
    pub donors: Vec<Donor>,

    #[serde(default)]
    pub donations: Vec<Donation>,

    #[serde(default)]
    pub personnel: Vec<Person>,

    #[serde(default)]
    pub volunteers: Vec<Volunteer>,

    #[serde(default)]
    pub donor_profiles: Vec<DonorProfile>,

    #[serde(default)]
    pub volunteer_profiles: Vec<VolunteerProfile>,
}

/// How bad an integrity finding is.
///
/// Errors mean the dataset contradicts itself; warnings mean stored
/// fixture figures drift from what the records fold to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Which integrity check produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Organizations,
    Ownership,
    Uniqueness,
    ProfileTotals,
    DonorLinks,
}

impl CheckKind {
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Organizations => "Organizations",
            CheckKind::Ownership => "Record ownership",
            CheckKind::Uniqueness => "Identifier uniqueness",
            CheckKind::ProfileTotals => "Profile totals",
            CheckKind::DonorLinks => "Donor links",
        }
    }
}

/// One integrity finding.
#[derive(Debug, Clone)]
pub struct Issue {
    pub kind: CheckKind,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(kind: CheckKind, message: String) -> Self {
        Issue {
            kind,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(kind: CheckKind, message: String) -> Self {
        Issue {
            kind,
            severity: Severity::Warning,
            message,
        }
    }
}

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CofferError::NotFound` when the file does not exist,
    /// `CofferError::Validation` when it is not a valid dataset, and
    /// `CofferError::Data` for other I/O failures.
    pub fn load(path: &Path) -> Result<Dataset> {
        let contents = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                CofferError::NotFound(format!("Dataset not found at {}", path.display()))
            } else {
                CofferError::from(err)
            }
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            CofferError::Validation(format!(
                "Dataset file {} is not valid: {}",
                path.display(),
                err
            ))
        })
    }

    /// Write the dataset as pretty-printed JSON, atomically.
    ///
    /// # Errors
    ///
    /// Returns `CofferError::Data` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        write_atomic(path, contents.as_bytes())?;
        Ok(())
    }

    /// Look up one organization by slug.
    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.id == id)
    }

    /// Donors in scope, in stored order.
    pub fn donors(&self, selector: &EntitySelector) -> Vec<&Donor> {
        scoped(&self.donors, selector)
    }

    /// Donations in scope, in stored order.
    pub fn donations(&self, selector: &EntitySelector) -> Vec<&Donation> {
        scoped(&self.donations, selector)
    }

    /// Personnel in scope, in stored order.
    pub fn personnel(&self, selector: &EntitySelector) -> Vec<&Person> {
        scoped(&self.personnel, selector)
    }

    /// Volunteers in scope, in stored order.
    pub fn volunteers(&self, selector: &EntitySelector) -> Vec<&Volunteer> {
        scoped(&self.volunteers, selector)
    }

    /// Per-organization record counts for the overview listing.
    pub fn org_counts(&self, org_id: &str) -> OrgCounts {
        OrgCounts {
            donors: count_owned(&self.donors, org_id),
            donations: count_owned(&self.donations, org_id),
            personnel: count_owned(&self.personnel, org_id),
            volunteers: count_owned(&self.volunteers, org_id),
        }
    }

    /// Run every integrity check and collect the findings.
    ///
    /// An empty result means the dataset is internally consistent.
    pub fn check(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.check_organizations(&mut issues);
        self.check_ownership(&mut issues);
        self.check_uniqueness(&mut issues);
        self.check_profile_totals(&mut issues);
        self.check_donor_links(&mut issues);
        issues
    }

    fn check_organizations(&self, issues: &mut Vec<Issue>) {
        let mut seen = HashSet::new();
        for org in &self.organizations {
            if org.id.trim().is_empty() {
                issues.push(Issue::error(
                    CheckKind::Organizations,
                    format!("Organization \"{}\" has an empty id", org.name),
                ));
            }
            if org.id.eq_ignore_ascii_case(ALL_SELECTOR) {
                issues.push(Issue::error(
                    CheckKind::Organizations,
                    format!(
                        "Organization \"{}\" uses the reserved id \"{}\"",
                        org.name, ALL_SELECTOR
                    ),
                ));
            }
            if !seen.insert(org.id.as_str()) {
                issues.push(Issue::error(
                    CheckKind::Organizations,
                    format!("Duplicate organization id: {}", org.id),
                ));
            }
        }
    }

    fn check_ownership(&self, issues: &mut Vec<Issue>) {
        let org_ids: HashSet<&str> = self.organizations.iter().map(|o| o.id.as_str()).collect();
        let mut verify = |entity: &str, what: String| {
            if !org_ids.contains(entity) {
                issues.push(Issue::error(
                    CheckKind::Ownership,
                    format!("{} belongs to unknown organization \"{}\"", what, entity),
                ));
            }
        };

        for d in &self.donors {
            verify(&d.entity, format!("Donor {}", d.id));
        }
        for d in &self.donations {
            verify(&d.entity, format!("Donation {}", d.id));
        }
        for p in &self.personnel {
            verify(&p.entity, format!("Person {}", p.id));
        }
        for v in &self.volunteers {
            verify(&v.entity, format!("Volunteer {}", v.id));
        }
        for p in &self.donor_profiles {
            verify(&p.entity, format!("Donor profile \"{}\"", p.name));
        }
        for p in &self.volunteer_profiles {
            verify(&p.entity, format!("Volunteer profile \"{}\"", p.name));
        }
    }

    fn check_uniqueness(&self, issues: &mut Vec<Issue>) {
        duplicate_ids(self.donors.iter().map(|d| d.id.as_str()), "donor", issues);
        duplicate_ids(
            self.donations.iter().map(|d| d.id.as_str()),
            "donation",
            issues,
        );
        duplicate_ids(
            self.personnel.iter().map(|p| p.id.as_str()),
            "person",
            issues,
        );
        duplicate_ids(
            self.volunteers.iter().map(|v| v.id.as_str()),
            "volunteer",
            issues,
        );

        duplicate_profiles(
            self.donor_profiles.iter().map(|p| (p.name.as_str(), p.entity.as_str())),
            "donor profile",
            issues,
        );
        duplicate_profiles(
            self.volunteer_profiles
                .iter()
                .map(|p| (p.name.as_str(), p.entity.as_str())),
            "volunteer profile",
            issues,
        );
    }

    fn check_profile_totals(&self, issues: &mut Vec<Issue>) {
        for profile in &self.donor_profiles {
            let folded_total: i64 = profile.history.iter().map(|g| g.amount_minor).sum();
            let folded_count = profile.history.len();
            if folded_total != profile.total_given_minor {
                issues.push(Issue::warning(
                    CheckKind::ProfileTotals,
                    format!(
                        "Donor profile \"{}\" ({}): stored total {} disagrees with history total {}",
                        profile.name,
                        profile.entity,
                        profile.total_given_minor,
                        folded_total
                    ),
                ));
            }
            if folded_count != profile.gift_count as usize {
                issues.push(Issue::warning(
                    CheckKind::ProfileTotals,
                    format!(
                        "Donor profile \"{}\" ({}): stored gift count {} disagrees with history count {}",
                        profile.name,
                        profile.entity,
                        profile.gift_count,
                        folded_count
                    ),
                ));
            }
        }

        for profile in &self.volunteer_profiles {
            let folded_hours: u64 = profile.sessions.iter().map(|s| u64::from(s.hours)).sum();
            if folded_hours != u64::from(profile.hours_logged) {
                issues.push(Issue::warning(
                    CheckKind::ProfileTotals,
                    format!(
                        "Volunteer profile \"{}\" ({}): stored hours {} disagree with session hours {}",
                        profile.name,
                        profile.entity,
                        profile.hours_logged,
                        folded_hours
                    ),
                ));
            }
        }
    }

    fn check_donor_links(&self, issues: &mut Vec<Issue>) {
        let donor_names: HashSet<(&str, &str)> = self
            .donors
            .iter()
            .map(|d| (d.entity.as_str(), d.name.as_str()))
            .collect();

        for donation in &self.donations {
            if let Some(donor) = &donation.donor {
                if !donor_names.contains(&(donation.entity.as_str(), donor.as_str())) {
                    issues.push(Issue::warning(
                        CheckKind::DonorLinks,
                        format!(
                            "Donation {} names donor \"{}\" with no donor record under {}",
                            donation.id, donor, donation.entity
                        ),
                    ));
                }
            }
        }
    }
}

/// Per-organization record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrgCounts {
    pub donors: usize,
    pub donations: usize,
    pub personnel: usize,
    pub volunteers: usize,
}

fn count_owned<T: Owned>(records: &[T], org_id: &str) -> usize {
    records.iter().filter(|r| r.owner() == org_id).count()
}

fn duplicate_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    what: &str,
    issues: &mut Vec<Issue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(Issue::error(
                CheckKind::Uniqueness,
                format!("Duplicate {} id: {}", what, id),
            ));
        }
    }
}

fn duplicate_profiles<'a>(
    keys: impl Iterator<Item = (&'a str, &'a str)>,
    what: &str,
    issues: &mut Vec<Issue>,
) {
    let mut seen = HashSet::new();
    for (name, entity) in keys {
        if !seen.insert((name, entity)) {
            issues.push(Issue::error(
                CheckKind::Uniqueness,
                format!("Duplicate {} for \"{}\" under {}", what, name, entity),
            ));
        }
    }
}
