//! Record intake: drafts, validation, and the persistence seam.
//!
//! Create and update commands build a draft, validate it, and hand it to
//! an [`IntakeSink`]. The sink decides what persistence means; the
//! default [`AcknowledgeSink`] accepts valid drafts and returns a
//! receipt without writing anything, so the command surface works end to
//! end before any storage backend exists.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{CofferError, Result};
use crate::model::{DonationKind, DonorKind, DonorStatus, PaymentMethod};

/// Acknowledgment returned for an accepted draft.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Reference for the acknowledgment
    pub reference: Uuid,

    /// One-line summary of what was accepted
    pub summary: String,
}

impl Receipt {
    fn new(summary: String) -> Self {
        Receipt {
            reference: Uuid::new_v4(),
            summary,
        }
    }
}

/// Result of submitting a draft to a sink.
pub type CommandResult = Result<Receipt>;

/// A new-donor submission.
#[derive(Debug, Clone)]
pub struct DonorDraft {
    /// Owning organization slug; must name one organization
    pub entity: String,

    pub name: String,

    pub email: String,

    pub phone: Option<String>,

    pub kind: DonorKind,

    pub status: DonorStatus,
}

impl DonorDraft {
    /// Field-local validation; entity existence is the caller's check.
    ///
    /// # Errors
    ///
    /// Returns `CofferError::Validation` naming the first failing field.
    pub fn validate(&self) -> Result<()> {
        if self.entity.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donor entity must not be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donor name must not be empty".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(CofferError::Validation(format!(
                "Donor email looks invalid: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// A new-donation submission.
#[derive(Debug, Clone)]
pub struct DonationDraft {
    /// Owning organization slug; must name one organization
    pub entity: String,

    /// Donor name, or None for an unassigned donation
    pub donor: Option<String>,

    /// Amount in minor units; must be positive
    pub amount_minor: i64,

    pub date: NaiveDate,

    pub method: PaymentMethod,

    pub kind: DonationKind,

    pub purpose: String,
}

impl DonationDraft {
    /// Field-local validation; entity and donor existence are the
    /// caller's checks.
    ///
    /// # Errors
    ///
    /// Returns `CofferError::Validation` naming the first failing field.
    pub fn validate(&self) -> Result<()> {
        if self.entity.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donation entity must not be empty".to_string(),
            ));
        }
        if self.amount_minor <= 0 {
            return Err(CofferError::Validation(
                "Donation amount must be positive".to_string(),
            ));
        }
        if self.purpose.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donation purpose must not be empty".to_string(),
            ));
        }
        if let Some(donor) = &self.donor {
            if donor.trim().is_empty() {
                return Err(CofferError::Validation(
                    "Donor name must not be empty; omit it for an unassigned donation".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Attach a donor to an existing unassigned donation.
#[derive(Debug, Clone)]
pub struct AssignmentDraft {
    pub donation_id: String,

    pub donor: String,
}

impl AssignmentDraft {
    /// # Errors
    ///
    /// Returns `CofferError::Validation` naming the first failing field.
    pub fn validate(&self) -> Result<()> {
        if self.donation_id.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donation id must not be empty".to_string(),
            ));
        }
        if self.donor.trim().is_empty() {
            return Err(CofferError::Validation(
                "Donor name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where accepted drafts go.
///
/// Implementations define persistence. The CLI ships with
/// [`AcknowledgeSink`]; a real backend plugs in here without touching
/// the command layer.
pub trait IntakeSink: Send + Sync {
    /// Submit a donor draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a rejected draft, or a sink
    /// error if persistence fails.
    fn submit_donor(&mut self, draft: &DonorDraft) -> CommandResult;

    /// Submit a donation draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a rejected draft, or a sink
    /// error if persistence fails.
    fn submit_donation(&mut self, draft: &DonationDraft) -> CommandResult;

    /// Submit a donor assignment for an existing donation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a rejected draft, or a sink
    /// error if persistence fails.
    fn submit_assignment(&mut self, draft: &AssignmentDraft) -> CommandResult;
}

/// The no-op sink: validates, acknowledges, persists nothing.
///
/// The receipt's summary says so explicitly, so nothing downstream can
/// mistake an acknowledgment for a durable write.
#[derive(Debug, Default)]
pub struct AcknowledgeSink;

impl IntakeSink for AcknowledgeSink {
    fn submit_donor(&mut self, draft: &DonorDraft) -> CommandResult {
        draft.validate()?;
        Ok(Receipt::new(format!(
            "Donor {} recorded for {} (not persisted)",
            draft.name, draft.entity
        )))
    }

    fn submit_donation(&mut self, draft: &DonationDraft) -> CommandResult {
        draft.validate()?;
        let donor = draft.donor.as_deref().unwrap_or("unassigned");
        Ok(Receipt::new(format!(
            "Donation of {} on {} recorded for {} ({}, not persisted)",
            crate::model::money::format_usd(draft.amount_minor),
            draft.date,
            draft.entity,
            donor
        )))
    }

    fn submit_assignment(&mut self, draft: &AssignmentDraft) -> CommandResult {
        draft.validate()?;
        Ok(Receipt::new(format!(
            "Donation {} assigned to {} (not persisted)",
            draft.donation_id, draft.donor
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation_draft() -> DonationDraft {
        DonationDraft {
            entity: "awakenings".to_string(),
            donor: Some("Sarah Johnson".to_string()),
            amount_minor: 50000,
            date: NaiveDate::parse_from_str("2025-07-01", "%Y-%m-%d").unwrap(),
            method: PaymentMethod::CreditCard,
            kind: DonationKind::Recurring,
            purpose: "General Fund".to_string(),
        }
    }

    #[test]
    fn test_valid_donation_is_acknowledged() {
        let mut sink = AcknowledgeSink;
        let receipt = sink.submit_donation(&donation_draft()).unwrap();
        assert!(receipt.summary.contains("$500.00"));
        assert!(receipt.summary.contains("not persisted"));
    }

    #[test]
    fn test_each_receipt_gets_its_own_reference() {
        let mut sink = AcknowledgeSink;
        let first = sink.submit_donation(&donation_draft()).unwrap();
        let second = sink.submit_donation(&donation_draft()).unwrap();
        assert_ne!(first.reference, second.reference);
    }

    #[test]
    fn test_nonpositive_amount_is_rejected() {
        let mut sink = AcknowledgeSink;
        let mut draft = donation_draft();
        draft.amount_minor = 0;
        assert!(sink.submit_donation(&draft).is_err());
        draft.amount_minor = -100;
        assert!(sink.submit_donation(&draft).is_err());
    }

    #[test]
    fn test_unassigned_donation_draft_is_valid() {
        let mut sink = AcknowledgeSink;
        let mut draft = donation_draft();
        draft.donor = None;
        let receipt = sink.submit_donation(&draft).unwrap();
        assert!(receipt.summary.contains("unassigned"));
    }

    #[test]
    fn test_donor_draft_requires_plausible_email() {
        let draft = DonorDraft {
            entity: "awakenings".to_string(),
            name: "Marcus Lee".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            kind: DonorKind::Individual,
            status: DonorStatus::Active,
        };
        assert!(draft.validate().is_err());
    }

    // Compile-time check that the trait stays object-safe.
    fn _accepts_dyn_sink(_sink: &mut dyn IntakeSink) {}
}
