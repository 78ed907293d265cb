//! Donation records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CofferError;
use crate::scope::Owned;

/// How a donation was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Paypal,
    Check,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Check => "check",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Check => "Check",
            PaymentMethod::Cash => "Cash",
        }
    }

    /// Three-letter uppercase prefix used for statement reference IDs.
    ///
    /// Derived from the first three letters of the label: CRE, BAN, PAY,
    /// CHE, CAS.
    pub fn ref_prefix(&self) -> String {
        self.label()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(3)
            .collect::<String>()
            .to_ascii_uppercase()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "credit-card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" | "bank-transfer" => Ok(PaymentMethod::BankTransfer),
            "paypal" => Ok(PaymentMethod::Paypal),
            "check" => Ok(PaymentMethod::Check),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown payment method: {} (expected credit_card, bank_transfer, paypal, check, or cash)",
                other
            ))),
        }
    }
}

/// Processing status of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Completed => "completed",
            DonationStatus::Pending => "pending",
            DonationStatus::Failed => "failed",
            DonationStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationStatus::Completed => "Completed",
            DonationStatus::Pending => "Pending",
            DonationStatus::Failed => "Failed",
            DonationStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(DonationStatus::Completed),
            "pending" => Ok(DonationStatus::Pending),
            "failed" => Ok(DonationStatus::Failed),
            "refunded" => Ok(DonationStatus::Refunded),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donation status: {} (expected completed, pending, failed, or refunded)",
                other
            ))),
        }
    }
}

/// Whether a donation is a one-off or part of a recurring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationKind {
    OneTime,
    Recurring,
}

impl DonationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationKind::OneTime => "one_time",
            DonationKind::Recurring => "recurring",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationKind::OneTime => "One-Time",
            DonationKind::Recurring => "Recurring",
        }
    }
}

impl fmt::Display for DonationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonationKind {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one_time" | "one-time" | "onetime" => Ok(DonationKind::OneTime),
            "recurring" => Ok(DonationKind::Recurring),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown donation kind: {} (expected one_time or recurring)",
                other
            ))),
        }
    }
}

/// A donation record.
///
/// `donor` is the donor's display name, not an ID, and may be absent:
/// an unassigned donation is a real state (e.g., an anonymous envelope)
/// distinct from an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    /// Unique identifier (e.g., "gift-0104")
    pub id: String,

    /// Owning organization slug
    pub entity: String,

    /// Donor name, or None while unassigned
    pub donor: Option<String>,

    /// Amount in minor currency units (cents)
    pub amount_minor: i64,

    /// Date the donation was received
    pub date: NaiveDate,

    /// Payment method
    pub method: PaymentMethod,

    /// Processing status
    pub status: DonationStatus,

    /// One-time or recurring
    pub kind: DonationKind,

    /// Purpose or fund designation (e.g., "Youth Programs")
    pub purpose: String,
}

impl Owned for Donation {
    fn owner(&self) -> &str {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_prefix_per_method() {
        assert_eq!(PaymentMethod::CreditCard.ref_prefix(), "CRE");
        assert_eq!(PaymentMethod::BankTransfer.ref_prefix(), "BAN");
        assert_eq!(PaymentMethod::Paypal.ref_prefix(), "PAY");
        assert_eq!(PaymentMethod::Check.ref_prefix(), "CHE");
        assert_eq!(PaymentMethod::Cash.ref_prefix(), "CAS");
    }

    #[test]
    fn test_payment_method_parse_accepts_dashes() {
        assert_eq!(
            "credit-card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "BANK_TRANSFER".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
    }
}
