//! JSON output formatting for records, lists, and profiles.
//!
//! List payloads carry an envelope (`entity`, `totals`, `rows`) rather than
//! a bare array, so scripted consumers get the folded figures without
//! recomputing them. Money fields appear twice: raw minor units for
//! arithmetic and a formatted string for display.

use coffer_core::dataset::{Issue, OrgCounts, Severity};
use coffer_core::intake::Receipt;
use coffer_core::model::{format_usd, Donation, Donor, Organization, Person, Volunteer};
use coffer_core::pipeline::{DonationView, DonorView, PersonnelView, VolunteerView};
use coffer_core::projection::{DonorProfileView, HistoryLine, VolunteerProfileView};
use coffer_core::EntitySelector;

/// Convert an organization plus its record counts to JSON.
pub fn org_json(org: &Organization, counts: &OrgCounts) -> serde_json::Value {
    serde_json::json!({
        "id": org.id,
        "name": org.name,
        "kind": org.kind.as_str(),
        "counts": {
            "donors": counts.donors,
            "donations": counts.donations,
            "personnel": counts.personnel,
            "volunteers": counts.volunteers,
        },
    })
}

/// Convert a donor record to JSON.
pub fn donor_json(donor: &Donor) -> serde_json::Value {
    serde_json::json!({
        "id": donor.id,
        "entity": donor.entity,
        "name": donor.name,
        "email": donor.email,
        "phone": donor.phone,
        "kind": donor.kind.as_str(),
        "status": donor.status.as_str(),
        "total_given_minor": donor.total_given_minor,
        "total_given": format_usd(donor.total_given_minor),
        "gift_count": donor.gift_count,
        "joined_on": donor.joined_on,
        "last_gift_on": donor.last_gift_on,
    })
}

/// Convert a donation record to JSON.
pub fn donation_json(donation: &Donation) -> serde_json::Value {
    serde_json::json!({
        "id": donation.id,
        "entity": donation.entity,
        "donor": donation.donor,
        "amount_minor": donation.amount_minor,
        "amount": format_usd(donation.amount_minor),
        "date": donation.date,
        "method": donation.method.as_str(),
        "status": donation.status.as_str(),
        "kind": donation.kind.as_str(),
        "purpose": donation.purpose,
    })
}

/// Convert a personnel record to JSON.
pub fn person_json(person: &Person) -> serde_json::Value {
    serde_json::json!({
        "id": person.id,
        "entity": person.entity,
        "name": person.name,
        "email": person.email,
        "role": person.role,
        "status": person.status.as_str(),
        "employment": person.employment.as_str(),
        "started_on": person.started_on,
    })
}

/// Convert a volunteer record to JSON.
pub fn volunteer_json(volunteer: &Volunteer) -> serde_json::Value {
    serde_json::json!({
        "id": volunteer.id,
        "entity": volunteer.entity,
        "name": volunteer.name,
        "email": volunteer.email,
        "status": volunteer.status.as_str(),
        "skills": volunteer.skills,
        "hours_logged": volunteer.hours_logged,
        "joined_on": volunteer.joined_on,
        "last_session_on": volunteer.last_session_on,
    })
}

/// List envelope for donors.
pub fn donor_list_json(selector: &EntitySelector, view: &DonorView<'_>) -> serde_json::Value {
    serde_json::json!({
        "entity": selector.as_str(),
        "totals": {
            "count": view.totals.count,
            "total_given_minor": view.totals.total_given_minor,
            "total_given": format_usd(view.totals.total_given_minor),
            "active": view.totals.active,
        },
        "rows": view.rows.iter().map(|d| donor_json(d)).collect::<Vec<_>>(),
    })
}

/// List envelope for donations.
pub fn donation_list_json(selector: &EntitySelector, view: &DonationView<'_>) -> serde_json::Value {
    serde_json::json!({
        "entity": selector.as_str(),
        "totals": {
            "count": view.totals.count,
            "amount_minor": view.totals.amount_minor,
            "amount": format_usd(view.totals.amount_minor),
            "completed": view.totals.completed,
            "unassigned": view.totals.unassigned,
        },
        "rows": view.rows.iter().map(|d| donation_json(d)).collect::<Vec<_>>(),
    })
}

/// List envelope for personnel.
pub fn personnel_list_json(selector: &EntitySelector, view: &PersonnelView<'_>) -> serde_json::Value {
    serde_json::json!({
        "entity": selector.as_str(),
        "totals": {
            "count": view.totals.count,
            "active": view.totals.active,
            "on_leave": view.totals.on_leave,
        },
        "rows": view.rows.iter().map(|p| person_json(p)).collect::<Vec<_>>(),
    })
}

/// List envelope for volunteers.
pub fn volunteer_list_json(selector: &EntitySelector, view: &VolunteerView<'_>) -> serde_json::Value {
    serde_json::json!({
        "entity": selector.as_str(),
        "totals": {
            "count": view.totals.count,
            "active": view.totals.active,
            "hours": view.totals.hours,
        },
        "rows": view.rows.iter().map(|v| volunteer_json(v)).collect::<Vec<_>>(),
    })
}

/// Convert a merged history line to JSON.
fn history_line_json(line: &HistoryLine) -> serde_json::Value {
    serde_json::json!({
        "date": line.date,
        "amount_minor": line.amount_minor,
        "amount": format_usd(line.amount_minor),
        "detail": line.detail,
        "adjustment": line.adjustment,
    })
}

/// Donor profile payload with computed figures and merged history.
pub fn donor_profile_json(
    view: &DonorProfileView<'_>,
    history: &[HistoryLine],
    adjusted_total_minor: i64,
) -> serde_json::Value {
    serde_json::json!({
        "name": view.profile.name,
        "entity": view.profile.entity,
        "email": view.profile.email,
        "phone": view.profile.phone,
        "since": view.profile.since,
        "lifetime_total_minor": view.lifetime_total_minor,
        "lifetime_total": format_usd(view.lifetime_total_minor),
        "adjusted_total_minor": adjusted_total_minor,
        "adjusted_total": format_usd(adjusted_total_minor),
        "gift_count": view.gift_count,
        "first_gift_on": view.first_gift_on,
        "last_gift_on": view.last_gift_on,
        "history": history.iter().map(history_line_json).collect::<Vec<_>>(),
    })
}

/// Volunteer profile payload with computed figures and sessions.
pub fn volunteer_profile_json(view: &VolunteerProfileView<'_>) -> serde_json::Value {
    serde_json::json!({
        "name": view.profile.name,
        "entity": view.profile.entity,
        "email": view.profile.email,
        "since": view.profile.since,
        "hours": view.hours,
        "session_count": view.session_count,
        "last_session_on": view.last_session_on,
        "sessions": view.profile.sessions.iter().map(|s| serde_json::json!({
            "date": s.date,
            "hours": s.hours,
            "activity": s.activity,
        })).collect::<Vec<_>>(),
    })
}

/// Integrity check payload.
pub fn check_json(issues: &[Issue]) -> serde_json::Value {
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    serde_json::json!({
        "status": if errors == 0 { "ok" } else { "failed" },
        "errors": errors,
        "warnings": warnings,
        "issues": issues.iter().map(|i| serde_json::json!({
            "kind": i.kind.label(),
            "severity": match i.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            "message": i.message,
        })).collect::<Vec<_>>(),
    })
}

/// Receipt payload for intake commands.
pub fn receipt_json(receipt: &Receipt) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "reference": receipt.reference,
        "summary": receipt.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coffer_core::model::{DonationKind, DonationStatus, DonorKind, DonorStatus, PaymentMethod};
    use coffer_core::pipeline::DonationQuery;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_donation(id: &str, donor: Option<&str>, amount: i64) -> Donation {
        Donation {
            id: id.to_string(),
            entity: "awakenings".to_string(),
            donor: donor.map(|d| d.to_string()),
            amount_minor: amount,
            date: date("2025-03-01"),
            method: PaymentMethod::CreditCard,
            status: DonationStatus::Completed,
            kind: DonationKind::OneTime,
            purpose: "General Fund".to_string(),
        }
    }

    #[test]
    fn test_donation_json_fields() {
        let donation = sample_donation("gift-0101", Some("Sarah Johnson"), 50_000);
        let value = donation_json(&donation);
        assert_eq!(value["id"], "gift-0101");
        assert_eq!(value["donor"], "Sarah Johnson");
        assert_eq!(value["amount_minor"], 50_000);
        assert_eq!(value["amount"], "$500.00");
        assert_eq!(value["date"], "2025-03-01");
        assert_eq!(value["method"], "credit_card");
    }

    #[test]
    fn test_unassigned_donor_is_null() {
        let donation = sample_donation("gift-0108", None, 7_500);
        let value = donation_json(&donation);
        assert!(value["donor"].is_null());
    }

    #[test]
    fn test_donation_list_envelope() {
        let donations = vec![
            sample_donation("gift-0101", Some("Sarah Johnson"), 50_000),
            sample_donation("gift-0108", None, 7_500),
        ];
        let refs: Vec<&Donation> = donations.iter().collect();
        let view = DonationQuery::default().apply(&refs);
        let payload = donation_list_json(&EntitySelector::One("awakenings".to_string()), &view);

        assert_eq!(payload["entity"], "awakenings");
        assert_eq!(payload["totals"]["count"], 2);
        assert_eq!(payload["totals"]["amount_minor"], 57_500);
        assert_eq!(payload["totals"]["unassigned"], 1);
        assert_eq!(payload["rows"].as_array().map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_donor_json_optional_fields() {
        let donor = Donor {
            id: "d-007".to_string(),
            entity: "bonfire".to_string(),
            name: "Omar Haddad".to_string(),
            email: "omar@example.org".to_string(),
            phone: None,
            kind: DonorKind::Individual,
            status: DonorStatus::Prospective,
            total_given_minor: 0,
            gift_count: 0,
            joined_on: date("2025-05-20"),
            last_gift_on: None,
        };
        let value = donor_json(&donor);
        assert!(value["phone"].is_null());
        assert!(value["last_gift_on"].is_null());
        assert_eq!(value["total_given"], "$0.00");
    }
}
