//! The starter dataset written by `coffer init`.
//!
//! Three organizations with donors, donations, personnel, volunteers,
//! and profiles, covering every enum variant and every edge the query
//! pipeline cares about: unassigned donations, lapsed and prospective
//! donors, a volunteer with no sessions yet. The seed is internally
//! consistent, so a fresh dataset passes `coffer check` clean.

use chrono::NaiveDate;

use crate::dataset::Dataset;
use crate::model::{
    Donation, DonationKind, DonationStatus, Donor, DonorKind, DonorProfile, DonorStatus,
    EmploymentKind, Gift, OrgKind, Organization, PaymentMethod, Person, PersonnelStatus, Session,
    Volunteer, VolunteerProfile, VolunteerStatus,
};

/// Build the starter dataset.
pub fn seed() -> Dataset {
    Dataset {
        organizations: organizations(),
        donors: donors(),
        donations: donations(),
        personnel: personnel(),
        volunteers: volunteers(),
        donor_profiles: donor_profiles(),
        volunteer_profiles: volunteer_profiles(),
    }
}

fn day(s: &str) -> NaiveDate {
    // A malformed literal falls back to the epoch; a fixture test
    // asserts no seeded record carries that date.
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: "awakenings".to_string(),
            name: "Awakenings Foundation".to_string(),
            kind: OrgKind::Nonprofit,
        },
        Organization {
            id: "bonfire".to_string(),
            name: "Bonfire Collective".to_string(),
            kind: OrgKind::Collective,
        },
        Organization {
            id: "tidewater".to_string(),
            name: "Tidewater Relief Fund".to_string(),
            kind: OrgKind::Fund,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn donor(
    id: &str,
    entity: &str,
    name: &str,
    email: &str,
    kind: DonorKind,
    status: DonorStatus,
    total_given_minor: i64,
    gift_count: u32,
    joined_on: &str,
    last_gift_on: Option<&str>,
) -> Donor {
    Donor {
        id: id.to_string(),
        entity: entity.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        kind,
        status,
        total_given_minor,
        gift_count,
        joined_on: day(joined_on),
        last_gift_on: last_gift_on.map(day),
    }
}

fn donors() -> Vec<Donor> {
    let mut donors = vec![
        donor(
            "d-001",
            "awakenings",
            "Sarah Johnson",
            "sarah.johnson@example.org",
            DonorKind::Individual,
            DonorStatus::Active,
            250000,
            5,
            "2023-02-14",
            Some("2025-07-01"),
        ),
        donor(
            "d-002",
            "awakenings",
            "Marcus Lee",
            "marcus.lee@example.org",
            DonorKind::Individual,
            DonorStatus::Active,
            85000,
            3,
            "2022-08-03",
            Some("2025-05-20"),
        ),
        donor(
            "d-003",
            "awakenings",
            "Harbor Light Trust",
            "grants@harborlight.example.org",
            DonorKind::Foundation,
            DonorStatus::Active,
            1500000,
            2,
            "2021-05-19",
            Some("2024-12-15"),
        ),
        donor(
            "d-004",
            "bonfire",
            "Priya Nair",
            "priya.nair@example.org",
            DonorKind::Individual,
            DonorStatus::Active,
            30000,
            2,
            "2024-01-22",
            Some("2025-04-18"),
        ),
        donor(
            "d-005",
            "bonfire",
            "Cascade Supply Co.",
            "giving@cascadesupply.example.org",
            DonorKind::Organization,
            DonorStatus::Lapsed,
            120000,
            1,
            "2022-03-10",
            Some("2023-11-02"),
        ),
        donor(
            "d-006",
            "tidewater",
            "Elena Petrova",
            "elena.petrova@example.org",
            DonorKind::Individual,
            DonorStatus::Active,
            45000,
            3,
            "2023-09-05",
            Some("2025-06-30"),
        ),
        donor(
            "d-007",
            "tidewater",
            "Omar Haddad",
            "omar.haddad@example.org",
            DonorKind::Individual,
            DonorStatus::Prospective,
            0,
            0,
            "2025-05-12",
            None,
        ),
        donor(
            "d-008",
            "awakenings",
            "June Park",
            "june.park@example.org",
            DonorKind::Individual,
            DonorStatus::Lapsed,
            20000,
            1,
            "2021-11-30",
            Some("2022-12-24"),
        ),
    ];
    donors[0].phone = Some("555-0142".to_string());
    donors
}

#[allow(clippy::too_many_arguments)]
fn gift_row(
    id: &str,
    entity: &str,
    donor: Option<&str>,
    amount_minor: i64,
    date: &str,
    method: PaymentMethod,
    status: DonationStatus,
    kind: DonationKind,
    purpose: &str,
) -> Donation {
    Donation {
        id: id.to_string(),
        entity: entity.to_string(),
        donor: donor.map(|d| d.to_string()),
        amount_minor,
        date: day(date),
        method,
        status,
        kind,
        purpose: purpose.to_string(),
    }
}

fn donations() -> Vec<Donation> {
    let mut rows = Vec::new();

    // Sarah Johnson's recurring monthly gift.
    for (index, date) in [
        "2025-03-01",
        "2025-04-01",
        "2025-05-01",
        "2025-06-01",
        "2025-07-01",
    ]
    .iter()
    .enumerate()
    {
        rows.push(gift_row(
            &format!("gift-010{}", index + 1),
            "awakenings",
            Some("Sarah Johnson"),
            50000,
            date,
            PaymentMethod::CreditCard,
            DonationStatus::Completed,
            DonationKind::Recurring,
            "General Fund",
        ));
    }

    rows.extend([
        gift_row(
            "gift-0106",
            "awakenings",
            Some("Marcus Lee"),
            30000,
            "2025-05-20",
            PaymentMethod::BankTransfer,
            DonationStatus::Completed,
            DonationKind::OneTime,
            "Youth Programs",
        ),
        gift_row(
            "gift-0107",
            "awakenings",
            Some("Harbor Light Trust"),
            1000000,
            "2024-12-15",
            PaymentMethod::Check,
            DonationStatus::Completed,
            DonationKind::OneTime,
            "Capital Campaign",
        ),
        gift_row(
            "gift-0108",
            "awakenings",
            None,
            7500,
            "2025-06-10",
            PaymentMethod::Cash,
            DonationStatus::Completed,
            DonationKind::OneTime,
            "General Fund",
        ),
        gift_row(
            "gift-0109",
            "awakenings",
            Some("June Park"),
            12000,
            "2025-02-14",
            PaymentMethod::Paypal,
            DonationStatus::Refunded,
            DonationKind::OneTime,
            "Youth Programs",
        ),
        gift_row(
            "gift-0110",
            "bonfire",
            Some("Priya Nair"),
            15000,
            "2025-04-18",
            PaymentMethod::Paypal,
            DonationStatus::Completed,
            DonationKind::OneTime,
            "Community Garden",
        ),
        gift_row(
            "gift-0111",
            "bonfire",
            None,
            4000,
            "2025-03-22",
            PaymentMethod::Cash,
            DonationStatus::Pending,
            DonationKind::OneTime,
            "Community Garden",
        ),
        gift_row(
            "gift-0112",
            "bonfire",
            Some("Cascade Supply Co."),
            120000,
            "2023-11-02",
            PaymentMethod::BankTransfer,
            DonationStatus::Completed,
            DonationKind::OneTime,
            "Tool Library",
        ),
        gift_row(
            "gift-0113",
            "tidewater",
            Some("Elena Petrova"),
            20000,
            "2025-06-30",
            PaymentMethod::CreditCard,
            DonationStatus::Completed,
            DonationKind::Recurring,
            "Disaster Relief",
        ),
        gift_row(
            "gift-0114",
            "tidewater",
            Some("Elena Petrova"),
            20000,
            "2025-05-30",
            PaymentMethod::CreditCard,
            DonationStatus::Completed,
            DonationKind::Recurring,
            "Disaster Relief",
        ),
        gift_row(
            "gift-0115",
            "tidewater",
            None,
            50000,
            "2025-07-08",
            PaymentMethod::Check,
            DonationStatus::Failed,
            DonationKind::OneTime,
            "Disaster Relief",
        ),
    ]);

    rows
}

fn person(
    id: &str,
    entity: &str,
    name: &str,
    role: &str,
    status: PersonnelStatus,
    employment: EmploymentKind,
    started_on: &str,
) -> Person {
    Person {
        id: id.to_string(),
        entity: entity.to_string(),
        name: name.to_string(),
        email: format!(
            "{}@example.org",
            name.to_lowercase().replace(' ', ".")
        ),
        role: role.to_string(),
        status,
        employment,
        started_on: day(started_on),
    }
}

fn personnel() -> Vec<Person> {
    vec![
        person(
            "p-001",
            "awakenings",
            "Dana Whitfield",
            "Program Director",
            PersonnelStatus::Active,
            EmploymentKind::FullTime,
            "2021-06-01",
        ),
        person(
            "p-002",
            "awakenings",
            "Evan Ross",
            "Accountant",
            PersonnelStatus::Active,
            EmploymentKind::PartTime,
            "2022-01-10",
        ),
        person(
            "p-003",
            "awakenings",
            "Fay Chen",
            "Outreach Coordinator",
            PersonnelStatus::OnLeave,
            EmploymentKind::FullTime,
            "2023-03-15",
        ),
        person(
            "p-004",
            "bonfire",
            "Theo Brandt",
            "Operations Lead",
            PersonnelStatus::Active,
            EmploymentKind::Contractor,
            "2024-02-01",
        ),
        person(
            "p-005",
            "tidewater",
            "Ivy Osei",
            "Logistics Manager",
            PersonnelStatus::Active,
            EmploymentKind::FullTime,
            "2022-09-12",
        ),
        person(
            "p-006",
            "tidewater",
            "Noel Vega",
            "Field Coordinator",
            PersonnelStatus::Ended,
            EmploymentKind::Contractor,
            "2023-04-03",
        ),
    ]
}

fn volunteer(
    id: &str,
    entity: &str,
    name: &str,
    status: VolunteerStatus,
    skills: &[&str],
    hours_logged: u32,
    joined_on: &str,
    last_session_on: Option<&str>,
) -> Volunteer {
    Volunteer {
        id: id.to_string(),
        entity: entity.to_string(),
        name: name.to_string(),
        email: format!(
            "{}@example.org",
            name.to_lowercase().replace(' ', ".")
        ),
        status,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        hours_logged,
        joined_on: day(joined_on),
        last_session_on: last_session_on.map(day),
    }
}

fn volunteers() -> Vec<Volunteer> {
    vec![
        volunteer(
            "v-001",
            "awakenings",
            "Gia Torres",
            VolunteerStatus::Active,
            &["tutoring", "event setup"],
            16,
            "2024-04-01",
            Some("2025-07-15"),
        ),
        volunteer(
            "v-002",
            "awakenings",
            "Hal Jensen",
            VolunteerStatus::Inactive,
            &["driving"],
            12,
            "2023-10-05",
            Some("2024-08-19"),
        ),
        volunteer(
            "v-003",
            "bonfire",
            "Ines Aguilar",
            VolunteerStatus::Active,
            &["cooking", "gardening"],
            38,
            "2024-06-20",
            Some("2025-06-28"),
        ),
        volunteer(
            "v-004",
            "bonfire",
            "Kofi Mensah",
            VolunteerStatus::Applicant,
            &[],
            0,
            "2025-07-30",
            None,
        ),
        volunteer(
            "v-005",
            "tidewater",
            "Lena Brook",
            VolunteerStatus::Active,
            &["logistics", "first aid"],
            22,
            "2022-05-14",
            Some("2025-07-02"),
        ),
    ]
}

fn gift(date: &str, amount_minor: i64, method: PaymentMethod, kind: DonationKind, purpose: &str) -> Gift {
    Gift {
        date: day(date),
        amount_minor,
        method,
        kind,
        purpose: purpose.to_string(),
    }
}

fn donor_profiles() -> Vec<DonorProfile> {
    vec![
        DonorProfile {
            name: "Sarah Johnson".to_string(),
            entity: "awakenings".to_string(),
            email: "sarah.johnson@example.org".to_string(),
            phone: Some("555-0142".to_string()),
            since: day("2023-02-14"),
            total_given_minor: 250000,
            gift_count: 5,
            history: vec![
                gift(
                    "2025-03-01",
                    50000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "General Fund",
                ),
                gift(
                    "2025-04-01",
                    50000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "General Fund",
                ),
                gift(
                    "2025-05-01",
                    50000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "General Fund",
                ),
                gift(
                    "2025-06-01",
                    50000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "General Fund",
                ),
                gift(
                    "2025-07-01",
                    50000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "General Fund",
                ),
            ],
        },
        DonorProfile {
            name: "Marcus Lee".to_string(),
            entity: "awakenings".to_string(),
            email: "marcus.lee@example.org".to_string(),
            phone: None,
            since: day("2022-08-03"),
            total_given_minor: 85000,
            gift_count: 3,
            history: vec![
                gift(
                    "2024-10-05",
                    25000,
                    PaymentMethod::Check,
                    DonationKind::OneTime,
                    "General Fund",
                ),
                gift(
                    "2025-01-15",
                    30000,
                    PaymentMethod::BankTransfer,
                    DonationKind::OneTime,
                    "Youth Programs",
                ),
                gift(
                    "2025-05-20",
                    30000,
                    PaymentMethod::BankTransfer,
                    DonationKind::OneTime,
                    "Youth Programs",
                ),
            ],
        },
        DonorProfile {
            name: "Elena Petrova".to_string(),
            entity: "tidewater".to_string(),
            email: "elena.petrova@example.org".to_string(),
            phone: None,
            since: day("2023-09-05"),
            total_given_minor: 45000,
            gift_count: 3,
            history: vec![
                gift(
                    "2024-09-30",
                    5000,
                    PaymentMethod::Cash,
                    DonationKind::OneTime,
                    "Disaster Relief",
                ),
                gift(
                    "2025-05-30",
                    20000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "Disaster Relief",
                ),
                gift(
                    "2025-06-30",
                    20000,
                    PaymentMethod::CreditCard,
                    DonationKind::Recurring,
                    "Disaster Relief",
                ),
            ],
        },
    ]
}

fn volunteer_profiles() -> Vec<VolunteerProfile> {
    vec![
        VolunteerProfile {
            name: "Gia Torres".to_string(),
            entity: "awakenings".to_string(),
            email: "gia.torres@example.org".to_string(),
            since: day("2024-04-01"),
            hours_logged: 16,
            sessions: vec![
                Session {
                    date: day("2025-05-10"),
                    hours: 4,
                    activity: "food bank shift".to_string(),
                },
                Session {
                    date: day("2025-06-12"),
                    hours: 6,
                    activity: "fundraiser setup".to_string(),
                },
                Session {
                    date: day("2025-07-15"),
                    hours: 6,
                    activity: "tutoring".to_string(),
                },
            ],
        },
        VolunteerProfile {
            name: "Lena Brook".to_string(),
            entity: "tidewater".to_string(),
            email: "lena.brook@example.org".to_string(),
            since: day("2022-05-14"),
            hours_logged: 22,
            sessions: vec![
                Session {
                    date: day("2025-04-12"),
                    hours: 8,
                    activity: "supply run".to_string(),
                },
                Session {
                    date: day("2025-05-03"),
                    hours: 6,
                    activity: "shelter setup".to_string(),
                },
                Session {
                    date: day("2025-07-02"),
                    hours: 8,
                    activity: "distribution day".to_string(),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{donor_profile_view, find_profile};
    use crate::scope::EntitySelector;

    #[test]
    fn test_seed_passes_integrity_checks() {
        let issues = seed().check();
        assert!(
            issues.is_empty(),
            "seed dataset should be consistent, got: {:?}",
            issues
        );
    }

    #[test]
    fn test_seed_covers_all_three_organizations() {
        let dataset = seed();
        assert_eq!(dataset.organizations.len(), 3);
        for org in &dataset.organizations {
            let selector = EntitySelector::parse(&org.id);
            assert!(
                !dataset.donations(&selector).is_empty(),
                "{} has no donations",
                org.id
            );
            assert!(
                !dataset.personnel(&selector).is_empty(),
                "{} has no personnel",
                org.id
            );
        }
    }

    #[test]
    fn test_sarah_johnson_profile_matches_her_donations() {
        let dataset = seed();
        let profile = find_profile(
            &dataset.donor_profiles,
            "Sarah Johnson",
            &EntitySelector::parse("awakenings"),
        )
        .unwrap();

        let view = donor_profile_view(profile);
        assert_eq!(view.gift_count, 5);
        assert_eq!(view.lifetime_total_minor, 250000);

        // And she is invisible from another organization's scope.
        assert!(find_profile(
            &dataset.donor_profiles,
            "Sarah Johnson",
            &EntitySelector::parse("bonfire"),
        )
        .is_none());
    }

    #[test]
    fn test_fixture_dates_all_parse() {
        // A malformed date literal falls back to the epoch default;
        // nothing in the seed should carry that date.
        let epoch = NaiveDate::default();
        let dataset = seed();
        assert!(dataset.donations.iter().all(|d| d.date != epoch));
        assert!(dataset.donors.iter().all(|d| d.joined_on != epoch));
        assert!(dataset.personnel.iter().all(|p| p.started_on != epoch));
        assert!(dataset.volunteers.iter().all(|v| v.joined_on != epoch));
        assert!(dataset
            .donor_profiles
            .iter()
            .all(|p| p.since != epoch && p.history.iter().all(|g| g.date != epoch)));
        assert!(dataset
            .volunteer_profiles
            .iter()
            .all(|p| p.since != epoch && p.sessions.iter().all(|s| s.date != epoch)));
    }

    #[test]
    fn test_seed_includes_unassigned_donations() {
        let dataset = seed();
        let unassigned = dataset
            .donations
            .iter()
            .filter(|d| d.donor.is_none())
            .count();
        assert!(unassigned >= 3);
    }
}
