//! End-to-end flow over a dataset file: seed, save, reload, query,
//! project, and render.

use coffer_core::dataset::{Dataset, Severity};
use coffer_core::fixtures;
use coffer_core::model::OrgKind;
use coffer_core::pipeline::{AssignmentFilter, DonationQuery, DonorQuery};
use coffer_core::projection::{donor_profile_view, find_profile, merged_history, Adjustment};
use coffer_core::statement::contribution_statement;
use coffer_core::EntitySelector;

use chrono::NaiveDate;
use tempfile::tempdir;

fn reloaded() -> Dataset {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coffer.json");
    fixtures::seed().save(&path).unwrap();
    Dataset::load(&path).unwrap()
}

#[test]
fn seed_survives_save_and_reload() {
    let seed = fixtures::seed();
    let loaded = reloaded();

    assert_eq!(loaded.organizations.len(), seed.organizations.len());
    assert_eq!(loaded.donors.len(), seed.donors.len());
    assert_eq!(loaded.donations.len(), seed.donations.len());
    assert_eq!(loaded.donor_profiles.len(), seed.donor_profiles.len());
    assert!(loaded.check().is_empty());
}

#[test]
fn scoped_donation_query_over_reloaded_data() {
    let dataset = reloaded();
    let selector = EntitySelector::parse("awakenings");

    let rows = dataset.donations(&selector);
    let view = DonationQuery {
        assignment: AssignmentFilter::Unassigned,
        ..Default::default()
    }
    .apply(&rows);

    let ids: Vec<_> = view.rows.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["gift-0108"]);
    assert_eq!(view.totals.unassigned, 1);
    assert_eq!(view.totals.amount_minor, 7500);
}

#[test]
fn text_search_reaches_donor_names_on_donations() {
    let dataset = reloaded();
    let rows = dataset.donations(&EntitySelector::All);

    let view = DonationQuery {
        text: "sarah".to_string(),
        ..Default::default()
    }
    .apply(&rows);

    assert_eq!(view.rows.len(), 5);
    assert!(view
        .rows
        .iter()
        .all(|d| d.donor.as_deref() == Some("Sarah Johnson")));
    assert_eq!(view.totals.amount_minor, 250000);
}

#[test]
fn donor_list_totals_agree_with_rows() {
    let dataset = reloaded();
    let rows = dataset.donors(&EntitySelector::parse("awakenings"));
    let view = DonorQuery::default().apply(&rows);

    let expected: i64 = view.rows.iter().map(|d| d.total_given_minor).sum();
    assert_eq!(view.totals.total_given_minor, expected);
    assert_eq!(view.totals.count, view.rows.len());
}

#[test]
fn profile_lookup_is_tenant_scoped_after_reload() {
    let dataset = reloaded();

    let profile = find_profile(
        &dataset.donor_profiles,
        "Sarah Johnson",
        &EntitySelector::parse("awakenings"),
    )
    .unwrap();
    let view = donor_profile_view(profile);
    assert_eq!(view.gift_count, 5);
    assert_eq!(view.lifetime_total_minor, 250000);

    assert!(find_profile(
        &dataset.donor_profiles,
        "Sarah Johnson",
        &EntitySelector::parse("bonfire"),
    )
    .is_none());
}

#[test]
fn adjustments_merge_without_touching_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coffer.json");
    fixtures::seed().save(&path).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let dataset = Dataset::load(&path).unwrap();
    let profile = find_profile(
        &dataset.donor_profiles,
        "Sarah Johnson",
        &EntitySelector::parse("awakenings"),
    )
    .unwrap();

    let adjustments = vec![Adjustment {
        date: NaiveDate::parse_from_str("2025-07-10", "%Y-%m-%d").unwrap(),
        amount_minor: -50000,
        note: "July gift refunded".to_string(),
    }];
    let merged = merged_history(profile, &adjustments);

    assert_eq!(merged.len(), 6);
    assert!(merged[0].adjustment);
    assert_eq!(merged[0].date.to_string(), "2025-07-10");

    // The dataset file is untouched by a session-scoped adjustment.
    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn statement_renders_from_reloaded_profile() {
    let dataset = reloaded();
    let org = dataset.organization("awakenings").unwrap();
    assert_eq!(org.kind, OrgKind::Nonprofit);

    let profile = find_profile(
        &dataset.donor_profiles,
        "Sarah Johnson",
        &EntitySelector::parse("awakenings"),
    )
    .unwrap();

    let html = contribution_statement(org, profile, Some(2025));
    assert!(html.contains("Awakenings Foundation"));
    assert!(html.contains("Purpose/Fund"));
    assert!(html.contains("NTD Amount"));
    assert!(html.contains("<td>CRE-001</td>"));
    assert!(html.contains("<td>Total</td><td class=\"amount\">$2,500.00</td>"));
}

#[test]
fn introduced_drift_is_flagged_as_warning_only() {
    let mut dataset = fixtures::seed();
    dataset.donor_profiles[0].total_given_minor += 1;

    let issues = dataset.check();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("Sarah Johnson"));
}
