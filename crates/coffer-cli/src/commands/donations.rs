//! The `donations` commands: list, intake, and donor assignment.

use coffer_core::intake::{AcknowledgeSink, AssignmentDraft, DonationDraft, IntakeSink};
use coffer_core::model::{format_usd, DonationKind, PaymentMethod};
use coffer_core::pipeline::DonationQuery;
use coffer_core::EntitySelector;

use crate::app::AppContext;
use crate::cli::{DonationAddArgs, DonationAssignArgs, DonationListArgs};
use crate::errors::CliError;
use crate::helpers::{
    check_format_flags, parse_date, parse_filter_or_all, parse_money, parse_or_default,
    prompt_fuzzy_select, prompt_input, prompt_select,
};
use crate::output::{print_donation_list, print_receipt};

use super::require_entity;

pub fn handle_list(ctx: &AppContext, args: &DonationListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let query = DonationQuery {
        text: args.query.clone().unwrap_or_default(),
        status: parse_filter_or_all(args.status.as_deref())?,
        kind: parse_filter_or_all(args.kind.as_deref())?,
        method: parse_filter_or_all(args.method.as_deref())?,
        assignment: parse_or_default(args.assignment.as_deref())?,
        sort: parse_or_default(args.sort.as_deref())?,
        direction: parse_or_default(args.direction.as_deref())?,
    };

    let rows = dataset.donations(&selector);
    let mut view = query.apply(&rows);
    if let Some(limit) = args.limit {
        // Totals stay folded over the full filtered set.
        view.rows.truncate(limit);
    }

    print_donation_list(&ui_ctx, &selector, &view, ctx.quiet())
}

pub fn handle_add(ctx: &AppContext, args: &DonationAddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let entity = require_entity(&selector)?;
    if dataset.organization(&entity).is_none() {
        return Err(CliError::not_found(
            format!("Unknown organization: {}", entity),
            "Run `coffer orgs list` to see organization ids.",
        )
        .into());
    }

    let interactive = ui_ctx.is_interactive() && !args.no_input;

    let amount_minor = match args.amount.as_deref() {
        Some(value) => parse_money(value)?,
        None if interactive => parse_money(&prompt_input("Amount", None)?)?,
        None => return Err(CliError::invalid_input("--amount is required").into()),
    };

    let today = chrono::Local::now().date_naive();
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None if interactive => parse_date(&prompt_input(
            "Date received (YYYY-MM-DD)",
            Some(&today.to_string()),
        )?)?,
        None => today,
    };

    let method = match args.method.as_deref() {
        Some(value) => value.parse::<PaymentMethod>().map_err(anyhow::Error::from)?,
        None if interactive => {
            let options = ["credit_card", "bank_transfer", "paypal", "check", "cash"];
            let choice = prompt_select("Payment method", &options, 0)?;
            options[choice]
                .parse::<PaymentMethod>()
                .map_err(anyhow::Error::from)?
        }
        None => PaymentMethod::CreditCard,
    };
    let kind = match args.kind.as_deref() {
        Some(value) => value.parse::<DonationKind>().map_err(anyhow::Error::from)?,
        None if interactive => {
            let options = ["one_time", "recurring"];
            let choice = prompt_select("Donation kind", &options, 0)?;
            options[choice]
                .parse::<DonationKind>()
                .map_err(anyhow::Error::from)?
        }
        None => DonationKind::OneTime,
    };

    let purpose = match args.purpose.clone() {
        Some(value) => value,
        None if interactive => prompt_input("Purpose/fund", Some("General Fund"))?,
        None => "General Fund".to_string(),
    };

    let donor = match args.donor.clone() {
        Some(value) => {
            verify_donor_exists(dataset.donors(&selector), &value, &entity)?;
            Some(value)
        }
        None if interactive => {
            let mut options = vec!["(unassigned)".to_string()];
            options.extend(
                dataset
                    .donors(&selector)
                    .iter()
                    .map(|donor| donor.name.clone()),
            );
            let choice = prompt_fuzzy_select("Donor", &options)?;
            if choice == 0 {
                None
            } else {
                Some(options[choice].clone())
            }
        }
        None => None,
    };

    let draft = DonationDraft {
        entity,
        donor,
        amount_minor,
        date,
        method,
        kind,
        purpose,
    };

    let mut sink = AcknowledgeSink;
    let receipt = sink.submit_donation(&draft)?;

    print_receipt(
        &ui_ctx,
        &receipt,
        &[
            ("Amount", format_usd(draft.amount_minor)),
            ("Date", draft.date.to_string()),
            (
                "Donor",
                draft
                    .donor
                    .clone()
                    .unwrap_or_else(|| "(unassigned)".to_string()),
            ),
            ("Purpose", draft.purpose.clone()),
        ],
    )
}

pub fn handle_assign(ctx: &AppContext, args: &DonationAssignArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let donation = dataset
        .donations(&selector)
        .into_iter()
        .find(|donation| donation.id == args.donation_id)
        .ok_or_else(|| {
            CliError::not_found(
                format!("No donation with id {}", args.donation_id),
                "Run `coffer donations list --assignment unassigned` to find one.",
            )
        })?;

    if let Some(existing) = &donation.donor {
        return Err(CliError::invalid_input(format!(
            "Donation {} is already assigned to {}",
            donation.id, existing
        ))
        .into());
    }

    // The donor must live under the donation's own organization.
    let in_scope = EntitySelector::One(donation.entity.clone());
    verify_donor_exists(dataset.donors(&in_scope), &args.donor, &donation.entity)?;

    let draft = AssignmentDraft {
        donation_id: donation.id.clone(),
        donor: args.donor.clone(),
    };

    let mut sink = AcknowledgeSink;
    let receipt = sink.submit_assignment(&draft)?;

    print_receipt(
        &ui_ctx,
        &receipt,
        &[
            ("Donation", donation.id.clone()),
            ("Donor", args.donor.clone()),
            ("Amount", format_usd(donation.amount_minor)),
        ],
    )
}

fn verify_donor_exists(
    donors: Vec<&coffer_core::model::Donor>,
    name: &str,
    entity: &str,
) -> anyhow::Result<()> {
    if donors.iter().any(|donor| donor.name == name) {
        return Ok(());
    }
    Err(CliError::not_found(
        format!("No donor named \"{}\" under {}", name, entity),
        "Run `coffer donors list` to see donor names.",
    )
    .into())
}
