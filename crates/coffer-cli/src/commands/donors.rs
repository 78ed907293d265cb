//! The `donors` commands: list, show, and intake.

use coffer_core::intake::{AcknowledgeSink, DonorDraft, IntakeSink};
use coffer_core::model::{DonorKind, DonorStatus};
use coffer_core::pipeline::DonorQuery;
use coffer_core::projection::{
    adjusted_total_minor, donor_profile_view, find_profile, merged_history, Adjustment,
};
use coffer_core::EntitySelector;

use crate::app::AppContext;
use crate::cli::{DonorAddArgs, DonorListArgs, DonorShowArgs};
use crate::errors::CliError;
use crate::helpers::{
    check_format_flags, parse_adjustment, parse_filter_or_all, parse_or_default, prompt_input,
    prompt_select,
};
use crate::output::{print_donor_list, print_donor_profile, print_receipt};

use super::require_entity;

pub fn handle_list(ctx: &AppContext, args: &DonorListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let query = DonorQuery {
        text: args.query.clone().unwrap_or_default(),
        status: parse_filter_or_all(args.status.as_deref())?,
        kind: parse_filter_or_all(args.kind.as_deref())?,
        sort: parse_or_default(args.sort.as_deref())?,
        direction: parse_or_default(args.direction.as_deref())?,
    };

    let rows = dataset.donors(&selector);
    let mut view = query.apply(&rows);
    if let Some(limit) = args.limit {
        // Totals stay folded over the full filtered set.
        view.rows.truncate(limit);
    }

    print_donor_list(&ui_ctx, &selector, &view, ctx.quiet())
}

pub fn handle_show(ctx: &AppContext, args: &DonorShowArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let profile = find_profile(&dataset.donor_profiles, &args.name, &selector)
        .ok_or_else(|| donor_not_found(&args.name, &selector))?;

    let adjustments: Vec<Adjustment> = args
        .adjust
        .iter()
        .map(|raw| parse_adjustment(raw))
        .collect::<anyhow::Result<_>>()?;

    let view = donor_profile_view(profile);
    let history = merged_history(profile, &adjustments);
    let adjusted = adjusted_total_minor(profile, &adjustments);

    print_donor_profile(
        &ui_ctx,
        &view,
        &history,
        adjusted,
        !adjustments.is_empty(),
        ctx.quiet(),
    )
}

pub fn handle_add(ctx: &AppContext, args: &DonorAddArgs) -> anyhow::Result<()> {
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

    let name = match args.name.clone() {
        Some(value) => value,
        None if interactive => prompt_input("Donor name", None)?,
        None => return Err(CliError::invalid_input("--name is required").into()),
    };
    let email = match args.email.clone() {
        Some(value) => value,
        None if interactive => prompt_input("Contact email", None)?,
        None => return Err(CliError::invalid_input("--email is required").into()),
    };

    let kind = match args.kind.as_deref() {
        Some(value) => value.parse::<DonorKind>().map_err(anyhow::Error::from)?,
        None if interactive => {
            let options = ["individual", "organization", "foundation"];
            let choice = prompt_select("Donor kind", &options, 0)?;
            options[choice].parse::<DonorKind>().map_err(anyhow::Error::from)?
        }
        None => DonorKind::Individual,
    };
    let status = match args.status.as_deref() {
        Some(value) => value.parse::<DonorStatus>().map_err(anyhow::Error::from)?,
        None if interactive => {
            let options = ["active", "lapsed", "prospective"];
            let choice = prompt_select("Donor status", &options, 0)?;
            options[choice]
                .parse::<DonorStatus>()
                .map_err(anyhow::Error::from)?
        }
        None => DonorStatus::Active,
    };

    let draft = DonorDraft {
        entity,
        name,
        email,
        phone: args.phone.clone(),
        kind,
        status,
    };

    let mut sink = AcknowledgeSink;
    let receipt = sink.submit_donor(&draft)?;

    print_receipt(
        &ui_ctx,
        &receipt,
        &[
            ("Donor", draft.name.clone()),
            ("Entity", draft.entity.clone()),
            ("Kind", draft.kind.as_str().to_string()),
            ("Status", draft.status.as_str().to_string()),
        ],
    )
}

pub(crate) fn donor_not_found(name: &str, selector: &EntitySelector) -> anyhow::Error {
    let message = if selector.is_all() {
        format!("No donor named \"{}\"", name)
    } else {
        format!("No donor named \"{}\" under {}", name, selector.as_str())
    };
    CliError::not_found(message, "Run `coffer donors list` to see donor names.").into()
}
