//! The `volunteers` commands: list and profile view.

use coffer_core::pipeline::VolunteerQuery;
use coffer_core::projection::{find_profile, volunteer_profile_view};

use crate::app::AppContext;
use crate::cli::{VolunteerListArgs, VolunteerShowArgs};
use crate::errors::CliError;
use crate::helpers::{check_format_flags, parse_filter_or_all, parse_or_default};
use crate::output::{print_volunteer_list, print_volunteer_profile};

pub fn handle_list(ctx: &AppContext, args: &VolunteerListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let query = VolunteerQuery {
        text: args.query.clone().unwrap_or_default(),
        status: parse_filter_or_all(args.status.as_deref())?,
        skill: args.skill.clone(),
        sort: parse_or_default(args.sort.as_deref())?,
        direction: parse_or_default(args.direction.as_deref())?,
    };

    let rows = dataset.volunteers(&selector);
    let mut view = query.apply(&rows);
    if let Some(limit) = args.limit {
        view.rows.truncate(limit);
    }

    print_volunteer_list(&ui_ctx, &selector, &view, ctx.quiet())
}

pub fn handle_show(ctx: &AppContext, args: &VolunteerShowArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let profile = find_profile(&dataset.volunteer_profiles, &args.name, &selector).ok_or_else(
        || {
            let message = if selector.is_all() {
                format!("No volunteer named \"{}\"", args.name)
            } else {
                format!(
                    "No volunteer named \"{}\" under {}",
                    args.name,
                    selector.as_str()
                )
            };
            CliError::not_found(message, "Run `coffer volunteers list` to see volunteer names.")
        },
    )?;

    let view = volunteer_profile_view(profile);
    print_volunteer_profile(&ui_ctx, &view)
}
