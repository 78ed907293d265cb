//! The `orgs` commands.

use crate::app::AppContext;
use crate::cli::OrgListArgs;
use crate::helpers::check_format_flags;
use crate::output::print_org_list;

pub fn handle_list(ctx: &AppContext, args: &OrgListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let dataset = ctx.dataset()?;

    // Orgs are the scope roots, so --entity does not narrow this list.
    let rows: Vec<_> = dataset
        .organizations
        .iter()
        .map(|org| (org, dataset.org_counts(&org.id)))
        .collect();

    print_org_list(&ui_ctx, &rows, ctx.quiet())
}
