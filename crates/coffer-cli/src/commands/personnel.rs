//! The `personnel` commands.

use coffer_core::pipeline::PersonnelQuery;

use crate::app::AppContext;
use crate::cli::PersonnelListArgs;
use crate::helpers::{check_format_flags, parse_filter_or_all, parse_or_default};
use crate::output::print_personnel_list;

pub fn handle_list(ctx: &AppContext, args: &PersonnelListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let query = PersonnelQuery {
        text: args.query.clone().unwrap_or_default(),
        status: parse_filter_or_all(args.status.as_deref())?,
        employment: parse_filter_or_all(args.employment.as_deref())?,
        sort: parse_or_default(args.sort.as_deref())?,
        direction: parse_or_default(args.direction.as_deref())?,
    };

    let rows = dataset.personnel(&selector);
    let mut view = query.apply(&rows);
    if let Some(limit) = args.limit {
        view.rows.truncate(limit);
    }

    print_personnel_list(&ui_ctx, &selector, &view)
}
