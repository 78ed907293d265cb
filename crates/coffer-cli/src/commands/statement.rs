//! The `statement` command: render a contribution statement as HTML.

use std::path::Path;

use coffer_core::fs::write_atomic;
use coffer_core::projection::find_profile;
use coffer_core::statement::contribution_statement;

use crate::app::AppContext;
use crate::cli::StatementArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge};

use super::donors::donor_not_found;

pub fn handle_statement(ctx: &AppContext, args: &StatementArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let selector = ctx.selector()?;
    let dataset = ctx.dataset()?;

    let profile = find_profile(&dataset.donor_profiles, &args.donor, &selector)
        .ok_or_else(|| donor_not_found(&args.donor, &selector))?;

    let org = dataset.organization(&profile.entity).ok_or_else(|| {
        CliError::not_found(
            format!("Organization {} is missing from the dataset", profile.entity),
            "Run `coffer check` to inspect the dataset.",
        )
    })?;

    let html = contribution_statement(org, profile, args.year);

    match args.out.as_deref() {
        Some(out) => {
            let out = Path::new(out);
            write_atomic(out, html.as_bytes())?;
            if !ctx.quiet() {
                if ui_ctx.mode.is_pretty() {
                    print(
                        &ui_ctx,
                        &badge(
                            &ui_ctx,
                            Badge::Ok,
                            &format!("Statement written to {}", out.display()),
                        ),
                    );
                } else {
                    println!("status=ok");
                    println!("path={}", out.display());
                }
            }
        }
        None => {
            print!("{}", html);
        }
    }

    Ok(())
}
