//! The `check` command: dataset integrity report.

use coffer_core::dataset::{CheckKind, Severity};

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::helpers::check_format_flags;
use crate::output::json;
use crate::ui::{badge, blank_line, print, single_line, Badge, StepList};

const CATEGORIES: [CheckKind; 5] = [
    CheckKind::Organizations,
    CheckKind::Ownership,
    CheckKind::Uniqueness,
    CheckKind::ProfileTotals,
    CheckKind::DonorLinks,
];

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let dataset = ctx.dataset()?;

    let issues = dataset.check();
    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json::check_json(&issues))?
        );
    } else {
        let labels: Vec<&str> = CATEGORIES.iter().map(|kind| kind.label()).collect();
        let mut steps = StepList::new(&ui_ctx, &labels);
        steps.start("Checking dataset");

        for kind in CATEGORIES {
            let mut has_error = false;
            let mut has_warning = false;
            for issue in issues.iter().filter(|issue| issue.kind == kind) {
                match issue.severity {
                    Severity::Error => has_error = true,
                    Severity::Warning => has_warning = true,
                }
            }
            if has_error {
                steps.err();
            } else if has_warning {
                steps.warn();
            } else {
                steps.ok();
            }
        }

        if !issues.is_empty() {
            blank_line(&ui_ctx);
            for issue in &issues {
                let kind = match issue.severity {
                    Severity::Error => Badge::Err,
                    Severity::Warning => Badge::Warn,
                };
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        kind,
                        &format!("{}: {}", issue.kind.label(), single_line(&issue.message)),
                    ),
                );
            }
        }

        blank_line(&ui_ctx);
        if steps.all_ok() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Dataset is consistent"));
        } else {
            let kind = if steps.has_error() {
                Badge::Err
            } else {
                Badge::Warn
            };
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    kind,
                    &format!("{} error(s), {} warning(s)", errors, warnings),
                ),
            );
        }
    }

    if errors > 0 {
        return Err(
            CliError::integrity_failed(format!("Integrity check failed with {} error(s)", errors))
                .into(),
        );
    }
    Ok(())
}
