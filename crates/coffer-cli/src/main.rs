//! Coffer CLI - donor, donation, and people tracking for nonprofit back
//! offices.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use coffer_core::VERSION;

use crate::app::AppContext;
use crate::cli::{
    Cli, Commands, DonationsSubcommand, DonorsSubcommand, OrgsSubcommand, PersonnelSubcommand,
    VolunteersSubcommand,
};
use crate::commands::{check, donations, donors, init, misc, orgs, personnel, statement, volunteers};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        if let Some(cli_error) = err.downcast_ref::<CliError>() {
            match cli_error {
                CliError::NotFound { message, hint } => {
                    print_error(&ui_ctx, message, Some(hint));
                }
                other => print_error(&ui_ctx, &other.to_string(), None),
            }
            std::process::exit(cli_error.exit_code());
        }

        let message = format!("{}", err);
        let error_hint = extract_error_hint(&message);
        print_error(&ui_ctx, &message, error_hint.as_deref());
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Orgs(args)) => match &args.command {
            OrgsSubcommand::List(list_args) => orgs::handle_list(ctx, list_args),
        },
        Some(Commands::Donors(args)) => match &args.command {
            DonorsSubcommand::List(list_args) => donors::handle_list(ctx, list_args),
            DonorsSubcommand::Show(show_args) => donors::handle_show(ctx, show_args),
            DonorsSubcommand::Add(add_args) => donors::handle_add(ctx, add_args),
        },
        Some(Commands::Donations(args)) => match &args.command {
            DonationsSubcommand::List(list_args) => donations::handle_list(ctx, list_args),
            DonationsSubcommand::Add(add_args) => donations::handle_add(ctx, add_args),
            DonationsSubcommand::Assign(assign_args) => donations::handle_assign(ctx, assign_args),
        },
        Some(Commands::Personnel(args)) => match &args.command {
            PersonnelSubcommand::List(list_args) => personnel::handle_list(ctx, list_args),
        },
        Some(Commands::Volunteers(args)) => match &args.command {
            VolunteersSubcommand::List(list_args) => volunteers::handle_list(ctx, list_args),
            VolunteersSubcommand::Show(show_args) => volunteers::handle_show(ctx, show_args),
        },
        Some(Commands::Statement(args)) => statement::handle_statement(ctx, args),
        Some(Commands::Check(args)) => check::handle_check(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            print_quickstart();
            Ok(())
        }
    }
}

fn print_quickstart() {
    println!("Coffer v{}", VERSION);
    println!();
    println!("Quickstart:");
    println!("  coffer init");
    println!("  coffer orgs list");
    println!("  coffer donors list --entity awakenings");
    println!("  coffer donors show \"Sarah Johnson\"");
    println!("  coffer statement \"Sarah Johnson\" --out statement.html");
    println!();
    println!("Run `coffer --help` for full usage.");
}

/// Contextual hints for error shapes that do not carry their own.
fn extract_error_hint(message: &str) -> Option<String> {
    let lower = message.to_lowercase();

    // The missing-dataset message already spells out what to run.
    if lower.contains("no dataset found") {
        return None;
    }
    if lower.contains("sort key") || lower.contains("sort direction") {
        return Some("See `coffer donors list --help` for each list's sort keys.".to_string());
    }
    if lower.contains("unknown donor")
        || lower.contains("unknown donation")
        || lower.contains("unknown payment")
        || lower.contains("unknown personnel")
        || lower.contains("unknown employment")
        || lower.contains("unknown volunteer")
        || lower.contains("unknown assignment")
    {
        return Some("Pass \"all\" to clear a filter.".to_string());
    }
    if lower.contains("is not valid") || lower.contains("failed to parse config") {
        return Some("Re-run `coffer init --force` to reseed the starter data.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_hint_filter() {
        let hint = extract_error_hint("Unknown donor status: bogus");
        assert!(hint.unwrap().contains("all"));
    }

    #[test]
    fn test_extract_error_hint_missing_dataset_is_silent() {
        assert!(extract_error_hint("No dataset found at /tmp/coffer.json").is_none());
    }

    #[test]
    fn test_extract_error_hint_sort() {
        let hint = extract_error_hint("Unknown sort key: size");
        assert!(hint.unwrap().contains("--help"));
    }

    #[test]
    fn test_extract_error_hint_none_for_unrecognized() {
        assert!(extract_error_hint("something else entirely").is_none());
    }
}
