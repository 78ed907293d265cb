//! The `init` command: seed a starter dataset and write the config.

use std::io::IsTerminal;
use std::path::PathBuf;

use coffer_core::fixtures;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_path, write_config, CofferConfig};
use crate::errors::CliError;
use crate::helpers::{prompt_confirm, prompt_path, prompt_select};
use crate::ui::{badge, blank_line, hint, print, Badge, Spinner};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let effective_no_input = args.no_input || !std::io::stdin().is_terminal();

    let default_path = default_data_path()?;
    let data_path = match args.path.clone().or_else(|| ctx.cli().data.clone()) {
        Some(value) => PathBuf::from(value),
        None if effective_no_input => default_path,
        None => {
            let suggested = default_path.to_string_lossy().to_string();
            PathBuf::from(prompt_path("Dataset location", Some(&suggested))?)
        }
    };

    if data_path.exists() && !args.force {
        let overwrite = !effective_no_input
            && prompt_confirm(
                &format!("Overwrite existing dataset at {}?", data_path.display()),
                false,
            )?;
        if !overwrite {
            return Err(CliError::invalid_input(format!(
                "Dataset already exists at {}; pass --force to overwrite",
                data_path.display()
            ))
            .into());
        }
    }

    let dataset = fixtures::seed();

    let default_entity = match args.default_entity.as_deref() {
        Some(value) => normalize_default_entity(value),
        None if effective_no_input => None,
        None => {
            let mut options = vec!["all".to_string()];
            options.extend(dataset.organizations.iter().map(|org| org.id.clone()));
            let labels: Vec<&str> = options.iter().map(String::as_str).collect();
            let choice = prompt_select("Default entity scope", &labels, 0)?;
            normalize_default_entity(&options[choice])
        }
    };

    if let Some(entity) = &default_entity {
        if dataset.organization(entity).is_none() {
            let known: Vec<&str> = dataset
                .organizations
                .iter()
                .map(|org| org.id.as_str())
                .collect();
            return Err(CliError::invalid_input(format!(
                "Unknown organization: {} (organizations: {})",
                entity,
                known.join(", ")
            ))
            .into());
        }
    }

    let spinner = (!ctx.quiet() && ui_ctx.mode.is_pretty())
        .then(|| Spinner::new(&ui_ctx, "Writing starter dataset"));
    if let Some(spinner) = &spinner {
        spinner.start();
    }

    if let Some(parent) = data_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| {
                anyhow::anyhow!("Failed to create {}: {}", parent.display(), err)
            })?;
        }
    }
    dataset.save(&data_path)?;

    if let Some(spinner) = &spinner {
        spinner.finish(&format!("Dataset created at {}", data_path.display()));
    }

    let config_path = resolve_config_path()?;
    let config = CofferConfig::new(data_path.clone(), default_entity.clone());
    write_config(&config_path, &config)?;

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Ok,
                &format!("Config written to {}", config_path.display()),
            ),
        );
        if let Some(entity) = &default_entity {
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Info, &format!("Default entity: {}", entity)),
            );
        }
        blank_line(&ui_ctx);
        print(&ui_ctx, &hint(&ui_ctx, "coffer orgs list"));
    } else {
        println!("status=ok");
        println!("data_path={}", data_path.display());
        println!("config_path={}", config_path.display());
        if let Some(entity) = &default_entity {
            println!("default_entity={}", entity);
        }
    }

    Ok(())
}

/// "all" and blank both mean no default scope.
fn normalize_default_entity(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_default_entity() {
        assert_eq!(normalize_default_entity("all"), None);
        assert_eq!(normalize_default_entity("  All "), None);
        assert_eq!(normalize_default_entity(""), None);
        assert_eq!(
            normalize_default_entity("awakenings"),
            Some("awakenings".to_string())
        );
    }
}
