//! Command handlers for the Coffer CLI.
//!
//! Each handler takes the shared [`AppContext`](crate::app::AppContext)
//! plus its parsed arguments, resolves the entity scope, runs the query
//! or intake logic in coffer-core, and prints through the output layer.

pub mod check;
pub mod donations;
pub mod donors;
pub mod init;
pub mod misc;
pub mod orgs;
pub mod personnel;
pub mod statement;
pub mod volunteers;

use coffer_core::EntitySelector;

use crate::errors::CliError;

/// Intake commands record under exactly one organization.
pub(crate) fn require_entity(selector: &EntitySelector) -> anyhow::Result<String> {
    match selector {
        EntitySelector::One(entity) => Ok(entity.clone()),
        EntitySelector::All => Err(CliError::invalid_input(
            "Pass --entity <org> to record under one organization",
        )
        .into()),
    }
}
