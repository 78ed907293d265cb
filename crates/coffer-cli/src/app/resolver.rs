//! Path resolution for config and dataset files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, read_config, CofferConfig};

/// Resolve the config file path, checking COFFER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("COFFER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config if one exists; a missing file is not an error.
pub fn load_config() -> anyhow::Result<Option<CofferConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Resolve the dataset path from CLI args (or COFFER_DATA), config, or
/// the default location, in that order.
pub fn resolve_data_path(cli: &Cli, config: Option<&CofferConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.data {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.data.path));
    }
    default_data_path()
}

/// Error message when the dataset file is missing.
pub fn missing_dataset_message(path: &Path) -> String {
    format!(
        "No dataset found at {}\n\nRun:\n  coffer init\n\nOr point at a dataset:\n  COFFER_DATA=/path/to/coffer.json coffer orgs list",
        path.display()
    )
}
