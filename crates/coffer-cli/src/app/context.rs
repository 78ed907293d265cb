//! Application context for the Coffer CLI.
//!
//! Provides a unified context that combines CLI arguments with a
//! lazily-loaded config and dataset.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use coffer_core::dataset::Dataset;
use coffer_core::{CofferError, EntitySelector};

use crate::cli::Cli;
use crate::config::CofferConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, missing_dataset_message, resolve_data_path};

/// Application context that bundles CLI args with config and dataset.
///
/// This avoids repeatedly loading files and threading multiple
/// parameters through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<CofferConfig>>,
    dataset: OnceCell<Dataset>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            dataset: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build a UI context honoring the global output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Get the config, loading it lazily; `None` when no config exists.
    pub fn config(&self) -> anyhow::Result<Option<&CofferConfig>> {
        self.config
            .get_or_try_init(load_config)
            .map(|config| config.as_ref())
    }

    /// Resolve the dataset path from CLI args, environment, or config.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli, self.config()?)
    }

    /// Get the dataset, loading it lazily.
    ///
    /// A missing file surfaces the init hint; any other load failure is
    /// reported as-is.
    pub fn dataset(&self) -> anyhow::Result<&Dataset> {
        self.dataset.get_or_try_init(|| {
            let path = self.data_path()?;
            Dataset::load(&path).map_err(|err| match err {
                CofferError::NotFound(_) => anyhow::anyhow!(missing_dataset_message(&path)),
                other => anyhow::Error::from(other),
            })
        })
    }

    /// The active entity scope: --entity, then the config default,
    /// then all organizations.
    ///
    /// An unknown slug is a valid scope that matches nothing, so no
    /// validation happens here.
    pub fn selector(&self) -> anyhow::Result<EntitySelector> {
        if let Some(entity) = &self.cli.entity {
            return Ok(EntitySelector::parse(entity));
        }
        if let Some(config) = self.config()? {
            if let Some(default_entity) = &config.ui.default_entity {
                return Ok(EntitySelector::parse(default_entity));
            }
        }
        Ok(EntitySelector::All)
    }
}
