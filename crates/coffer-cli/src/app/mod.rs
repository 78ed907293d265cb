//! Application-level utilities for the Coffer CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config + dataset handling
//! - Path resolution for the config and dataset files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
