//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Interactive prompting with dialoguer (`prompts`)
//! - Date, money, filter, and format parsing (`parsing`)

mod parsing;
mod prompts;

// Re-export public API
pub use parsing::{
    check_format_flags, parse_adjustment, parse_date, parse_filter_or_all, parse_money,
    parse_or_default,
};
pub use prompts::{
    prompt_confirm, prompt_fuzzy_select, prompt_input, prompt_path, prompt_select,
};
