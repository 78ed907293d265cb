//! Output formatting helpers for the CLI.
//!
//! This module provides formatting for displaying records in the three
//! output modes (JSON, table, plain text).

pub mod json;
mod text;

// Re-export public API
pub use text::{
    print_donation_list, print_donor_list, print_donor_profile, print_org_list,
    print_personnel_list, print_receipt, print_volunteer_list, print_volunteer_profile,
};
