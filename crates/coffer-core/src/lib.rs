//! # Coffer Core
//!
//! Core library for Coffer - a multi-entity donor, donation, and people
//! tracker for small nonprofit back offices.
//!
//! This crate provides the domain models, the query pipeline, and the
//! reporting logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Organizations, donors, donations, personnel, volunteers
//! - **scope**: Entity selection and per-organization record scoping
//! - **dataset**: The on-disk dataset file and its integrity checks
//! - **pipeline**: Filter, sort, and derived totals for list views
//! - **projection**: Donor and volunteer profile views
//! - **statement**: Contribution statement rendering (HTML)
//! - **intake**: Drafts, validation, and the acknowledgment sink

pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod fs;
pub mod intake;
pub mod model;
pub mod pipeline;
pub mod projection;
pub mod scope;
pub mod statement;

pub use error::{CofferError, Result};
pub use scope::EntitySelector;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
