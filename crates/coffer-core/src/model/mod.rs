//! Domain data types.
//!
//! These types represent the records stored in a Coffer dataset file.
//! Every record except [`Organization`] carries an `entity` field naming
//! the organization that owns it.

pub mod donation;
pub mod donor;
pub mod money;
pub mod org;
pub mod personnel;
pub mod profile;
pub mod volunteer;

pub use donation::{Donation, DonationKind, DonationStatus, PaymentMethod};
pub use donor::{Donor, DonorKind, DonorStatus};
pub use money::{format_usd, parse_usd};
pub use org::{OrgKind, Organization};
pub use personnel::{EmploymentKind, Person, PersonnelStatus};
pub use profile::{DonorProfile, Gift, Session, VolunteerProfile};
pub use volunteer::{Volunteer, VolunteerStatus};
