//! Filter, sort, and derived totals for list views.
//!
//! Every domain follows the same shape: a query struct holding a text
//! search, optional categorical filters (where `None` is the wildcard
//! no-op), and a sort key with a direction. `Query::apply` is a pure
//! function from borrowed rows to a view: the filtered rows plus totals
//! folded over exactly that filtered set. Nothing is cached; callers
//! re-run the pipeline whenever an input changes.

pub mod donations;
pub mod donors;
pub mod filter;
pub mod personnel;
pub mod sort;
pub mod volunteers;

pub use donations::{AssignmentFilter, DonationQuery, DonationSortKey, DonationTotals, DonationView};
pub use donors::{DonorQuery, DonorSortKey, DonorTotals, DonorView};
pub use filter::matches_text;
pub use personnel::{PersonnelQuery, PersonnelSortKey, PersonnelTotals, PersonnelView};
pub use sort::SortDirection;
pub use volunteers::{VolunteerQuery, VolunteerSortKey, VolunteerTotals, VolunteerView};
