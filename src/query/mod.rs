//! Date-range queries over the dataset
//!
//! Filter, aggregate and total: the pure half of the dashboard. Nothing here
//! renders or logs.

pub mod aggregate;
pub mod filter;
pub mod range;
pub mod snapshot;
pub mod totals;

pub use range::{DateBounds, DateRange, RangeError};
pub use snapshot::DashboardSnapshot;
