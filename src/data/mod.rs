//! Rental dataset: record model, CSV loader and the immutable dataset handle.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod record;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::{HourGroup, RentalRecord};
