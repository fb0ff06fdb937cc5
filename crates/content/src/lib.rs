//! Static site content: portfolio projects and service offerings.
//!
//! Everything here is hard-coded, read-only data. The frontend never mutates
//! a record; filtering and normalization happen on its side of the boundary.

pub mod projects;
pub mod services;

pub use projects::ProjectRecord;
pub use services::ServiceRecord;
