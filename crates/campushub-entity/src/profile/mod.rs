//! Student profile entity.

pub mod model;

pub use model::StudentProfile;
