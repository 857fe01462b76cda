//! Subject and enrollment entities.

pub mod model;

pub use model::{EnrolledSubject, Enrollment, Subject};
