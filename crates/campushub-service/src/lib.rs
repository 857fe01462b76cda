//! # campushub-service
//!
//! Business services sitting between the HTTP handlers and the stores:
//! student registration, dashboard assembly, and the records workflows
//! administrators run from the admin panel.

pub mod dashboard;
pub mod records;
pub mod registration;

pub use dashboard::{DashboardService, StudentDashboard};
pub use records::{
    AdminOverview, NewAttendance, NewResult, ProfileUpdate, RecordsService, StudentDetail,
    StudentSummary,
};
pub use registration::{NewRegistration, RegistrationService};
