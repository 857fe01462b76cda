//! # campushub-core
//!
//! Core crate for CampusHub. Contains configuration schemas and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other CampusHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
