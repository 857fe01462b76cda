//! # campushub-api
//!
//! The HTTP surface of CampusHub: the router, the request gate that
//! enforces the access policy on every request, the auth handlers, and
//! the student and admin-panel endpoints.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
