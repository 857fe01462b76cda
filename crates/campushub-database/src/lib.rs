//! # campushub-database
//!
//! Store traits for every CampusHub entity plus two backends: PostgreSQL
//! (sqlx) for deployments and an in-memory store for single-node trials
//! and the integration test suite.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::Stores;
