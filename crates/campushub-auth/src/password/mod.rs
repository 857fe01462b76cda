//! Password hashing.

mod hasher;

pub use hasher::PasswordHasher;
