//! `staffdir-core` — pure domain model for the staff directory.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod user;

pub use user::{User, UserDraft};
