//! `staffdir-auth` — token verification boundary.
//!
//! This crate is intentionally decoupled from HTTP: it answers one question,
//! "is this bearer token valid?", and the pipeline acts on the answer.

pub mod verifier;

pub use verifier::{StaticTokenVerifier, TokenError, TokenVerifier};
