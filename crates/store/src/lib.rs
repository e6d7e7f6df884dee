//! `staffdir-store` — ownership of the user collection.
//!
//! The store is the sole owner of all `User` records; callers get clones.
//! There is one capability contract ([`UserStore`]) and one production
//! implementation ([`InMemoryUserStore`]).

pub mod memory;
pub mod store;

pub use memory::InMemoryUserStore;
pub use store::{StoreError, StoreResult, UserStore};
