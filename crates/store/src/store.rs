//! The user store capability contract.

use thiserror::Error;
use validator::ValidationErrors;

use staffdir_core::{User, UserDraft};

/// Store-level failures.
///
/// Absence of a record is not an error: lookups return `None` and writes
/// targeting an unknown id return `false`. The error channel is reserved for
/// rejected candidates and genuinely unexpected faults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate record violated one or more field constraints.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// A writer panicked while holding the store lock.
    #[error("user store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// User store abstraction.
///
/// Every operation observes a single consistent view of the collection:
/// writes are atomic with respect to each other, and reads never see a
/// half-applied mutation. Identifiers are assigned by the store, strictly
/// increasing, and never reused, even after a delete.
pub trait UserStore: Send + Sync {
    /// All current users, in insertion order.
    fn list(&self) -> StoreResult<Vec<User>>;

    /// Look up one user. `None` if no record with that id exists.
    fn get(&self, id: u64) -> StoreResult<Option<User>>;

    /// Validate the draft, assign the next id, and store the record.
    /// Returns the stored record including its id.
    fn create(&self, draft: UserDraft) -> StoreResult<User>;

    /// Validate the draft, then overwrite all mutable fields of the record
    /// with that id. Returns `false` when the id is unknown. Validation
    /// failures win over absence.
    fn update(&self, id: u64, draft: UserDraft) -> StoreResult<bool>;

    /// Remove the record with that id. Returns `false` when the id is
    /// unknown. The id counter is never decremented.
    fn delete(&self, id: u64) -> StoreResult<bool>;
}
