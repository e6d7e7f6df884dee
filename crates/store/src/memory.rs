//! In-memory user store.

use std::sync::RwLock;

use validator::Validate;

use staffdir_core::{User, UserDraft};

use crate::store::{StoreError, StoreResult, UserStore};

/// In-memory user store guarded by a single lock.
///
/// Built once at process start with an empty collection and the id counter
/// at 1; nothing survives a restart.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.users.clone())
    }

    fn get(&self, id: u64) -> StoreResult<Option<User>> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    fn create(&self, draft: UserDraft) -> StoreResult<User> {
        draft.validate()?;

        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User::from_draft(id, draft);
        inner.users.push(user.clone());

        tracing::debug!(id, "created user");
        Ok(user)
    }

    fn update(&self, id: u64, draft: UserDraft) -> StoreResult<bool> {
        // Validation failure wins over absence.
        draft.validate()?;

        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        match inner.users.iter_mut().find(|u| u.id == id) {
            Some(existing) => {
                existing.apply_draft(draft);
                tracing::debug!(id, "updated user");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: u64) -> StoreResult<bool> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);

        let removed = inner.users.len() < before;
        if removed {
            tracing::debug!(id, "deleted user");
        }
        Ok(removed)
    }
}
