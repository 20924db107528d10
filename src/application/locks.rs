//! Per-user mutual exclusion.
//!
//! The running total and each user's goals are read-modify-written under
//! a lock keyed by `(scope, user)`. Different users never share a lock, and
//! the two scopes of one user never block each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockScope {
    /// The user's running score total.
    Score,
    /// The user's goals and their cached progress.
    Goals,
}

#[derive(Debug, Default)]
pub struct UserLockRegistry {
    locks: Mutex<HashMap<(LockScope, UserId), Arc<AsyncMutex<()>>>>,
}

impl UserLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `scope` of `user_id`.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, scope: LockScope, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks
                .entry((scope, user_id.clone()))
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Tasks currently holding or waiting for `scope` of `user_id`.
    pub fn contenders(&self, scope: LockScope, user_id: &UserId) -> usize {
        let locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks
            .get(&(scope, user_id.clone()))
            .map_or(0, |lock| Arc::strong_count(lock) - 1)
    }

    /// Drops locks nobody holds or waits for.
    pub fn prune(&self) -> usize {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let before = locks.len();
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        before - locks.len()
    }

    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
