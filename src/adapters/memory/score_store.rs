//! In-memory user score store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Points, Timestamp, UserId};
use crate::domain::score::{ScoreDelta, UserScore};
use crate::ports::UserScoreStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserScoreStore {
    scores: Arc<RwLock<HashMap<UserId, UserScore>>>,
    failing_writes: Arc<AtomicU32>,
}

impl InMemoryUserScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` calls to `add_to_total` fail with a
    /// `DatabaseError`.
    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    fn take_failure(&self) -> bool {
        self.failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl UserScoreStore for InMemoryUserScoreStore {
    async fn get_total(&self, user_id: &UserId) -> Result<Points, DomainError> {
        Ok(self
            .scores
            .read()
            .await
            .get(user_id)
            .map(|s| s.total)
            .unwrap_or(Points::ZERO))
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<UserScore>, DomainError> {
        Ok(self.scores.read().await.get(user_id).cloned())
    }

    async fn set_total(
        &self,
        user_id: &UserId,
        total: Points,
        at: Timestamp,
    ) -> Result<(), DomainError> {
        self.scores.write().await.insert(
            user_id.clone(),
            UserScore {
                user_id: user_id.clone(),
                total,
                updated_at: at,
            },
        );
        Ok(())
    }

    async fn add_to_total(
        &self,
        user_id: &UserId,
        delta: Points,
        at: Timestamp,
    ) -> Result<Points, DomainError> {
        if self.take_failure() {
            return Err(DomainError::database("simulated score write failure"));
        }
        let mut scores = self.scores.write().await;
        let score = scores
            .entry(user_id.clone())
            .or_insert_with(|| UserScore::empty(user_id.clone(), at));
        Ok(score.apply(ScoreDelta::created(delta), at))
    }
}
