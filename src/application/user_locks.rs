//! Per-user serialization of read-modify-write cycles.
//!
//! Two concurrent commands for the same user would otherwise both read the
//! same record and the later save would drop the earlier change. Handlers
//! hold the user's guard from the read until the save completes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

/// Idle entries are pruned once the map grows past this size.
const PRUNE_THRESHOLD: usize = 1024;

/// Registry of per-user async locks.
#[derive(Debug)]
pub struct UserLocks {
    enabled: bool,
    locks: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    /// Locks that serialize updates per user.
    pub fn new() -> Self {
        Self {
            enabled: true,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Last-write-wins: `acquire` never blocks and returns no guard.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Waits for exclusive access to the user's record.
    pub async fn acquire(&self, user_id: &UserId) -> Option<OwnedMutexGuard<()>> {
        if !self.enabled {
            return None;
        }

        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if locks.len() > PRUNE_THRESHOLD {
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            locks
                .entry(user_id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        Some(lock.lock_owned().await)
    }

    /// Number of users with a registered lock.
    pub fn tracked_users(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for UserLocks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn disabled_locks_return_no_guard() {
        let locks = UserLocks::disabled();
        assert!(locks.acquire(&user("a")).await.is_none());
        assert_eq!(locks.tracked_users(), 0);
    }

    #[tokio::test]
    async fn same_user_is_serialized() {
        let locks = Arc::new(UserLocks::new());
        let guard = locks.acquire(&user("a")).await;
        assert!(guard.is_some());

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move { locks.acquire(&user("a")).await.is_some() })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        assert!(contender.await.unwrap());
    }

    #[tokio::test]
    async fn different_users_do_not_block() {
        let locks = UserLocks::new();
        let _a = locks.acquire(&user("a")).await;

        let b = tokio::time::timeout(Duration::from_millis(100), locks.acquire(&user("b"))).await;

        assert!(b.is_ok());
        assert_eq!(locks.tracked_users(), 2);
    }
}
