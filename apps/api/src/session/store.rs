//! Session store — keeps engine results addressable by an opaque token.
//!
//! Default: `InMemorySessionStore` (process-local, volatile).
//! `AppState` holds an `Arc<dyn SessionStore>` so a shared backend can be
//! swapped in without touching handlers.
//!
//! Growth is governed by `EvictionPolicy`. With neither a TTL nor a cap the
//! store grows for the life of the process; `main` warns when started that way.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::mapping::EngineOutput;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `output` under a freshly generated token and returns the token.
    async fn insert(&self, output: EngineOutput) -> Uuid;

    /// Returns the stored result, or `None` for unknown or expired tokens.
    async fn get(&self, token: &Uuid) -> Option<EngineOutput>;

    /// Drops expired results, returning how many were removed.
    async fn purge_expired(&self) -> usize;

    /// Number of results currently held (expired-but-unswept included).
    async fn count(&self) -> usize;
}

// ────────────────────────────────────────────────────────────────────────────
// Eviction policy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionPolicy {
    /// Results older than this are invisible to `get` and removed on sweep.
    pub ttl: Option<Duration>,
    /// Upper bound on stored results; the oldest goes first when full.
    pub max_entries: Option<usize>,
}

impl EvictionPolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Zero values are treated as "not set".
    pub fn from_limits(ttl_secs: Option<u64>, max_entries: Option<usize>) -> Self {
        Self {
            ttl: ttl_secs
                .filter(|s| *s > 0)
                .map(|s| Duration::seconds(s.min(i64::MAX as u64 / 1_000) as i64)),
            max_entries: max_entries.filter(|n| *n > 0),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.ttl.is_none() && self.max_entries.is_none()
    }

    fn is_expired(&self, stored_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.ttl {
            Some(ttl) => now - stored_at > ttl,
            None => false,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct StoredResult {
    output: EngineOutput,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<Uuid, StoredResult>>,
    policy: EvictionPolicy,
}

impl InMemorySessionStore {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy,
        }
    }

    async fn insert_at(&self, output: EngineOutput, now: DateTime<Utc>) -> Uuid {
        let token = Uuid::new_v4();
        let mut entries = self.entries.write().await;

        if let Some(max) = self.policy.max_entries {
            while entries.len() >= max {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, stored)| stored.stored_at)
                    .map(|(key, _)| *key);
                match oldest {
                    Some(key) => {
                        entries.remove(&key);
                        debug!("Evicted session {key} (store at capacity {max})");
                    }
                    None => break,
                }
            }
        }

        entries.insert(
            token,
            StoredResult {
                output,
                stored_at: now,
            },
        );
        token
    }

    async fn get_at(&self, token: &Uuid, now: DateTime<Utc>) -> Option<EngineOutput> {
        let entries = self.entries.read().await;
        entries
            .get(token)
            .filter(|stored| !self.policy.is_expired(stored.stored_at, now))
            .map(|stored| stored.output.clone())
    }

    async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        if self.policy.ttl.is_none() {
            return 0;
        }
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, stored| !self.policy.is_expired(stored.stored_at, now));
        before - entries.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, output: EngineOutput) -> Uuid {
        self.insert_at(output, Utc::now()).await
    }

    async fn get(&self, token: &Uuid) -> Option<EngineOutput> {
        self.get_at(token, Utc::now()).await
    }

    async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Periodically drops expired results. Runs until the runtime shuts down.
pub async fn run_sweeper(store: Arc<dyn SessionStore>, every: StdDuration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        let removed = store.purge_expired().await;
        if removed > 0 {
            debug!("Session sweep removed {removed} expired result(s)");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
