//! Read-through cache wrapped around upstream fetches.
//!
//! Every upstream call is keyed by its logical operation name plus all
//! discriminating arguments, so keys can never collide across operations.
//! Entries carry their own absolute expiry because expirations differ per
//! operation; an expired entry is treated as absent and recomputed on the
//! next access. Concurrent computes for the same key are not deduplicated:
//! the operations are idempotent and last-writer-wins is fine.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache;

#[derive(Clone)]
struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    expires_at: Instant,
}

pub struct FetchCache {
    entries: Cache<String, CacheEntry>,
}
impl FetchCache {
    pub fn new() -> Self {
        FetchCache {
            entries: Cache::builder().max_capacity(10000).build(),
        }
    }

    /// Returns the unexpired value stored under `key`, or runs `compute`,
    /// stores its result with expiry `now + ttl` and returns it. Empty and
    /// negative results are stored the same as any other value.
    pub async fn get<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> T
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                if let Some(value) = entry.value.downcast_ref::<T>() {
                    return value.clone();
                }
            }
        }

        let value = compute().await;
        self.entries.insert(
            key.to_owned(),
            CacheEntry {
                value: Arc::new(value.clone()),
                expires_at: Instant::now() + ttl,
            },
        );

        value
    }

    pub fn entry_count(&self) -> usize {
        self.entries.run_pending_tasks();
        self.entries.entry_count() as usize
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn compute_invoked_at_most_once_within_ttl() {
        let cache = FetchCache::new();
        let computes = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get("op:a", Duration::from_secs(60), || async {
                    computes.fetch_add(1, Ordering::SeqCst);
                    "value".to_owned()
                })
                .await;
            assert_eq!(value, "value");
        }

        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_recomputed() {
        let cache = FetchCache::new();
        let computes = AtomicUsize::new(0);

        let compute = || async {
            computes.fetch_add(1, Ordering::SeqCst);
            1u64
        };

        cache.get("op:a", Duration::from_millis(20), compute).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        cache.get("op:a", Duration::from_millis(20), compute).await;

        assert_eq!(computes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn distinct_keys_do_not_collide() {
        let cache = FetchCache::new();

        let a = cache.get("players:na:x", Duration::from_secs(60), || async { 1u64 }).await;
        let b = cache.get("seasons:na", Duration::from_secs(60), || async { 2u64 }).await;

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(cache.entry_count(), 2);
    }

    #[tokio::test]
    async fn empty_results_are_cached() {
        let cache = FetchCache::new();
        let computes = AtomicUsize::new(0);

        let compute = || async {
            computes.fetch_add(1, Ordering::SeqCst);
            Vec::<String>::new()
        };

        let first = cache.get("op:empty", Duration::from_secs(60), compute).await;
        let second = cache.get("op:empty", Duration::from_secs(60), compute).await;

        assert!(first.is_empty() && second.is_empty());
        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }
}
