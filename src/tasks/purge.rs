//! Cache Purge Task
//!
//! Background task that periodically removes expired cache entries, so a
//! quiet cache does not hold stale expense lists until the next read
//! happens to touch them.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task sleeps for `interval` between runs and relies on the store's
/// own locking; no extra synchronization is needed. The returned handle is
/// the only way to stop it: abort it during shutdown.
///
/// # Example
/// ```ignore
/// let local = CachedLocalDataSource::new(CacheStrategy::default());
/// let purge_handle = spawn_purge_task(local.cache(), Duration::from_secs(30));
/// // Later, during shutdown:
/// purge_handle.abort();
/// ```
pub fn spawn_purge_task<K, V>(cache: Arc<CacheStore<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting cache purge task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!(removed, "cache purge removed expired entries");
            } else {
                debug!("cache purge found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheStrategy;

    #[tokio::test]
    async fn test_purge_task_removes_expired_entries() {
        let cache: Arc<CacheStore<String, String>> = Arc::new(CacheStore::new(
            CacheStrategy::new(Duration::from_millis(40), 100, true),
        ));

        cache.put("key1".to_string(), "value1".to_string());
        cache.put("key2".to_string(), "value2".to_string());
        assert_eq!(cache.len(), 2);

        let handle = spawn_purge_task(Arc::clone(&cache), Duration::from_millis(30));

        // Give the entries time to expire and the task time to run
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(cache.len(), 0);
        handle.abort();
    }

    #[tokio::test]
    async fn test_purge_task_leaves_fresh_entries() {
        let cache: Arc<CacheStore<String, String>> = Arc::new(CacheStore::new(
            CacheStrategy::new(Duration::from_secs(300), 100, true),
        ));

        cache.put("key1".to_string(), "value1".to_string());

        let handle = spawn_purge_task(Arc::clone(&cache), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.len(), 1);
        handle.abort();
    }

    #[tokio::test]
    async fn test_purge_task_abort() {
        let cache: Arc<CacheStore<String, String>> =
            Arc::new(CacheStore::new(CacheStrategy::default()));

        let handle = spawn_purge_task(cache, Duration::from_millis(10));
        handle.abort();

        let joined = handle.await;
        assert!(joined.unwrap_err().is_cancelled());
    }
}
