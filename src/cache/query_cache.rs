use super::QueryKey;
use crate::shared::FetchError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Freshness window of the user directory
pub const DIRECTORY_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// How long a stored value may be served without reloading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Stale once more than the given duration elapsed since the fetch
    Window(Duration),
    /// Never stale; reloaded only after [`QueryCache::invalidate`]
    UntilInvalidated,
}

impl Freshness {
    fn is_stale(&self, fetched_at: Instant) -> bool {
        match self {
            Freshness::Window(window) => fetched_at.elapsed() > *window,
            Freshness::UntilInvalidated => false,
        }
    }
}

struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

type SharedLoad<V> = Shared<BoxFuture<'static, Result<V, FetchError>>>;

/// QueryCache stores the last successful value per [`QueryKey`] and
/// coalesces concurrent loads of the same key.
///
/// - A fresh entry is returned without running the loader.
/// - While a load for a key is in flight, every further caller awaits that
///   same load instead of starting another one.
/// - A failed load is delivered to all of its waiters and is not stored,
///   so the next call runs the loader again.
///
/// The cache is the only writer of its entries. Consumers go through
/// [`QueryCache::fetch`] and [`QueryCache::invalidate`].
pub struct QueryCache<V> {
    freshness: Freshness,
    entries: Arc<DashMap<QueryKey, CacheEntry<V>>>,
    in_flight: Arc<DashMap<QueryKey, SharedLoad<V>>>,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(freshness: Freshness) -> Self {
        Self {
            freshness,
            entries: Arc::new(DashMap::new()),
            in_flight: Arc::new(DashMap::new()),
        }
    }

    /// Returns the value for `key`, running `loader` only when there is
    /// neither a fresh entry nor an in-flight load for it.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, loader: F) -> Result<V, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        let load = match self.in_flight.entry(key) {
            Entry::Occupied(pending) => {
                debug!(%key, "joining in-flight fetch");
                pending.get().clone()
            }
            Entry::Vacant(slot) => {
                if let Some(value) = self.fresh_value(&key) {
                    debug!(%key, "cache hit");
                    return Ok(value);
                }
                let load = self.start_load(key, loader());
                slot.insert(load.clone());
                load
            }
        };

        load.await
    }

    /// Drops the stored value for `key` so the next fetch reloads it.
    ///
    /// An in-flight load is left alone and still stores its result.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(%key, "cache entry invalidated");
        }
        removed
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Number of stored entries, fresh or stale
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fresh_value(&self, key: &QueryKey) -> Option<V> {
        let entry = self.entries.get(key)?;
        if self.freshness.is_stale(entry.fetched_at) {
            debug!(%key, "cache entry is stale");
            return None;
        }
        Some(entry.value.clone())
    }

    fn start_load<Fut>(&self, key: QueryKey, load: Fut) -> SharedLoad<V>
    where
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        let in_flight = Arc::clone(&self.in_flight);

        // The load runs on its own task so it completes, and stores its
        // result, even when every caller stops waiting.
        let task = tokio::spawn({
            let in_flight = Arc::clone(&in_flight);
            async move {
                debug!(%key, "cache miss, fetching");
                let result = match load.await {
                    Ok(value) => {
                        entries.insert(
                            key,
                            CacheEntry {
                                value: value.clone(),
                                fetched_at: Instant::now(),
                            },
                        );
                        Ok(value)
                    }
                    Err(err) => {
                        warn!(%key, error = %format!("{:#}", err), "fetch failed");
                        Err(FetchError::new(key, &err))
                    }
                };
                // Store before releasing the slot: a concurrent caller always sees
                // either the in-flight load or the new entry.
                in_flight.remove(&key);
                result
            }
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(join_error) => {
                    in_flight.remove(&key);
                    Err(FetchError::new(key, &anyhow::Error::new(join_error)))
                }
            }
        }
        .boxed()
        .shared()
    }
}
