//! Client-side query cache.
//!
//! DESIGN
//! ======
//! The cache is an explicit handle passed to whoever reads or mutates remote
//! collections, never ambient global state. Queries read through it; mutations
//! only invalidate, so the next read refetches from the API. Entries are
//! type-erased so one cache can hold every collection the console shows.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

/// Identifies one cached query result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(pub &'static str);

/// The AI model list.
pub const AI_MODELS: QueryKey = QueryKey("ai-models");
/// The follow-up list.
pub const FOLLOW_UPS: QueryKey = QueryKey("follow-ups");

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    stale: bool,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
}

/// Shared, cloneable handle to the query cache.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<RwLock<Inner>>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<_> = inner.entries.keys().map(|k| k.0).collect();
        keys.sort_unstable();
        f.debug_struct("QueryCache").field("keys", &keys).finish()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for `key`, or `None` when missing, stale, or of another type.
    #[must_use]
    pub fn get<T>(&self, key: QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let entry = inner.entries.get(&key)?;
        if entry.stale {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Last stored value for `key` even if stale, for rendering while refetching.
    #[must_use]
    pub fn peek<T>(&self, key: QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.get(&key)?.value.downcast_ref::<T>().cloned()
    }

    /// Store a fresh value for `key`, replacing any previous entry.
    pub fn set<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.entries.insert(key, Entry { value: Arc::new(value), stale: false });
    }

    /// Mark `key` stale so the next query refetches. Returns whether an entry existed.
    pub fn invalidate(&self, key: QueryKey) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match inner.entries.get_mut(&key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    /// `true` when `key` has no fresh value.
    #[must_use]
    pub fn is_stale(&self, key: QueryKey) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.get(&key).is_none_or(|e| e.stale)
    }

    /// Return the fresh value for `key`, or run `fetch` and cache its result.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error; the cache is left untouched in that case.
    pub async fn query<T, E, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(key) {
            return Ok(hit);
        }
        let value = fetch().await?;
        self.set(key, value.clone());
        Ok(value)
    }
}
