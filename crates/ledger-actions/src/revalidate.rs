//! Cached views and their invalidation.
//!
//! The server caches rendered view data keyed by logical path (including any
//! query string). A successful write revalidates a path, dropping that entry
//! and every entry beneath it so the next read goes back to the store.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

/// Entries kept when no explicit capacity is given.
pub const DEFAULT_VIEW_CACHE_ENTRIES: usize = 128;

/// Receiver of cache invalidation signals.
pub trait Revalidate: Send + Sync {
    fn revalidate_path(&self, path: &str);
}

#[derive(Debug, Default)]
struct Entries {
    views: HashMap<String, Value>,
    /// Keys oldest first; the front is evicted when the cache is full.
    order: VecDeque<String>,
}

impl Entries {
    fn forget(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }
}

/// Shared in-memory view cache holding at most `capacity` views.
#[derive(Debug)]
pub struct ViewCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_VIEW_CACHE_ENTRIES)
    }
}

impl ViewCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries().views.get(key).cloned()
    }

    /// Store `view` under `key`, evicting the oldest views once full.
    pub fn insert(&self, key: impl Into<String>, view: Value) {
        let key = key.into();
        let mut entries = self.entries();
        if entries.views.insert(key.clone(), view).is_some() {
            entries.forget(&key);
        }
        entries.order.push_back(key);
        while entries.views.len() > self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.views.remove(&oldest);
            tracing::trace!(key = %oldest, "view evicted");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().views.is_empty()
    }
}

/// `key` is `path` itself, a sub-path, or `path` with a query string.
fn is_under(key: &str, path: &str) -> bool {
    let path = path.trim_end_matches('/');
    key.strip_prefix(path)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}

impl Revalidate for ViewCache {
    fn revalidate_path(&self, path: &str) {
        let mut entries = self.entries();
        let before = entries.views.len();
        entries.views.retain(|key, _| !is_under(key, path));
        entries.order.retain(|key| !is_under(key, path));
        tracing::debug!(path, dropped = before - entries.views.len(), "revalidated");
    }
}
