use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default number of previews retained per session.
pub const DEFAULT_CACHE_CAPACITY: usize = 20;

/// Exact-match fingerprint of every input that determines a preview's pixels.
///
/// Fields are compared individually, so a text containing the display separator can never alias
/// a different path/text split.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: PathBuf,
    text: String,
    font_size: i32,
    right_percent: i32,
    bottom_percent: i32,
}

impl CacheKey {
    /// Build a key from the raw (unscaled) preview parameters.
    pub fn new(
        path: impl AsRef<Path>,
        text: impl Into<String>,
        font_size: i32,
        right_percent: i32,
        bottom_percent: i32,
    ) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            text: text.into(),
            font_size,
            right_percent,
            bottom_percent,
        }
    }

    /// Image path component.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.path.display(),
            self.text,
            self.font_size,
            self.right_percent,
            self.bottom_percent
        )
    }
}

/// Bounded preview store with insertion-order eviction.
///
/// When full, inserting drops the entry that was inserted earliest. Lookups never change the
/// eviction order, so this is FIFO and not LRU. Not synchronised; the owner serialises access.
#[derive(Debug)]
pub struct PreviewCache<V> {
    capacity: usize,
    entries: HashMap<CacheKey, V>,
    order: VecDeque<CacheKey>,
}

impl<V> PreviewCache<V> {
    /// Create an empty cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return `true` when `key` is cached.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a cached preview. Does not affect eviction order.
    pub fn get(&self, key: &CacheKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert a preview, evicting the oldest insertion first when the cache is full.
    ///
    /// The full check happens before the key is looked up, so refreshing an existing key in a
    /// full cache still evicts the oldest entry. A refreshed key keeps its original insertion
    /// position unless it was the one evicted.
    pub fn put(&mut self, key: CacheKey, value: V) {
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                tracing::debug!(key = %oldest, "evicted preview");
            }
        }

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return;
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Cached keys, oldest insertion first.
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.order.iter()
    }
}

impl<V> Default for PreviewCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/cache.rs"]
mod tests;
