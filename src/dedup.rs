//! First-occurrence filtering.
//!
//! One [`Deduplicator`] instance holds the identities seen during one run;
//! construct a fresh one per pass instead of sharing it.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Tracks previously seen identities within a single pass.
#[derive(Debug, Default)]
pub struct Deduplicator<K> {
    seen: FxHashSet<K>,
}

impl<K: Eq + Hash> Deduplicator<K> {
    pub fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
        }
    }

    /// Returns true on repeat identities, false on first occurrence.
    pub fn is_duplicate(&mut self, key: K) -> bool {
        !self.seen.insert(key)
    }
}

/// Returns a predicate suitable for `Iterator::filter`, keeping only the
/// first record per identity. Safe for single-pass use without look-ahead.
pub fn unique_by<T, K, F>(mut key: F) -> impl FnMut(&T) -> bool
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut dedup = Deduplicator::new();
    move |item| !dedup.is_duplicate(key(item))
}
