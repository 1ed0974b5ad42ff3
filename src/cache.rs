//! Invalidate-on-write read view over a user's bookmarks.
//!
//! The cache keeps one flattened view per user so the four query shapes
//! never rescan groups on a hit. Entries are dropped wholesale on any
//! mutation and recomputed lazily from the group store on the next read.
//! There is no TTL and no partial update: freshness rests entirely on the
//! façade invalidating after every successful mutation.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::model::Bookmark;
use crate::store::backend::StorageBackend;
use crate::store::group_store::GroupStore;

/// Per-user flattened views behind a concurrent map: reads, invalidations
/// and recomputes for different users never block each other. Two racing
/// reads for the same user may both recompute; the recomputation is a pure
/// read of the store, so last write wins and both callers see the same view.
#[derive(Default)]
pub struct SearchCache {
    views: DashMap<String, Vec<Bookmark>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bookmarks for the store's user, from cache when fresh.
    pub fn by_user<B: StorageBackend>(&self, store: &GroupStore<B>) -> Vec<Bookmark> {
        if let Some(view) = self.views.get(store.username()) {
            return view.clone();
        }

        let view = store.list_all();
        self.views
            .insert(store.username().to_string(), view.clone());
        view
    }

    /// Bookmarks filed under exactly `group_name`. An unknown group yields
    /// an empty vec, not an error.
    pub fn by_group<B: StorageBackend>(
        &self,
        store: &GroupStore<B>,
        group_name: &str,
    ) -> Vec<Bookmark> {
        self.by_user(store)
            .into_iter()
            .filter(|b| b.group_name == group_name)
            .collect()
    }

    /// Bookmarks whose keyword set intersects `tags` (any shared tag is a
    /// match, not subset).
    pub fn by_tags<B: StorageBackend>(
        &self,
        store: &GroupStore<B>,
        tags: &HashSet<String>,
    ) -> Vec<Bookmark> {
        self.by_user(store)
            .into_iter()
            .filter(|b| b.keywords.iter().any(|k| tags.contains(k)))
            .collect()
    }

    /// Bookmarks whose title contains `title` case-insensitively.
    pub fn by_title<B: StorageBackend>(&self, store: &GroupStore<B>, title: &str) -> Vec<Bookmark> {
        let needle = title.to_lowercase();
        self.by_user(store)
            .into_iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Drop a user's cached view. Idempotent; a miss is fine.
    pub fn invalidate(&self, username: &str) {
        self.views.remove(username);
    }

    #[cfg(test)]
    fn is_cached(&self, username: &str) -> bool {
        self.views.contains_key(username)
    }
}
