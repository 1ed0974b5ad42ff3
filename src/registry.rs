//! Store lookup by username.
//!
//! The registry is an explicit object passed through the call chain, not a
//! process-wide singleton. Each user's store sits behind its own mutex, so
//! sessions belonging to different users never contend; operations for one
//! user serialize on that user's lock.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::group_store::GroupStore;

pub struct StoreRegistry<B: StorageBackend + Clone> {
    backend: B,
    stores: DashMap<String, Arc<Mutex<GroupStore<B>>>>,
}

impl<B: StorageBackend + Clone> StoreRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stores: DashMap::new(),
        }
    }

    /// The store for `username`, loading persisted groups on first access.
    pub fn open(&self, username: &str) -> Result<Arc<Mutex<GroupStore<B>>>> {
        if let Some(store) = self.stores.get(username) {
            return Ok(store.clone());
        }

        // Two sessions racing the first open both load; whichever entry
        // lands in the map wins and both get the same handle back.
        let loaded = GroupStore::open(self.backend.clone(), username)?;
        let entry = self
            .stores
            .entry(username.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(loaded)));
        Ok(entry.clone())
    }
}
