//! # Vault Façade
//!
//! The façade is the single entry point for all vault operations. Its one
//! structural job is coupling mutation to cache invalidation: every
//! mutating call locks the user's store, mutates, persists, and drops that
//! user's cached view before returning. Callers going through the façade
//! cannot forget the invalidation step, so reads are never staler than the
//! last completed mutation.
//!
//! ## What the façade does NOT do
//!
//! - **Authentication**: every call takes an already-resolved username
//!   supplied by the session layer.
//! - **Bookmark construction**: title and keyword extraction happen in the
//!   external [`BookmarkSource`] collaborator; the façade only files
//!   finished values.
//!
//! ## Generic over StorageBackend and Prober
//!
//! - Production: `Vault<FsBackend, HttpProber>` via [`Vault::open`]
//! - Testing: `Vault<MemBackend, _>` with a scripted prober via
//!   [`Vault::with_prober`]

use std::collections::HashSet;

use crate::cache::SearchCache;
use crate::config::VaultConfig;
use crate::error::Result;
use crate::model::{Bookmark, BookmarkSource};
use crate::registry::StoreRegistry;
use crate::store::backend::StorageBackend;
use crate::sweep::{HttpProber, Prober, SweepConfig};

pub struct Vault<B: StorageBackend + Clone, P: Prober + Sync> {
    registry: StoreRegistry<B>,
    cache: SearchCache,
    prober: P,
    sweep: SweepConfig,
}

impl<B: StorageBackend + Clone> Vault<B, HttpProber> {
    /// Production wiring: HTTP probes with the configured timeout.
    pub fn open(backend: B, config: &VaultConfig) -> Result<Self> {
        let prober = HttpProber::new(config.probe_timeout())?;
        Ok(Self::with_prober(backend, prober, config.sweep_config()))
    }
}

impl<B: StorageBackend + Clone, P: Prober + Sync> Vault<B, P> {
    pub fn with_prober(backend: B, prober: P, sweep: SweepConfig) -> Self {
        Self {
            registry: StoreRegistry::new(backend),
            cache: SearchCache::new(),
            prober,
            sweep,
        }
    }

    // --- Mutations (mutate, persist, then drop the cached view) ---

    pub fn create_group(&self, username: &str, group_name: &str) -> Result<()> {
        let store = self.registry.open(username)?;
        store.lock().create_group(group_name)?;
        self.cache.invalidate(username);
        Ok(())
    }

    pub fn add_bookmark(&self, username: &str, bookmark: Bookmark, group_name: &str) -> Result<()> {
        let store = self.registry.open(username)?;
        store.lock().add_bookmark(bookmark, group_name)?;
        self.cache.invalidate(username);
        Ok(())
    }

    /// Build a bookmark through the external construction collaborator and
    /// file it under `group_name`.
    pub fn add_from_source<S: BookmarkSource>(
        &self,
        username: &str,
        source: &S,
        url: &str,
        group_name: &str,
    ) -> Result<()> {
        let bookmark = source.bookmark(url, group_name)?;
        self.add_bookmark(username, bookmark, group_name)
    }

    pub fn remove_bookmark(&self, username: &str, title: &str, group_name: &str) -> Result<()> {
        let store = self.registry.open(username)?;
        store.lock().remove_bookmark(title, group_name)?;
        self.cache.invalidate(username);
        Ok(())
    }

    /// Sweep every group of the user's store for dead links. Blocks until
    /// all probes complete; individual probe failures never fail the call.
    pub fn clean_up(&self, username: &str) -> Result<()> {
        let store = self.registry.open(username)?;
        store.lock().clean_up(&self.prober, &self.sweep);
        self.cache.invalidate(username);
        Ok(())
    }

    // --- Queries (served from the cache, recomputed on miss) ---

    pub fn list_all(&self, username: &str) -> Result<Vec<Bookmark>> {
        let store = self.registry.open(username)?;
        let store = store.lock();
        Ok(self.cache.by_user(&store))
    }

    pub fn by_group(&self, username: &str, group_name: &str) -> Result<Vec<Bookmark>> {
        let store = self.registry.open(username)?;
        let store = store.lock();
        Ok(self.cache.by_group(&store, group_name))
    }

    pub fn by_tags(&self, username: &str, tags: &HashSet<String>) -> Result<Vec<Bookmark>> {
        let store = self.registry.open(username)?;
        let store = store.lock();
        Ok(self.cache.by_tags(&store, tags))
    }

    pub fn by_title(&self, username: &str, title: &str) -> Result<Vec<Bookmark>> {
        let store = self.registry.open(username)?;
        let store = store.lock();
        Ok(self.cache.by_title(&store, title))
    }
}
