use super::backend::StorageBackend;
use crate::error::{Result, VaultError};
use crate::model::{require_non_blank, Bookmark, Group};
use crate::sweep::{self, Prober, SweepConfig};
use std::collections::HashMap;

/// One user's named bookmark groups, kept consistent with the backing
/// document after every mutation.
///
/// The store is the only owner of its groups: the search cache holds a
/// derived copy and never writes back, and the sweep applies removals
/// through [`GroupStore::clean_up`] rather than touching groups directly.
pub struct GroupStore<B: StorageBackend> {
    username: String,
    groups: HashMap<String, Group>,
    backend: B,
}

impl<B: StorageBackend> GroupStore<B> {
    /// Open a user's store, loading any previously persisted groups.
    pub fn open(backend: B, username: &str) -> Result<Self> {
        require_non_blank(username, "username")?;
        let groups = backend.load_groups(username)?;
        Ok(Self {
            username: username.to_string(),
            groups,
            backend,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn create_group(&mut self, name: &str) -> Result<()> {
        require_non_blank(name, "group name")?;
        if self.groups.contains_key(name) {
            return Err(VaultError::GroupAlreadyExists(name.to_string()));
        }

        self.groups.insert(name.to_string(), Group::new(name));
        self.persist();
        Ok(())
    }

    /// Add a bookmark to an existing group. A bookmark whose title is
    /// already taken in that group is dropped silently (de-duplication,
    /// not overwrite) and the call still succeeds.
    pub fn add_bookmark(&mut self, bookmark: Bookmark, group_name: &str) -> Result<()> {
        require_non_blank(group_name, "group name")?;
        require_non_blank(&bookmark.title, "bookmark title")?;

        let group = self
            .groups
            .get_mut(group_name)
            .ok_or_else(|| VaultError::GroupNotFound(group_name.to_string()))?;

        if group.add(bookmark) {
            self.persist();
        }
        Ok(())
    }

    /// Remove a bookmark, matching its title case-insensitively.
    pub fn remove_bookmark(&mut self, title: &str, group_name: &str) -> Result<()> {
        require_non_blank(group_name, "group name")?;
        require_non_blank(title, "bookmark title")?;

        let group = self
            .groups
            .get_mut(group_name)
            .ok_or_else(|| VaultError::GroupNotFound(group_name.to_string()))?;

        group
            .remove_matching(title)
            .ok_or_else(|| VaultError::BookmarkNotFound {
                group: group_name.to_string(),
                title: title.to_string(),
            })?;

        self.persist();
        Ok(())
    }

    /// Probe every bookmark's URL and drop the ones whose server answered
    /// with an error status. Blocks until all probes have come back, then
    /// persists once (a single rewrite, not one per removal).
    ///
    /// Probe failures never surface here: a bookmark is only removed on a
    /// confirmed error response, not on inability to reach the server.
    pub fn clean_up<P: Prober + Sync>(&mut self, prober: &P, config: &SweepConfig) {
        let removed = sweep::sweep_store(&mut self.groups, prober, config);
        if removed > 0 {
            tracing::debug!(user = %self.username, removed, "sweep removed dead bookmarks");
            self.persist();
        }
    }

    /// Flattened view of every bookmark across all groups, ordered by
    /// group name then title. This is what seeds the search cache.
    pub fn list_all(&self) -> Vec<Bookmark> {
        let mut names: Vec<&String> = self.groups.keys().collect();
        names.sort();

        let mut all = Vec::new();
        for name in names {
            let mut marks: Vec<&Bookmark> = self.groups[name].bookmarks().collect();
            marks.sort_by(|a, b| a.title.cmp(&b.title));
            all.extend(marks.into_iter().cloned());
        }
        all
    }

    /// Rewrite the backing document. Failures are logged, never propagated:
    /// the in-memory state stands and the caller's mutation has succeeded.
    fn persist(&self) {
        if let Err(e) = self.backend.save_groups(&self.username, &self.groups) {
            tracing::warn!(user = %self.username, error = %e, "failed to persist bookmark groups");
        }
    }
}
