use super::backend::StorageBackend;
use crate::error::{Result, VaultError};
use crate::model::Group;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-memory storage backend for testing.
///
/// State lives behind an `Arc`, so cloned handles share one logical store
/// the way two `FsBackend` values pointed at the same directory would.
#[derive(Clone, Default)]
pub struct MemBackend {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    documents: Mutex<HashMap<String, HashMap<String, Group>>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.inner
            .simulate_write_error
            .store(simulate, Ordering::SeqCst);
    }
}

impl StorageBackend for MemBackend {
    fn load_groups(&self, username: &str) -> Result<HashMap<String, Group>> {
        let documents = self.inner.documents.lock();
        Ok(documents.get(username).cloned().unwrap_or_default())
    }

    fn save_groups(&self, username: &str, groups: &HashMap<String, Group>) -> Result<()> {
        if self.inner.simulate_write_error.load(Ordering::SeqCst) {
            return Err(VaultError::Store("Simulated write error".to_string()));
        }
        let mut documents = self.inner.documents.lock();
        documents.insert(username.to_string(), groups.clone());
        Ok(())
    }
}
