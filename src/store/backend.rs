use crate::error::Result;
use crate::model::Group;
use std::collections::HashMap;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while GroupStore handles the "what" (invariants, sweep, cache seeding).
pub trait StorageBackend {
    /// Load every group for a user.
    /// Returns an empty map when the user has no backing document yet.
    fn load_groups(&self, username: &str) -> Result<HashMap<String, Group>>;

    /// Persist every group for a user, replacing the previous document.
    /// MUST be atomic (e.g. write to tmp then rename) so a failed write
    /// never leaves a half-written document behind.
    fn save_groups(&self, username: &str, groups: &HashMap<String, Group>) -> Result<()>;
}
