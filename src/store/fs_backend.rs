use super::backend::StorageBackend;
use crate::error::{Result, VaultError};
use crate::model::Group;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const FORMAT_VERSION: u32 = 1;

/// On-disk shape of one user's vault file.
#[derive(Serialize, Deserialize)]
struct VaultDocument {
    version: u32,
    groups: HashMap<String, Group>,
}

#[derive(Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn vault_filename(username: &str) -> String {
        format!("vault-{}.json", username)
    }

    fn vault_path(&self, username: &str) -> Result<PathBuf> {
        validate_username(username)?;
        Ok(self.root.join(Self::vault_filename(username)))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(VaultError::Io)?;
        }
        Ok(())
    }
}

/// Usernames become file names; only allow characters that can never
/// escape the vault root or collide with temp-file naming.
fn validate_username(username: &str) -> Result<()> {
    let storable = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !storable {
        return Err(VaultError::InvalidArgument(format!(
            "username {:?} is not storable",
            username
        )));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn load_groups(&self, username: &str) -> Result<HashMap<String, Group>> {
        let path = self.vault_path(username)?;
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(path).map_err(VaultError::Io)?;
        let document: VaultDocument =
            serde_json::from_str(&content).map_err(VaultError::Serialization)?;

        if document.version > FORMAT_VERSION {
            return Err(VaultError::Store(format!(
                "vault file for {} has unsupported format version {}",
                username, document.version
            )));
        }
        Ok(document.groups)
    }

    fn save_groups(&self, username: &str, groups: &HashMap<String, Group>) -> Result<()> {
        let path = self.vault_path(username)?;
        self.ensure_root()?;

        let document = VaultDocument {
            version: FORMAT_VERSION,
            groups: groups.clone(),
        };
        let content = serde_json::to_string_pretty(&document).map_err(VaultError::Serialization)?;

        // Atomic write: the previous document survives until the rename lands
        let tmp_file = self.root.join(format!(".vault-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(VaultError::Io)?;
        fs::rename(&tmp_file, &path).map_err(VaultError::Io)?;

        Ok(())
    }
}
