use crate::error::{Result, VaultError};
use crate::sweep::SweepConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SWEEP_WORKERS: usize = 8;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Configuration for a vault, stored in <data_dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultConfig {
    /// Directory holding the per-user backing documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Worker pool size for the liveness sweep
    #[serde(default = "default_sweep_workers")]
    pub sweep_workers: usize,

    /// Per-probe request timeout in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "linkvault")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".linkvault"))
}

fn default_sweep_workers() -> usize {
    DEFAULT_SWEEP_WORKERS
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sweep_workers: DEFAULT_SWEEP_WORKERS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

impl VaultConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VaultError::Io)?;
        let config: VaultConfig =
            serde_json::from_str(&content).map_err(VaultError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VaultError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VaultError::Serialization)?;
        fs::write(config_path, content).map_err(VaultError::Io)?;
        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            workers: self.sweep_workers,
            probe_timeout: self.probe_timeout(),
        }
    }
}
