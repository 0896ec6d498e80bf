//! Nue configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NueError, NueResult};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nue.toml";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NueConfig {
    /// Directory holding database snapshots
    pub data_dir: PathBuf,

    /// Server bind address
    pub bind_address: String,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Write snapshots to `data_dir`; when false everything stays in memory
    pub persist: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nue")
}

impl Default for NueConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bind_address: "127.0.0.1:7070".to_string(),
            log_filter: "info".to_string(),
            persist: true,
        }
    }
}

impl NueConfig {
    /// Create a new configuration builder
    pub fn builder() -> NueConfigBuilder {
        NueConfigBuilder::default()
    }

    /// Read a TOML configuration file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> NueResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| NueError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Like [`NueConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> NueResult<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Builder for NueConfig
#[derive(Debug, Default)]
pub struct NueConfigBuilder {
    config: NueConfig,
}

impl NueConfigBuilder {
    /// Set the snapshot directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    /// Set the bind address
    pub fn bind(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_address = addr.into();
        self
    }

    /// Set the log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Enable or disable snapshots
    pub fn persist(mut self, persist: bool) -> Self {
        self.config.persist = persist;
        self
    }

    /// Build the configuration
    pub fn build(self) -> NueConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"0.0.0.0:9000\"\npersist = false").unwrap();

        let config = NueConfig::load(file.path()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert!(!config.persist);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "persist = \"sometimes\"").unwrap();
        assert!(matches!(
            NueConfig::load(file.path()).unwrap_err(),
            NueError::Config(_)
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NueConfig::load_or_default(dir.path().join("nue.toml")).unwrap();
        assert_eq!(config, NueConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = NueConfig::builder()
            .data_dir("/tmp/nue")
            .bind("127.0.0.1:0")
            .persist(false)
            .build();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/nue"));
        assert_eq!(config.bind_address, "127.0.0.1:0");
        assert!(!config.persist);
    }
}
