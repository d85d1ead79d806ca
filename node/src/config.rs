//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use vgv_types::ProtocolParams;

use crate::NodeError;

/// Configuration for a VGV validator node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Data directory for state snapshots.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Path to the genesis configuration file.
    #[serde(default = "default_genesis_file")]
    pub genesis_file: PathBuf,

    /// Protocol parameters (loaded from genesis/governance, not TOML config).
    #[serde(skip)]
    pub params: ProtocolParams,

    /// Take a state snapshot every this many blocks.
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval_blocks: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./vgv_data")
}

fn default_genesis_file() -> PathBuf {
    PathBuf::from("./genesis.toml")
}

fn default_snapshot_interval() -> u64 {
    1_000
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// The log format as a [`crate::LogFormat`], defaulting to human output
    /// on unrecognized values.
    pub fn log_format(&self) -> crate::LogFormat {
        match self.log_format.as_str() {
            "json" => crate::LogFormat::Json,
            _ => crate::LogFormat::Human,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            genesis_file: default_genesis_file(),
            params: ProtocolParams::default(),
            snapshot_interval_blocks: default_snapshot_interval(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = NodeConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.snapshot_interval_blocks, 1_000);
        assert_eq!(config.log_format, "human");
        assert_eq!(config.params.base_fee, 10);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            snapshot_interval_blocks = 50
            log_format = "json"
        "#;
        let config = NodeConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.snapshot_interval_blocks, 50);
        assert_eq!(config.log_format(), crate::LogFormat::Json);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = NodeConfig::from_toml_file("/nonexistent/vgv.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, NodeError::Config(_)));
    }
}
