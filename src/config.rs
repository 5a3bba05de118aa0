use crate::block_time;
use std::path::Path;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Nodes under test and the chain constants the checks compare against.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub scheme: String,
    /// May be left out when nodes are given on the command line.
    #[serde(default)]
    pub nodes: Vec<String>,
    pub first_block_timestamp: String,
    /// Seconds between two consecutive blocks.
    pub blocks_production_interval: u64,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "default_sample_period_ms")]
    pub sample_period_ms: u64,
    #[serde(default = "default_head_poll_period_ms")]
    pub head_poll_period_ms: u64,
    /// Defaults to three production intervals when absent.
    #[serde(default)]
    pub head_wait_timeout_ms: Option<u64>,
}

fn default_sample_count() -> usize {
    5
}

fn default_sample_period_ms() -> u64 {
    1000
}

fn default_head_poll_period_ms() -> u64 {
    100
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_nodes(path, Vec::new())
    }

    /// Loads the config, replacing its node list with `nodes` when non-empty.
    pub fn load_with_nodes(
        path: impl AsRef<Path>,
        nodes: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(?path, ?nodes, "Loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_with_nodes(&content, nodes)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Self::from_json_with_nodes(content, Vec::new())
    }

    pub fn from_json_with_nodes(content: &str, nodes: Vec<String>) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(content)?;
        if !nodes.is_empty() {
            config.nodes = nodes;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.nodes.is_empty() {
            return Err(ConfigError::Invalid("no nodes configured".to_string()));
        }
        if self.blocks_production_interval == 0 {
            return Err(ConfigError::Invalid(
                "blocks_production_interval must be positive".to_string(),
            ));
        }
        let interval = Duration::from_secs(self.blocks_production_interval);
        if block_time::interval_delta(interval).is_none() {
            return Err(ConfigError::Invalid(
                "blocks_production_interval is too large".to_string(),
            ));
        }
        if self.head_wait_timeout_ms.is_none() && interval.checked_mul(3).is_none() {
            return Err(ConfigError::Invalid(
                "head wait timeout overflows, set head_wait_timeout_ms".to_string(),
            ));
        }
        if self.sample_period_ms == 0 || self.head_poll_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "polling periods must be positive".to_string(),
            ));
        }
        block_time::parse(&self.first_block_timestamp).map_err(|e| {
            ConfigError::Invalid(format!("first_block_timestamp: {}", e))
        })?;
        Ok(())
    }

    pub fn node_url(&self, node: &str) -> String {
        format!("{}://{}", self.scheme, node)
    }

    pub fn chain_settings(&self) -> ChainSettings {
        let interval = Duration::from_secs(self.blocks_production_interval);
        let head_wait_timeout = self
            .head_wait_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(interval.saturating_mul(3));
        ChainSettings {
            first_block_timestamp: self.first_block_timestamp.clone(),
            blocks_production_interval: interval,
            sample_count: self.sample_count,
            sample_period: Duration::from_millis(self.sample_period_ms),
            head_poll_period: Duration::from_millis(self.head_poll_period_ms),
            head_wait_timeout,
        }
    }
}

/// Chain constants and polling cadence shared by every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSettings {
    pub first_block_timestamp: String,
    pub blocks_production_interval: Duration,
    pub sample_count: usize,
    pub sample_period: Duration,
    pub head_poll_period: Duration,
    pub head_wait_timeout: Duration,
}
