//! Query configuration loading.
//!
//! Layers, lowest priority first: built-in defaults, then the YAML file named
//! by `--config` or `ASSETDESK_CONFIG`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use assetdesk_query::QueryConfig;
use tracing::debug;

/// Loads the effective configuration.
pub fn load(path: Option<&Path>) -> Result<QueryConfig> {
    let mut config = QueryConfig::default();
    if let Some(path) = path {
        config.merge(read(path)?);
        debug!(path = %path.display(), "loaded query configuration");
    }
    Ok(config)
}

fn read(path: &Path) -> Result<QueryConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(QueryConfig::default());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))
}
