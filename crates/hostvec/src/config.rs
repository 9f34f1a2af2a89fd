use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How vector elements are rendered by [`Vector::render`](crate::math::Vector::render).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Fixed number of fractional digits. `None` keeps the canonical
    /// shortest form used by `tostr`.
    pub precision: Option<usize>,
}

/// Top-level configuration for a host embedding the vector type.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VectorConfig {
    pub display: DisplayConfig,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<VectorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: VectorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!("Loaded vector config from {}: {:?}", path.as_ref().display(), config);
    Ok(config)
}
