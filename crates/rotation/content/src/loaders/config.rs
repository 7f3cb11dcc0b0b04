//! Engine configuration loader.

use std::path::Path;

use rotation_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/engine.toml");

/// Loader for engine configuration from TOML files.
///
/// Missing keys take their defaults. An out-of-range `aoe_threshold` or an
/// unknown profile name is rejected rather than corrected.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse engine config TOML: {}", e))?;

        Ok(config)
    }

    /// The configuration bundled with the crate (`data/engine.toml`).
    pub fn embedded() -> LoadResult<EngineConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }
}
