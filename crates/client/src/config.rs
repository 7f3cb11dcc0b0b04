//! Simulator configuration.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rotation_content::{ConfigLoader, Scenario, ScenarioLoader};
use rotation_core::{EngineConfig, Profile};

/// How tick reports are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where the scenario comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioSource {
    Builtin(String),
    File(PathBuf),
}

impl ScenarioSource {
    /// A `.ron` path or an existing file is read from disk; anything else
    /// names a built-in scenario.
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        if path.extension().is_some_and(|ext| ext == "ron") || path.is_file() {
            Self::File(path.to_path_buf())
        } else {
            Self::Builtin(value.to_owned())
        }
    }

    pub fn load(&self) -> anyhow::Result<Scenario> {
        match self {
            Self::Builtin(name) => ScenarioLoader::builtin(name),
            Self::File(path) => ScenarioLoader::load(path),
        }
    }
}

impl Default for ScenarioSource {
    fn default() -> Self {
        Self::Builtin("training_dummy".to_owned())
    }
}

/// Simulator settings.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    pub scenario: ScenarioSource,
    /// TOML engine config; the bundled one when unset.
    pub engine_config: Option<PathBuf>,
    /// Overrides the profile from the engine config.
    pub profile: Option<String>,
    /// Overrides the AoE threshold from the engine config, clamped into bounds.
    pub aoe_threshold: Option<i64>,
    pub output: OutputFormat,
}

impl SimConfig {
    /// Construct simulator configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_SCENARIO` - Built-in scenario name or `.ron` path (default: training_dummy)
    /// - `SIM_ENGINE_CONFIG` - Path to an engine TOML file
    /// - `SIM_PROFILE` - `single_target` or `aoe`
    /// - `SIM_AOE_THRESHOLD` - Enemies needed for the AoE branch
    /// - `SIM_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(scenario) = var("SIM_SCENARIO") {
            config.scenario = ScenarioSource::parse(&scenario);
        }
        config.engine_config = var("SIM_ENGINE_CONFIG").map(PathBuf::from);
        config.profile = var("SIM_PROFILE");
        config.aoe_threshold = read_var(&var, "SIM_AOE_THRESHOLD");
        if let Some(output) = read_var(&var, "SIM_OUTPUT") {
            config.output = output;
        }

        config
    }

    /// Loads the engine config and applies the overrides.
    pub fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut engine = match &self.engine_config {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };

        if let Some(name) = &self.profile {
            engine.profile = Profile::parse(name).context("SIM_PROFILE")?;
        }
        if let Some(threshold) = self.aoe_threshold {
            engine.set_aoe_threshold(threshold);
        }

        Ok(engine)
    }
}

fn read_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = var(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!("Ignoring {}={:?}: not a valid value", key, raw);
    }
    parsed
}
