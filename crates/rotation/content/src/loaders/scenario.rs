//! Simulation scenario loader.
//!
//! A scenario is an initial ability catalog plus an ordered list of world
//! snapshots, one per decision tick. Ticks may also update catalog entries
//! (cooldowns, newly learned actions) or switch the active profile before
//! the engine sees them.

use std::path::Path;

use rotation_core::{ActionId, ActionRef, Availability, Profile, WorldSnapshot, spellbook};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const BUILTIN: &[(&str, &str)] = &[
    (
        "training_dummy",
        include_str!("../../data/scenarios/training_dummy.ron"),
    ),
    ("pack_pull", include_str!("../../data/scenarios/pack_pull.ron")),
    (
        "missing_spells",
        include_str!("../../data/scenarios/missing_spells.ron"),
    ),
];

/// Availability of one catalog action as written in a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub action: ActionId,
    #[serde(default = "yes")]
    pub unlocked: bool,
    #[serde(default = "yes")]
    pub ready: bool,
}

fn yes() -> bool {
    true
}

impl CatalogEntry {
    pub fn availability(&self) -> Availability {
        Availability {
            is_unlocked: self.unlocked,
            is_ready: self.ready,
        }
    }
}

/// One decision tick of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTick {
    pub world: WorldSnapshot,
    /// Catalog changes applied before this tick is decided.
    #[serde(default)]
    pub catalog_updates: Vec<CatalogEntry>,
    /// Profile switch applied before this tick is decided.
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// A replayable sequence of world snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub catalog: Vec<CatalogEntry>,
    /// Action the host's base weave behaviour proposes, if any.
    #[serde(default)]
    pub base_weave: Option<ActionId>,
    pub ticks: Vec<ScenarioTick>,
}

impl Scenario {
    /// Resolves `base_weave` against the spellbook.
    pub fn base_weave_action(&self) -> Option<ActionRef> {
        self.base_weave.and_then(spellbook::find)
    }

    /// Checks that every referenced action exists in the spellbook.
    pub fn validate(&self) -> LoadResult<()> {
        let ids = self
            .catalog
            .iter()
            .chain(self.ticks.iter().flat_map(|tick| &tick.catalog_updates))
            .map(|entry| entry.action)
            .chain(self.base_weave);

        for id in ids {
            if spellbook::find(id).is_none() {
                anyhow::bail!("Unknown {} in scenario '{}'", id, self.name);
            }
        }

        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.validate()?;

        Ok(scenario)
    }

    /// Load one of the scenarios bundled with the crate by name.
    pub fn builtin(name: &str) -> LoadResult<Scenario> {
        let (_, content) = BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| anyhow::anyhow!("No built-in scenario named '{}'", name))?;

        Self::parse(content)
    }

    /// Names of the bundled scenarios.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }
}
