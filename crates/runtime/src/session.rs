//! Tick-by-tick replay of a scenario through the engine.
use rotation_content::Scenario;
use rotation_core::{
    ActionRef, Diagnostics, EngineConfig, Profile, RotationEngine, active_actions,
};
use serde::Serialize;

use crate::error::{Result, RuntimeError};
use crate::oracle::{CatalogOracleImpl, FixedWeaveHook};

/// What the engine chose on one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Zero-based tick index within the scenario.
    pub tick: usize,
    pub profile: Profile,
    pub main: Option<ActionRef>,
    pub weave: Option<ActionRef>,
    pub diagnostics: Diagnostics,
}

/// A host loop driving one engine through a scenario.
///
/// Between ticks the session applies the scenario's catalog updates and
/// profile switches; during a tick it only asks the engine for its two
/// decisions.
pub struct Session {
    config: EngineConfig,
    scenario: Scenario,
    catalog: CatalogOracleImpl,
    engine: RotationEngine,
    next_tick: usize,
}

impl Session {
    /// Prepares a session at the first tick of `scenario`.
    ///
    /// # Errors
    ///
    /// Fails if the scenario has no ticks or names a base weave action the
    /// spellbook does not know.
    pub fn new(config: EngineConfig, scenario: Scenario) -> Result<Self> {
        if scenario.ticks.is_empty() {
            return Err(RuntimeError::EmptyScenario {
                name: scenario.name,
            });
        }

        let base_weave = match (scenario.base_weave, scenario.base_weave_action()) {
            (Some(id), None) => return Err(RuntimeError::UnknownWeaveAction(id)),
            (_, action) => action,
        };

        let catalog = CatalogOracleImpl::from_entries(&scenario.catalog);
        let engine = RotationEngine::with_weave_hook(FixedWeaveHook::new(base_weave));

        tracing::info!(
            "Session '{}' ready: {} ticks, {} catalog entries, profile {}",
            scenario.name,
            scenario.ticks.len(),
            catalog.len(),
            config.profile
        );

        Ok(Self {
            config,
            scenario,
            catalog,
            engine,
            next_tick: 0,
        })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogOracleImpl {
        &self.catalog
    }

    /// Latest requirement status reported by the engine.
    pub fn diagnostics(&self) -> &Diagnostics {
        self.engine.diagnostics()
    }

    /// Catalog actions the current profile works with.
    pub fn active_actions(&self) -> Vec<ActionRef> {
        active_actions(self.config.profile, &self.catalog)
    }

    pub fn is_finished(&self) -> bool {
        self.next_tick >= self.scenario.ticks.len()
    }

    /// Decides the next tick, or returns `None` once the scenario is exhausted.
    pub fn step(&mut self) -> Option<TickReport> {
        let index = self.next_tick;
        let tick = self.scenario.ticks.get(index)?;
        self.next_tick += 1;

        self.catalog.apply(&tick.catalog_updates);
        if let Some(profile) = tick.profile {
            if profile != self.config.profile {
                tracing::info!("Tick {}: profile switched to {}", index, profile);
            }
            self.config.profile = profile;
        }

        let main = self
            .engine
            .decide_main_cycle(&self.config, &tick.world, &self.catalog);
        let weave = self
            .engine
            .decide_weave(&self.config, &tick.world, &self.catalog);
        let diagnostics = self.engine.diagnostics().clone();

        if diagnostics.gating_active {
            tracing::warn!("Tick {}: gating active ({})", index, diagnostics.summary);
        }
        tracing::info!(
            "Tick {}: main={} weave={}",
            index,
            self::display(main),
            self::display(weave)
        );

        Some(TickReport {
            tick: index,
            profile: self.config.profile,
            main,
            weave,
            diagnostics,
        })
    }

    /// Runs every remaining tick.
    pub fn run(&mut self) -> Vec<TickReport> {
        std::iter::from_fn(|| self.step()).collect()
    }
}

fn display(action: Option<ActionRef>) -> String {
    action.map_or_else(|| "-".to_owned(), |action| action.to_string())
}
