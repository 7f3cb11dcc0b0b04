//! Priority decision engine.
//!
//! Two entry points share one [`TickContext`] shape:
//!
//! - **weave**: gate → target guard → offensive weave → defensive weave → base hook
//! - **main cycle**: target guard → gate → AoE priority list → single-target priority list
//!
//! Each entry point is a [`rule_chain::first_match`] over an ordered rule
//! slice. The first selected action wins and a stopped chain yields nothing.
mod context;
mod diagnostics;
mod rules;

pub use context::TickContext;
pub use diagnostics::Diagnostics;

use rule_chain::{Require, Rule, Verdict, When, first_match};
use tracing::debug;

use crate::action::ActionRef;
use crate::config::EngineConfig;
use crate::env::{CapabilityCatalog, NoBaseWeave, WeaveHook, WorldView};
use crate::spellbook;

use rules::{
    BaseWeave, FirstReadySpell, ReadyAction, RequirementGate, area_burst_applies,
    defensive_weave_allowed, has_target, offensive_weave_allowed,
};

/// Outcome of one entry point call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Decision {
    pub action: Option<ActionRef>,
    pub diagnostics: Diagnostics,
}

/// Chooses the off-cycle action for this tick.
///
/// The requirement gate runs before the target guard, so a soft-stop
/// fallback is proposed even while the actor is out of combat.
pub fn weave(
    config: &EngineConfig,
    world: &dyn WorldView,
    catalog: &dyn CapabilityCatalog,
    hook: &dyn WeaveHook,
) -> Decision {
    let ctx = TickContext::new(config, world, catalog);

    let target_guard = Require::new(has_target);
    let offensive = When::new(
        offensive_weave_allowed,
        ReadyAction(spellbook::OFFENSIVE_WEAVE),
    );
    let defensive = When::new(
        defensive_weave_allowed,
        ReadyAction(spellbook::DEFENSIVE_WEAVE),
    );
    let base = BaseWeave(hook);

    let rules: [&dyn Rule<TickContext<'_>, ActionRef>; 5] =
        [&RequirementGate, &target_guard, &offensive, &defensive, &base];

    conclude("weave", &ctx, first_match(&rules, &ctx))
}

/// Chooses the main-cycle action for this tick.
pub fn main_cycle(
    config: &EngineConfig,
    world: &dyn WorldView,
    catalog: &dyn CapabilityCatalog,
) -> Decision {
    let ctx = TickContext::new(config, world, catalog);

    let target_guard = Require::new(has_target);
    let area = When::new(
        area_burst_applies,
        FirstReadySpell(spellbook::AREA_PRIORITY),
    );
    let single = FirstReadySpell(spellbook::SINGLE_TARGET_PRIORITY);

    let rules: [&dyn Rule<TickContext<'_>, ActionRef>; 4] =
        [&target_guard, &RequirementGate, &area, &single];

    conclude("main cycle", &ctx, first_match(&rules, &ctx))
}

fn conclude(entry: &str, ctx: &TickContext<'_>, verdict: Verdict<ActionRef>) -> Decision {
    match &verdict {
        Verdict::Select(action) => debug!("{}: selected {}", entry, action),
        Verdict::Stop => debug!(
            "{}: halted (target: {:?}, gate: {:?})",
            entry,
            ctx.target.map(|hostile| hostile.id),
            ctx.block
        ),
        Verdict::Continue => debug!("{}: nothing qualified", entry),
    }

    Decision {
        action: verdict.into_option(),
        diagnostics: ctx.diagnostics(),
    }
}

/// Stateful front of the engine.
///
/// Holds the injected base weave behaviour and the diagnostics of the most
/// recent call, which the host may read for status display.
pub struct RotationEngine {
    weave_hook: Box<dyn WeaveHook>,
    last: Diagnostics,
}

impl RotationEngine {
    /// Engine whose weave chain ends without a base behaviour.
    pub fn new() -> Self {
        Self::with_weave_hook(NoBaseWeave)
    }

    pub fn with_weave_hook(hook: impl WeaveHook + 'static) -> Self {
        Self {
            weave_hook: Box::new(hook),
            last: Diagnostics::default(),
        }
    }

    pub fn decide_weave(
        &mut self,
        config: &EngineConfig,
        world: &dyn WorldView,
        catalog: &dyn CapabilityCatalog,
    ) -> Option<ActionRef> {
        let decision = weave(config, world, catalog, self.weave_hook.as_ref());
        self.last = decision.diagnostics;
        decision.action
    }

    pub fn decide_main_cycle(
        &mut self,
        config: &EngineConfig,
        world: &dyn WorldView,
        catalog: &dyn CapabilityCatalog,
    ) -> Option<ActionRef> {
        let decision = main_cycle(config, world, catalog);
        self.last = decision.diagnostics;
        decision.action
    }

    /// Requirement status as of the latest decision.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.last
    }
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new()
    }
}
