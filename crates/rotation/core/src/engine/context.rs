use crate::action::ActionRef;
use crate::config::EngineConfig;
use crate::env::{self, CapabilityCatalog, WorldView};
use crate::requirements::{BlockDecision, MissingRequirements, compute_missing, should_block};
use crate::state::{ActorView, Hostile};
use crate::targeting::count_in_radius;

use super::Diagnostics;

/// Everything the rules of one tick may look at.
///
/// Built once per entry point call. Target selection and the requirement
/// check both run here, before any rule is evaluated, so diagnostics stay
/// fresh even when the chain stops at its first rule.
pub struct TickContext<'a> {
    pub config: &'a EngineConfig,
    pub world: &'a dyn WorldView,
    pub catalog: &'a dyn CapabilityCatalog,
    pub actor: ActorView,
    pub target: Option<&'a Hostile>,
    pub missing: MissingRequirements,
    pub block: BlockDecision,
}

impl<'a> TickContext<'a> {
    pub fn new(
        config: &'a EngineConfig,
        world: &'a dyn WorldView,
        catalog: &'a dyn CapabilityCatalog,
    ) -> Self {
        let actor = world.actor();
        let target = config
            .target_policy
            .select(world, EngineConfig::ENGAGEMENT_RANGE);
        let missing = compute_missing(config.profile, catalog);
        let block = should_block(&missing, config.stop_on_missing, catalog);

        Self {
            config,
            world,
            catalog,
            actor,
            target,
            missing,
            block,
        }
    }

    /// Off-cycle actions are only allowed while the actor is not casting.
    #[inline]
    pub fn may_weave_now(&self) -> bool {
        !self.actor.is_casting
    }

    /// `action` if unlocked and ready.
    pub fn ready(&self, action: ActionRef) -> Option<ActionRef> {
        env::ready(self.catalog, action)
    }

    /// `action` if unlocked, ready, and the target is within engagement range.
    pub fn ready_in_range(&self, action: ActionRef) -> Option<ActionRef> {
        let target = self.target?;
        if self.actor.position.distance(target.position) > EngineConfig::ENGAGEMENT_RANGE {
            return None;
        }
        self.ready(action)
    }

    /// Enemies within the AoE radius of the current target (0 without one).
    pub fn area_count(&self) -> usize {
        self.target.map_or(0, |target| {
            count_in_radius(target.position, EngineConfig::AOE_RADIUS, self.world)
        })
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::from_check(&self.missing, self.block)
    }
}
