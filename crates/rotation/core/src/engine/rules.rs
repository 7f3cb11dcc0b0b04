//! Rules making up the weave and main-cycle chains.
use rule_chain::{Rule, Verdict};
use tracing::trace;

use crate::action::ActionRef;
use crate::env::WeaveHook;
use crate::requirements::BlockDecision;

use super::TickContext;

// ============================================================================
// Guards
// ============================================================================

pub(super) fn has_target(ctx: &TickContext<'_>) -> bool {
    ctx.target.is_some()
}

pub(super) fn offensive_weave_allowed(ctx: &TickContext<'_>) -> bool {
    ctx.config.offensive_weaves && ctx.may_weave_now()
}

pub(super) fn defensive_weave_allowed(ctx: &TickContext<'_>) -> bool {
    ctx.config.defensive_weaves && ctx.may_weave_now()
}

pub(super) fn area_burst_applies(ctx: &TickContext<'_>) -> bool {
    if !ctx.config.profile.is_area_of_effect() {
        return false;
    }
    let count = ctx.area_count();
    let threshold = usize::from(ctx.config.aoe_threshold.get());
    trace!("area count {} against threshold {}", count, threshold);
    count >= threshold
}

// ============================================================================
// Rules
// ============================================================================

/// Applies the tick's block decision.
///
/// Passes on `NoBlock`, selects the fallback, and stops the chain otherwise.
pub(super) struct RequirementGate;

impl<'a> Rule<TickContext<'a>, ActionRef> for RequirementGate {
    fn evaluate(&self, ctx: &TickContext<'a>) -> Verdict<ActionRef> {
        match ctx.block {
            BlockDecision::NoBlock => Verdict::Continue,
            BlockDecision::Fallback(action) => Verdict::Select(action),
            BlockDecision::HardBlock | BlockDecision::FallbackUnavailable => {
                trace!("gate halted chain: {}", ctx.missing.summary());
                Verdict::Stop
            }
        }
    }
}

/// Selects a single action when it is unlocked and ready.
pub(super) struct ReadyAction(pub ActionRef);

impl<'a> Rule<TickContext<'a>, ActionRef> for ReadyAction {
    fn evaluate(&self, ctx: &TickContext<'a>) -> Verdict<ActionRef> {
        let verdict = Verdict::from(ctx.ready(self.0));
        if !verdict.is_select() {
            trace!("{} not ready", self.0);
        }
        verdict
    }
}

/// Selects the first action of a priority list that is ready with the target in range.
pub(super) struct FirstReadySpell(pub &'static [ActionRef]);

impl<'a> Rule<TickContext<'a>, ActionRef> for FirstReadySpell {
    fn evaluate(&self, ctx: &TickContext<'a>) -> Verdict<ActionRef> {
        let pick = self.0.iter().find_map(|&action| {
            let ready = ctx.ready_in_range(action);
            if ready.is_none() {
                trace!("{} skipped", action);
            }
            ready
        });
        Verdict::from(pick)
    }
}

/// Defers to the host's base weave behaviour.
pub(super) struct BaseWeave<'h>(pub &'h dyn WeaveHook);

impl<'a> Rule<TickContext<'a>, ActionRef> for BaseWeave<'_> {
    fn evaluate(&self, _ctx: &TickContext<'a>) -> Verdict<ActionRef> {
        Verdict::from(self.0.default_weave())
    }
}
