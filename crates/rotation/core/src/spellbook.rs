//! Compile-time action table.
//!
//! Every action the engine can propose is declared here, together with the
//! per-profile requirement sets and the fixed candidate priority lists. The
//! requirement order is display order only; decision priority comes from the
//! `*_PRIORITY` slices.

use crate::action::{ActionId, ActionRef, ActionRequirement};

// ============================================================================
// Actions
// ============================================================================

pub const WATER_CANNON: ActionRef = ActionRef::new(11385, "Water Cannon");
pub const AQUA_BREATH: ActionRef = ActionRef::new(11390, "Aqua Breath");
pub const FLAMETHROWER: ActionRef = ActionRef::new(11404, "Flamethrower");
pub const SURPANAKHA: ActionRef = ActionRef::new(11418, "Surpanakha");
pub const MOON_FLUTE: ActionRef = ActionRef::new(11430, "Moon Flute");
pub const SONIC_BOOM: ActionRef = ActionRef::new(11433, "Sonic Boom");

/// Every declared action, ordered by id.
pub const ALL: &[ActionRef] = &[
    WATER_CANNON,
    AQUA_BREATH,
    FLAMETHROWER,
    SURPANAKHA,
    MOON_FLUTE,
    SONIC_BOOM,
];

// ============================================================================
// Roles
// ============================================================================

/// Profile-independent action proposed while requirements are missing.
pub const BASELINE: ActionRef = WATER_CANNON;

/// Weave used when offensive off-cycle use is enabled.
pub const OFFENSIVE_WEAVE: ActionRef = MOON_FLUTE;

/// Weave used when defensive off-cycle use is enabled.
pub const DEFENSIVE_WEAVE: ActionRef = AQUA_BREATH;

/// Area-of-effect candidates, highest priority first.
pub const AREA_PRIORITY: &[ActionRef] = &[FLAMETHROWER, SURPANAKHA];

/// Single-target candidates, highest priority first.
pub const SINGLE_TARGET_PRIORITY: &[ActionRef] = &[SONIC_BOOM, WATER_CANNON];

// ============================================================================
// Requirement sets
// ============================================================================

pub const SINGLE_TARGET_REQUIREMENTS: &[ActionRequirement] = &[
    ActionRequirement::of(WATER_CANNON),
    ActionRequirement::of(SONIC_BOOM),
    ActionRequirement::of(MOON_FLUTE),
];

pub const AREA_REQUIREMENTS: &[ActionRequirement] = &[
    ActionRequirement::of(WATER_CANNON),
    ActionRequirement::of(FLAMETHROWER),
    ActionRequirement::of(SURPANAKHA),
];

/// Looks up a declared action by catalog key.
pub fn find(id: ActionId) -> Option<ActionRef> {
    ALL.iter().copied().find(|action| action.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_resolves_declared_actions() {
        assert_eq!(find(ActionId(11433)), Some(SONIC_BOOM));
        assert_eq!(find(ActionId(1)), None);
    }

    #[test]
    fn priority_lists_only_use_declared_actions() {
        for action in AREA_PRIORITY.iter().chain(SINGLE_TARGET_PRIORITY) {
            assert_eq!(find(action.id), Some(*action));
        }
    }
}
