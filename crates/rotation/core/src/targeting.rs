//! Target validation and area counting.
//!
//! Both operations are pure functions of the snapshot. Distances are
//! Euclidean and every range comparison is inclusive.

use core::str::FromStr;

use crate::env::WorldView;
use crate::error::ConfigError;
use crate::state::{Hostile, HostileKind, Position};

/// How the engine picks its target among visible hostiles.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetPolicy {
    /// Nearest attackable hostile, first in snapshot order on ties.
    #[default]
    NearestHostile,
    /// Whatever the host reports as the actor's current target.
    CurrentTarget,
}

impl TargetPolicy {
    /// Selects a target according to this policy.
    pub fn select<'w>(self, world: &'w dyn WorldView, range: f32) -> Option<&'w Hostile> {
        match self {
            TargetPolicy::NearestHostile => select_target(world, range),
            TargetPolicy::CurrentTarget => select_current_target(world, range),
        }
    }

    /// Parses a policy name (`nearest_hostile`, `current_target`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTargetPolicy` if the name matches no policy.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name.trim()).map_err(|_| ConfigError::UnknownTargetPolicy(name.to_owned()))
    }
}

/// Returns true if `target` is within `range` of `origin` (inclusive).
#[inline]
pub fn within_range(origin: Position, target: Position, range: f32) -> bool {
    origin.distance(target) <= range
}

/// Selects the nearest attackable hostile within `engagement_range`.
///
/// Returns `None` if the actor is out of combat, if no hostile is attackable,
/// or if even the nearest one is farther than `engagement_range`. Exactly
/// equal distances resolve to the hostile listed first in the snapshot.
pub fn select_target(world: &dyn WorldView, engagement_range: f32) -> Option<&Hostile> {
    let actor = world.actor();
    if !actor.in_combat {
        return None;
    }

    // `min_by` keeps the first of several equal minima
    let (nearest, distance) = world
        .hostiles()
        .iter()
        .filter(|hostile| hostile.is_attackable())
        .map(|hostile| (hostile, actor.position.distance(hostile.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    (distance <= engagement_range).then_some(nearest)
}

/// Selects the host's current target if it is attackable and within range.
pub fn select_current_target(world: &dyn WorldView, engagement_range: f32) -> Option<&Hostile> {
    let actor = world.actor();
    if !actor.in_combat {
        return None;
    }

    let id = world.current_target()?;
    world
        .hostiles()
        .iter()
        .find(|hostile| hostile.id == id)
        .filter(|hostile| hostile.is_attackable())
        .filter(|hostile| within_range(actor.position, hostile.position, engagement_range))
}

/// Counts attackable enemies within `radius` of `center` (inclusive).
///
/// Summons and objects never count.
pub fn count_in_radius(center: Position, radius: f32, world: &dyn WorldView) -> usize {
    world
        .hostiles()
        .iter()
        .filter(|hostile| hostile.kind == HostileKind::Enemy && hostile.is_attackable())
        .filter(|hostile| within_range(center, hostile.position, radius))
        .count()
}
