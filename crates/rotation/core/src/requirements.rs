//! Requirement checking and gating.
//!
//! Each profile depends on a fixed set of catalog actions. Once per tick the
//! engine works out which of them the actor has not unlocked yet, and the
//! gating policy decides whether normal decision logic may run at all.

use crate::action::ActionRef;
use crate::config::Profile;
use crate::env::{CapabilityCatalog, ready};
use crate::spellbook;

const SUMMARY_PREFIX: &str = "Missing spells: ";

/// Required actions the catalog reports as not unlocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingRequirements {
    missing: Vec<&'static str>,
    summary: String,
}

impl MissingRequirements {
    fn from_names(missing: Vec<&'static str>) -> Self {
        let summary = if missing.is_empty() {
            format!("{SUMMARY_PREFIX}none")
        } else {
            format!("{SUMMARY_PREFIX}{}", missing.join(", "))
        };
        Self { missing, summary }
    }

    /// Names of missing actions, in requirement order.
    pub fn names(&self) -> &[&'static str] {
        &self.missing
    }

    /// Human-readable status line.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Default for MissingRequirements {
    fn default() -> Self {
        Self::from_names(Vec::new())
    }
}

/// Computes which of `profile`'s required actions are missing from `catalog`.
///
/// Actions absent from the catalog count as missing.
pub fn compute_missing(profile: Profile, catalog: &dyn CapabilityCatalog) -> MissingRequirements {
    let missing = profile
        .required_actions()
        .iter()
        .filter(|req| !catalog.is_unlocked(req.action.id))
        .map(|req| req.name)
        .collect();

    MissingRequirements::from_names(missing)
}

/// Outcome of the gating policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockDecision {
    /// Every requirement is met; normal rules run.
    NoBlock,
    /// Requirements are missing and hard stop is enabled; no action at all.
    HardBlock,
    /// Requirements are missing; the baseline action is proposed instead.
    Fallback(ActionRef),
    /// Requirements are missing and the baseline action is not usable either.
    FallbackUnavailable,
}

impl BlockDecision {
    /// Whether normal decision logic is suppressed.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        !matches!(self, BlockDecision::NoBlock)
    }

    /// The action to propose in place of normal logic, if any.
    #[inline]
    pub const fn fallback(self) -> Option<ActionRef> {
        match self {
            BlockDecision::Fallback(action) => Some(action),
            _ => None,
        }
    }
}

/// Applies the gating policy to a requirement check.
pub fn should_block(
    missing: &MissingRequirements,
    hard_stop: bool,
    catalog: &dyn CapabilityCatalog,
) -> BlockDecision {
    if missing.is_empty() {
        return BlockDecision::NoBlock;
    }

    if hard_stop {
        return BlockDecision::HardBlock;
    }

    match ready(catalog, spellbook::BASELINE) {
        Some(action) => BlockDecision::Fallback(action),
        None => BlockDecision::FallbackUnavailable,
    }
}

/// Catalog actions the active profile works with, skipping those the catalog
/// does not know about.
pub fn active_actions(profile: Profile, catalog: &dyn CapabilityCatalog) -> Vec<ActionRef> {
    profile
        .required_actions()
        .iter()
        .filter(|req| catalog.try_get(req.action.id).is_some())
        .map(|req| req.action)
        .collect()
}
