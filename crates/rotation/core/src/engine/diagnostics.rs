use crate::requirements::{BlockDecision, MissingRequirements};

/// Read-only status of the most recent requirement check, for host display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Display names of required actions not unlocked, in requirement order.
    pub missing_spells: Vec<&'static str>,
    /// `"Missing spells: ..."` line.
    pub summary: String,
    /// Whether gating suppressed or replaced the normal decision this tick.
    pub gating_active: bool,
}

impl Diagnostics {
    pub fn from_check(missing: &MissingRequirements, block: BlockDecision) -> Self {
        Self {
            missing_spells: missing.names().to_vec(),
            summary: missing.summary().to_owned(),
            gating_active: block != BlockDecision::NoBlock,
        }
    }
}
