//! User-tunable engine configuration.
//!
//! The host owns the configuration and hands it to the engine as an immutable
//! value every tick. Mutations happen between ticks only.
use core::str::FromStr;

use crate::action::ActionRequirement;
use crate::error::ConfigError;
use crate::spellbook;
use crate::targeting::TargetPolicy;

/// Behavioural profile selecting the requirement set and decision branch.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum Profile {
    #[default]
    #[strum(to_string = "Single Target - Basic", serialize = "single_target")]
    SingleTarget,

    #[strum(to_string = "AoE - Basic", serialize = "area_of_effect", serialize = "aoe")]
    AreaOfEffect,
}

impl Profile {
    /// Actions this profile depends on, in display order.
    pub const fn required_actions(self) -> &'static [ActionRequirement] {
        match self {
            Profile::SingleTarget => spellbook::SINGLE_TARGET_REQUIREMENTS,
            Profile::AreaOfEffect => spellbook::AREA_REQUIREMENTS,
        }
    }

    pub const fn is_area_of_effect(self) -> bool {
        matches!(self, Profile::AreaOfEffect)
    }

    /// Parses a profile name (`single_target`, `aoe`, or the display label).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProfile` if the name matches no profile.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name.trim()).map_err(|_| ConfigError::UnknownProfile(name.to_owned()))
    }
}

/// Number of enemies around the target required before AoE actions are tried.
///
/// Always within [`AoeThreshold::MIN`]..=[`AoeThreshold::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u8")
)]
pub struct AoeThreshold(u8);

impl AoeThreshold {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Self = Self(3);

    /// Validates `value` against the declared bound.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ThresholdOutOfRange` when `value` is outside the bound.
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::ThresholdOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamps `value` into the declared bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for AoeThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for AoeThreshold {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AoeThreshold> for u8 {
    fn from(threshold: AoeThreshold) -> Self {
        threshold.0
    }
}

/// Engine configuration for one decision tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Active behavioural profile.
    pub profile: Profile,
    /// Use the offensive weave between main-cycle actions.
    pub offensive_weaves: bool,
    /// Use the defensive weave between main-cycle actions.
    pub defensive_weaves: bool,
    /// Withhold every action while a required action is missing.
    pub stop_on_missing: bool,
    /// Enemies around the target needed for the AoE branch.
    pub aoe_threshold: AoeThreshold,
    /// How the target is chosen among visible hostiles.
    pub target_policy: TargetPolicy,
}

impl EngineConfig {
    // ===== fixed distances =====
    /// Maximum actor-to-target distance for any proposed action.
    pub const ENGAGEMENT_RANGE: f32 = 25.0;
    /// Radius around the target used to count AoE candidates.
    pub const AOE_RADIUS: f32 = 8.0;

    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            offensive_weaves: true,
            defensive_weaves: true,
            stop_on_missing: true,
            aoe_threshold: AoeThreshold::default(),
            target_policy: TargetPolicy::default(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_aoe_threshold(mut self, threshold: AoeThreshold) -> Self {
        self.aoe_threshold = threshold;
        self
    }

    /// Sets the AoE threshold from a raw user value, clamping it into bounds.
    pub fn set_aoe_threshold(&mut self, value: i64) {
        self.aoe_threshold = AoeThreshold::clamped(value);
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
