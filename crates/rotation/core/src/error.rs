//! Configuration boundary errors.
//!
//! Decisions themselves never fail: every unmet precondition resolves to "no
//! action". Errors only exist where user-supplied values enter the engine.

/// Errors raised while building an [`crate::EngineConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// AoE target threshold outside its declared bound.
    #[error("aoe target threshold {value} is outside {min}..={max}")]
    ThresholdOutOfRange { value: i64, min: u8, max: u8 },

    /// Profile name did not match any known profile.
    #[error("unknown profile '{0}'")]
    UnknownProfile(String),

    /// Target policy name did not match any known policy.
    #[error("unknown target policy '{0}'")]
    UnknownTargetPolicy(String),
}

impl ConfigError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ThresholdOutOfRange { .. } => "CONFIG_THRESHOLD_OUT_OF_RANGE",
            Self::UnknownProfile(_) => "CONFIG_UNKNOWN_PROFILE",
            Self::UnknownTargetPolicy(_) => "CONFIG_UNKNOWN_TARGET_POLICY",
        }
    }
}
