//! Runtime errors.
//!
//! Only session setup can fail. Once a session runs, every tick produces a
//! report.
use rotation_core::ActionId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("scenario '{name}' has no ticks")]
    EmptyScenario { name: String },

    #[error("base weave {0} is not a known action")]
    UnknownWeaveAction(ActionId),
}
