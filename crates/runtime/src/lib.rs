//! Host runtime for the rotation engine.
//!
//! This crate plays the part of the surrounding game client: it owns the
//! ability catalog and the engine configuration, feeds world snapshots to
//! [`rotation_core::RotationEngine`] one tick at a time and records what the
//! engine chose.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the tick loop and its reports
//! - [`oracle`] provides in-memory implementations of the engine's collaborator traits
//! - [`error`] defines the runtime's setup failures
pub mod error;
pub mod oracle;
pub mod session;

pub use error::{Result, RuntimeError};
pub use oracle::{CatalogOracleImpl, FixedWeaveHook};
pub use session::{Session, TickReport};
