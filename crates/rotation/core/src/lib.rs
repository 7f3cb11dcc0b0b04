//! Deterministic action selection for a turn-free combat loop.
//!
//! `rotation-core` turns an observed world snapshot into at most one
//! main-cycle action and at most one weave action per decision tick. All
//! collaborators (ability catalog, world snapshot, base weave behaviour) are
//! injected through the read-only traits in [`env`], and every decision is
//! made by [`engine::RotationEngine`] through an ordered, short-circuiting
//! rule chain.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod requirements;
pub mod spellbook;
pub mod state;
pub mod targeting;

pub use action::{ActionId, ActionRef, ActionRequirement};
pub use config::{AoeThreshold, EngineConfig, Profile};
pub use engine::{Decision, Diagnostics, RotationEngine, TickContext};
pub use env::{Availability, CapabilityCatalog, NoBaseWeave, WeaveHook, WorldView};
pub use error::ConfigError;
pub use requirements::{BlockDecision, MissingRequirements, active_actions, compute_missing, should_block};
pub use state::{ActorView, EntityId, Hostile, HostileKind, Position, WorldSnapshot};
pub use targeting::{TargetPolicy, count_in_radius, select_target};
