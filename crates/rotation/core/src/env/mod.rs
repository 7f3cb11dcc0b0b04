//! Traits describing the engine's read-only collaborators.
//!
//! The host owns the ability catalog, the world snapshot and the base weave
//! behaviour. The engine only queries them by known identifier; it never
//! discovers actions on its own.
mod catalog;
mod hook;
mod world;

pub use catalog::{Availability, CapabilityCatalog, ready};
pub use hook::{NoBaseWeave, WeaveHook};
pub use world::WorldView;
