//! Observed world state for a single decision tick.
//!
//! Everything here is produced by the host, read by the engine and discarded
//! at the end of the tick. The engine never caches snapshots across ticks.
mod common;
mod snapshot;

pub use common::{EntityId, Position};
pub use snapshot::{ActorView, Hostile, HostileKind, WorldSnapshot};
