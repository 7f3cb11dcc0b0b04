//! In-memory collaborators handed to the engine.
//!
//! The engine only sees these through `rotation-core` traits. Their contents
//! change between ticks, never during one.
mod catalog;
mod weave;

pub use catalog::CatalogOracleImpl;
pub use weave::FixedWeaveHook;
