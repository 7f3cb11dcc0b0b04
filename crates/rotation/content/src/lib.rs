//! Data-driven engine settings and simulation scenarios.
//!
//! This crate provides loaders for the files a host reads before driving the
//! engine:
//! - Engine configuration (data-driven via TOML)
//! - Scenarios: catalog states and ordered world snapshots (data-driven via RON)
//!
//! Built-in copies of the bundled data files are embedded at compile time so
//! hosts work without a data directory.

pub mod loaders;

pub use loaders::{
    CatalogEntry, ConfigLoader, ContentFactory, LoadResult, Scenario, ScenarioLoader,
    ScenarioTick,
};
