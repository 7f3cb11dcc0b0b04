//! Short-circuiting priority rule chains.
//!
//! A chain is an ordered list of rules evaluated against a read-only context.
//! Each rule either selects a value, passes to the next rule, or stops the
//! whole chain. The first rule that selects wins and nothing after it runs.
//!
//! - **No mutation**: rules see `&C`, never `&mut C`
//! - **No backtracking**: a selected value is final for the tick
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Rule`]: Core trait for every link in a chain
//! - [`Verdict`]: Select, Continue or Stop
//! - [`first_match`]: Priority evaluation over an ordered slice of rules
//! - Decorators: [`When`] (guarded rule), [`Require`] (stop unless)

pub mod chain;
pub mod decorator;
pub mod rule;
pub mod verdict;

// Re-export core types for ergonomic API
pub use chain::first_match;
pub use decorator::{Require, When};
pub use rule::Rule;
pub use verdict::Verdict;
