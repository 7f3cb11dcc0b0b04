//! Priority chain evaluation.
//!
//! A chain evaluates its rules from first to last:
//! - If a rule returns `Select`, the chain **stops immediately** with that value
//! - If a rule returns `Stop`, the chain **stops immediately** with nothing
//! - If a rule returns `Continue`, the chain **moves on** to the next rule
//! - If every rule continues, the chain itself returns `Continue`
//!
//! This is a short-circuited logical OR with an explicit veto.

use crate::{Rule, Verdict};

/// Evaluates `rules` in order and returns the first terminal verdict.
///
/// Rule order is priority order: earlier rules pre-empt later ones.
pub fn first_match<C: ?Sized, T>(rules: &[&dyn Rule<C, T>], ctx: &C) -> Verdict<T> {
    for rule in rules {
        match rule.evaluate(ctx) {
            Verdict::Continue => continue,
            terminal => return terminal, // Short-circuit
        }
    }
    Verdict::Continue
}
