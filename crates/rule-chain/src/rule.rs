//! Core rule trait.
//!
//! This module defines the [`Rule`] trait, the fundamental abstraction for
//! every link in a priority chain. The trait is generic over a context type
//! `C` and the selected value type `T`.

use crate::Verdict;

/// A link in a priority chain that can be evaluated against a context.
pub trait Rule<C: ?Sized, T> {
    /// Evaluate this rule against the given context.
    ///
    /// # Returns
    ///
    /// - `Verdict::Select(value)` to end the chain with `value`
    /// - `Verdict::Continue` to defer to the next rule
    /// - `Verdict::Stop` to end the chain with nothing
    fn evaluate(&self, ctx: &C) -> Verdict<T>;
}
