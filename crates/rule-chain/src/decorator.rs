//! Decorator rules.
//!
//! Decorators wrap a predicate (and optionally a child rule) and shape the
//! verdict. This module provides [`When`] (guarded child) and [`Require`]
//! (veto unless a precondition holds).

use crate::{Rule, Verdict};

/// Evaluates its child only while a guard holds.
///
/// # Semantics
///
/// - If the guard returns `true`, the child's verdict is returned as is
/// - If the guard returns `false`, the rule returns `Continue`
pub struct When<P, R> {
    guard: P,
    rule: R,
}

impl<P, R> When<P, R> {
    /// Creates a guarded rule.
    pub fn new(guard: P, rule: R) -> Self {
        Self { guard, rule }
    }
}

impl<C: ?Sized, T, P, R> Rule<C, T> for When<P, R>
where
    P: Fn(&C) -> bool,
    R: Rule<C, T>,
{
    fn evaluate(&self, ctx: &C) -> Verdict<T> {
        if (self.guard)(ctx) {
            self.rule.evaluate(ctx)
        } else {
            Verdict::Continue
        }
    }
}

/// Stops the chain unless a precondition holds.
///
/// # Semantics
///
/// - If the predicate returns `true`, returns `Continue`
/// - If the predicate returns `false`, returns `Stop`
///
/// This is the guard at the head of a waterfall: nothing after it may be
/// proposed while the precondition is unmet.
pub struct Require<P> {
    predicate: P,
}

impl<P> Require<P> {
    /// Creates a precondition rule.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<C: ?Sized, T, P> Rule<C, T> for Require<P>
where
    P: Fn(&C) -> bool,
{
    fn evaluate(&self, ctx: &C) -> Verdict<T> {
        if (self.predicate)(ctx) {
            Verdict::Continue
        } else {
            Verdict::Stop
        }
    }
}
