//! Verdict returned by rules.

/// The result of evaluating a rule against a context.
///
/// # Priority Semantics
///
/// Rules are evaluated in declared order within one tick:
/// - `Select` ends the chain with a value
/// - `Continue` hands control to the next rule
/// - `Stop` ends the chain with no value, pre-empting every later rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict<T> {
    /// The rule chose a value. Evaluation stops here.
    Select(T),

    /// The rule does not apply. The next rule is evaluated.
    Continue,

    /// The rule vetoes the tick. No later rule is evaluated.
    Stop,
}

impl<T> Verdict<T> {
    /// Returns `true` if this verdict carries a value.
    #[inline]
    pub fn is_select(&self) -> bool {
        matches!(self, Verdict::Select(_))
    }

    /// Converts the verdict into the selected value, if any.
    ///
    /// `Continue` and `Stop` both collapse to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Verdict::Select(value) => Some(value),
            Verdict::Continue | Verdict::Stop => None,
        }
    }
}

impl<T> From<Option<T>> for Verdict<T> {
    /// `Some` selects, `None` continues.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Verdict::Select(value),
            None => Verdict::Continue,
        }
    }
}
