use crate::action::ActionRef;

/// Base off-cycle behaviour consulted after every engine weave rule passed.
pub trait WeaveHook: Send + Sync {
    fn default_weave(&self) -> Option<ActionRef>;
}

/// Hook that never proposes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBaseWeave;

impl WeaveHook for NoBaseWeave {
    fn default_weave(&self) -> Option<ActionRef> {
        None
    }
}

impl<F> WeaveHook for F
where
    F: Fn() -> Option<ActionRef> + Send + Sync,
{
    fn default_weave(&self) -> Option<ActionRef> {
        self()
    }
}
