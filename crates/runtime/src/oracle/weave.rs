use rotation_core::{ActionRef, WeaveHook};

/// Base weave behaviour that always proposes the same action, or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedWeaveHook(Option<ActionRef>);

impl FixedWeaveHook {
    pub const fn new(action: Option<ActionRef>) -> Self {
        Self(action)
    }

    pub const fn action(&self) -> Option<ActionRef> {
        self.0
    }
}

impl WeaveHook for FixedWeaveHook {
    fn default_weave(&self) -> Option<ActionRef> {
        self.0
    }
}
