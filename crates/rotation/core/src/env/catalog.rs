use crate::action::{ActionId, ActionRef};

/// Unlock and cooldown state of one catalog action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Availability {
    /// The actor has learned the action.
    pub is_unlocked: bool,
    /// The action is off cooldown and castable right now.
    pub is_ready: bool,
}

impl Availability {
    pub const READY: Self = Self {
        is_unlocked: true,
        is_ready: true,
    };
    pub const ON_COOLDOWN: Self = Self {
        is_unlocked: true,
        is_ready: false,
    };
    pub const LOCKED: Self = Self {
        is_unlocked: false,
        is_ready: false,
    };

    /// Unlocked and ready.
    #[inline]
    pub const fn is_usable(self) -> bool {
        self.is_unlocked && self.is_ready
    }
}

/// Read-only view of the actor's ability catalog.
///
/// Unknown ids resolve to `None`, which every caller treats as "not available".
pub trait CapabilityCatalog: Send + Sync {
    fn try_get(&self, id: ActionId) -> Option<Availability>;

    fn is_unlocked(&self, id: ActionId) -> bool {
        self.try_get(id).is_some_and(|availability| availability.is_unlocked)
    }

    fn is_usable(&self, id: ActionId) -> bool {
        self.try_get(id).is_some_and(Availability::is_usable)
    }
}

/// Returns `action` if the catalog reports it unlocked and ready.
#[inline]
pub fn ready(catalog: &dyn CapabilityCatalog, action: ActionRef) -> Option<ActionRef> {
    catalog.is_usable(action.id).then_some(action)
}
