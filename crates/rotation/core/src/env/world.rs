use crate::state::{ActorView, EntityId, Hostile, WorldSnapshot};

/// Read access to the world as observed this tick.
pub trait WorldView: Send + Sync {
    fn actor(&self) -> ActorView;

    /// Visible hostiles in host order.
    fn hostiles(&self) -> &[Hostile];

    /// Entity the actor currently has targeted, if tracked.
    fn current_target(&self) -> Option<EntityId> {
        None
    }
}

impl WorldView for WorldSnapshot {
    fn actor(&self) -> ActorView {
        self.actor
    }

    fn hostiles(&self) -> &[Hostile] {
        &self.hostiles
    }

    fn current_target(&self) -> Option<EntityId> {
        self.current_target
    }
}
