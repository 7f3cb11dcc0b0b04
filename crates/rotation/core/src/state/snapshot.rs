use super::{EntityId, Position};

/// What the engine sees of the controllable actor.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorView {
    pub position: Position,
    pub is_casting: bool,
    pub in_combat: bool,
}

impl ActorView {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            is_casting: false,
            in_combat: false,
        }
    }

    pub const fn engaged(mut self) -> Self {
        self.in_combat = true;
        self
    }

    pub const fn casting(mut self) -> Self {
        self.is_casting = true;
        self
    }
}

/// Category of a visible hostile entity.
///
/// Only [`HostileKind::Enemy`] counts toward AoE thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HostileKind {
    /// Regular hostile combatant.
    #[default]
    Enemy,
    /// Entity summoned by another combatant.
    Summon,
    /// Attackable object (crystals, barricades).
    Object,
}

/// A hostile entity visible this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hostile {
    pub id: EntityId,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub targetable: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: HostileKind,
}

impl Hostile {
    /// A targetable, living enemy at `position`.
    pub const fn enemy(id: u32, position: Position) -> Self {
        Self {
            id: EntityId(id),
            position,
            targetable: true,
            alive: true,
            kind: HostileKind::Enemy,
        }
    }

    pub const fn with_kind(mut self, kind: HostileKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn untargetable(mut self) -> Self {
        self.targetable = false;
        self
    }

    pub const fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    /// Whether any action may be aimed at this entity.
    #[inline]
    pub const fn is_attackable(&self) -> bool {
        self.targetable && self.alive
    }
}

#[cfg(feature = "serde")]
const fn default_true() -> bool {
    true
}

/// Immutable world snapshot for one tick.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub actor: ActorView,
    /// Visible hostiles in host order. Order breaks distance ties.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hostiles: Vec<Hostile>,
    /// Entity the actor currently has targeted, if the host tracks one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_target: Option<EntityId>,
}

impl WorldSnapshot {
    pub fn new(actor: ActorView) -> Self {
        Self {
            actor,
            hostiles: Vec::new(),
            current_target: None,
        }
    }

    pub fn with_hostile(mut self, hostile: Hostile) -> Self {
        self.hostiles.push(hostile);
        self
    }

    pub fn with_current_target(mut self, id: EntityId) -> Self {
        self.current_target = Some(id);
        self
    }
}
