//! Action identifiers and requirement declarations.
use core::fmt;

/// Catalog key of a castable action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ActionId(pub u32);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spell#{}", self.0)
    }
}

/// A catalog key paired with its human-readable label.
///
/// Action refs are declared at compile time (see [`crate::spellbook`]) and
/// never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionRef {
    pub id: ActionId,
    pub label: &'static str,
}

impl ActionRef {
    pub const fn new(id: u32, label: &'static str) -> Self {
        Self {
            id: ActionId(id),
            label,
        }
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// "This profile needs this action", with the name shown when it is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionRequirement {
    pub action: ActionRef,
    pub name: &'static str,
}

impl ActionRequirement {
    pub const fn new(action: ActionRef, name: &'static str) -> Self {
        Self { action, name }
    }

    /// Requirement displayed under the action's own label.
    pub const fn of(action: ActionRef) -> Self {
        Self::new(action, action.label)
    }
}
