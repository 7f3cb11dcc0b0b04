//! Minimal [`rotation_core::CapabilityCatalog`] backed by an in-memory map.
use std::collections::HashMap;

use rotation_content::CatalogEntry;
use rotation_core::{ActionId, Availability, CapabilityCatalog};

/// CapabilityCatalog implementation with mutable availability entries
#[derive(Debug, Clone, Default)]
pub struct CatalogOracleImpl {
    entries: HashMap<ActionId, Availability>,
}

impl CatalogOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from scenario entries
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        catalog.apply(entries);
        catalog
    }

    /// Set or replace one action's availability
    pub fn insert(&mut self, id: ActionId, availability: Availability) {
        self.entries.insert(id, availability);
    }

    /// Apply scenario entries, later entries overriding earlier ones
    pub fn apply<'a>(&mut self, entries: impl IntoIterator<Item = &'a CatalogEntry>) {
        for entry in entries {
            self.insert(entry.action, entry.availability());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CapabilityCatalog for CatalogOracleImpl {
    fn try_get(&self, id: ActionId) -> Option<Availability> {
        self.entries.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_override_earlier_entries() {
        let id = ActionId(11433);
        let mut catalog = CatalogOracleImpl::from_entries(&[CatalogEntry {
            action: id,
            unlocked: true,
            ready: true,
        }]);
        assert!(catalog.is_usable(id));

        catalog.apply(&[CatalogEntry {
            action: id,
            unlocked: true,
            ready: false,
        }]);
        assert_eq!(catalog.try_get(id), Some(Availability::ON_COOLDOWN));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.try_get(ActionId(1)), None);
    }
}
