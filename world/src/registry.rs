//! Identifier-keyed entity storage shared by every entity collection.

use std::collections::BTreeMap;

use lawn_defence_core::{PlantId, ProjectileId, SunId, ZombieId};

/// Identifier types that the registry can allocate.
pub(crate) trait RegistryKey: Copy + Ord {
    /// Builds the identifier from its raw counter value.
    fn from_raw(raw: u32) -> Self;
}

impl RegistryKey for PlantId {
    fn from_raw(raw: u32) -> Self {
        PlantId::new(raw)
    }
}

impl RegistryKey for ZombieId {
    fn from_raw(raw: u32) -> Self {
        ZombieId::new(raw)
    }
}

impl RegistryKey for ProjectileId {
    fn from_raw(raw: u32) -> Self {
        ProjectileId::new(raw)
    }
}

impl RegistryKey for SunId {
    fn from_raw(raw: u32) -> Self {
        SunId::new(raw)
    }
}

/// Registry that stores entities and manages identifier allocation.
///
/// Iteration always follows identifier order, which is also spawn order, so
/// every pass over a collection is deterministic.
#[derive(Debug)]
pub(crate) struct Registry<K, V> {
    entries: BTreeMap<K, V>,
    next_raw: u32,
}

impl<K: RegistryKey, V> Registry<K, V> {
    /// Creates an empty registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_raw: 0,
        }
    }

    /// Allocates a fresh identifier and stores the entity built for it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(K) -> V) -> K {
        let id = K::from_raw(self.next_raw);
        self.next_raw = self.next_raw.wrapping_add(1);
        let _ = self.entries.insert(id, build(id));
        id
    }

    pub(crate) fn get(&self, id: K) -> Option<&V> {
        self.entries.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.entries.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: K) -> Option<V> {
        self.entries.remove(&id)
    }

    /// Snapshot of the stored identifiers, detached from the registry borrow.
    pub(crate) fn keys(&self) -> Vec<K> {
        self.entries.keys().copied().collect()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drops every entity and restarts identifier allocation.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_raw = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_empty() {
        let registry: Registry<PlantId, ()> = Registry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.keys().is_empty());
    }

    #[test]
    fn identifiers_are_never_reused_after_removal() {
        let mut registry: Registry<ZombieId, &str> = Registry::new();
        let first = registry.insert_with(|_| "first");
        let second = registry.insert_with(|_| "second");
        assert_eq!(registry.remove(first), Some("first"));

        let third = registry.insert_with(|_| "third");
        assert_eq!(first, ZombieId::new(0));
        assert_eq!(second, ZombieId::new(1));
        assert_eq!(third, ZombieId::new(2));
        assert_eq!(registry.keys(), vec![second, third]);
    }

    #[test]
    fn builder_receives_allocated_identifier() {
        let mut registry: Registry<SunId, SunId> = Registry::new();
        let id = registry.insert_with(|id| id);
        assert_eq!(registry.get(id), Some(&id));
    }

    #[test]
    fn clear_restarts_allocation() {
        let mut registry: Registry<ProjectileId, u8> = Registry::new();
        let _ = registry.insert_with(|_| 1);
        let _ = registry.insert_with(|_| 2);
        registry.clear();

        assert_eq!(registry.len(), 0);
        assert_eq!(registry.insert_with(|_| 3), ProjectileId::new(0));
    }

    #[test]
    fn mutation_through_get_mut_is_visible() {
        let mut registry: Registry<PlantId, u32> = Registry::new();
        let id = registry.insert_with(|_| 10);
        if let Some(value) = registry.get_mut(id) {
            *value = 7;
        }
        for value in registry.values_mut() {
            *value += 1;
        }
        assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![8]);
    }
}
