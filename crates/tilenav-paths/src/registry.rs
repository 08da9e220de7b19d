//! Map-keyed [`Pathfinder`] instances, created on first reference.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::pathfinder::Pathfinder;

/// Registry of per-map [`Pathfinder`] instances.
///
/// Each named map owns fully independent grid and search state, so distinct
/// maps may be driven from different threads. The registry itself does no
/// locking; callers serialize access to any one instance.
pub struct PathfinderRegistry {
    instances: HashMap<String, Pathfinder>,
}

impl PathfinderRegistry {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Fetch the pathfinder for `key`, creating it on first reference.
    pub fn get_or_create(&mut self, key: impl Into<String>) -> &mut Pathfinder {
        match self.instances.entry(key.into()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                log::debug!("creating pathfinder for map {:?}", slot.key());
                slot.insert(Pathfinder::new())
            }
        }
    }

    /// Look a map up without creating it.
    pub fn get(&self, key: &str) -> Option<&Pathfinder> {
        self.instances.get(key)
    }

    /// Mutable lookup without creation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Pathfinder> {
        self.instances.get_mut(key)
    }

    /// Drop one map's instance entirely.
    pub fn remove(&mut self, key: &str) -> Option<Pathfinder> {
        self.instances.remove(key)
    }

    /// Clear every map's cell data, keeping the instances themselves.
    /// Queries report "no path" until their maps are re-initialized.
    pub fn clear_all_cells(&mut self) {
        for pathfinder in self.instances.values_mut() {
            pathfinder.clear();
        }
    }

    /// Number of registered maps.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for PathfinderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
