use std::sync::Arc;
use std::thread::ThreadId;

use ahash::AHashMap;

use super::handle::GraphicsContextHandle;

/// Where a thread's entry currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLocation {
    Bounded(usize),
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub bounded: usize,
    pub fallback: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct RegistryEntry {
    pub(crate) owner: ThreadId,
    pub(crate) handle: Arc<GraphicsContextHandle>,
    last_activated: u64,
}

impl RegistryEntry {
    pub(crate) fn new(owner: ThreadId, handle: Arc<GraphicsContextHandle>) -> Self {
        Self {
            owner,
            handle,
            last_activated: 0,
        }
    }
}

/// Bounded, system-wide entry array backed by a thread-keyed fallback map.
///
/// A thread has at most one entry across both halves. Storing into a full
/// array evicts the least recently activated entry into the fallback map.
#[derive(Debug)]
pub(crate) struct SlotTable {
    bounded: Vec<Option<RegistryEntry>>,
    fallback: AHashMap<ThreadId, RegistryEntry>,
    clock: u64,
}

impl SlotTable {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            bounded: vec![None; capacity],
            fallback: AHashMap::new(),
            clock: 0,
        }
    }

    pub(crate) fn find(&self, owner: ThreadId) -> Option<&RegistryEntry> {
        self.bounded
            .iter()
            .flatten()
            .find(|entry| entry.owner == owner)
            .or_else(|| self.fallback.get(&owner))
    }

    pub(crate) fn locate(&self, owner: ThreadId) -> Option<SlotLocation> {
        self.bounded
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|entry| entry.owner == owner))
            .map(SlotLocation::Bounded)
            .or_else(|| self.fallback.contains_key(&owner).then_some(SlotLocation::Fallback))
    }

    /// Stores `entry` as its owner's only entry and marks it most recent.
    pub(crate) fn store(&mut self, mut entry: RegistryEntry) -> SlotLocation {
        self.clock += 1;
        entry.last_activated = self.clock;
        let owner = entry.owner;

        if let Some(index) = self.owned_slot(owner) {
            self.bounded[index] = Some(entry);
            return SlotLocation::Bounded(index);
        }

        // Promote out of the fallback map, if the owner was there.
        self.fallback.remove(&owner);

        if let Some(index) = self.bounded.iter().position(Option::is_none) {
            self.bounded[index] = Some(entry);
            return SlotLocation::Bounded(index);
        }

        let Some(victim) = self.least_recent_slot() else {
            self.fallback.insert(owner, entry);
            return SlotLocation::Fallback;
        };
        if let Some(evicted) = self.bounded[victim].replace(entry) {
            log::debug!(
                "registry slot {victim} full; moving {:?} to the fallback map",
                evicted.owner
            );
            self.fallback.insert(evicted.owner, evicted);
        }
        SlotLocation::Bounded(victim)
    }

    pub(crate) fn occupancy(&self) -> Occupancy {
        Occupancy {
            bounded: self.bounded.iter().flatten().count(),
            fallback: self.fallback.len(),
        }
    }

    fn owned_slot(&self, owner: ThreadId) -> Option<usize> {
        self.bounded
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|entry| entry.owner == owner))
    }

    fn least_recent_slot(&self) -> Option<usize> {
        self.bounded
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entry| (index, entry.last_activated)))
            .min_by_key(|&(_, stamp)| stamp)
            .map(|(index, _)| index)
    }
}
