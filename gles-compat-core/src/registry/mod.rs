//! Which graphics context belongs to the calling thread.
//!
//! The host calls [`ContextRegistry::activate`] whenever a surface's context is
//! created or invalidated on a thread; every façade call afterwards resolves
//! through [`ContextRegistry::current`].

mod handle;
mod slots;

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};

use ahash::AHashMap;

use crate::config::ShimConfig;
use crate::driver::{GlBase, RenderSurface, ResolvedTiers, SurfaceId};
use crate::error::ShimError;

pub use handle::{ClientState, GraphicsContextHandle};
pub use slots::{Occupancy, SlotLocation};

use slots::{RegistryEntry, SlotTable};

type InitCallback = Box<dyn FnOnce(&Arc<dyn GlBase>) + Send>;

type SharedClientState = Arc<Mutex<ClientState>>;

struct RegistryState {
    slots: SlotTable,
    // Outlives surface switches, so a thread coming back to a surface finds
    // the buffers it already owns there.
    client_states: AHashMap<(ThreadId, SurfaceId), SharedClientState>,
    pending_init: Vec<InitCallback>,
}

static NEXT_REGISTRY: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Registry id to the calling thread's handle in that registry.
    ///
    /// Only the owning thread replaces its handle, and it refreshes this
    /// entry when it does, so a live entry is always current.
    static CURRENT: RefCell<AHashMap<u64, Weak<GraphicsContextHandle>>> =
        RefCell::new(AHashMap::new());
}

/// Thread-to-context table shared by every façade.
///
/// The lock is taken by activation, init-callback bookkeeping and a thread's
/// first lookup. Later lookups from the same thread are served from a
/// thread-local cache.
pub struct ContextRegistry {
    id: u64,
    config: ShimConfig,
    state: Mutex<RegistryState>,
}

impl ContextRegistry {
    pub fn new(config: ShimConfig) -> Self {
        Self {
            id: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            state: Mutex::new(RegistryState {
                slots: SlotTable::new(config.registry_slots),
                client_states: AHashMap::new(),
                pending_init: Vec::new(),
            }),
            config,
        }
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Re-derives the calling thread's handle for `surface`.
    ///
    /// Pending init callbacks run after the table is updated, with the new
    /// base handle and without the registry lock held.
    pub fn activate(
        &self,
        surface: &dyn RenderSurface,
    ) -> Result<Arc<GraphicsContextHandle>, ShimError> {
        let owner = thread::current().id();
        let surface_id = surface.surface_id();

        let (handle, callbacks) = {
            let mut state = self.lock();

            let Some(tiers) = ResolvedTiers::derive(surface.driver_context()) else {
                log::warn!("surface {surface_id} resolved no capability tier");
                return Err(ShimError::NoCapabilityTier {
                    surface: surface_id,
                });
            };

            let direct_slots = self.config.direct_attribute_slots;
            let client = Arc::clone(
                state
                    .client_states
                    .entry((owner, surface_id))
                    .or_insert_with(|| Arc::new(Mutex::new(ClientState::new(direct_slots)))),
            );

            let handle = Arc::new(GraphicsContextHandle::new(owner, surface_id, tiers, client));
            let location = state
                .slots
                .store(RegistryEntry::new(owner, Arc::clone(&handle)));
            log::debug!(
                "activated surface {surface_id} on {owner:?} at {location:?} with tier {:?}",
                handle.tier()
            );

            (handle, std::mem::take(&mut state.pending_init))
        };
        self.remember(&handle);

        for callback in callbacks {
            callback(handle.base());
        }

        Ok(handle)
    }

    /// The calling thread's handle.
    ///
    /// # Panics
    /// If no surface was activated on this thread. That is a host ordering
    /// bug, not a recoverable condition.
    pub fn current(&self) -> Arc<GraphicsContextHandle> {
        match self.try_current() {
            Some(handle) => handle,
            None => panic!(
                "no graphics context has been activated on {:?}",
                thread::current().id()
            ),
        }
    }

    pub fn try_current(&self) -> Option<Arc<GraphicsContextHandle>> {
        let cached = CURRENT.with_borrow(|cache| cache.get(&self.id).and_then(Weak::upgrade));
        if cached.is_some() {
            return cached;
        }

        let owner = thread::current().id();
        let handle = self
            .lock()
            .slots
            .find(owner)
            .map(|entry| Arc::clone(&entry.handle))?;
        self.remember(&handle);
        Some(handle)
    }

    /// Drops the per-thread client state kept for `surface`.
    ///
    /// Call once the surface's driver context is destroyed; the buffer
    /// objects that state referred to died with it. Returns how many
    /// thread states were dropped.
    pub fn forget_surface(&self, surface: SurfaceId) -> usize {
        let mut state = self.lock();
        let before = state.client_states.len();
        state.client_states.retain(|&(_, id), _| id != surface);
        let dropped = before - state.client_states.len();
        log::debug!("forgot {dropped} client state(s) of surface {surface}");
        dropped
    }

    /// Runs `callback` with the next resolved base handle.
    ///
    /// If the calling thread already has a handle, the callback runs now.
    pub fn on_next_init<F>(&self, callback: F)
    where
        F: FnOnce(&Arc<dyn GlBase>) + Send + 'static,
    {
        let owner = thread::current().id();
        let ready = {
            let mut state = self.lock();
            let found = state.slots.find(owner).map(|entry| Arc::clone(&entry.handle));
            match found {
                Some(handle) => handle,
                None => {
                    state.pending_init.push(Box::new(callback));
                    return;
                }
            }
        };

        callback(ready.base());
    }

    pub fn location(&self) -> Option<SlotLocation> {
        self.lock().slots.locate(thread::current().id())
    }

    pub fn occupancy(&self) -> Occupancy {
        self.lock().slots.occupancy()
    }

    fn remember(&self, handle: &Arc<GraphicsContextHandle>) {
        CURRENT.with_borrow_mut(|cache| {
            cache.retain(|_, cached| cached.strong_count() > 0);
            cache.insert(self.id, Arc::downgrade(handle));
        });
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new(ShimConfig::default())
    }
}

#[cfg(test)]
mod tests;
