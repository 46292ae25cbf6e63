use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread::ThreadId;

use ahash::AHashMap;
use gl::types::{GLenum, GLuint};

use crate::client::ClientBuffer;
use crate::driver::{CapabilityTier, GlBase, GlExtended, GlExtended2, ResolvedTiers, SurfaceId};
use crate::emulator::VertexAttribArrays;
use crate::tracked::{ClientArray, TrackedPointers};

/// Mutable per-context state the façade keeps on behalf of the application.
#[derive(Debug)]
pub struct ClientState {
    pub tracked: TrackedPointers,
    /// Client arrays forwarded directly to the driver, kept alive per index.
    pub attrib_arrays: AHashMap<GLuint, ClientBuffer>,
    pub emulator: VertexAttribArrays,
}

impl ClientState {
    pub fn new(direct_attribute_slots: usize) -> Self {
        Self {
            tracked: TrackedPointers::default(),
            attrib_arrays: AHashMap::new(),
            emulator: VertexAttribArrays::new(direct_attribute_slots),
        }
    }
}

/// Tier handles resolved for one surface on one thread.
pub struct GraphicsContextHandle {
    owner: ThreadId,
    surface: SurfaceId,
    tiers: ResolvedTiers,
    // Shared by every handle of this thread on this surface.
    client: Arc<Mutex<ClientState>>,
    glsl_version: OnceLock<String>,
    pending_error: AtomicU32,
}

impl GraphicsContextHandle {
    pub(crate) fn new(
        owner: ThreadId,
        surface: SurfaceId,
        tiers: ResolvedTiers,
        client: Arc<Mutex<ClientState>>,
    ) -> Self {
        Self {
            owner,
            surface,
            tiers,
            client,
            glsl_version: OnceLock::new(),
            pending_error: AtomicU32::new(gl::NO_ERROR),
        }
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn base(&self) -> &Arc<dyn GlBase> {
        &self.tiers.base
    }

    pub fn extended(&self) -> Option<&Arc<dyn GlExtended>> {
        self.tiers.extended.as_ref()
    }

    pub fn extended2(&self) -> Option<&Arc<dyn GlExtended2>> {
        self.tiers.extended2.as_ref()
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tiers.highest()
    }

    /// Client-memory arrays must go through buffer objects on this context.
    pub fn uses_attribute_emulation(&self) -> bool {
        self.tiers.extended2.is_some()
    }

    pub fn tracked_pointer(&self, array: ClientArray) -> Option<ClientBuffer> {
        self.client().tracked.get(array).cloned()
    }

    /// Buffer object emulating the client array of attribute `index`.
    pub fn emulated_attribute_buffer(&self, index: GLuint) -> Option<GLuint> {
        self.client().emulator.buffer(index)
    }

    /// `GL_SHADING_LANGUAGE_VERSION`, queried on first use.
    pub fn shading_language_version(&self) -> &str {
        self.glsl_version.get_or_init(|| {
            self.tiers
                .base
                .get_string(gl::SHADING_LANGUAGE_VERSION)
                .unwrap_or_default()
        })
    }

    pub(crate) fn client(&self) -> MutexGuard<'_, ClientState> {
        self.client.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a shim-raised error. The first one sticks until read.
    pub(crate) fn raise(&self, error: GLenum) {
        let _ = self.pending_error.compare_exchange(
            gl::NO_ERROR,
            error,
            Ordering::Relaxed,
            Ordering::Relaxed,
        );
    }

    pub(crate) fn take_error(&self) -> GLenum {
        self.pending_error.swap(gl::NO_ERROR, Ordering::Relaxed)
    }
}

impl std::fmt::Debug for GraphicsContextHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsContextHandle")
            .field("owner", &self.owner)
            .field("surface", &self.surface)
            .field("tier", &self.tier())
            .finish_non_exhaustive()
    }
}
