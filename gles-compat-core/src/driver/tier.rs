use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{GlBase, GlExtended, GlExtended2};

/// Identity of a rendering surface as seen by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(1);

impl SurfaceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// A process-unique identity for a freshly created surface.
    pub fn next() -> Self {
        Self(NEXT_SURFACE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of asking a driver context for one capability tier.
#[derive(Debug, Clone)]
pub enum TierResolution<T> {
    Resolved(T),
    Unsupported,
}

impl<T> TierResolution<T> {
    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(handle) => Some(handle),
            Self::Unsupported => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl<T> From<Option<T>> for TierResolution<T> {
    fn from(handle: Option<T>) -> Self {
        match handle {
            Some(handle) => Self::Resolved(handle),
            None => Self::Unsupported,
        }
    }
}

/// Highest capability tier a handle bundle carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CapabilityTier {
    /// ES 1.x/2.0 entry points plus the ES 3.0 ones every desktop GL 3.x has.
    Base,
    /// Adds samplers, sync objects, 64-bit queries and instanced divisors.
    Extended,
    /// Adds framebuffer invalidation. Client-memory arrays are illegal here.
    Extended2,
}

/// The driver-side context behind a surface.
///
/// Each call queries the driver afresh; the registry calls all three on every
/// activation.
pub trait DriverContext {
    fn resolve_extended2(&self) -> TierResolution<Arc<dyn GlExtended2>>;
    fn resolve_extended(&self) -> TierResolution<Arc<dyn GlExtended>>;
    fn resolve_base(&self) -> TierResolution<Arc<dyn GlBase>>;
}

/// Something the host renders into: a window, a pbuffer, an offscreen view.
pub trait RenderSurface {
    fn surface_id(&self) -> SurfaceId;
    fn driver_context(&self) -> &dyn DriverContext;
}

/// The three tier handles after lower tiers were filled in from higher ones.
#[derive(Clone)]
pub struct ResolvedTiers {
    pub base: Arc<dyn GlBase>,
    pub extended: Option<Arc<dyn GlExtended>>,
    pub extended2: Option<Arc<dyn GlExtended2>>,
}

impl ResolvedTiers {
    /// Tries extended2, then extended, then base.
    ///
    /// A tier the context does not resolve natively is taken from the next
    /// higher tier that did. `None` when nothing resolves.
    pub fn derive(context: &dyn DriverContext) -> Option<Self> {
        let extended2 = context.resolve_extended2().resolved();
        let extended = context
            .resolve_extended()
            .resolved()
            .or_else(|| extended2.clone().map(|gl| gl as Arc<dyn GlExtended>));
        let base = context
            .resolve_base()
            .resolved()
            .or_else(|| extended.clone().map(|gl| gl as Arc<dyn GlBase>))?;

        Some(Self {
            base,
            extended,
            extended2,
        })
    }

    pub fn highest(&self) -> CapabilityTier {
        if self.extended2.is_some() {
            CapabilityTier::Extended2
        } else if self.extended.is_some() {
            CapabilityTier::Extended
        } else {
            CapabilityTier::Base
        }
    }
}

impl fmt::Debug for ResolvedTiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTiers")
            .field("extended", &self.extended.is_some())
            .field("extended2", &self.extended2.is_some())
            .finish()
    }
}
