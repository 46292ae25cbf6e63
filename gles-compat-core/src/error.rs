use thiserror::Error;

use crate::driver::SurfaceId;

/// Failures surfaced to the host integration layer.
///
/// Rendering errors raised by application calls never use this type; they are
/// reported through `get_error` like the driver's own error codes.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("surface {surface} exposes no usable capability tier")]
    NoCapabilityTier { surface: SurfaceId },
}
