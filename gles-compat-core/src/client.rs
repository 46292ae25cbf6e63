use std::ffi::c_void;
use std::fmt;
use std::sync::Arc;

use bytemuck::Pod;

/// Caller-owned host memory handed to the driver by address.
///
/// This is the Rust stand-in for the mobile API's "pointer into client
/// memory". The block is reference counted: as long as a clone is held (the
/// shim holds one for every array pointer it forwards), the driver's pointer
/// stays valid. Only the bytes from `position` onward are visible to the
/// driver.
#[derive(Clone)]
pub struct ClientBuffer {
    bytes: Arc<[u8]>,
    position: usize,
}

impl ClientBuffer {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
        }
    }

    /// Copies typed values (vertices, indices, colors) into a new block.
    pub fn from_slice<T: Pod>(values: &[T]) -> Self {
        Self::new(bytemuck::cast_slice::<T, u8>(values))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Same block, read from byte `position` (clamped to the block length).
    pub fn with_position(&self, position: usize) -> Self {
        Self {
            bytes: Arc::clone(&self.bytes),
            position: position.min(self.bytes.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// The readable region, `position..`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.position..]
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.as_bytes().as_ptr().cast()
    }

    /// Whether both values view the same block at the same position.
    pub fn same_region(&self, other: &ClientBuffer) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes) && self.position == other.position
    }
}

impl Default for ClientBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for ClientBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for ClientBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuffer")
            .field("capacity", &self.capacity())
            .field("position", &self.position)
            .finish()
    }
}
