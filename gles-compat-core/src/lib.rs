//! gles-compat-core: OpenGL ES 1.x/2.0/3.0 on desktop OpenGL.
//!
//! Applications written against the mobile API call the [`facade`] types.
//! Each call looks up the calling thread's [`registry::GraphicsContextHandle`]
//! and forwards to the richest driver tier the context resolved.
//! On the way it fixes up the places where the two APIs disagree:
//! - client-memory vertex and index arrays on core profiles (`emulator`, `facade`)
//! - fixed-function array pointers, validated and remembered (`tracked`)
//! - ES shader sources on GLSL 1.10/1.20 drivers (`shader`)
//!
//! The driver itself is abstracted behind the traits in [`driver`];
//! [`desktop`] implements them over the `gl` crate.

pub mod client;
pub mod config;
pub mod desktop;
pub mod driver;
pub mod emulator;
pub mod error;
pub mod facade;
pub mod logging;
pub mod registry;
pub mod shader;
pub mod tracked;

#[cfg(test)]
mod testing;

pub use client::ClientBuffer;
pub use config::ShimConfig;
pub use error::ShimError;
pub use facade::{Gles10, Gles20, Gles30};
pub use registry::{ContextRegistry, GraphicsContextHandle};
