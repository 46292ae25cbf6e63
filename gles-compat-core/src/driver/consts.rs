//! Enumerants of the fixed-function pipeline.
//!
//! The `gl` crate is generated for the core profile and leaves these out, but
//! ES 1.x applications pass them and compatibility-profile drivers accept them.

use gl::types::GLenum;

// Client-side arrays
pub const VERTEX_ARRAY: GLenum = 0x8074;
pub const NORMAL_ARRAY: GLenum = 0x8075;
pub const COLOR_ARRAY: GLenum = 0x8076;
pub const TEXTURE_COORD_ARRAY: GLenum = 0x8078;

// Matrix stacks
pub const MODELVIEW: GLenum = 0x1700;
pub const PROJECTION: GLenum = 0x1701;
pub const TEXTURE_MATRIX_MODE: GLenum = 0x1702;

// Shading
pub const FLAT: GLenum = 0x1D00;
pub const SMOOTH: GLenum = 0x1D01;
pub const ALPHA_TEST: GLenum = 0x0BC0;
pub const LIGHTING: GLenum = 0x0B50;

// Texture environment
pub const TEXTURE_ENV: GLenum = 0x2300;
pub const TEXTURE_ENV_MODE: GLenum = 0x2200;
pub const TEXTURE_ENV_COLOR: GLenum = 0x2201;
pub const MODULATE: GLenum = 0x2100;
pub const DECAL: GLenum = 0x2101;
pub const ADD: GLenum = 0x0104;
