//! Application-facing entry points for ES 1.x, 2.0 and 3.0.
//!
//! The façades are thin: look up the calling thread's context and forward.
//! The exceptions live here. Client-memory arrays are retained or emulated,
//! client-memory indices are staged through a transient buffer when the
//! driver rejects them, and arguments that would let the driver read past a
//! caller's block are turned into GL errors instead.

mod gles10;
mod gles20;
mod gles30;

use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLsizei, GLuint};

use crate::client::ClientBuffer;
use crate::driver::GlBase;
use crate::emulator::AttribLayout;
use crate::registry::GraphicsContextHandle;

pub use gles10::Gles10;
pub use gles20::Gles20;
pub use gles30::Gles30;

/// Points a programmable attribute at client memory.
fn attrib_pointer(
    context: &GraphicsContextHandle,
    index: GLuint,
    size: GLint,
    type_: GLenum,
    layout: AttribLayout,
    stride: GLsizei,
    data: &ClientBuffer,
) {
    let gl = context.base().as_ref();
    let mut client = context.client();

    if context.uses_attribute_emulation() {
        client.emulator.pointer(gl, index, size, type_, layout, stride, data);
        return;
    }

    let pointer = data.as_ptr();
    // SAFETY: the clone retained below keeps the block alive until the index
    // is respecified.
    unsafe {
        match layout {
            AttribLayout::Float { normalized } => {
                gl.vertex_attrib_pointer(index, size, type_, normalized, stride, pointer)
            }
            AttribLayout::Integer => {
                gl.vertex_attrib_i_pointer(index, size, type_, stride, pointer)
            }
        }
    }
    client.attrib_arrays.insert(index, data.clone());
}

/// Drops whatever client array backed `index` before it is respecified with
/// a buffer offset.
fn release_client_attrib(context: &GraphicsContextHandle, index: GLuint) {
    let mut client = context.client();
    client.attrib_arrays.remove(&index);
    if context.uses_attribute_emulation() {
        client.emulator.disable(context.base().as_ref(), index);
    }
}

fn index_size(type_: GLenum) -> Option<usize> {
    match type_ {
        gl::UNSIGNED_BYTE => Some(1),
        gl::UNSIGNED_SHORT => Some(2),
        gl::UNSIGNED_INT => Some(4),
        _ => None,
    }
}

/// Issues an indexed draw whose indices live in client memory.
///
/// `draw` receives the driver and the `indices` argument to pass: the client
/// address, or offset zero into a transient element buffer that is unbound
/// and deleted before this returns.
fn draw_with_client_indices<F>(
    context: &GraphicsContextHandle,
    count: GLsizei,
    type_: GLenum,
    indices: &ClientBuffer,
    draw: F,
) where
    F: FnOnce(&dyn GlBase, *const c_void),
{
    let Some(index_size) = index_size(type_) else {
        context.raise(gl::INVALID_ENUM);
        return;
    };
    if count < 0 || count as usize * index_size > indices.remaining() {
        context.raise(gl::INVALID_VALUE);
        return;
    }

    let gl = context.base().as_ref();
    if !context.uses_attribute_emulation() {
        draw(gl, indices.as_ptr());
        return;
    }

    let mut name = [0];
    gl.gen_buffers(&mut name);
    let buffer = name[0];
    if buffer == 0 {
        log::warn!("glGenBuffers returned no name; indexed draw of {count} skipped");
        return;
    }

    gl.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, buffer);
    gl.buffer_data(
        gl::ELEMENT_ARRAY_BUFFER,
        indices.remaining() as isize,
        Some(indices.as_bytes()),
        gl::STREAM_DRAW,
    );
    draw(gl, std::ptr::null());
    gl.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, 0);
    gl.delete_buffers(&[buffer]);
}
