//! Client-memory vertex attributes for drivers that only read buffer objects.
//!
//! Each `pointer` call uploads the caller's remaining bytes into a buffer
//! object owned by the attribute index and points the attribute at it. The
//! buffer lives until the next `pointer` or `disable` for that index.

use ahash::AHashMap;
use gl::types::{GLenum, GLint, GLsizei, GLuint};

use crate::client::ClientBuffer;
use crate::driver::GlBase;

/// How the driver should interpret attribute components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribLayout {
    /// `glVertexAttribPointer`.
    Float { normalized: bool },
    /// `glVertexAttribIPointer`.
    Integer,
}

/// Attribute index to emulated buffer object.
///
/// Small indices use a direct array, the rest an overflow map. An index never
/// owns more than one live buffer.
#[derive(Debug)]
pub struct VertexAttribArrays {
    direct: Box<[GLuint]>,
    overflow: AHashMap<GLuint, GLuint>,
}

impl VertexAttribArrays {
    pub fn new(direct_slots: usize) -> Self {
        Self {
            direct: vec![0; direct_slots].into_boxed_slice(),
            overflow: AHashMap::new(),
        }
    }

    /// Points attribute `index` at a fresh buffer holding `data`'s remaining bytes.
    pub fn pointer(
        &mut self,
        gl: &dyn GlBase,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        layout: AttribLayout,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        self.disable(gl, index);

        let remaining = data.remaining();
        if remaining == 0 {
            return;
        }

        let mut name = [0];
        gl.gen_buffers(&mut name);
        let buffer = name[0];
        if buffer == 0 {
            log::warn!("glGenBuffers returned no name; attribute {index} left unbound");
            return;
        }

        gl.bind_buffer(gl::ARRAY_BUFFER, buffer);
        gl.buffer_data(
            gl::ARRAY_BUFFER,
            remaining as isize,
            Some(data.as_bytes()),
            gl::STATIC_DRAW,
        );
        // SAFETY: a buffer is bound to ARRAY_BUFFER, so the null pointer is
        // offset zero into it rather than a client address.
        unsafe {
            match layout {
                AttribLayout::Float { normalized } => gl.vertex_attrib_pointer(
                    index,
                    size,
                    type_,
                    normalized,
                    stride,
                    std::ptr::null(),
                ),
                AttribLayout::Integer => {
                    gl.vertex_attrib_i_pointer(index, size, type_, stride, std::ptr::null())
                }
            }
        }
        gl.bind_buffer(gl::ARRAY_BUFFER, 0);

        log::trace!("attribute {index}: uploaded {remaining} bytes into buffer {buffer}");
        self.record(index, buffer);
    }

    /// Deletes the buffer owned by `index`, if any.
    pub fn disable(&mut self, gl: &dyn GlBase, index: GLuint) {
        if let Some(buffer) = self.take(index) {
            gl.delete_buffers(&[buffer]);
            log::trace!("attribute {index}: released buffer {buffer}");
        }
    }

    /// Buffer currently owned by `index`.
    pub fn buffer(&self, index: GLuint) -> Option<GLuint> {
        match self.direct.get(index as usize) {
            Some(&0) => None,
            Some(&buffer) => Some(buffer),
            None => self.overflow.get(&index).copied(),
        }
    }

    pub fn live_buffers(&self) -> usize {
        self.direct.iter().filter(|&&buffer| buffer != 0).count() + self.overflow.len()
    }

    fn record(&mut self, index: GLuint, buffer: GLuint) {
        match self.direct.get_mut(index as usize) {
            Some(slot) => *slot = buffer,
            None => {
                self.overflow.insert(index, buffer);
            }
        }
    }

    fn take(&mut self, index: GLuint) -> Option<GLuint> {
        match self.direct.get_mut(index as usize) {
            Some(slot) => match std::mem::take(slot) {
                0 => None,
                buffer => Some(buffer),
            },
            None => self.overflow.remove(&index),
        }
    }
}
