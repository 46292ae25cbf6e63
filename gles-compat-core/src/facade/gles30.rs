use std::ffi::c_void;
use std::ops::Deref;

use gl::types::{
    GLbitfield, GLenum, GLfloat, GLint, GLint64, GLintptr, GLsizei, GLsizeiptr, GLsync, GLuint,
    GLuint64,
};

use std::sync::Arc;

use crate::client::ClientBuffer;
use crate::driver::{GlBase, GlExtended, GlExtended2};
use crate::emulator::AttribLayout;
use crate::registry::{ContextRegistry, GraphicsContextHandle};

use super::{Gles20, attrib_pointer, draw_with_client_indices, release_client_attrib};

/// ES 3.0 entry points.
///
/// The base-tier ES 3.0 calls need a GL 3.0 driver; a GL 2.x context drops
/// them with `GL_INVALID_OPERATION`. Samplers, sync objects, 64-bit queries and attribute divisors need the
/// extended tier; framebuffer invalidation needs extended2. On a context
/// without the tier those calls are dropped, `GL_INVALID_OPERATION` is
/// raised and a neutral value is returned.
#[derive(Clone, Copy)]
pub struct Gles30<'r> {
    common: Gles20<'r>,
}

impl<'r> Gles30<'r> {
    pub fn new(registry: &'r ContextRegistry) -> Self {
        Self {
            common: Gles20::new(registry),
        }
    }

    /// The current context, if its driver has the GL 3.0 entry points.
    fn es3_context(&self, entry: &str) -> Option<Arc<GraphicsContextHandle>> {
        let context = self.context();
        if context.base().supports_es3() {
            return Some(context);
        }
        log::debug!("{entry} needs a GL 3.0 driver; dropped");
        context.raise(gl::INVALID_OPERATION);
        None
    }

    fn with_es3<R>(&self, entry: &str, default: R, call: impl FnOnce(&dyn GlBase) -> R) -> R {
        match self.es3_context(entry) {
            Some(context) => call(context.base().as_ref()),
            None => default,
        }
    }

    fn with_extended<R>(
        &self,
        entry: &str,
        default: R,
        call: impl FnOnce(&dyn GlExtended) -> R,
    ) -> R {
        let context = self.context();
        match context.extended() {
            Some(ext) => call(ext.as_ref()),
            None => {
                log::debug!("{entry} needs the extended tier; dropped");
                context.raise(gl::INVALID_OPERATION);
                default
            }
        }
    }

    fn with_extended2<R>(
        &self,
        entry: &str,
        default: R,
        call: impl FnOnce(&dyn GlExtended2) -> R,
    ) -> R {
        let context = self.context();
        match context.extended2() {
            Some(ext) => call(ext.as_ref()),
            None => {
                log::debug!("{entry} needs the extended2 tier; dropped");
                context.raise(gl::INVALID_OPERATION);
                default
            }
        }
    }

    pub fn read_buffer(&self, src: GLenum) {
        self.with_es3("glReadBuffer", (), |gl| gl.read_buffer(src))
    }

    pub fn draw_buffers(&self, bufs: &[GLenum]) {
        self.with_es3("glDrawBuffers", (), |gl| gl.draw_buffers(bufs))
    }

    pub fn bind_vertex_array(&self, array: GLuint) {
        self.with_es3("glBindVertexArray", (), |gl| gl.bind_vertex_array(array))
    }

    pub fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) {
        self.with_es3("glGenVertexArrays", (), |gl| gl.gen_vertex_arrays(arrays))
    }

    pub fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        self.with_es3("glDeleteVertexArrays", (), |gl| gl.delete_vertex_arrays(arrays))
    }

    pub fn is_vertex_array(&self, array: GLuint) -> bool {
        self.with_es3("glIsVertexArray", false, |gl| gl.is_vertex_array(array))
    }

    pub fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instance_count: GLsizei,
    ) {
        self.with_es3("glDrawArraysInstanced", (), |gl| {
            gl.draw_arrays_instanced(mode, first, count, instance_count)
        })
    }

    /// Client-memory indices, staged like [`Gles20::draw_elements`].
    pub fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: &ClientBuffer,
        instance_count: GLsizei,
    ) {
        let Some(context) = self.es3_context("glDrawElementsInstanced") else {
            return;
        };
        draw_with_client_indices(&context, count, type_, indices, |gl, pointer| {
            // SAFETY: bounds-checked client block or offset zero into the
            // staged element buffer.
            unsafe { gl.draw_elements_instanced(mode, count, type_, pointer, instance_count) }
        })
    }

    /// # Safety
    /// Same contract as [`Gles20::draw_elements_offset`].
    pub unsafe fn draw_elements_instanced_offset(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        offset: usize,
        instance_count: GLsizei,
    ) {
        // SAFETY: upheld by the caller.
        self.with_es3("glDrawElementsInstanced", (), |gl| unsafe {
            gl.draw_elements_instanced(mode, count, type_, offset as *const c_void, instance_count)
        })
    }

    /// Client-memory indices, staged like [`Gles20::draw_elements`].
    pub fn draw_range_elements(
        &self,
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: &ClientBuffer,
    ) {
        let Some(context) = self.es3_context("glDrawRangeElements") else {
            return;
        };
        draw_with_client_indices(&context, count, type_, indices, |gl, pointer| {
            // SAFETY: bounds-checked client block or offset zero into the
            // staged element buffer.
            unsafe { gl.draw_range_elements(mode, start, end, count, type_, pointer) }
        })
    }

    /// # Safety
    /// Same contract as [`Gles20::draw_elements_offset`].
    pub unsafe fn draw_range_elements_offset(
        &self,
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        offset: usize,
    ) {
        // SAFETY: upheld by the caller.
        self.with_es3("glDrawRangeElements", (), |gl| unsafe {
            gl.draw_range_elements(mode, start, end, count, type_, offset as *const c_void)
        })
    }

    /// Integer counterpart of [`Gles20::vertex_attrib_pointer`].
    pub fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        let Some(context) = self.es3_context("glVertexAttribIPointer") else {
            return;
        };
        attrib_pointer(
            &context,
            index,
            size,
            type_,
            AttribLayout::Integer,
            stride,
            data,
        )
    }

    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    pub unsafe fn vertex_attrib_i_pointer_offset(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) {
        let Some(context) = self.es3_context("glVertexAttribIPointer") else {
            return;
        };
        release_client_attrib(&context, index);
        // SAFETY: upheld by the caller.
        unsafe {
            context
                .base()
                .vertex_attrib_i_pointer(index, size, type_, stride, offset as *const c_void)
        }
    }

    pub fn vertex_attrib_i4i(&self, index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint) {
        self.with_es3("glVertexAttribI4i", (), |gl| gl.vertex_attrib_i4i(index, x, y, z, w))
    }

    pub fn vertex_attrib_i4ui(&self, index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint) {
        self.with_es3("glVertexAttribI4ui", (), |gl| gl.vertex_attrib_i4ui(index, x, y, z, w))
    }

    pub fn uniform1ui(&self, location: GLint, v0: GLuint) {
        self.with_es3("glUniform1ui", (), |gl| gl.uniform1ui(location, v0))
    }

    pub fn uniform2ui(&self, location: GLint, v0: GLuint, v1: GLuint) {
        self.with_es3("glUniform2ui", (), |gl| gl.uniform2ui(location, v0, v1))
    }

    pub fn uniform3ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) {
        self.with_es3("glUniform3ui", (), |gl| gl.uniform3ui(location, v0, v1, v2))
    }

    pub fn uniform4ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint) {
        self.with_es3("glUniform4ui", (), |gl| gl.uniform4ui(location, v0, v1, v2, v3))
    }

    pub fn uniform1uiv(&self, location: GLint, values: &[GLuint]) {
        self.with_es3("glUniform1uiv", (), |gl| gl.uniform1uiv(location, values))
    }

    pub fn uniform2uiv(&self, location: GLint, values: &[GLuint]) {
        self.with_es3("glUniform2uiv", (), |gl| gl.uniform2uiv(location, values))
    }

    pub fn uniform3uiv(&self, location: GLint, values: &[GLuint]) {
        self.with_es3("glUniform3uiv", (), |gl| gl.uniform3uiv(location, values))
    }

    pub fn uniform4uiv(&self, location: GLint, values: &[GLuint]) {
        self.with_es3("glUniform4uiv", (), |gl| gl.uniform4uiv(location, values))
    }

    pub fn uniform_matrix2x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix2x3fv", (), |gl| {
            gl.uniform_matrix2x3fv(location, transpose, values)
        })
    }

    pub fn uniform_matrix3x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix3x2fv", (), |gl| {
            gl.uniform_matrix3x2fv(location, transpose, values)
        })
    }

    pub fn uniform_matrix2x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix2x4fv", (), |gl| {
            gl.uniform_matrix2x4fv(location, transpose, values)
        })
    }

    pub fn uniform_matrix4x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix4x2fv", (), |gl| {
            gl.uniform_matrix4x2fv(location, transpose, values)
        })
    }

    pub fn uniform_matrix3x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix3x4fv", (), |gl| {
            gl.uniform_matrix3x4fv(location, transpose, values)
        })
    }

    pub fn uniform_matrix4x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.with_es3("glUniformMatrix4x3fv", (), |gl| {
            gl.uniform_matrix4x3fv(location, transpose, values)
        })
    }

    // Textures and framebuffers

    pub fn tex_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: Option<&[u8]>,
    ) {
        self.with_es3("glTexImage3D", (), |gl| {
            gl.tex_image_3d(
                target,
                level,
                internal_format,
                width,
                height,
                depth,
                border,
                format,
                type_,
                pixels,
            )
        })
    }

    pub fn tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &[u8],
    ) {
        self.with_es3("glTexSubImage3D", (), |gl| {
            gl.tex_sub_image_3d(
                target,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                type_,
                pixels,
            )
        })
    }

    pub fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.with_es3("glTexStorage2D", (), |gl| {
            gl.tex_storage_2d(target, levels, internal_format, width, height)
        })
    }

    pub fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        self.with_es3("glTexStorage3D", (), |gl| {
            gl.tex_storage_3d(target, levels, internal_format, width, height, depth)
        })
    }

    pub fn blit_framebuffer(
        &self,
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    ) {
        self.with_es3("glBlitFramebuffer", (), |gl| {
            gl.blit_framebuffer(
                src_x0,
                src_y0,
                src_x1,
                src_y1,
                dst_x0,
                dst_y0,
                dst_x1,
                dst_y1,
                mask,
                filter,
            )
        })
    }

    pub fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.with_es3("glRenderbufferStorageMultisample", (), |gl| {
            gl.renderbuffer_storage_multisample(
                target,
                samples,
                internal_format,
                width,
                height,
            )
        })
    }

    pub fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        self.with_es3("glFramebufferTextureLayer", (), |gl| {
            gl.framebuffer_texture_layer(target, attachment, texture, level, layer)
        })
    }

    // Buffer objects

    /// # Safety
    /// The mapping must not be used after `unmap_buffer` on the same target.
    pub unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void {
        // SAFETY: upheld by the caller.
        self.with_es3("glMapBufferRange", std::ptr::null_mut(), |gl| unsafe {
            gl.map_buffer_range(target, offset, length, access)
        })
    }

    pub fn unmap_buffer(&self, target: GLenum) -> bool {
        self.with_es3("glUnmapBuffer", false, |gl| gl.unmap_buffer(target))
    }

    pub fn flush_mapped_buffer_range(&self, target: GLenum, offset: GLintptr, length: GLsizeiptr) {
        self.with_es3("glFlushMappedBufferRange", (), |gl| {
            gl.flush_mapped_buffer_range(target, offset, length)
        })
    }

    pub fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    ) {
        self.with_es3("glCopyBufferSubData", (), |gl| {
            gl.copy_buffer_sub_data(
                read_target,
                write_target,
                read_offset,
                write_offset,
                size,
            )
        })
    }

    pub fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint) {
        self.with_es3("glBindBufferBase", (), |gl| gl.bind_buffer_base(target, index, buffer))
    }

    pub fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        self.with_es3("glBindBufferRange", (), |gl| {
            gl.bind_buffer_range(target, index, buffer, offset, size)
        })
    }

    pub fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint {
        self.with_es3("glGetUniformBlockIndex", gl::INVALID_INDEX, |gl| {
            gl.get_uniform_block_index(program, name)
        })
    }

    pub fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        self.with_es3("glUniformBlockBinding", (), |gl| {
            gl.uniform_block_binding(program, block_index, binding)
        })
    }

    // Queries

    pub fn gen_queries(&self, ids: &mut [GLuint]) {
        self.with_es3("glGenQueries", (), |gl| gl.gen_queries(ids))
    }

    pub fn delete_queries(&self, ids: &[GLuint]) {
        self.with_es3("glDeleteQueries", (), |gl| gl.delete_queries(ids))
    }

    pub fn begin_query(&self, target: GLenum, id: GLuint) {
        self.with_es3("glBeginQuery", (), |gl| gl.begin_query(target, id))
    }

    pub fn end_query(&self, target: GLenum) {
        self.with_es3("glEndQuery", (), |gl| gl.end_query(target))
    }

    pub fn get_query_objectuiv(&self, id: GLuint, pname: GLenum, params: &mut [GLuint]) {
        self.with_es3("glGetQueryObjectuiv", (), |gl| gl.get_query_objectuiv(id, pname, params))
    }

    pub fn clear_bufferfv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]) {
        self.with_es3("glClearBufferfv", (), |gl| gl.clear_bufferfv(buffer, drawbuffer, value))
    }

    pub fn clear_bufferiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLint]) {
        self.with_es3("glClearBufferiv", (), |gl| gl.clear_bufferiv(buffer, drawbuffer, value))
    }

    pub fn clear_bufferuiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLuint]) {
        self.with_es3("glClearBufferuiv", (), |gl| gl.clear_bufferuiv(buffer, drawbuffer, value))
    }

    pub fn clear_bufferfi(
        &self,
        buffer: GLenum,
        drawbuffer: GLint,
        depth: GLfloat,
        stencil: GLint,
    ) {
        self.with_es3("glClearBufferfi", (), |gl| {
            gl.clear_bufferfi(buffer, drawbuffer, depth, stencil)
        })
    }

    pub fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<String> {
        self.with_es3("glGetStringi", None, |gl| gl.get_stringi(name, index))
    }

    pub fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint {
        self.with_es3("glGetFragDataLocation", -1, |gl| gl.get_frag_data_location(program, name))
    }

    pub fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]) {
        self.with_es3("glGetIntegeri_v", (), |gl| gl.get_integeri_v(target, index, data))
    }

    // Extended tier

    pub fn gen_samplers(&self, samplers: &mut [GLuint]) {
        self.with_extended("glGenSamplers", (), |ext| ext.gen_samplers(samplers))
    }

    pub fn delete_samplers(&self, samplers: &[GLuint]) {
        self.with_extended("glDeleteSamplers", (), |ext| ext.delete_samplers(samplers))
    }

    pub fn is_sampler(&self, sampler: GLuint) -> bool {
        self.with_extended("glIsSampler", false, |ext| ext.is_sampler(sampler))
    }

    pub fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        self.with_extended("glBindSampler", (), |ext| ext.bind_sampler(unit, sampler))
    }

    pub fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint) {
        self.with_extended("glSamplerParameteri", (), |ext| {
            ext.sampler_parameteri(sampler, pname, param)
        })
    }

    pub fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat) {
        self.with_extended("glSamplerParameterf", (), |ext| {
            ext.sampler_parameterf(sampler, pname, param)
        })
    }

    pub fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &[GLint]) {
        self.with_extended("glSamplerParameteriv", (), |ext| {
            ext.sampler_parameteriv(sampler, pname, params)
        })
    }

    pub fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &[GLfloat]) {
        self.with_extended("glSamplerParameterfv", (), |ext| {
            ext.sampler_parameterfv(sampler, pname, params)
        })
    }

    pub fn get_sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLint]) {
        self.with_extended("glGetSamplerParameteriv", (), |ext| {
            ext.get_sampler_parameteriv(sampler, pname, params)
        })
    }

    pub fn get_sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        self.with_extended("glGetSamplerParameterfv", (), |ext| {
            ext.get_sampler_parameterfv(sampler, pname, params)
        })
    }

    pub fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync {
        self.with_extended("glFenceSync", std::ptr::null(), |ext| ext.fence_sync(condition, flags))
    }

    pub fn is_sync(&self, sync: GLsync) -> bool {
        self.with_extended("glIsSync", false, |ext| ext.is_sync(sync))
    }

    pub fn delete_sync(&self, sync: GLsync) {
        self.with_extended("glDeleteSync", (), |ext| ext.delete_sync(sync))
    }

    pub fn client_wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
        self.with_extended("glClientWaitSync", gl::WAIT_FAILED, |ext| {
            ext.client_wait_sync(sync, flags, timeout)
        })
    }

    pub fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) {
        self.with_extended("glWaitSync", (), |ext| ext.wait_sync(sync, flags, timeout))
    }

    pub fn get_synciv(&self, sync: GLsync, pname: GLenum, values: &mut [GLint]) -> GLsizei {
        self.with_extended("glGetSynciv", 0, |ext| ext.get_synciv(sync, pname, values))
    }

    pub fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]) {
        self.with_extended("glGetInteger64v", (), |ext| ext.get_integer64v(pname, data))
    }

    pub fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]) {
        self.with_extended("glGetInteger64i_v", (), |ext| ext.get_integer64i_v(target, index, data))
    }

    pub fn get_buffer_parameteri64v(&self, target: GLenum, pname: GLenum, params: &mut [GLint64]) {
        self.with_extended("glGetBufferParameteri64v", (), |ext| {
            ext.get_buffer_parameteri64v(target, pname, params)
        })
    }

    pub fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        self.with_extended("glVertexAttribDivisor", (), |ext| {
            ext.vertex_attrib_divisor(index, divisor)
        })
    }

    // Extended2 tier

    pub fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        self.with_extended2("glInvalidateFramebuffer", (), |ext| {
            ext.invalidate_framebuffer(target, attachments)
        })
    }

    pub fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.with_extended2("glInvalidateSubFramebuffer", (), |ext| {
            ext.invalidate_sub_framebuffer(target, attachments, x, y, width, height)
        })
    }
}

impl<'r> Deref for Gles30<'r> {
    type Target = Gles20<'r>;

    fn deref(&self) -> &Self::Target {
        &self.common
    }
}
