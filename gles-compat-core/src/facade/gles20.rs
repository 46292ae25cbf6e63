use std::ffi::c_void;
use std::sync::Arc;

use gl::types::{
    GLbitfield, GLboolean, GLenum, GLfloat, GLint, GLintptr, GLsizei, GLsizeiptr, GLuint,
};

use crate::client::ClientBuffer;
use crate::emulator::AttribLayout;
use crate::registry::{ContextRegistry, GraphicsContextHandle};
use crate::shader::adapt_shader_source;

use super::{attrib_pointer, draw_with_client_indices, release_client_attrib};

/// ES 2.0 entry points.
///
/// Each call resolves the calling thread's context, so a `Gles20` can be
/// shared by every render thread. Calling without an activated surface on
/// the current thread panics.
#[derive(Clone, Copy)]
pub struct Gles20<'r> {
    registry: &'r ContextRegistry,
}

impl<'r> Gles20<'r> {
    pub fn new(registry: &'r ContextRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ContextRegistry {
        self.registry
    }

    pub fn context(&self) -> Arc<GraphicsContextHandle> {
        self.registry.current()
    }

    /// Errors raised by the shim itself are reported before the driver's.
    pub fn get_error(&self) -> GLenum {
        let context = self.context();
        match context.take_error() {
            gl::NO_ERROR => context.base().get_error(),
            error => error,
        }
    }

    pub fn get_string(&self, name: GLenum) -> Option<String> {
        self.context().base().get_string(name)
    }

    pub fn get_integerv(&self, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_integerv(pname, params)
    }

    pub fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]) {
        self.context().base().get_floatv(pname, params)
    }

    pub fn get_booleanv(&self, pname: GLenum, params: &mut [GLboolean]) {
        self.context().base().get_booleanv(pname, params)
    }

    pub fn enable(&self, cap: GLenum) {
        self.context().base().enable(cap)
    }

    pub fn disable(&self, cap: GLenum) {
        self.context().base().disable(cap)
    }

    pub fn is_enabled(&self, cap: GLenum) -> bool {
        self.context().base().is_enabled(cap)
    }

    pub fn hint(&self, target: GLenum, mode: GLenum) {
        self.context().base().hint(target, mode)
    }

    pub fn finish(&self) {
        self.context().base().finish()
    }

    pub fn flush(&self) {
        self.context().base().flush()
    }

    // Rasterization and per-fragment state

    pub fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.context().base().viewport(x, y, width, height)
    }

    pub fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.context().base().scissor(x, y, width, height)
    }

    pub fn clear(&self, mask: GLbitfield) {
        self.context().base().clear(mask)
    }

    pub fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.context().base().clear_color(red, green, blue, alpha)
    }

    pub fn clear_depthf(&self, depth: GLfloat) {
        self.context().base().clear_depthf(depth)
    }

    pub fn clear_stencil(&self, s: GLint) {
        self.context().base().clear_stencil(s)
    }

    pub fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.context().base().color_mask(red, green, blue, alpha)
    }

    pub fn depth_func(&self, func: GLenum) {
        self.context().base().depth_func(func)
    }

    pub fn depth_mask(&self, flag: bool) {
        self.context().base().depth_mask(flag)
    }

    pub fn depth_rangef(&self, near: GLfloat, far: GLfloat) {
        self.context().base().depth_rangef(near, far)
    }

    pub fn cull_face(&self, mode: GLenum) {
        self.context().base().cull_face(mode)
    }

    pub fn front_face(&self, mode: GLenum) {
        self.context().base().front_face(mode)
    }

    pub fn line_width(&self, width: GLfloat) {
        self.context().base().line_width(width)
    }

    pub fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        self.context().base().polygon_offset(factor, units)
    }

    pub fn sample_coverage(&self, value: GLfloat, invert: bool) {
        self.context().base().sample_coverage(value, invert)
    }

    pub fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.context().base().blend_color(red, green, blue, alpha)
    }

    pub fn blend_equation(&self, mode: GLenum) {
        self.context().base().blend_equation(mode)
    }

    pub fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.context().base().blend_equation_separate(mode_rgb, mode_alpha)
    }

    pub fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        self.context().base().blend_func(sfactor, dfactor)
    }

    pub fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.context().base().blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha)
    }

    pub fn stencil_func(&self, func: GLenum, ref_: GLint, mask: GLuint) {
        self.context().base().stencil_func(func, ref_, mask)
    }

    pub fn stencil_func_separate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) {
        self.context().base().stencil_func_separate(face, func, ref_, mask)
    }

    pub fn stencil_mask(&self, mask: GLuint) {
        self.context().base().stencil_mask(mask)
    }

    pub fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        self.context().base().stencil_mask_separate(face, mask)
    }

    pub fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.context().base().stencil_op(fail, zfail, zpass)
    }

    pub fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.context().base().stencil_op_separate(face, sfail, dpfail, dppass)
    }

    pub fn pixel_storei(&self, pname: GLenum, param: GLint) {
        self.context().base().pixel_storei(pname, param)
    }

    pub fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    ) {
        self.context().base().read_pixels(x, y, width, height, format, type_, pixels)
    }

    // Textures

    pub fn active_texture(&self, texture: GLenum) {
        self.context().base().active_texture(texture)
    }

    pub fn bind_texture(&self, target: GLenum, texture: GLuint) {
        self.context().base().bind_texture(target, texture)
    }

    pub fn gen_textures(&self, textures: &mut [GLuint]) {
        self.context().base().gen_textures(textures)
    }

    pub fn delete_textures(&self, textures: &[GLuint]) {
        self.context().base().delete_textures(textures)
    }

    pub fn is_texture(&self, texture: GLuint) -> bool {
        self.context().base().is_texture(texture)
    }

    pub fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: Option<&[u8]>,
    ) {
        self.context().base().tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            type_,
            pixels,
        )
    }

    pub fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &[u8],
    ) {
        self.context().base().tex_sub_image_2d(
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            type_,
            pixels,
        )
    }

    pub fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    ) {
        self.context().base().compressed_tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            data,
        )
    }

    pub fn compressed_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        data: &[u8],
    ) {
        self.context().base().compressed_tex_sub_image_2d(
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            data,
        )
    }

    pub fn copy_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        self.context().base().copy_tex_image_2d(
            target,
            level,
            internal_format,
            x,
            y,
            width,
            height,
            border,
        )
    }

    pub fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.context().base().copy_tex_sub_image_2d(
            target,
            level,
            xoffset,
            yoffset,
            x,
            y,
            width,
            height,
        )
    }

    pub fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        self.context().base().tex_parameteri(target, pname, param)
    }

    pub fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        self.context().base().tex_parameterf(target, pname, param)
    }

    pub fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]) {
        self.context().base().tex_parameteriv(target, pname, params)
    }

    pub fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        self.context().base().tex_parameterfv(target, pname, params)
    }

    pub fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_tex_parameteriv(target, pname, params)
    }

    pub fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
        self.context().base().get_tex_parameterfv(target, pname, params)
    }

    pub fn generate_mipmap(&self, target: GLenum) {
        self.context().base().generate_mipmap(target)
    }

    // Buffer objects

    pub fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        self.context().base().bind_buffer(target, buffer)
    }

    pub fn gen_buffers(&self, buffers: &mut [GLuint]) {
        self.context().base().gen_buffers(buffers)
    }

    pub fn delete_buffers(&self, buffers: &[GLuint]) {
        self.context().base().delete_buffers(buffers)
    }

    pub fn is_buffer(&self, buffer: GLuint) -> bool {
        self.context().base().is_buffer(buffer)
    }

    /// Rejects `data` shorter than `size` with `GL_INVALID_VALUE`.
    pub fn buffer_data(
        &self,
        target: GLenum,
        size: GLsizeiptr,
        data: Option<&[u8]>,
        usage: GLenum,
    ) {
        let context = self.context();
        if size < 0 || data.is_some_and(|data| (data.len() as GLsizeiptr) < size) {
            context.raise(gl::INVALID_VALUE);
            return;
        }
        context.base().buffer_data(target, size, data, usage)
    }

    pub fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]) {
        self.context().base().buffer_sub_data(target, offset, data)
    }

    pub fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_buffer_parameteriv(target, pname, params)
    }

    // Framebuffers and renderbuffers

    pub fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.context().base().bind_framebuffer(target, framebuffer)
    }

    pub fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        self.context().base().gen_framebuffers(framebuffers)
    }

    pub fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        self.context().base().delete_framebuffers(framebuffers)
    }

    pub fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        self.context().base().is_framebuffer(framebuffer)
    }

    pub fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        self.context().base().check_framebuffer_status(target)
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        self.context().base().framebuffer_texture_2d(target, attachment, textarget, texture, level)
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        self.context().base().framebuffer_renderbuffer(
            target,
            attachment,
            renderbuffertarget,
            renderbuffer,
        )
    }

    pub fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        self.context().base().get_framebuffer_attachment_parameteriv(
            target,
            attachment,
            pname,
            params,
        )
    }

    pub fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        self.context().base().bind_renderbuffer(target, renderbuffer)
    }

    pub fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        self.context().base().gen_renderbuffers(renderbuffers)
    }

    pub fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        self.context().base().delete_renderbuffers(renderbuffers)
    }

    pub fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        self.context().base().is_renderbuffer(renderbuffer)
    }

    pub fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.context().base().renderbuffer_storage(target, internal_format, width, height)
    }

    pub fn get_renderbuffer_parameteriv(
        &self,
        target: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        self.context().base().get_renderbuffer_parameteriv(target, pname, params)
    }

    // Shaders and programs

    pub fn create_shader(&self, type_: GLenum) -> GLuint {
        self.context().base().create_shader(type_)
    }

    pub fn delete_shader(&self, shader: GLuint) {
        self.context().base().delete_shader(shader)
    }

    pub fn is_shader(&self, shader: GLuint) -> bool {
        self.context().base().is_shader(shader)
    }

    /// Hands `source` to the driver, rewritten for legacy desktop GLSL when
    /// the context reports one.
    pub fn shader_source(&self, shader: GLuint, source: &str) {
        let context = self.context();
        if !self.registry.config().adapt_shaders {
            context.base().shader_source(shader, source);
            return;
        }
        let adapted = adapt_shader_source(source, context.shading_language_version());
        context.base().shader_source(shader, &adapted)
    }

    pub fn compile_shader(&self, shader: GLuint) {
        self.context().base().compile_shader(shader)
    }

    pub fn get_shaderiv(&self, shader: GLuint, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_shaderiv(shader, pname, params)
    }

    pub fn get_shader_info_log(&self, shader: GLuint) -> String {
        self.context().base().get_shader_info_log(shader)
    }

    pub fn get_shader_source(&self, shader: GLuint) -> String {
        self.context().base().get_shader_source(shader)
    }

    pub fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint) {
        self.context().base().get_shader_precision_format(shader_type, precision_type)
    }

    pub fn release_shader_compiler(&self) {
        self.context().base().release_shader_compiler()
    }

    pub fn create_program(&self) -> GLuint {
        self.context().base().create_program()
    }

    pub fn delete_program(&self, program: GLuint) {
        self.context().base().delete_program(program)
    }

    pub fn is_program(&self, program: GLuint) -> bool {
        self.context().base().is_program(program)
    }

    pub fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.context().base().attach_shader(program, shader)
    }

    pub fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.context().base().detach_shader(program, shader)
    }

    pub fn link_program(&self, program: GLuint) {
        self.context().base().link_program(program)
    }

    pub fn use_program(&self, program: GLuint) {
        self.context().base().use_program(program)
    }

    pub fn validate_program(&self, program: GLuint) {
        self.context().base().validate_program(program)
    }

    pub fn get_programiv(&self, program: GLuint, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_programiv(program, pname, params)
    }

    pub fn get_program_info_log(&self, program: GLuint) -> String {
        self.context().base().get_program_info_log(program)
    }

    pub fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        self.context().base().get_attached_shaders(program)
    }

    pub fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) {
        self.context().base().bind_attrib_location(program, index, name)
    }

    pub fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint {
        self.context().base().get_attrib_location(program, name)
    }

    pub fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint {
        self.context().base().get_uniform_location(program, name)
    }

    pub fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        self.context().base().get_active_attrib(program, index)
    }

    pub fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        self.context().base().get_active_uniform(program, index)
    }

    // Uniforms

    pub fn uniform1f(&self, location: GLint, v0: GLfloat) {
        self.context().base().uniform1f(location, v0)
    }

    pub fn uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat) {
        self.context().base().uniform2f(location, v0, v1)
    }

    pub fn uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        self.context().base().uniform3f(location, v0, v1, v2)
    }

    pub fn uniform4f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
        self.context().base().uniform4f(location, v0, v1, v2, v3)
    }

    pub fn uniform1i(&self, location: GLint, v0: GLint) {
        self.context().base().uniform1i(location, v0)
    }

    pub fn uniform2i(&self, location: GLint, v0: GLint, v1: GLint) {
        self.context().base().uniform2i(location, v0, v1)
    }

    pub fn uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint) {
        self.context().base().uniform3i(location, v0, v1, v2)
    }

    pub fn uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
        self.context().base().uniform4i(location, v0, v1, v2, v3)
    }

    pub fn uniform1fv(&self, location: GLint, values: &[GLfloat]) {
        self.context().base().uniform1fv(location, values)
    }

    pub fn uniform2fv(&self, location: GLint, values: &[GLfloat]) {
        self.context().base().uniform2fv(location, values)
    }

    pub fn uniform3fv(&self, location: GLint, values: &[GLfloat]) {
        self.context().base().uniform3fv(location, values)
    }

    pub fn uniform4fv(&self, location: GLint, values: &[GLfloat]) {
        self.context().base().uniform4fv(location, values)
    }

    pub fn uniform1iv(&self, location: GLint, values: &[GLint]) {
        self.context().base().uniform1iv(location, values)
    }

    pub fn uniform2iv(&self, location: GLint, values: &[GLint]) {
        self.context().base().uniform2iv(location, values)
    }

    pub fn uniform3iv(&self, location: GLint, values: &[GLint]) {
        self.context().base().uniform3iv(location, values)
    }

    pub fn uniform4iv(&self, location: GLint, values: &[GLint]) {
        self.context().base().uniform4iv(location, values)
    }

    pub fn uniform_matrix2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.context().base().uniform_matrix2fv(location, transpose, values)
    }

    pub fn uniform_matrix3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.context().base().uniform_matrix3fv(location, transpose, values)
    }

    pub fn uniform_matrix4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.context().base().uniform_matrix4fv(location, transpose, values)
    }

    pub fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]) {
        self.context().base().get_uniformfv(program, location, params)
    }

    pub fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]) {
        self.context().base().get_uniformiv(program, location, params)
    }

    // Vertex attributes

    pub fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.context().base().enable_vertex_attrib_array(index)
    }

    pub fn disable_vertex_attrib_array(&self, index: GLuint) {
        let context = self.context();
        context.base().disable_vertex_attrib_array(index);
        if context.uses_attribute_emulation() {
            context.client().emulator.disable(context.base().as_ref(), index);
        }
    }

    /// Points attribute `index` at client memory.
    ///
    /// On contexts that reject client arrays the remaining bytes of `data` are
    /// copied into a buffer object owned by the index.
    pub fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: bool,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        attrib_pointer(
            &self.context(),
            index,
            size,
            type_,
            AttribLayout::Float { normalized },
            stride,
            data,
        )
    }

    /// Points attribute `index` at `offset` bytes into the bound `ARRAY_BUFFER`.
    ///
    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`; otherwise the driver
    /// reads `offset` as a client address.
    pub unsafe fn vertex_attrib_pointer_offset(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) {
        let context = self.context();
        release_client_attrib(&context, index);
        // SAFETY: upheld by the caller.
        unsafe {
            context.base().vertex_attrib_pointer(
                index,
                size,
                type_,
                normalized,
                stride,
                offset as *const c_void,
            )
        }
    }

    pub fn vertex_attrib1f(&self, index: GLuint, x: GLfloat) {
        self.context().base().vertex_attrib1f(index, x)
    }

    pub fn vertex_attrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        self.context().base().vertex_attrib2f(index, x, y)
    }

    pub fn vertex_attrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.context().base().vertex_attrib3f(index, x, y, z)
    }

    pub fn vertex_attrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.context().base().vertex_attrib4f(index, x, y, z, w)
    }

    pub fn vertex_attrib1fv(&self, index: GLuint, v: &[GLfloat; 1]) {
        self.context().base().vertex_attrib1fv(index, v)
    }

    pub fn vertex_attrib2fv(&self, index: GLuint, v: &[GLfloat; 2]) {
        self.context().base().vertex_attrib2fv(index, v)
    }

    pub fn vertex_attrib3fv(&self, index: GLuint, v: &[GLfloat; 3]) {
        self.context().base().vertex_attrib3fv(index, v)
    }

    pub fn vertex_attrib4fv(&self, index: GLuint, v: &[GLfloat; 4]) {
        self.context().base().vertex_attrib4fv(index, v)
    }

    pub fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        self.context().base().get_vertex_attribiv(index, pname, params)
    }

    pub fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        self.context().base().get_vertex_attribfv(index, pname, params)
    }

    // Drawing

    pub fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        self.context().base().draw_arrays(mode, first, count)
    }

    /// Draws with indices read from client memory.
    ///
    /// On contexts that reject client arrays the indices are staged through a
    /// transient element buffer, deleted again before this returns.
    pub fn draw_elements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: &ClientBuffer,
    ) {
        draw_with_client_indices(&self.context(), count, type_, indices, |gl, pointer| {
            // SAFETY: `pointer` is the bounds-checked client block or offset
            // zero into the staged element buffer.
            unsafe { gl.draw_elements(mode, count, type_, pointer) }
        })
    }

    /// # Safety
    /// A buffer object must be bound to `ELEMENT_ARRAY_BUFFER` holding at
    /// least `count` indices past `offset`.
    pub unsafe fn draw_elements_offset(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        offset: usize,
    ) {
        // SAFETY: upheld by the caller.
        unsafe {
            self.context()
                .base()
                .draw_elements(mode, count, type_, offset as *const c_void)
        }
    }
}
