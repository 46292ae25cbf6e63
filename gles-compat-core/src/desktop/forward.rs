//! The driver traits over the process-wide `gl` bindings.

use std::ffi::{CStr, CString, c_char, c_void};

use gl::types::{
    GLbitfield, GLboolean, GLchar, GLenum, GLfloat, GLint, GLint64, GLintptr, GLsizei, GLsizeiptr,
    GLsync, GLubyte, GLuint, GLuint64,
};

use super::legacy::LegacyFns;
use crate::driver::{GlBase, GlExtended, GlExtended2};

/// Calls a fixed-function entry point, or does nothing if the driver lacks it.
macro_rules! call_legacy {
    ($slot:expr $(, $arg:expr)* $(,)?) => {
        match $slot {
            // SAFETY: the slot was resolved from the driver with this signature.
            Some(f) => unsafe { f($($arg),*) },
            None => log::trace!("{} is not available on this context", stringify!($slot)),
        }
    };
}

/// Forwards every tier to the current desktop context.
///
/// The bindings are global, so the context this was loaded for must be
/// current on the calling thread.
#[derive(Debug)]
pub struct DesktopGl {
    pub(crate) legacy: LegacyFns,
    pub(crate) es3: bool,
}

fn gl_bool(value: bool) -> GLboolean {
    if value { gl::TRUE } else { gl::FALSE }
}

fn len<T>(items: &[T]) -> GLsizei {
    items.len() as GLsizei
}

/// Element count of a vector uniform upload with `components` per element.
fn count<T>(values: &[T], components: usize) -> GLsizei {
    (values.len() / components) as GLsizei
}

fn data_ptr(data: Option<&[u8]>) -> *const c_void {
    data.map_or(std::ptr::null(), |bytes| bytes.as_ptr().cast())
}

/// Interior NULs truncate the name; the driver would stop there anyway.
fn c_name(name: &str) -> CString {
    let head = name.split('\0').next().unwrap_or_default();
    CString::new(head).unwrap_or_default()
}

unsafe fn gl_string(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null driver strings are NUL-terminated and outlive the call.
    let text = unsafe { CStr::from_ptr(ptr.cast::<c_char>()) };
    Some(text.to_string_lossy().into_owned())
}

/// Reads a driver string of at most `capacity` bytes (terminator included).
fn read_gl_text<F>(capacity: GLint, fetch: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    if capacity <= 0 {
        return String::new();
    }
    let mut buf = vec![0u8; capacity as usize];
    let mut written: GLsizei = 0;
    fetch(capacity, &mut written, buf.as_mut_ptr().cast());
    buf.truncate((written.max(0) as usize).min(buf.len()));
    String::from_utf8_lossy(&buf).into_owned()
}

impl GlBase for DesktopGl {
    fn get_error(&self) -> GLenum {
        unsafe { gl::GetError() }
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        unsafe { gl_string(gl::GetString(name)) }
    }

    fn get_integerv(&self, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetIntegerv(pname, params.as_mut_ptr()) }
    }

    fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { gl::GetFloatv(pname, params.as_mut_ptr()) }
    }

    fn get_booleanv(&self, pname: GLenum, params: &mut [GLboolean]) {
        unsafe { gl::GetBooleanv(pname, params.as_mut_ptr()) }
    }

    fn enable(&self, cap: GLenum) {
        unsafe { gl::Enable(cap) }
    }

    fn disable(&self, cap: GLenum) {
        unsafe { gl::Disable(cap) }
    }

    fn is_enabled(&self, cap: GLenum) -> bool {
        unsafe { gl::IsEnabled(cap) == gl::TRUE }
    }

    fn hint(&self, target: GLenum, mode: GLenum) {
        unsafe { gl::Hint(target, mode) }
    }

    fn finish(&self) {
        unsafe { gl::Finish() }
    }

    fn flush(&self) {
        unsafe { gl::Flush() }
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Scissor(x, y, width, height) }
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { gl::Clear(mask) }
    }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { gl::ClearColor(red, green, blue, alpha) }
    }

    fn clear_depthf(&self, depth: GLfloat) {
        unsafe { gl::ClearDepth(depth as f64) }
    }

    fn clear_stencil(&self, s: GLint) {
        unsafe { gl::ClearStencil(s) }
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe { gl::ColorMask(gl_bool(red), gl_bool(green), gl_bool(blue), gl_bool(alpha)) }
    }

    fn depth_func(&self, func: GLenum) {
        unsafe { gl::DepthFunc(func) }
    }

    fn depth_mask(&self, flag: bool) {
        unsafe { gl::DepthMask(gl_bool(flag)) }
    }

    fn depth_rangef(&self, near: GLfloat, far: GLfloat) {
        unsafe { gl::DepthRange(near as f64, far as f64) }
    }

    fn cull_face(&self, mode: GLenum) {
        unsafe { gl::CullFace(mode) }
    }

    fn front_face(&self, mode: GLenum) {
        unsafe { gl::FrontFace(mode) }
    }

    fn line_width(&self, width: GLfloat) {
        unsafe { gl::LineWidth(width) }
    }

    fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        unsafe { gl::PolygonOffset(factor, units) }
    }

    fn sample_coverage(&self, value: GLfloat, invert: bool) {
        unsafe { gl::SampleCoverage(value, gl_bool(invert)) }
    }

    fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { gl::BlendColor(red, green, blue, alpha) }
    }

    fn blend_equation(&self, mode: GLenum) {
        unsafe { gl::BlendEquation(mode) }
    }

    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        unsafe { gl::BlendEquationSeparate(mode_rgb, mode_alpha) }
    }

    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        unsafe { gl::BlendFunc(sfactor, dfactor) }
    }

    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        unsafe { gl::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn stencil_func(&self, func: GLenum, ref_: GLint, mask: GLuint) {
        unsafe { gl::StencilFunc(func, ref_, mask) }
    }

    fn stencil_func_separate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) {
        unsafe { gl::StencilFuncSeparate(face, func, ref_, mask) }
    }

    fn stencil_mask(&self, mask: GLuint) {
        unsafe { gl::StencilMask(mask) }
    }

    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        unsafe { gl::StencilMaskSeparate(face, mask) }
    }

    fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        unsafe { gl::StencilOp(fail, zfail, zpass) }
    }

    fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        unsafe { gl::StencilOpSeparate(face, sfail, dpfail, dppass) }
    }

    fn pixel_storei(&self, pname: GLenum, param: GLint) {
        unsafe { gl::PixelStorei(pname, param) }
    }

    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    ) {
        unsafe { gl::ReadPixels(x, y, width, height, format, type_, pixels.as_mut_ptr().cast()) }
    }

    fn active_texture(&self, texture: GLenum) {
        unsafe { gl::ActiveTexture(texture) }
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        unsafe { gl::BindTexture(target, texture) }
    }

    fn gen_textures(&self, textures: &mut [GLuint]) {
        unsafe { gl::GenTextures(len(textures), textures.as_mut_ptr()) }
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        unsafe { gl::DeleteTextures(len(textures), textures.as_ptr()) }
    }

    fn is_texture(&self, texture: GLuint) -> bool {
        unsafe { gl::IsTexture(texture) == gl::TRUE }
    }

    fn tex_image_2d(
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
        unsafe {
            gl::TexImage2D(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                type_,
                data_ptr(pixels),
            )
        }
    }

    fn tex_sub_image_2d(
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
        unsafe {
            gl::TexSubImage2D(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                type_,
                pixels.as_ptr().cast(),
            )
        }
    }

    fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    ) {
        unsafe {
            gl::CompressedTexImage2D(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                len(data),
                data.as_ptr().cast(),
            )
        }
    }

    fn compressed_tex_sub_image_2d(
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
        unsafe {
            gl::CompressedTexSubImage2D(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                len(data),
                data.as_ptr().cast(),
            )
        }
    }

    fn copy_tex_image_2d(
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
        unsafe { gl::CopyTexImage2D(target, level, internal_format, x, y, width, height, border) }
    }

    fn copy_tex_sub_image_2d(
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
        unsafe { gl::CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height) }
    }

    fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        unsafe { gl::TexParameteri(target, pname, param) }
    }

    fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        unsafe { gl::TexParameterf(target, pname, param) }
    }

    fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]) {
        unsafe { gl::TexParameteriv(target, pname, params.as_ptr()) }
    }

    fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        unsafe { gl::TexParameterfv(target, pname, params.as_ptr()) }
    }

    fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetTexParameteriv(target, pname, params.as_mut_ptr()) }
    }

    fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { gl::GetTexParameterfv(target, pname, params.as_mut_ptr()) }
    }

    fn generate_mipmap(&self, target: GLenum) {
        unsafe { gl::GenerateMipmap(target) }
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        unsafe { gl::BindBuffer(target, buffer) }
    }

    fn gen_buffers(&self, buffers: &mut [GLuint]) {
        unsafe { gl::GenBuffers(len(buffers), buffers.as_mut_ptr()) }
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        unsafe { gl::DeleteBuffers(len(buffers), buffers.as_ptr()) }
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        unsafe { gl::IsBuffer(buffer) == gl::TRUE }
    }

    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum) {
        unsafe { gl::BufferData(target, size, data_ptr(data), usage) }
    }

    fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]) {
        unsafe { gl::BufferSubData(target, offset, data.len() as GLsizeiptr, data.as_ptr().cast()) }
    }

    fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetBufferParameteriv(target, pname, params.as_mut_ptr()) }
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        unsafe { gl::BindFramebuffer(target, framebuffer) }
    }

    fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        unsafe { gl::GenFramebuffers(len(framebuffers), framebuffers.as_mut_ptr()) }
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        unsafe { gl::DeleteFramebuffers(len(framebuffers), framebuffers.as_ptr()) }
    }

    fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        unsafe { gl::IsFramebuffer(framebuffer) == gl::TRUE }
    }

    fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        unsafe { gl::CheckFramebufferStatus(target) }
    }

    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe { gl::FramebufferTexture2D(target, attachment, textarget, texture, level) }
    }

    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        unsafe { gl::FramebufferRenderbuffer(target, attachment, renderbuffertarget, renderbuffer) }
    }

    fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            gl::GetFramebufferAttachmentParameteriv(target, attachment, pname, params.as_mut_ptr())
        }
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        unsafe { gl::BindRenderbuffer(target, renderbuffer) }
    }

    fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        unsafe { gl::GenRenderbuffers(len(renderbuffers), renderbuffers.as_mut_ptr()) }
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        unsafe { gl::DeleteRenderbuffers(len(renderbuffers), renderbuffers.as_ptr()) }
    }

    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        unsafe { gl::IsRenderbuffer(renderbuffer) == gl::TRUE }
    }

    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { gl::RenderbufferStorage(target, internal_format, width, height) }
    }

    fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetRenderbufferParameteriv(target, pname, params.as_mut_ptr()) }
    }

    fn create_shader(&self, type_: GLenum) -> GLuint {
        unsafe { gl::CreateShader(type_) }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        unsafe { gl::IsShader(shader) == gl::TRUE }
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        let pointer = source.as_ptr().cast::<GLchar>();
        let length = source.len() as GLint;
        unsafe { gl::ShaderSource(shader, 1, &pointer, &length) }
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) }
    }

    fn get_shaderiv(&self, shader: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetShaderiv(shader, pname, params.as_mut_ptr()) }
    }

    fn get_shader_info_log(&self, shader: GLuint) -> String {
        let mut len = [0];
        self.get_shaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        read_gl_text(len[0], |capacity, written, buf| unsafe {
            gl::GetShaderInfoLog(shader, capacity, written, buf)
        })
    }

    fn get_shader_source(&self, shader: GLuint) -> String {
        let mut len = [0];
        self.get_shaderiv(shader, gl::SHADER_SOURCE_LENGTH, &mut len);
        read_gl_text(len[0], |capacity, written, buf| unsafe {
            gl::GetShaderSource(shader, capacity, written, buf)
        })
    }

    fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint) {
        // IEEE single precision for floats, 32-bit two's complement for ints.
        let (mut range, mut precision) = match precision_type {
            gl::LOW_INT | gl::MEDIUM_INT | gl::HIGH_INT => ([31, 30], 0),
            _ => ([127, 127], 23),
        };
        if gl::GetShaderPrecisionFormat::is_loaded() {
            unsafe {
                gl::GetShaderPrecisionFormat(
                    shader_type,
                    precision_type,
                    range.as_mut_ptr(),
                    &mut precision,
                );
                // Some drivers export a stub that only raises an error.
                gl::GetError();
            }
        }
        (range[0], range[1], precision)
    }

    fn release_shader_compiler(&self) {
        if gl::ReleaseShaderCompiler::is_loaded() {
            unsafe { gl::ReleaseShaderCompiler() }
        }
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn is_program(&self, program: GLuint) -> bool {
        unsafe { gl::IsProgram(program) == gl::TRUE }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    fn validate_program(&self, program: GLuint) {
        unsafe { gl::ValidateProgram(program) }
    }

    fn get_programiv(&self, program: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetProgramiv(program, pname, params.as_mut_ptr()) }
    }

    fn get_program_info_log(&self, program: GLuint) -> String {
        let mut len = [0];
        self.get_programiv(program, gl::INFO_LOG_LENGTH, &mut len);
        read_gl_text(len[0], |capacity, written, buf| unsafe {
            gl::GetProgramInfoLog(program, capacity, written, buf)
        })
    }

    fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        let mut count = [0];
        self.get_programiv(program, gl::ATTACHED_SHADERS, &mut count);
        let mut shaders = vec![0; count[0].max(0) as usize];
        let mut written = 0;
        unsafe { gl::GetAttachedShaders(program, count[0], &mut written, shaders.as_mut_ptr()) }
        shaders.truncate(written.max(0) as usize);
        shaders
    }

    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) {
        unsafe { gl::BindAttribLocation(program, index, c_name(name).as_ptr()) }
    }

    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint {
        unsafe { gl::GetAttribLocation(program, c_name(name).as_ptr()) }
    }

    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint {
        unsafe { gl::GetUniformLocation(program, c_name(name).as_ptr()) }
    }

    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        let mut max_len = [0];
        self.get_programiv(program, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH, &mut max_len);
        let mut size = 0;
        let mut type_ = 0;
        let name = read_gl_text(max_len[0], |capacity, written, buf| unsafe {
            gl::GetActiveAttrib(program, index, capacity, written, &mut size, &mut type_, buf)
        });
        (size, type_, name)
    }

    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        let mut max_len = [0];
        self.get_programiv(program, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_len);
        let mut size = 0;
        let mut type_ = 0;
        let name = read_gl_text(max_len[0], |capacity, written, buf| unsafe {
            gl::GetActiveUniform(program, index, capacity, written, &mut size, &mut type_, buf)
        });
        (size, type_, name)
    }

    fn uniform1f(&self, location: GLint, v0: GLfloat) {
        unsafe { gl::Uniform1f(location, v0) }
    }

    fn uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat) {
        unsafe { gl::Uniform2f(location, v0, v1) }
    }

    fn uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        unsafe { gl::Uniform3f(location, v0, v1, v2) }
    }

    fn uniform4f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
        unsafe { gl::Uniform4f(location, v0, v1, v2, v3) }
    }

    fn uniform1i(&self, location: GLint, v0: GLint) {
        unsafe { gl::Uniform1i(location, v0) }
    }

    fn uniform2i(&self, location: GLint, v0: GLint, v1: GLint) {
        unsafe { gl::Uniform2i(location, v0, v1) }
    }

    fn uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint) {
        unsafe { gl::Uniform3i(location, v0, v1, v2) }
    }

    fn uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
        unsafe { gl::Uniform4i(location, v0, v1, v2, v3) }
    }

    fn uniform1fv(&self, location: GLint, values: &[GLfloat]) {
        unsafe { gl::Uniform1fv(location, count(values, 1), values.as_ptr()) }
    }

    fn uniform2fv(&self, location: GLint, values: &[GLfloat]) {
        unsafe { gl::Uniform2fv(location, count(values, 2), values.as_ptr()) }
    }

    fn uniform3fv(&self, location: GLint, values: &[GLfloat]) {
        unsafe { gl::Uniform3fv(location, count(values, 3), values.as_ptr()) }
    }

    fn uniform4fv(&self, location: GLint, values: &[GLfloat]) {
        unsafe { gl::Uniform4fv(location, count(values, 4), values.as_ptr()) }
    }

    fn uniform1iv(&self, location: GLint, values: &[GLint]) {
        unsafe { gl::Uniform1iv(location, count(values, 1), values.as_ptr()) }
    }

    fn uniform2iv(&self, location: GLint, values: &[GLint]) {
        unsafe { gl::Uniform2iv(location, count(values, 2), values.as_ptr()) }
    }

    fn uniform3iv(&self, location: GLint, values: &[GLint]) {
        unsafe { gl::Uniform3iv(location, count(values, 3), values.as_ptr()) }
    }

    fn uniform4iv(&self, location: GLint, values: &[GLint]) {
        unsafe { gl::Uniform4iv(location, count(values, 4), values.as_ptr()) }
    }

    fn uniform_matrix2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix2fv(location, count(values, 4), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix3fv(location, count(values, 9), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix4fv(location, count(values, 16), gl_bool(transpose), values.as_ptr())
        }
    }

    fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]) {
        unsafe { gl::GetUniformfv(program, location, params.as_mut_ptr()) }
    }

    fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]) {
        unsafe { gl::GetUniformiv(program, location, params.as_mut_ptr()) }
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { gl::DisableVertexAttribArray(index) }
    }

    unsafe fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: bool,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        unsafe { gl::VertexAttribPointer(index, size, type_, gl_bool(normalized), stride, pointer) }
    }

    fn vertex_attrib1f(&self, index: GLuint, x: GLfloat) {
        unsafe { gl::VertexAttrib1f(index, x) }
    }

    fn vertex_attrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        unsafe { gl::VertexAttrib2f(index, x, y) }
    }

    fn vertex_attrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        unsafe { gl::VertexAttrib3f(index, x, y, z) }
    }

    fn vertex_attrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        unsafe { gl::VertexAttrib4f(index, x, y, z, w) }
    }

    fn vertex_attrib1fv(&self, index: GLuint, v: &[GLfloat; 1]) {
        unsafe { gl::VertexAttrib1fv(index, v.as_ptr()) }
    }

    fn vertex_attrib2fv(&self, index: GLuint, v: &[GLfloat; 2]) {
        unsafe { gl::VertexAttrib2fv(index, v.as_ptr()) }
    }

    fn vertex_attrib3fv(&self, index: GLuint, v: &[GLfloat; 3]) {
        unsafe { gl::VertexAttrib3fv(index, v.as_ptr()) }
    }

    fn vertex_attrib4fv(&self, index: GLuint, v: &[GLfloat; 4]) {
        unsafe { gl::VertexAttrib4fv(index, v.as_ptr()) }
    }

    fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetVertexAttribiv(index, pname, params.as_mut_ptr()) }
    }

    fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { gl::GetVertexAttribfv(index, pname, params.as_mut_ptr()) }
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        unsafe { gl::DrawArrays(mode, first, count) }
    }

    unsafe fn draw_elements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        unsafe { gl::DrawElements(mode, count, type_, indices) }
    }

    unsafe fn color_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        call_legacy!(self.legacy.color_pointer, size, type_, stride, pointer)
    }

    unsafe fn normal_pointer(&self, type_: GLenum, stride: GLsizei, pointer: *const c_void) {
        call_legacy!(self.legacy.normal_pointer, type_, stride, pointer)
    }

    unsafe fn tex_coord_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        call_legacy!(self.legacy.tex_coord_pointer, size, type_, stride, pointer)
    }

    unsafe fn vertex_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        call_legacy!(self.legacy.vertex_pointer, size, type_, stride, pointer)
    }

    fn enable_client_state(&self, array: GLenum) {
        call_legacy!(self.legacy.enable_client_state, array)
    }

    fn disable_client_state(&self, array: GLenum) {
        call_legacy!(self.legacy.disable_client_state, array)
    }

    fn client_active_texture(&self, texture: GLenum) {
        call_legacy!(self.legacy.client_active_texture, texture)
    }

    fn matrix_mode(&self, mode: GLenum) {
        call_legacy!(self.legacy.matrix_mode, mode)
    }

    fn load_identity(&self) {
        call_legacy!(self.legacy.load_identity)
    }

    fn load_matrixf(&self, m: &[GLfloat; 16]) {
        call_legacy!(self.legacy.load_matrixf, m.as_ptr())
    }

    fn mult_matrixf(&self, m: &[GLfloat; 16]) {
        call_legacy!(self.legacy.mult_matrixf, m.as_ptr())
    }

    fn push_matrix(&self) {
        call_legacy!(self.legacy.push_matrix)
    }

    fn pop_matrix(&self) {
        call_legacy!(self.legacy.pop_matrix)
    }

    fn orthof(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    ) {
        call_legacy!(
            self.legacy.ortho,
            left as f64,
            right as f64,
            bottom as f64,
            top as f64,
            near as f64,
            far as f64,
        )
    }

    fn frustumf(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    ) {
        call_legacy!(
            self.legacy.frustum,
            left as f64,
            right as f64,
            bottom as f64,
            top as f64,
            near as f64,
            far as f64,
        )
    }

    fn rotatef(&self, angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat) {
        call_legacy!(self.legacy.rotatef, angle, x, y, z)
    }

    fn scalef(&self, x: GLfloat, y: GLfloat, z: GLfloat) {
        call_legacy!(self.legacy.scalef, x, y, z)
    }

    fn translatef(&self, x: GLfloat, y: GLfloat, z: GLfloat) {
        call_legacy!(self.legacy.translatef, x, y, z)
    }

    fn color4f(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        call_legacy!(self.legacy.color4f, red, green, blue, alpha)
    }

    fn color4ub(&self, red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte) {
        call_legacy!(self.legacy.color4ub, red, green, blue, alpha)
    }

    fn normal3f(&self, nx: GLfloat, ny: GLfloat, nz: GLfloat) {
        call_legacy!(self.legacy.normal3f, nx, ny, nz)
    }

    fn multi_tex_coord4f(&self, target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat) {
        call_legacy!(self.legacy.multi_tex_coord4f, target, s, t, r, q)
    }

    fn shade_model(&self, mode: GLenum) {
        call_legacy!(self.legacy.shade_model, mode)
    }

    fn alpha_func(&self, func: GLenum, ref_: GLfloat) {
        call_legacy!(self.legacy.alpha_func, func, ref_)
    }

    fn tex_envi(&self, target: GLenum, pname: GLenum, param: GLint) {
        call_legacy!(self.legacy.tex_envi, target, pname, param)
    }

    fn tex_envf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        call_legacy!(self.legacy.tex_envf, target, pname, param)
    }

    fn tex_envfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        call_legacy!(self.legacy.tex_envfv, target, pname, params.as_ptr())
    }

    fn point_size(&self, size: GLfloat) {
        unsafe { gl::PointSize(size) }
    }

    fn supports_es3(&self) -> bool {
        self.es3
    }

    fn read_buffer(&self, src: GLenum) {
        unsafe { gl::ReadBuffer(src) }
    }

    fn draw_buffers(&self, bufs: &[GLenum]) {
        unsafe { gl::DrawBuffers(len(bufs), bufs.as_ptr()) }
    }

    fn bind_vertex_array(&self, array: GLuint) {
        unsafe { gl::BindVertexArray(array) }
    }

    fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) {
        unsafe { gl::GenVertexArrays(len(arrays), arrays.as_mut_ptr()) }
    }

    fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        unsafe { gl::DeleteVertexArrays(len(arrays), arrays.as_ptr()) }
    }

    fn is_vertex_array(&self, array: GLuint) -> bool {
        unsafe { gl::IsVertexArray(array) == gl::TRUE }
    }

    fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instance_count: GLsizei,
    ) {
        unsafe { gl::DrawArraysInstanced(mode, first, count, instance_count) }
    }

    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instance_count: GLsizei,
    ) {
        unsafe { gl::DrawElementsInstanced(mode, count, type_, indices, instance_count) }
    }

    unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        unsafe { gl::DrawRangeElements(mode, start, end, count, type_, indices) }
    }

    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        unsafe { gl::VertexAttribIPointer(index, size, type_, stride, pointer) }
    }

    fn vertex_attrib_i4i(&self, index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint) {
        unsafe { gl::VertexAttribI4i(index, x, y, z, w) }
    }

    fn vertex_attrib_i4ui(&self, index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint) {
        unsafe { gl::VertexAttribI4ui(index, x, y, z, w) }
    }

    fn uniform1ui(&self, location: GLint, v0: GLuint) {
        unsafe { gl::Uniform1ui(location, v0) }
    }

    fn uniform2ui(&self, location: GLint, v0: GLuint, v1: GLuint) {
        unsafe { gl::Uniform2ui(location, v0, v1) }
    }

    fn uniform3ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) {
        unsafe { gl::Uniform3ui(location, v0, v1, v2) }
    }

    fn uniform4ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint) {
        unsafe { gl::Uniform4ui(location, v0, v1, v2, v3) }
    }

    fn uniform1uiv(&self, location: GLint, values: &[GLuint]) {
        unsafe { gl::Uniform1uiv(location, count(values, 1), values.as_ptr()) }
    }

    fn uniform2uiv(&self, location: GLint, values: &[GLuint]) {
        unsafe { gl::Uniform2uiv(location, count(values, 2), values.as_ptr()) }
    }

    fn uniform3uiv(&self, location: GLint, values: &[GLuint]) {
        unsafe { gl::Uniform3uiv(location, count(values, 3), values.as_ptr()) }
    }

    fn uniform4uiv(&self, location: GLint, values: &[GLuint]) {
        unsafe { gl::Uniform4uiv(location, count(values, 4), values.as_ptr()) }
    }

    fn uniform_matrix2x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix2x3fv(location, count(values, 6), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix3x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix3x2fv(location, count(values, 6), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix2x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix2x4fv(location, count(values, 8), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix4x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix4x2fv(location, count(values, 8), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix3x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix3x4fv(location, count(values, 12), gl_bool(transpose), values.as_ptr())
        }
    }

    fn uniform_matrix4x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]) {
        unsafe {
            gl::UniformMatrix4x3fv(location, count(values, 12), gl_bool(transpose), values.as_ptr())
        }
    }

    fn tex_image_3d(
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
        unsafe {
            gl::TexImage3D(
                target,
                level,
                internal_format,
                width,
                height,
                depth,
                border,
                format,
                type_,
                data_ptr(pixels),
            )
        }
    }

    fn tex_sub_image_3d(
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
        unsafe {
            gl::TexSubImage3D(
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
                pixels.as_ptr().cast(),
            )
        }
    }

    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { gl::TexStorage2D(target, levels, internal_format, width, height) }
    }

    fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        unsafe { gl::TexStorage3D(target, levels, internal_format, width, height, depth) }
    }

    fn blit_framebuffer(
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
        unsafe {
            gl::BlitFramebuffer(
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
        }
    }

    fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            gl::RenderbufferStorageMultisample(target, samples, internal_format, width, height)
        }
    }

    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        unsafe { gl::FramebufferTextureLayer(target, attachment, texture, level, layer) }
    }

    unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void {
        unsafe { gl::MapBufferRange(target, offset, length, access) }
    }

    fn unmap_buffer(&self, target: GLenum) -> bool {
        unsafe { gl::UnmapBuffer(target) == gl::TRUE }
    }

    fn flush_mapped_buffer_range(&self, target: GLenum, offset: GLintptr, length: GLsizeiptr) {
        unsafe { gl::FlushMappedBufferRange(target, offset, length) }
    }

    fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe { gl::CopyBufferSubData(read_target, write_target, read_offset, write_offset, size) }
    }

    fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint) {
        unsafe { gl::BindBufferBase(target, index, buffer) }
    }

    fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe { gl::BindBufferRange(target, index, buffer, offset, size) }
    }

    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint {
        unsafe { gl::GetUniformBlockIndex(program, c_name(name).as_ptr()) }
    }

    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        unsafe { gl::UniformBlockBinding(program, block_index, binding) }
    }

    fn gen_queries(&self, ids: &mut [GLuint]) {
        unsafe { gl::GenQueries(len(ids), ids.as_mut_ptr()) }
    }

    fn delete_queries(&self, ids: &[GLuint]) {
        unsafe { gl::DeleteQueries(len(ids), ids.as_ptr()) }
    }

    fn begin_query(&self, target: GLenum, id: GLuint) {
        unsafe { gl::BeginQuery(target, id) }
    }

    fn end_query(&self, target: GLenum) {
        unsafe { gl::EndQuery(target) }
    }

    fn get_query_objectuiv(&self, id: GLuint, pname: GLenum, params: &mut [GLuint]) {
        unsafe { gl::GetQueryObjectuiv(id, pname, params.as_mut_ptr()) }
    }

    fn clear_bufferfv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]) {
        unsafe { gl::ClearBufferfv(buffer, drawbuffer, value.as_ptr()) }
    }

    fn clear_bufferiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLint]) {
        unsafe { gl::ClearBufferiv(buffer, drawbuffer, value.as_ptr()) }
    }

    fn clear_bufferuiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLuint]) {
        unsafe { gl::ClearBufferuiv(buffer, drawbuffer, value.as_ptr()) }
    }

    fn clear_bufferfi(&self, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint) {
        unsafe { gl::ClearBufferfi(buffer, drawbuffer, depth, stencil) }
    }

    fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<String> {
        unsafe { gl_string(gl::GetStringi(name, index)) }
    }

    fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint {
        unsafe { gl::GetFragDataLocation(program, c_name(name).as_ptr()) }
    }

    fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]) {
        unsafe { gl::GetIntegeri_v(target, index, data.as_mut_ptr()) }
    }
}

impl GlExtended for DesktopGl {
    fn gen_samplers(&self, samplers: &mut [GLuint]) {
        unsafe { gl::GenSamplers(len(samplers), samplers.as_mut_ptr()) }
    }

    fn delete_samplers(&self, samplers: &[GLuint]) {
        unsafe { gl::DeleteSamplers(len(samplers), samplers.as_ptr()) }
    }

    fn is_sampler(&self, sampler: GLuint) -> bool {
        unsafe { gl::IsSampler(sampler) == gl::TRUE }
    }

    fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        unsafe { gl::BindSampler(unit, sampler) }
    }

    fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint) {
        unsafe { gl::SamplerParameteri(sampler, pname, param) }
    }

    fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat) {
        unsafe { gl::SamplerParameterf(sampler, pname, param) }
    }

    fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &[GLint]) {
        unsafe { gl::SamplerParameteriv(sampler, pname, params.as_ptr()) }
    }

    fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &[GLfloat]) {
        unsafe { gl::SamplerParameterfv(sampler, pname, params.as_ptr()) }
    }

    fn get_sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { gl::GetSamplerParameteriv(sampler, pname, params.as_mut_ptr()) }
    }

    fn get_sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { gl::GetSamplerParameterfv(sampler, pname, params.as_mut_ptr()) }
    }

    fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync {
        unsafe { gl::FenceSync(condition, flags) }
    }

    fn is_sync(&self, sync: GLsync) -> bool {
        unsafe { gl::IsSync(sync) == gl::TRUE }
    }

    fn delete_sync(&self, sync: GLsync) {
        unsafe { gl::DeleteSync(sync) }
    }

    fn client_wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
        unsafe { gl::ClientWaitSync(sync, flags, timeout) }
    }

    fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) {
        unsafe { gl::WaitSync(sync, flags, timeout) }
    }

    fn get_synciv(&self, sync: GLsync, pname: GLenum, values: &mut [GLint]) -> GLsizei {
        let mut written = 0;
        unsafe { gl::GetSynciv(sync, pname, len(values), &mut written, values.as_mut_ptr()) }
        written
    }

    fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]) {
        unsafe { gl::GetInteger64v(pname, data.as_mut_ptr()) }
    }

    fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]) {
        unsafe { gl::GetInteger64i_v(target, index, data.as_mut_ptr()) }
    }

    fn get_buffer_parameteri64v(&self, target: GLenum, pname: GLenum, params: &mut [GLint64]) {
        unsafe { gl::GetBufferParameteri64v(target, pname, params.as_mut_ptr()) }
    }

    fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        unsafe { gl::VertexAttribDivisor(index, divisor) }
    }
}

impl GlExtended2 for DesktopGl {
    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        // A hint; dropping it is always correct.
        if gl::InvalidateFramebuffer::is_loaded() {
            unsafe { gl::InvalidateFramebuffer(target, len(attachments), attachments.as_ptr()) }
        }
    }

    fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        if gl::InvalidateSubFramebuffer::is_loaded() {
            unsafe {
                gl::InvalidateSubFramebuffer(
                    target,
                    len(attachments),
                    attachments.as_ptr(),
                    x,
                    y,
                    width,
                    height,
                )
            }
        }
    }
}
