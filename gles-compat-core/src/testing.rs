//! In-memory driver used by the unit tests.
//!
//! `FakeGl` implements every tier. It keeps just enough state to observe what
//! the shim did: live buffer names, bindings, uploads, attribute pointers,
//! draws and shader sources. Every entry point is appended to `calls`.

use std::ffi::c_void;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ahash::{AHashMap, AHashSet};
use gl::types::{
    GLbitfield, GLboolean, GLenum, GLfloat, GLint, GLint64, GLintptr, GLsizei, GLsizeiptr,
    GLsync, GLubyte, GLuint, GLuint64,
};

use crate::driver::{
    DriverContext, GlBase, GlExtended, GlExtended2, RenderSurface, SurfaceId, TierResolution,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttribPointer {
    /// Buffer bound to `ARRAY_BUFFER` when the pointer was set.
    pub buffer: GLuint,
    pub pointer: usize,
    pub size: GLint,
    pub type_: GLenum,
    pub normalized: bool,
    pub integer: bool,
    pub stride: GLsizei,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub mode: GLenum,
    pub count: GLsizei,
    pub type_: GLenum,
    /// Buffer bound to `ELEMENT_ARRAY_BUFFER` when the draw was issued.
    pub element_buffer: GLuint,
    pub indices: usize,
    /// Contents of `element_buffer` at draw time.
    pub element_bytes: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct FakeState {
    next_name: GLuint,
    pub live_buffers: AHashSet<GLuint>,
    pub bindings: AHashMap<GLenum, GLuint>,
    pub buffer_contents: AHashMap<GLuint, (Vec<u8>, GLenum)>,
    pub attrib_pointers: AHashMap<GLuint, AttribPointer>,
    pub legacy_pointers: AHashMap<&'static str, usize>,
    pub enabled_attribs: AHashSet<GLuint>,
    pub draws: Vec<DrawCall>,
    pub shader_sources: AHashMap<GLuint, String>,
    pub calls: Vec<&'static str>,
    pub errors: Vec<GLenum>,
    pub glsl_version: String,
    pub fail_gen_buffers: bool,
    /// Cleared to act like a GL 2.x driver.
    pub es3: bool,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            next_name: 1,
            live_buffers: AHashSet::new(),
            bindings: AHashMap::new(),
            buffer_contents: AHashMap::new(),
            attrib_pointers: AHashMap::new(),
            legacy_pointers: AHashMap::new(),
            enabled_attribs: AHashSet::new(),
            draws: Vec::new(),
            shader_sources: AHashMap::new(),
            calls: Vec::new(),
            errors: Vec::new(),
            glsl_version: "4.60".to_string(),
            fail_gen_buffers: false,
            es3: true,
        }
    }
}

impl FakeState {
    fn fresh_name(&mut self) -> GLuint {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    fn bound(&self, target: GLenum) -> GLuint {
        self.bindings.get(&target).copied().unwrap_or(0)
    }

    fn record_draw(&mut self, mode: GLenum, count: GLsizei, type_: GLenum, indices: usize) {
        let element_buffer = self.bound(gl::ELEMENT_ARRAY_BUFFER);
        let element_bytes = self
            .buffer_contents
            .get(&element_buffer)
            .map(|(bytes, _)| bytes.clone());
        self.draws.push(DrawCall {
            mode,
            count,
            type_,
            element_buffer,
            indices,
            element_bytes,
        });
    }
}

#[derive(Debug, Default)]
pub struct FakeGl {
    state: Mutex<FakeState>,
}

impl FakeGl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A driver reporting `version` for `GL_SHADING_LANGUAGE_VERSION`.
    pub fn with_glsl(version: &str) -> Arc<Self> {
        let gl = Self::default();
        gl.state().glsl_version = version.to_string();
        Arc::new(gl)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn live_buffer_count(&self) -> usize {
        self.state().live_buffers.len()
    }

    pub fn calls_to(&self, name: &str) -> usize {
        self.state().calls.iter().filter(|&&call| call == name).count()
    }

    fn record(&self, call: &'static str) {
        self.state().calls.push(call);
    }

    fn record_legacy(&self, call: &'static str, pointer: *const c_void) {
        let mut state = self.state();
        state.calls.push(call);
        state.legacy_pointers.insert(call, pointer as usize);
    }
}

/// Entry points whose effect the tests never inspect beyond being called.
macro_rules! recorded {
    ($(fn $name:ident(&self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty = $default:expr)?;)*) => {
        $(
            fn $name(&self $(, $arg: $ty)*) $(-> $ret)? {
                $(let _ = $arg;)*
                self.record(stringify!($name));
                $($default)?
            }
        )*
    };
}

impl GlBase for FakeGl {
    fn get_error(&self) -> GLenum {
        let mut state = self.state();
        state.calls.push("get_error");
        if state.errors.is_empty() {
            gl::NO_ERROR
        } else {
            state.errors.remove(0)
        }
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        let mut state = self.state();
        state.calls.push("get_string");
        match name {
            gl::SHADING_LANGUAGE_VERSION => Some(state.glsl_version.clone()),
            gl::VERSION => Some("fake".to_string()),
            _ => None,
        }
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        let mut state = self.state();
        state.calls.push("bind_buffer");
        state.bindings.insert(target, buffer);
    }

    fn gen_buffers(&self, buffers: &mut [GLuint]) {
        let mut state = self.state();
        state.calls.push("gen_buffers");
        for slot in buffers {
            *slot = if state.fail_gen_buffers {
                0
            } else {
                let name = state.fresh_name();
                state.live_buffers.insert(name);
                name
            };
        }
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        let mut state = self.state();
        state.calls.push("delete_buffers");
        for buffer in buffers {
            state.live_buffers.remove(buffer);
            state.buffer_contents.remove(buffer);
            state.bindings.retain(|_, bound| bound != buffer);
        }
    }

    fn supports_es3(&self) -> bool {
        self.state().es3
    }

    fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) {
        let mut state = self.state();
        state.calls.push("gen_vertex_arrays");
        for slot in arrays {
            *slot = state.fresh_name();
        }
    }

    fn bind_vertex_array(&self, array: GLuint) {
        let mut state = self.state();
        state.calls.push("bind_vertex_array");
        state.bindings.insert(gl::VERTEX_ARRAY_BINDING, array);
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        self.state().live_buffers.contains(&buffer)
    }

    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum) {
        let mut state = self.state();
        state.calls.push("buffer_data");
        let buffer = state.bound(target);
        let size = size.max(0) as usize;
        let bytes = match data {
            Some(data) => data[..size].to_vec(),
            None => vec![0; size],
        };
        state.buffer_contents.insert(buffer, (bytes, usage));
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
        let mut state = self.state();
        state.calls.push("vertex_attrib_pointer");
        let buffer = state.bound(gl::ARRAY_BUFFER);
        state.attrib_pointers.insert(
            index,
            AttribPointer {
                buffer,
                pointer: pointer as usize,
                size,
                type_,
                normalized,
                integer: false,
                stride,
            },
        );
    }

    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        let mut state = self.state();
        state.calls.push("vertex_attrib_i_pointer");
        let buffer = state.bound(gl::ARRAY_BUFFER);
        state.attrib_pointers.insert(
            index,
            AttribPointer {
                buffer,
                pointer: pointer as usize,
                size,
                type_,
                normalized: false,
                integer: true,
                stride,
            },
        );
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        let mut state = self.state();
        state.calls.push("enable_vertex_attrib_array");
        state.enabled_attribs.insert(index);
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        let mut state = self.state();
        state.calls.push("disable_vertex_attrib_array");
        state.enabled_attribs.remove(&index);
    }

    unsafe fn draw_elements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        let mut state = self.state();
        state.calls.push("draw_elements");
        state.record_draw(mode, count, type_, indices as usize);
    }

    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        _instance_count: GLsizei,
    ) {
        let mut state = self.state();
        state.calls.push("draw_elements_instanced");
        state.record_draw(mode, count, type_, indices as usize);
    }

    unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        _start: GLuint,
        _end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        let mut state = self.state();
        state.calls.push("draw_range_elements");
        state.record_draw(mode, count, type_, indices as usize);
    }

    unsafe fn color_pointer(
        &self,
        _size: GLint,
        _type_: GLenum,
        _stride: GLsizei,
        pointer: *const c_void,
    ) {
        self.record_legacy("color_pointer", pointer);
    }

    unsafe fn normal_pointer(&self, _type_: GLenum, _stride: GLsizei, pointer: *const c_void) {
        self.record_legacy("normal_pointer", pointer);
    }

    unsafe fn tex_coord_pointer(
        &self,
        _size: GLint,
        _type_: GLenum,
        _stride: GLsizei,
        pointer: *const c_void,
    ) {
        self.record_legacy("tex_coord_pointer", pointer);
    }

    unsafe fn vertex_pointer(
        &self,
        _size: GLint,
        _type_: GLenum,
        _stride: GLsizei,
        pointer: *const c_void,
    ) {
        self.record_legacy("vertex_pointer", pointer);
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        let mut state = self.state();
        state.calls.push("shader_source");
        state.shader_sources.insert(shader, source.to_string());
    }

    fn create_shader(&self, _type_: GLenum) -> GLuint {
        let mut state = self.state();
        state.calls.push("create_shader");
        state.fresh_name()
    }

    fn create_program(&self) -> GLuint {
        let mut state = self.state();
        state.calls.push("create_program");
        state.fresh_name()
    }

    unsafe fn map_buffer_range(
        &self,
        _target: GLenum,
        _offset: GLintptr,
        _length: GLsizeiptr,
        _access: GLbitfield,
    ) -> *mut c_void {
        self.record("map_buffer_range");
        std::ptr::null_mut()
    }

    recorded! {
        fn get_integerv(&self, pname: GLenum, params: &mut [GLint]);
        fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]);
        fn get_booleanv(&self, pname: GLenum, params: &mut [GLboolean]);
        fn enable(&self, cap: GLenum);
        fn disable(&self, cap: GLenum);
        fn is_enabled(&self, cap: GLenum) -> bool = false;
        fn hint(&self, target: GLenum, mode: GLenum);
        fn finish(&self);
        fn flush(&self);
        fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn clear(&self, mask: GLbitfield);
        fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn clear_depthf(&self, depth: GLfloat);
        fn clear_stencil(&self, s: GLint);
        fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);
        fn depth_func(&self, func: GLenum);
        fn depth_mask(&self, flag: bool);
        fn depth_rangef(&self, near: GLfloat, far: GLfloat);
        fn cull_face(&self, mode: GLenum);
        fn front_face(&self, mode: GLenum);
        fn line_width(&self, width: GLfloat);
        fn polygon_offset(&self, factor: GLfloat, units: GLfloat);
        fn sample_coverage(&self, value: GLfloat, invert: bool);
        fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn blend_equation(&self, mode: GLenum);
        fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum);
        fn blend_func(&self, sfactor: GLenum, dfactor: GLenum);
        fn blend_func_separate(&self, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);
        fn stencil_func(&self, func: GLenum, ref_: GLint, mask: GLuint);
        fn stencil_func_separate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
        fn stencil_mask(&self, mask: GLuint);
        fn stencil_mask_separate(&self, face: GLenum, mask: GLuint);
        fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
        fn pixel_storei(&self, pname: GLenum, param: GLint);
        fn read_pixels(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: &mut [u8]);
        fn active_texture(&self, texture: GLenum);
        fn bind_texture(&self, target: GLenum, texture: GLuint);
        fn gen_textures(&self, textures: &mut [GLuint]);
        fn delete_textures(&self, textures: &[GLuint]);
        fn is_texture(&self, texture: GLuint) -> bool = false;
        fn tex_image_2d(&self, target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: Option<&[u8]>);
        fn tex_sub_image_2d(&self, target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: &[u8]);
        fn compressed_tex_image_2d(&self, target: GLenum, level: GLint, internal_format: GLenum, width: GLsizei, height: GLsizei, border: GLint, data: &[u8]);
        fn compressed_tex_sub_image_2d(&self, target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, data: &[u8]);
        fn copy_tex_image_2d(&self, target: GLenum, level: GLint, internal_format: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        fn copy_tex_sub_image_2d(&self, target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint);
        fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat);
        fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]);
        fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]);
        fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);
        fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]);
        fn generate_mipmap(&self, target: GLenum);
        fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]);
        fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);
        fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint);
        fn gen_framebuffers(&self, framebuffers: &mut [GLuint]);
        fn delete_framebuffers(&self, framebuffers: &[GLuint]);
        fn is_framebuffer(&self, framebuffer: GLuint) -> bool = false;
        fn check_framebuffer_status(&self, target: GLenum) -> GLenum = gl::FRAMEBUFFER_COMPLETE;
        fn framebuffer_texture_2d(&self, target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        fn framebuffer_renderbuffer(&self, target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn get_framebuffer_attachment_parameteriv(&self, target: GLenum, attachment: GLenum, pname: GLenum, params: &mut [GLint]);
        fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint);
        fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]);
        fn delete_renderbuffers(&self, renderbuffers: &[GLuint]);
        fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool = false;
        fn renderbuffer_storage(&self, target: GLenum, internal_format: GLenum, width: GLsizei, height: GLsizei);
        fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);
        fn delete_shader(&self, shader: GLuint);
        fn is_shader(&self, shader: GLuint) -> bool = false;
        fn compile_shader(&self, shader: GLuint);
        fn get_shaderiv(&self, shader: GLuint, pname: GLenum, params: &mut [GLint]);
        fn get_shader_info_log(&self, shader: GLuint) -> String = String::new();
        fn get_shader_source(&self, shader: GLuint) -> String = String::new();
        fn get_shader_precision_format(&self, shader_type: GLenum, precision_type: GLenum) -> (GLint, GLint, GLint) = (127, 127, 23);
        fn release_shader_compiler(&self);
        fn delete_program(&self, program: GLuint);
        fn is_program(&self, program: GLuint) -> bool = false;
        fn attach_shader(&self, program: GLuint, shader: GLuint);
        fn detach_shader(&self, program: GLuint, shader: GLuint);
        fn link_program(&self, program: GLuint);
        fn use_program(&self, program: GLuint);
        fn validate_program(&self, program: GLuint);
        fn get_programiv(&self, program: GLuint, pname: GLenum, params: &mut [GLint]);
        fn get_program_info_log(&self, program: GLuint) -> String = String::new();
        fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> = Vec::new();
        fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str);
        fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint = -1;
        fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint = -1;
        fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) = (0, 0, String::new());
        fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) = (0, 0, String::new());
        fn uniform1f(&self, location: GLint, v0: GLfloat);
        fn uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat);
        fn uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn uniform4f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn uniform1i(&self, location: GLint, v0: GLint);
        fn uniform2i(&self, location: GLint, v0: GLint, v1: GLint);
        fn uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn uniform1fv(&self, location: GLint, values: &[GLfloat]);
        fn uniform2fv(&self, location: GLint, values: &[GLfloat]);
        fn uniform3fv(&self, location: GLint, values: &[GLfloat]);
        fn uniform4fv(&self, location: GLint, values: &[GLfloat]);
        fn uniform1iv(&self, location: GLint, values: &[GLint]);
        fn uniform2iv(&self, location: GLint, values: &[GLint]);
        fn uniform3iv(&self, location: GLint, values: &[GLint]);
        fn uniform4iv(&self, location: GLint, values: &[GLint]);
        fn uniform_matrix2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]);
        fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]);
        fn vertex_attrib1f(&self, index: GLuint, x: GLfloat);
        fn vertex_attrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat);
        fn vertex_attrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
        fn vertex_attrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn vertex_attrib1fv(&self, index: GLuint, v: &[GLfloat; 1]);
        fn vertex_attrib2fv(&self, index: GLuint, v: &[GLfloat; 2]);
        fn vertex_attrib3fv(&self, index: GLuint, v: &[GLfloat; 3]);
        fn vertex_attrib4fv(&self, index: GLuint, v: &[GLfloat; 4]);
        fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]);
        fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]);
        fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);
        fn enable_client_state(&self, array: GLenum);
        fn disable_client_state(&self, array: GLenum);
        fn client_active_texture(&self, texture: GLenum);
        fn matrix_mode(&self, mode: GLenum);
        fn load_identity(&self);
        fn load_matrixf(&self, m: &[GLfloat; 16]);
        fn mult_matrixf(&self, m: &[GLfloat; 16]);
        fn push_matrix(&self);
        fn pop_matrix(&self);
        fn orthof(&self, left: GLfloat, right: GLfloat, bottom: GLfloat, top: GLfloat, near: GLfloat, far: GLfloat);
        fn frustumf(&self, left: GLfloat, right: GLfloat, bottom: GLfloat, top: GLfloat, near: GLfloat, far: GLfloat);
        fn rotatef(&self, angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
        fn scalef(&self, x: GLfloat, y: GLfloat, z: GLfloat);
        fn translatef(&self, x: GLfloat, y: GLfloat, z: GLfloat);
        fn color4f(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn color4ub(&self, red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
        fn normal3f(&self, nx: GLfloat, ny: GLfloat, nz: GLfloat);
        fn multi_tex_coord4f(&self, target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
        fn shade_model(&self, mode: GLenum);
        fn alpha_func(&self, func: GLenum, ref_: GLfloat);
        fn tex_envi(&self, target: GLenum, pname: GLenum, param: GLint);
        fn tex_envf(&self, target: GLenum, pname: GLenum, param: GLfloat);
        fn tex_envfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]);
        fn point_size(&self, size: GLfloat);
        fn read_buffer(&self, src: GLenum);
        fn draw_buffers(&self, bufs: &[GLenum]);
        fn delete_vertex_arrays(&self, arrays: &[GLuint]);
        fn is_vertex_array(&self, array: GLuint) -> bool = false;
        fn draw_arrays_instanced(&self, mode: GLenum, first: GLint, count: GLsizei, instance_count: GLsizei);
        fn vertex_attrib_i4i(&self, index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
        fn vertex_attrib_i4ui(&self, index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
        fn uniform1ui(&self, location: GLint, v0: GLuint);
        fn uniform2ui(&self, location: GLint, v0: GLuint, v1: GLuint);
        fn uniform3ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn uniform4ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn uniform1uiv(&self, location: GLint, values: &[GLuint]);
        fn uniform2uiv(&self, location: GLint, values: &[GLuint]);
        fn uniform3uiv(&self, location: GLint, values: &[GLuint]);
        fn uniform4uiv(&self, location: GLint, values: &[GLuint]);
        fn uniform_matrix2x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix3x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix2x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix4x2fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix3x4fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn uniform_matrix4x3fv(&self, location: GLint, transpose: bool, values: &[GLfloat]);
        fn tex_image_3d(&self, target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: Option<&[u8]>);
        fn tex_sub_image_3d(&self, target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: &[u8]);
        fn tex_storage_2d(&self, target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
        fn tex_storage_3d(&self, target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn blit_framebuffer(&self, src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
        fn renderbuffer_storage_multisample(&self, target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
        fn framebuffer_texture_layer(&self, target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        fn unmap_buffer(&self, target: GLenum) -> bool = true;
        fn flush_mapped_buffer_range(&self, target: GLenum, offset: GLintptr, length: GLsizeiptr);
        fn copy_buffer_sub_data(&self, read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
        fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint);
        fn bind_buffer_range(&self, target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint = gl::INVALID_INDEX;
        fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint);
        fn gen_queries(&self, ids: &mut [GLuint]);
        fn delete_queries(&self, ids: &[GLuint]);
        fn begin_query(&self, target: GLenum, id: GLuint);
        fn end_query(&self, target: GLenum);
        fn get_query_objectuiv(&self, id: GLuint, pname: GLenum, params: &mut [GLuint]);
        fn clear_bufferfv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]);
        fn clear_bufferiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLint]);
        fn clear_bufferuiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLuint]);
        fn clear_bufferfi(&self, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<String> = None;
        fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint = -1;
        fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]);
    }
}

impl GlExtended for FakeGl {
    recorded! {
        fn gen_samplers(&self, samplers: &mut [GLuint]);
        fn delete_samplers(&self, samplers: &[GLuint]);
        fn is_sampler(&self, sampler: GLuint) -> bool = false;
        fn bind_sampler(&self, unit: GLuint, sampler: GLuint);
        fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint);
        fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat);
        fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &[GLint]);
        fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &[GLfloat]);
        fn get_sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLint]);
        fn get_sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLfloat]);
        fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync = std::ptr::null();
        fn is_sync(&self, sync: GLsync) -> bool = false;
        fn delete_sync(&self, sync: GLsync);
        fn client_wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum = gl::ALREADY_SIGNALED;
        fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64);
        fn get_synciv(&self, sync: GLsync, pname: GLenum, values: &mut [GLint]) -> GLsizei = 0;
        fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]);
        fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]);
        fn get_buffer_parameteri64v(&self, target: GLenum, pname: GLenum, params: &mut [GLint64]);
        fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint);
    }
}

impl GlExtended2 for FakeGl {
    recorded! {
        fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]);
        fn invalidate_sub_framebuffer(&self, target: GLenum, attachments: &[GLenum], x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
}

/// Driver context resolving a configurable subset of tiers to one `FakeGl`.
#[derive(Debug, Clone)]
pub struct FakeContext {
    pub gl: Arc<FakeGl>,
    pub base: bool,
    pub extended: bool,
    pub extended2: bool,
}

impl DriverContext for FakeContext {
    fn resolve_extended2(&self) -> TierResolution<Arc<dyn GlExtended2>> {
        self.extended2
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlExtended2>)
            .into()
    }

    fn resolve_extended(&self) -> TierResolution<Arc<dyn GlExtended>> {
        self.extended
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlExtended>)
            .into()
    }

    fn resolve_base(&self) -> TierResolution<Arc<dyn GlBase>> {
        self.base
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlBase>)
            .into()
    }
}

#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub id: SurfaceId,
    pub context: FakeContext,
}

impl FakeSurface {
    fn with_tiers(gl: &Arc<FakeGl>, base: bool, extended: bool, extended2: bool) -> Self {
        Self {
            id: SurfaceId::next(),
            context: FakeContext {
                gl: Arc::clone(gl),
                base,
                extended,
                extended2,
            },
        }
    }

    /// Compatibility profile: base and extended, client arrays allowed.
    pub fn compat(gl: &Arc<FakeGl>) -> Self {
        Self::with_tiers(gl, true, true, false)
    }

    /// Core profile: only extended2 resolves natively.
    pub fn core(gl: &Arc<FakeGl>) -> Self {
        Self::with_tiers(gl, false, false, true)
    }

    pub fn base_only(gl: &Arc<FakeGl>) -> Self {
        Self::with_tiers(gl, true, false, false)
    }

    pub fn unsupported(gl: &Arc<FakeGl>) -> Self {
        Self::with_tiers(gl, false, false, false)
    }
}

impl RenderSurface for FakeSurface {
    fn surface_id(&self) -> SurfaceId {
        self.id
    }

    fn driver_context(&self) -> &dyn DriverContext {
        &self.context
    }
}
