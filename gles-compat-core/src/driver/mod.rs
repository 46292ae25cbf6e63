//! Driver seam: what the shim needs from a resolved graphics context.
//!
//! The tiers are supersets of one another, expressed as supertraits, so a
//! handle for a higher tier upcasts to every lower one. Entry points keep the
//! mobile API's argument order. Slices replace (count, pointer) pairs, and
//! raw pointers appear only where the driver keeps the address past the call
//! (client arrays) or where the address may be a buffer-object offset.

pub mod consts;
mod tier;

use std::ffi::c_void;

use gl::types::{
    GLbitfield, GLboolean, GLenum, GLfloat, GLint, GLint64, GLintptr, GLsizei, GLsizeiptr,
    GLsync, GLubyte, GLuint, GLuint64,
};

pub use tier::{
    CapabilityTier, DriverContext, RenderSurface, ResolvedTiers, SurfaceId, TierResolution,
};

/// ES 1.x and ES 2.0 entry points, the fixed-function pipeline, and the ES 3.0
/// entry points every GL 3.x driver provides.
pub trait GlBase: Send + Sync {
    // State and queries
    fn get_error(&self) -> GLenum;
    /// `None` when the driver returns a null string.
    fn get_string(&self, name: GLenum) -> Option<String>;
    fn get_integerv(&self, pname: GLenum, params: &mut [GLint]);
    fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]);
    fn get_booleanv(&self, pname: GLenum, params: &mut [GLboolean]);
    fn enable(&self, cap: GLenum);
    fn disable(&self, cap: GLenum);
    fn is_enabled(&self, cap: GLenum) -> bool;
    fn hint(&self, target: GLenum, mode: GLenum);
    fn finish(&self);
    fn flush(&self);

    // Rasterization and per-fragment state
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
    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );
    fn stencil_func(&self, func: GLenum, ref_: GLint, mask: GLuint);
    fn stencil_func_separate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
    fn stencil_mask(&self, mask: GLuint);
    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint);
    fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    fn pixel_storei(&self, pname: GLenum, param: GLint);
    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    );

    // Textures
    fn active_texture(&self, texture: GLenum);
    fn bind_texture(&self, target: GLenum, texture: GLuint);
    fn gen_textures(&self, textures: &mut [GLuint]);
    fn delete_textures(&self, textures: &[GLuint]);
    fn is_texture(&self, texture: GLuint) -> bool;
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
    );
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
    );
    fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    );
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
    );
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
    );
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
    );
    fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint);
    fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat);
    fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]);
    fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]);
    fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);
    fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]);
    fn generate_mipmap(&self, target: GLenum);

    // Buffer objects
    fn bind_buffer(&self, target: GLenum, buffer: GLuint);
    /// Fills `buffers` with fresh names. A name of zero means generation failed.
    fn gen_buffers(&self, buffers: &mut [GLuint]);
    fn delete_buffers(&self, buffers: &[GLuint]);
    fn is_buffer(&self, buffer: GLuint) -> bool;
    /// `data`, when present, holds at least `size` bytes.
    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum);
    fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]);
    fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);

    // Framebuffers and renderbuffers
    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint);
    fn gen_framebuffers(&self, framebuffers: &mut [GLuint]);
    fn delete_framebuffers(&self, framebuffers: &[GLuint]);
    fn is_framebuffer(&self, framebuffer: GLuint) -> bool;
    fn check_framebuffer_status(&self, target: GLenum) -> GLenum;
    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    );
    fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    );
    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint);
    fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]);
    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]);
    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool;
    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);

    // Shaders and programs
    fn create_shader(&self, type_: GLenum) -> GLuint;
    fn delete_shader(&self, shader: GLuint);
    fn is_shader(&self, shader: GLuint) -> bool;
    fn shader_source(&self, shader: GLuint, source: &str);
    fn compile_shader(&self, shader: GLuint);
    fn get_shaderiv(&self, shader: GLuint, pname: GLenum, params: &mut [GLint]);
    fn get_shader_info_log(&self, shader: GLuint) -> String;
    fn get_shader_source(&self, shader: GLuint) -> String;
    /// `(range_min, range_max, precision)`.
    fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint);
    fn release_shader_compiler(&self);
    fn create_program(&self) -> GLuint;
    fn delete_program(&self, program: GLuint);
    fn is_program(&self, program: GLuint) -> bool;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn use_program(&self, program: GLuint);
    fn validate_program(&self, program: GLuint);
    fn get_programiv(&self, program: GLuint, pname: GLenum, params: &mut [GLint]);
    fn get_program_info_log(&self, program: GLuint) -> String;
    fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint>;
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str);
    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint;
    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint;
    /// `(size, type, name)`.
    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String);
    /// `(size, type, name)`.
    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String);

    // Uniforms. Vector variants derive the element count from the slice length.
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

    // Vertex attributes
    fn enable_vertex_attrib_array(&self, index: GLuint);
    fn disable_vertex_attrib_array(&self, index: GLuint);
    /// `pointer` is either a client address or, with a buffer bound to
    /// `ARRAY_BUFFER`, a byte offset into that buffer.
    ///
    /// # Safety
    /// A client address must stay valid until the array is respecified or the
    /// last draw that reads it has returned.
    unsafe fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: bool,
        stride: GLsizei,
        pointer: *const c_void,
    );
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

    // Drawing
    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);
    /// # Safety
    /// `indices` is a client address valid for `count` indices, or an offset
    /// into the bound `ELEMENT_ARRAY_BUFFER`.
    unsafe fn draw_elements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    );

    // Fixed-function pipeline (ES 1.x)
    /// # Safety
    /// Same contract as [`GlBase::vertex_attrib_pointer`].
    unsafe fn color_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    /// # Safety
    /// Same contract as [`GlBase::vertex_attrib_pointer`].
    unsafe fn normal_pointer(&self, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    /// # Safety
    /// Same contract as [`GlBase::vertex_attrib_pointer`].
    unsafe fn tex_coord_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    /// # Safety
    /// Same contract as [`GlBase::vertex_attrib_pointer`].
    unsafe fn vertex_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    fn enable_client_state(&self, array: GLenum);
    fn disable_client_state(&self, array: GLenum);
    fn client_active_texture(&self, texture: GLenum);
    fn matrix_mode(&self, mode: GLenum);
    fn load_identity(&self);
    fn load_matrixf(&self, m: &[GLfloat; 16]);
    fn mult_matrixf(&self, m: &[GLfloat; 16]);
    fn push_matrix(&self);
    fn pop_matrix(&self);
    fn orthof(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    );
    fn frustumf(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    );
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

    // ES 3.0 entry points available on every GL 3.x driver
    /// Whether the calls below are backed. A GL 2.x compatibility context
    /// resolves this tier without them.
    fn supports_es3(&self) -> bool;
    fn read_buffer(&self, src: GLenum);
    fn draw_buffers(&self, bufs: &[GLenum]);
    fn bind_vertex_array(&self, array: GLuint);
    fn gen_vertex_arrays(&self, arrays: &mut [GLuint]);
    fn delete_vertex_arrays(&self, arrays: &[GLuint]);
    fn is_vertex_array(&self, array: GLuint) -> bool;
    fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instance_count: GLsizei,
    );
    /// # Safety
    /// Same contract as [`GlBase::draw_elements`].
    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instance_count: GLsizei,
    );
    /// # Safety
    /// Same contract as [`GlBase::draw_elements`].
    unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    );
    /// # Safety
    /// Same contract as [`GlBase::vertex_attrib_pointer`].
    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
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
    );
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
    );
    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );
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
    );
    fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    );
    /// # Safety
    /// The returned mapping is valid until `unmap_buffer` on the same target.
    unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void;
    fn unmap_buffer(&self, target: GLenum) -> bool;
    fn flush_mapped_buffer_range(&self, target: GLenum, offset: GLintptr, length: GLsizeiptr);
    fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    );
    fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint);
    fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    );
    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint;
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
    fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<String>;
    fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint;
    fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]);
}

/// ES 3.0 entry points that need a GL 3.3 class driver.
pub trait GlExtended: GlBase {
    fn gen_samplers(&self, samplers: &mut [GLuint]);
    fn delete_samplers(&self, samplers: &[GLuint]);
    fn is_sampler(&self, sampler: GLuint) -> bool;
    fn bind_sampler(&self, unit: GLuint, sampler: GLuint);
    fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint);
    fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat);
    fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &[GLint]);
    fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &[GLfloat]);
    fn get_sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLint]);
    fn get_sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLfloat]);
    fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync;
    fn is_sync(&self, sync: GLsync) -> bool;
    fn delete_sync(&self, sync: GLsync);
    fn client_wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64);
    fn get_synciv(&self, sync: GLsync, pname: GLenum, values: &mut [GLint]) -> GLsizei;
    fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]);
    fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]);
    fn get_buffer_parameteri64v(&self, target: GLenum, pname: GLenum, params: &mut [GLint64]);
    fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint);
}

/// Framebuffer invalidation (GL 4.3 or `ARB_invalidate_subdata`).
///
/// Resolving this tier means the context is a core profile, where
/// client-memory vertex and index arrays are rejected by the driver.
pub trait GlExtended2: GlExtended {
    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]);
    fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
}
