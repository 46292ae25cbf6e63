use std::ffi::c_void;
use std::ops::Deref;

use gl::types::{GLenum, GLfloat, GLint, GLsizei, GLubyte};

use crate::client::ClientBuffer;
use crate::driver::GlBase;
use crate::registry::ContextRegistry;
use crate::tracked::{ClientArray, is_client_texture_unit};

use super::Gles20;

/// ES 1.x entry points.
///
/// State, texture, buffer and draw calls shared with ES 2.0 are reached
/// through `Deref`.
#[derive(Clone, Copy)]
pub struct Gles10<'r> {
    common: Gles20<'r>,
}

impl<'r> Gles10<'r> {
    pub fn new(registry: &'r ContextRegistry) -> Self {
        Self {
            common: Gles20::new(registry),
        }
    }

    pub fn color_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        self.client_pointer(ClientArray::Color, size, type_, stride, data)
    }

    /// `size` is not an argument of `glNormalPointer`; normals have three components.
    pub fn normal_pointer(&self, type_: GLenum, stride: GLsizei, data: &ClientBuffer) {
        self.client_pointer(ClientArray::Normal, 3, type_, stride, data)
    }

    pub fn tex_coord_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        self.client_pointer(ClientArray::TexCoord, size, type_, stride, data)
    }

    pub fn vertex_pointer(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        self.client_pointer(ClientArray::Vertex, size, type_, stride, data)
    }

    /// Validates, forwards and retains a legacy client array.
    ///
    /// Rejected arrays are neither forwarded nor retained; the ES error is
    /// reported by the next `get_error`.
    fn client_pointer(
        &self,
        array: ClientArray,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        data: &ClientBuffer,
    ) {
        let context = self.context();
        if let Err(error) = array.validate(size, type_, stride) {
            log::debug!(
                "{} rejected: size {size}, type {type_:#06x}, stride {stride}",
                array.name()
            );
            context.raise(error);
            return;
        }

        // SAFETY: the tracked clone keeps the block alive until the array is
        // respecified.
        unsafe {
            forward_pointer(context.base().as_ref(), array, size, type_, stride, data.as_ptr())
        }
        context.client().tracked.set(array, data.clone());
    }

    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    pub unsafe fn color_pointer_offset(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) {
        // SAFETY: upheld by the caller.
        unsafe { self.offset_pointer(ClientArray::Color, size, type_, stride, offset) }
    }

    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    pub unsafe fn normal_pointer_offset(&self, type_: GLenum, stride: GLsizei, offset: usize) {
        // SAFETY: upheld by the caller.
        unsafe { self.offset_pointer(ClientArray::Normal, 3, type_, stride, offset) }
    }

    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    pub unsafe fn tex_coord_pointer_offset(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) {
        // SAFETY: upheld by the caller.
        unsafe { self.offset_pointer(ClientArray::TexCoord, size, type_, stride, offset) }
    }

    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    pub unsafe fn vertex_pointer_offset(
        &self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) {
        // SAFETY: upheld by the caller.
        unsafe { self.offset_pointer(ClientArray::Vertex, size, type_, stride, offset) }
    }

    /// Same validation as the client-memory form; the tracked array is dropped.
    ///
    /// # Safety
    /// A buffer object must be bound to `ARRAY_BUFFER`.
    unsafe fn offset_pointer(
        &self,
        array: ClientArray,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) {
        let context = self.context();
        if let Err(error) = array.validate(size, type_, stride) {
            context.raise(error);
            return;
        }

        let pointer = offset as *const c_void;
        // SAFETY: upheld by the caller.
        unsafe { forward_pointer(context.base().as_ref(), array, size, type_, stride, pointer) }
        context.client().tracked.clear(array);
    }

    pub fn enable_client_state(&self, array: GLenum) {
        self.context().base().enable_client_state(array)
    }

    pub fn disable_client_state(&self, array: GLenum) {
        self.context().base().disable_client_state(array)
    }

    /// Selects the unit later `tex_coord_pointer` calls apply to.
    pub fn client_active_texture(&self, texture: GLenum) {
        let context = self.context();
        if !is_client_texture_unit(texture) {
            log::debug!("glClientActiveTexture rejected: unit {texture:#06x}");
            context.raise(gl::INVALID_ENUM);
            return;
        }
        context.base().client_active_texture(texture);
        context.client().tracked.set_active_unit(texture);
    }

    // Matrix stacks

    pub fn matrix_mode(&self, mode: GLenum) {
        self.context().base().matrix_mode(mode)
    }

    pub fn load_identity(&self) {
        self.context().base().load_identity()
    }

    pub fn load_matrixf(&self, m: &[GLfloat; 16]) {
        self.context().base().load_matrixf(m)
    }

    pub fn mult_matrixf(&self, m: &[GLfloat; 16]) {
        self.context().base().mult_matrixf(m)
    }

    pub fn push_matrix(&self) {
        self.context().base().push_matrix()
    }

    pub fn pop_matrix(&self) {
        self.context().base().pop_matrix()
    }

    pub fn orthof(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    ) {
        self.context().base().orthof(left, right, bottom, top, near, far)
    }

    pub fn frustumf(
        &self,
        left: GLfloat,
        right: GLfloat,
        bottom: GLfloat,
        top: GLfloat,
        near: GLfloat,
        far: GLfloat,
    ) {
        self.context().base().frustumf(left, right, bottom, top, near, far)
    }

    pub fn rotatef(&self, angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.context().base().rotatef(angle, x, y, z)
    }

    pub fn scalef(&self, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.context().base().scalef(x, y, z)
    }

    pub fn translatef(&self, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.context().base().translatef(x, y, z)
    }

    // Current vertex state

    pub fn color4f(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.context().base().color4f(red, green, blue, alpha)
    }

    pub fn color4ub(&self, red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte) {
        self.context().base().color4ub(red, green, blue, alpha)
    }

    pub fn normal3f(&self, nx: GLfloat, ny: GLfloat, nz: GLfloat) {
        self.context().base().normal3f(nx, ny, nz)
    }

    pub fn multi_tex_coord4f(
        &self,
        target: GLenum,
        s: GLfloat,
        t: GLfloat,
        r: GLfloat,
        q: GLfloat,
    ) {
        self.context().base().multi_tex_coord4f(target, s, t, r, q)
    }

    pub fn shade_model(&self, mode: GLenum) {
        self.context().base().shade_model(mode)
    }

    pub fn alpha_func(&self, func: GLenum, ref_: GLfloat) {
        self.context().base().alpha_func(func, ref_)
    }

    pub fn tex_envi(&self, target: GLenum, pname: GLenum, param: GLint) {
        self.context().base().tex_envi(target, pname, param)
    }

    pub fn tex_envf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        self.context().base().tex_envf(target, pname, param)
    }

    pub fn tex_envfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        self.context().base().tex_envfv(target, pname, params)
    }

    pub fn point_size(&self, size: GLfloat) {
        self.context().base().point_size(size)
    }
}

/// # Safety
/// `pointer` must stay valid for as long as the driver may read it.
unsafe fn forward_pointer(
    gl: &dyn GlBase,
    array: ClientArray,
    size: GLint,
    type_: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
) {
    // SAFETY: forwarded from the caller.
    unsafe {
        match array {
            ClientArray::Color => gl.color_pointer(size, type_, stride, pointer),
            ClientArray::Normal => gl.normal_pointer(type_, stride, pointer),
            ClientArray::TexCoord => gl.tex_coord_pointer(size, type_, stride, pointer),
            ClientArray::Vertex => gl.vertex_pointer(size, type_, stride, pointer),
        }
    }
}

impl<'r> Deref for Gles10<'r> {
    type Target = Gles20<'r>;

    fn deref(&self) -> &Self::Target {
        &self.common
    }
}
