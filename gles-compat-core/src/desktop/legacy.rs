//! Fixed-function entry points.
//!
//! The `gl` bindings are generated for the core profile and carry none of
//! these, so they are looked up by hand when the context is loaded. A missing
//! symbol leaves its slot empty and calls through it do nothing.

use std::ffi::c_void;

use gl::types::{GLenum, GLfloat, GLint, GLsizei, GLubyte};

/// `wglGetProcAddress` reports some missing symbols with these sentinels
/// instead of null.
fn is_missing(ptr: *const c_void) -> bool {
    let addr = ptr as isize;
    ptr.is_null() || (1..=3).contains(&addr) || addr == -1
}

macro_rules! legacy_fns {
    ($($field:ident = $symbol:literal fn($($arg:ty),*);)*) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub(crate) struct LegacyFns {
            $(pub(crate) $field: Option<unsafe extern "system" fn($($arg),*)>,)*
        }

        impl LegacyFns {
            pub(crate) fn load_with<F>(loader: &mut F) -> Self
            where
                F: FnMut(&str) -> *const c_void,
            {
                Self {
                    $($field: {
                        let ptr = loader($symbol);
                        if is_missing(ptr) {
                            None
                        } else {
                            // SAFETY: the driver exports `$symbol` with this C signature.
                            Some(unsafe {
                                std::mem::transmute::<
                                    *const c_void,
                                    unsafe extern "system" fn($($arg),*),
                                >(ptr)
                            })
                        }
                    },)*
                }
            }

            /// Symbols the loader could not resolve.
            pub(crate) fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(if self.$field.is_none() {
                    missing.push($symbol);
                })*
                missing
            }
        }
    };
}

legacy_fns! {
    color_pointer = "glColorPointer" fn(GLint, GLenum, GLsizei, *const c_void);
    normal_pointer = "glNormalPointer" fn(GLenum, GLsizei, *const c_void);
    tex_coord_pointer = "glTexCoordPointer" fn(GLint, GLenum, GLsizei, *const c_void);
    vertex_pointer = "glVertexPointer" fn(GLint, GLenum, GLsizei, *const c_void);
    enable_client_state = "glEnableClientState" fn(GLenum);
    disable_client_state = "glDisableClientState" fn(GLenum);
    client_active_texture = "glClientActiveTexture" fn(GLenum);
    matrix_mode = "glMatrixMode" fn(GLenum);
    load_identity = "glLoadIdentity" fn();
    load_matrixf = "glLoadMatrixf" fn(*const GLfloat);
    mult_matrixf = "glMultMatrixf" fn(*const GLfloat);
    push_matrix = "glPushMatrix" fn();
    pop_matrix = "glPopMatrix" fn();
    ortho = "glOrtho" fn(f64, f64, f64, f64, f64, f64);
    frustum = "glFrustum" fn(f64, f64, f64, f64, f64, f64);
    rotatef = "glRotatef" fn(GLfloat, GLfloat, GLfloat, GLfloat);
    scalef = "glScalef" fn(GLfloat, GLfloat, GLfloat);
    translatef = "glTranslatef" fn(GLfloat, GLfloat, GLfloat);
    color4f = "glColor4f" fn(GLfloat, GLfloat, GLfloat, GLfloat);
    color4ub = "glColor4ub" fn(GLubyte, GLubyte, GLubyte, GLubyte);
    normal3f = "glNormal3f" fn(GLfloat, GLfloat, GLfloat);
    multi_tex_coord4f = "glMultiTexCoord4f" fn(GLenum, GLfloat, GLfloat, GLfloat, GLfloat);
    shade_model = "glShadeModel" fn(GLenum);
    alpha_func = "glAlphaFunc" fn(GLenum, GLfloat);
    tex_envi = "glTexEnvi" fn(GLenum, GLenum, GLint);
    tex_envf = "glTexEnvf" fn(GLenum, GLenum, GLfloat);
    tex_envfv = "glTexEnvfv" fn(GLenum, GLenum, *const GLfloat);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_symbols_stay_empty() {
        let mut requested = Vec::new();
        let fns = LegacyFns::load_with(&mut |name: &str| {
            requested.push(name.to_string());
            std::ptr::null()
        });

        assert!(fns.matrix_mode.is_none());
        assert!(requested.iter().any(|name| name == "glColorPointer"));
        assert_eq!(fns.missing().len(), requested.len());
    }

    #[test]
    fn wgl_sentinels_count_as_missing() {
        for addr in [1isize, 2, 3, -1] {
            assert!(is_missing(addr as *const c_void));
        }
        assert!(!is_missing(0x1000 as *const c_void));
    }
}
