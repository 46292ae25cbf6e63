//! Desktop OpenGL backend over the `gl` crate.
//!
//! ```no_run
//! # fn host(get_proc_address: impl FnMut(&str) -> *const std::ffi::c_void) -> anyhow::Result<()> {
//! use gles_compat_core::desktop::{DesktopContext, DesktopSurface};
//! use gles_compat_core::registry::ContextRegistry;
//!
//! let context = DesktopContext::load_with(get_proc_address)?;
//! let surface = DesktopSurface::new(context);
//! let registry = ContextRegistry::default();
//! registry.activate(&surface)?;
//! # Ok(())
//! # }
//! ```

mod forward;
mod legacy;

use std::ffi::c_void;
use std::sync::Arc;

use anyhow::{Context as _, bail};
use gl::types::GLuint;

use crate::driver::{
    DriverContext, GlBase, GlExtended, GlExtended2, RenderSurface, SurfaceId, TierResolution,
};

pub use forward::DesktopGl;
use legacy::LegacyFns;

/// Parses the leading `major.minor` of a desktop `GL_VERSION` string.
///
/// ES strings (`"OpenGL ES 3.2 ..."`) are rejected.
pub fn parse_gl_version(version: &str) -> Option<(u32, u32)> {
    let version = version.trim();
    if version.starts_with("OpenGL ES") {
        return None;
    }
    let token = version.split_whitespace().next()?;
    let mut parts = token.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor_digits: String = parts.next()?.chars().take_while(char::is_ascii_digit).collect();
    let minor = minor_digits.parse().ok()?;
    Some((major, minor))
}

/// Which capability tiers a desktop context can back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierSupport {
    pub base: bool,
    pub extended: bool,
    pub extended2: bool,
}

impl TierSupport {
    pub fn from_info(major: u32, minor: u32, core_profile: bool) -> Self {
        let at_least = |want_major, want_minor| (major, minor) >= (want_major, want_minor);
        Self {
            base: !core_profile && at_least(2, 0),
            extended: !core_profile && at_least(3, 3),
            extended2: core_profile && at_least(3, 3),
        }
    }
}

/// What the driver reported when the context was loaded.
#[derive(Debug, Clone)]
pub struct DriverInfo {
    pub version: (u32, u32),
    pub core_profile: bool,
    pub vendor: String,
    pub renderer: String,
    pub shading_language: String,
}

/// A loaded desktop context. Every tier it supports resolves to the same
/// [`DesktopGl`].
#[derive(Debug)]
pub struct DesktopContext {
    gl: Arc<DesktopGl>,
    info: DriverInfo,
    support: TierSupport,
    default_vao: Option<GLuint>,
}

impl DesktopContext {
    /// Loads entry points through `loader` (typically the windowing
    /// library's `get_proc_address`) for the context current on this thread.
    pub fn load_with<F>(mut loader: F) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(|name| loader(name));
        if !gl::GetString::is_loaded() || !gl::GetIntegerv::is_loaded() {
            bail!("loader did not resolve glGetString/glGetIntegerv; is a context current?");
        }

        let legacy = LegacyFns::load_with(&mut loader);
        let mut gl = DesktopGl { legacy, es3: false };

        let version_string = gl
            .get_string(gl::VERSION)
            .context("driver returned no GL_VERSION")?;
        let version = parse_gl_version(&version_string)
            .with_context(|| format!("unrecognized GL_VERSION {version_string:?}"))?;

        // The profile mask only exists from 3.2 on; older contexts are all
        // compatibility contexts.
        let core_profile = version >= (3, 2) && {
            let mut mask = [0];
            gl.get_integerv(gl::CONTEXT_PROFILE_MASK, &mut mask);
            mask[0] as u32 & gl::CONTEXT_CORE_PROFILE_BIT != 0
        };
        drain_errors(&gl, "probing the context profile");
        gl.es3 = version >= (3, 0);
        let gl = Arc::new(gl);

        // Core profiles reject attribute pointers while no vertex array
        // object is bound, and ES has no such rule.
        let default_vao = if core_profile {
            bind_default_vertex_array(gl.as_ref())
        } else {
            None
        };

        let info = DriverInfo {
            version,
            core_profile,
            vendor: gl.get_string(gl::VENDOR).unwrap_or_default(),
            renderer: gl.get_string(gl::RENDERER).unwrap_or_default(),
            shading_language: gl.get_string(gl::SHADING_LANGUAGE_VERSION).unwrap_or_default(),
        };
        let support = TierSupport::from_info(version.0, version.1, core_profile);

        log::info!(
            "GL {}.{} {} on {} ({}), GLSL {}",
            version.0,
            version.1,
            if core_profile { "core" } else { "compatibility" },
            info.renderer,
            info.vendor,
            info.shading_language
        );
        log::debug!("tier support: {support:?}");
        if !core_profile {
            let missing = gl.legacy.missing();
            if !missing.is_empty() {
                log::warn!("fixed-function entry points unavailable: {}", missing.join(", "));
            }
        }

        Ok(Self {
            gl,
            info,
            support,
            default_vao,
        })
    }

    pub fn info(&self) -> &DriverInfo {
        &self.info
    }

    pub fn support(&self) -> TierSupport {
        self.support
    }

    pub fn gl(&self) -> &Arc<DesktopGl> {
        &self.gl
    }

    /// Vertex array object bound at load time on core profiles.
    pub fn default_vertex_array(&self) -> Option<GLuint> {
        self.default_vao
    }
}

impl DriverContext for DesktopContext {
    fn resolve_extended2(&self) -> TierResolution<Arc<dyn GlExtended2>> {
        self.support
            .extended2
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlExtended2>)
            .into()
    }

    fn resolve_extended(&self) -> TierResolution<Arc<dyn GlExtended>> {
        self.support
            .extended
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlExtended>)
            .into()
    }

    fn resolve_base(&self) -> TierResolution<Arc<dyn GlBase>> {
        self.support
            .base
            .then(|| Arc::clone(&self.gl) as Arc<dyn GlBase>)
            .into()
    }
}

/// A host surface bound to a loaded desktop context.
#[derive(Debug)]
pub struct DesktopSurface {
    id: SurfaceId,
    context: DesktopContext,
}

impl DesktopSurface {
    pub fn new(context: DesktopContext) -> Self {
        Self {
            id: SurfaceId::next(),
            context,
        }
    }

    pub fn context(&self) -> &DesktopContext {
        &self.context
    }
}

impl RenderSurface for DesktopSurface {
    fn surface_id(&self) -> SurfaceId {
        self.id
    }

    fn driver_context(&self) -> &dyn DriverContext {
        &self.context
    }
}

/// Creates a vertex array object and leaves it bound.
///
/// Returns `None` if the driver hands back no name.
pub fn bind_default_vertex_array(gl: &dyn GlBase) -> Option<GLuint> {
    let mut name = [0];
    gl.gen_vertex_arrays(&mut name);
    if name[0] == 0 {
        log::warn!("driver returned no vertex array object; attribute pointers will fail");
        return None;
    }
    gl.bind_vertex_array(name[0]);
    drain_errors(gl, "binding the default vertex array");
    log::debug!("bound default vertex array {}", name[0]);
    Some(name[0])
}

/// Clears the driver's error queue, logging what was in it.
pub fn drain_errors(gl: &dyn GlBase, label: &str) -> usize {
    let mut drained = 0;
    loop {
        let err = gl.get_error();
        if err == gl::NO_ERROR {
            break;
        }
        log::warn!("GL error after {label}: 0x{err:04X}");
        drained += 1;
        // A lost context reports forever.
        if drained >= 32 {
            break;
        }
    }
    drained
}
