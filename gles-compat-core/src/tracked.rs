//! Client-array state of the fixed-function pipeline.
//!
//! ES 1.x validates array arguments before touching state. Invalid calls are
//! not forwarded and do not replace the current array.

use ahash::AHashMap;
use gl::types::{GLenum, GLint, GLsizei};

use crate::client::ClientBuffer;

/// The four legacy client arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientArray {
    Color,
    Normal,
    TexCoord,
    Vertex,
}

impl ClientArray {
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "glColorPointer",
            Self::Normal => "glNormalPointer",
            Self::TexCoord => "glTexCoordPointer",
            Self::Vertex => "glVertexPointer",
        }
    }

    /// Checks `(size, type, stride)` the way an ES 1.x driver does.
    ///
    /// `size` is ignored for normals, which always have three components.
    /// Returns the ES error code on rejection.
    pub fn validate(self, size: GLint, type_: GLenum, stride: GLsizei) -> Result<(), GLenum> {
        let size_ok = match self {
            Self::Color => size == 4,
            Self::Normal => true,
            Self::TexCoord | Self::Vertex => (2..=4).contains(&size),
        };
        if !size_ok || stride < 0 {
            return Err(gl::INVALID_VALUE);
        }

        let type_ok = match self {
            Self::Color => matches!(type_, gl::UNSIGNED_BYTE | gl::FIXED | gl::FLOAT),
            Self::Normal | Self::TexCoord | Self::Vertex => {
                matches!(type_, gl::BYTE | gl::SHORT | gl::FIXED | gl::FLOAT)
            }
        };
        if !type_ok {
            return Err(gl::INVALID_ENUM);
        }

        Ok(())
    }
}

/// Texture units a client texture-coordinate array can be attached to.
pub const MAX_CLIENT_TEXTURE_UNITS: GLenum = 32;

pub fn is_client_texture_unit(unit: GLenum) -> bool {
    (gl::TEXTURE0..gl::TEXTURE0 + MAX_CLIENT_TEXTURE_UNITS).contains(&unit)
}

/// Arrays most recently accepted for each legacy pointer.
///
/// Texture coordinates are kept per client texture unit and follow
/// `glClientActiveTexture`. Holding the buffer keeps the forwarded address
/// alive.
#[derive(Debug, Clone)]
pub struct TrackedPointers {
    color: Option<ClientBuffer>,
    normal: Option<ClientBuffer>,
    vertex: Option<ClientBuffer>,
    tex_coords: AHashMap<GLenum, ClientBuffer>,
    active_unit: GLenum,
}

impl Default for TrackedPointers {
    fn default() -> Self {
        Self {
            color: None,
            normal: None,
            vertex: None,
            tex_coords: AHashMap::new(),
            active_unit: gl::TEXTURE0,
        }
    }
}

impl TrackedPointers {
    /// For [`ClientArray::TexCoord`], the array of the active client unit.
    pub fn get(&self, array: ClientArray) -> Option<&ClientBuffer> {
        match array {
            ClientArray::Color => self.color.as_ref(),
            ClientArray::Normal => self.normal.as_ref(),
            ClientArray::TexCoord => self.tex_coords.get(&self.active_unit),
            ClientArray::Vertex => self.vertex.as_ref(),
        }
    }

    pub fn set(&mut self, array: ClientArray, data: ClientBuffer) {
        match array {
            ClientArray::Color => self.color = Some(data),
            ClientArray::Normal => self.normal = Some(data),
            ClientArray::TexCoord => {
                self.tex_coords.insert(self.active_unit, data);
            }
            ClientArray::Vertex => self.vertex = Some(data),
        }
    }

    /// Forgets the client array, e.g. once the pointer names a buffer offset.
    pub fn clear(&mut self, array: ClientArray) -> Option<ClientBuffer> {
        match array {
            ClientArray::Color => self.color.take(),
            ClientArray::Normal => self.normal.take(),
            ClientArray::TexCoord => self.tex_coords.remove(&self.active_unit),
            ClientArray::Vertex => self.vertex.take(),
        }
    }

    pub fn tex_coord(&self, unit: GLenum) -> Option<&ClientBuffer> {
        self.tex_coords.get(&unit)
    }

    pub fn active_unit(&self) -> GLenum {
        self.active_unit
    }

    /// Callers check the unit with [`is_client_texture_unit`] first.
    pub fn set_active_unit(&mut self, unit: GLenum) {
        self.active_unit = unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_requires_four_components() {
        assert_eq!(ClientArray::Color.validate(4, gl::UNSIGNED_BYTE, 0), Ok(()));
        assert_eq!(
            ClientArray::Color.validate(3, gl::FLOAT, 0),
            Err(gl::INVALID_VALUE)
        );
    }

    #[test]
    fn color_rejects_signed_component_types() {
        assert_eq!(
            ClientArray::Color.validate(4, gl::SHORT, 0),
            Err(gl::INVALID_ENUM)
        );
        assert_eq!(
            ClientArray::Color.validate(4, gl::BYTE, 0),
            Err(gl::INVALID_ENUM)
        );
    }

    #[test]
    fn normal_ignores_size_but_checks_type() {
        assert_eq!(ClientArray::Normal.validate(0, gl::BYTE, 12), Ok(()));
        assert_eq!(
            ClientArray::Normal.validate(3, gl::UNSIGNED_BYTE, 0),
            Err(gl::INVALID_ENUM)
        );
    }

    #[test]
    fn vertex_and_tex_coord_accept_two_to_four_components() {
        for array in [ClientArray::Vertex, ClientArray::TexCoord] {
            assert_eq!(array.validate(1, gl::FLOAT, 0), Err(gl::INVALID_VALUE));
            assert_eq!(array.validate(2, gl::FIXED, 0), Ok(()));
            assert_eq!(array.validate(4, gl::SHORT, 8), Ok(()));
            assert_eq!(array.validate(5, gl::FLOAT, 0), Err(gl::INVALID_VALUE));
            assert_eq!(array.validate(3, gl::UNSIGNED_BYTE, 0), Err(gl::INVALID_ENUM));
        }
    }

    #[test]
    fn negative_stride_is_an_invalid_value() {
        assert_eq!(
            ClientArray::Vertex.validate(3, gl::FLOAT, -4),
            Err(gl::INVALID_VALUE)
        );
    }

    #[test]
    fn set_replaces_only_the_named_array() {
        let mut tracked = TrackedPointers::default();
        let colors = ClientBuffer::from(vec![255u8; 16]);
        tracked.set(ClientArray::Color, colors.clone());

        assert!(tracked.get(ClientArray::Color).is_some_and(|b| b.same_region(&colors)));
        assert!(tracked.get(ClientArray::Vertex).is_none());
    }

    #[test]
    fn tex_coords_follow_the_active_client_unit() {
        let mut tracked = TrackedPointers::default();
        let unit0 = ClientBuffer::from_slice(&[0.0f32; 4]);
        let unit1 = ClientBuffer::from_slice(&[1.0f32; 4]);

        tracked.set(ClientArray::TexCoord, unit0.clone());
        tracked.set_active_unit(gl::TEXTURE1);
        tracked.set(ClientArray::TexCoord, unit1.clone());

        assert!(tracked.get(ClientArray::TexCoord).is_some_and(|b| b.same_region(&unit1)));
        assert!(tracked.tex_coord(gl::TEXTURE0).is_some_and(|b| b.same_region(&unit0)));

        assert!(tracked.clear(ClientArray::TexCoord).is_some());
        assert!(tracked.tex_coord(gl::TEXTURE1).is_none());
        assert!(tracked.tex_coord(gl::TEXTURE0).is_some());
    }

    #[test]
    fn client_texture_units_are_bounded() {
        assert!(is_client_texture_unit(gl::TEXTURE0));
        assert!(is_client_texture_unit(gl::TEXTURE31));
        assert!(!is_client_texture_unit(gl::TEXTURE0 + MAX_CLIENT_TEXTURE_UNITS));
        assert!(!is_client_texture_unit(0));
    }
}
