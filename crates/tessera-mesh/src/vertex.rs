//! Interleaved vertex format shared by every generated mesh.
//!
//! Layout (52 bytes total):
//!
//! | Offset | Size | Field      | Format      |
//! |--------|------|------------|-------------|
//! | 0      | 12   | `position` | `f32 x 3`   |
//! | 12     | 12   | `normal`   | `f32 x 3`   |
//! | 24     | 8    | `uv`       | `f32 x 2`   |
//! | 32     | 16   | `tangent`  | `f32 x 4`   |
//! | 48     | 4    | `color`    | `u8 x 4`    |

use glam::{Vec2, Vec3, Vec4};

/// A single mesh vertex, laid out for direct GPU upload.
///
/// Channels that a mesh does not use are zeroed; [`VertexAttributes`] records
/// which ones carry data.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
    /// Tangent in `xyz`, bitangent sign in `w`.
    pub tangent: [f32; 4],
    /// Auxiliary RGBA8 channel (cube spheres store the lattice coordinate here).
    pub color: [u8; 4],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 52]);

impl MeshVertex {
    /// A vertex with only a position set.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            ..Self::default()
        }
    }

    /// Set the normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal.to_array();
        self
    }

    /// Set the texture coordinates.
    #[must_use]
    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = uv.to_array();
        self
    }

    /// Set the tangent.
    #[must_use]
    pub fn with_tangent(mut self, tangent: Vec4) -> Self {
        self.tangent = tangent.to_array();
        self
    }

    /// Set the auxiliary colour.
    #[must_use]
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a vector.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Texture coordinates as a vector.
    #[must_use]
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    /// Tangent as a vector.
    #[must_use]
    pub fn tangent(&self) -> Vec4 {
        Vec4::from_array(self.tangent)
    }
}

/// Which optional vertex channels a mesh populates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexAttributes {
    /// `uv` carries texture coordinates.
    pub uv: bool,
    /// `tangent` carries a tangent frame.
    pub tangent: bool,
    /// `color` carries auxiliary per-vertex data.
    pub color: bool,
}

impl VertexAttributes {
    /// Position and normal only.
    pub const POSITION_NORMAL: Self = Self {
        uv: false,
        tangent: false,
        color: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_52_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 52);
    }

    #[test]
    fn test_builder_methods_set_channels() {
        let v = MeshVertex::at(Vec3::new(1.0, 2.0, 3.0))
            .with_normal(Vec3::Z)
            .with_uv(Vec2::new(0.25, 0.75))
            .with_tangent(Vec4::new(1.0, 0.0, 0.0, -1.0))
            .with_color([1, 2, 3, 0]);
        assert_eq!(v.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.normal(), Vec3::Z);
        assert_eq!(v.uv(), Vec2::new(0.25, 0.75));
        assert_eq!(v.tangent(), Vec4::new(1.0, 0.0, 0.0, -1.0));
        assert_eq!(v.color, [1, 2, 3, 0]);
    }

    #[test]
    fn test_cast_to_bytes() {
        let verts = [MeshVertex::at(Vec3::ONE); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 3 * 52);
    }
}
