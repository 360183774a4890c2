//! The mesh container handed to rendering and collision consumers.

use glam::Vec3;

use crate::error::MeshError;
use crate::vertex::{MeshVertex, VertexAttributes};

/// An independently indexed triangle group sharing the mesh's vertex buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submesh {
    /// Human-readable name, unique within a mesh.
    pub label: String,
    /// Triangle list (3 indices per triangle).
    pub indices: Vec<u32>,
}

impl Submesh {
    /// Number of triangles in this submesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the triangles of this submesh as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// A sphere enclosing every vertex of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    /// Centre of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

/// A generated mesh: one vertex buffer and one or more submeshes.
///
/// Every index in every submesh is below [`Mesh::vertex_count`], and triangles
/// wind counter-clockwise when viewed from the outward side.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Debug name.
    pub name: String,
    /// Interleaved vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Optional channels populated in [`Mesh::vertices`].
    pub attributes: VertexAttributes,
    /// Triangle groups, in material slot order.
    pub submeshes: Vec<Submesh>,
}

impl Mesh {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of submeshes.
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Returns the total number of triangles across all submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(Submesh::triangle_count).sum()
    }

    /// Looks up a submesh by label.
    pub fn submesh(&self, label: &str) -> Option<&Submesh> {
        self.submeshes.iter().find(|s| s.label == label)
    }

    /// Iterates every triangle of every submesh.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes.iter().flat_map(Submesh::triangles)
    }

    /// Returns the vertex buffer as a byte slice for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the positions of a triangle's three corners.
    pub fn triangle_positions(&self, tri: [u32; 3]) -> [Vec3; 3] {
        tri.map(|i| self.vertices[i as usize].position())
    }

    /// Recompute vertex normals from the triangle set.
    ///
    /// Each triangle contributes its unnormalised face normal (so larger
    /// triangles weigh more) to its three corners. Vertices that belong to no
    /// triangle, or whose contributions cancel out, get a zero normal.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range; run [`Mesh::validate`] first on
    /// meshes that did not come from this crate's generators.
    pub fn recalculate_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.vertices.len()];
        for sub in &self.submeshes {
            for [a, b, c] in sub.triangles() {
                let pa = self.vertices[a as usize].position();
                let pb = self.vertices[b as usize].position();
                let pc = self.vertices[c as usize].position();
                let n = (pb - pa).cross(pc - pa);
                accum[a as usize] += n;
                accum[b as usize] += n;
                accum[c as usize] += n;
            }
        }
        for (vertex, n) in self.vertices.iter_mut().zip(accum) {
            vertex.normal = n.normalize_or_zero().to_array();
        }
    }

    /// Sphere centred on the axis-aligned bounds that encloses every vertex.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_sphere(&self) -> Option<BoundingSphere> {
        let first = self.vertices.first()?.position();
        let (min, max) = self
            .vertices
            .iter()
            .map(MeshVertex::position)
            .fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        let center = (min + max) * 0.5;
        let radius = self
            .vertices
            .iter()
            .map(|v| v.position().distance(center))
            .fold(0.0_f32, f32::max);
        Some(BoundingSphere { center, radius })
    }

    /// Check the structural invariants consumers rely on.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IncompleteTriangle`] if a submesh length is not a
    /// multiple of three, or [`MeshError::IndexOutOfBounds`] if any index is
    /// not below the vertex count.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for sub in &self.submeshes {
            if sub.indices.len() % 3 != 0 {
                return Err(MeshError::IncompleteTriangle {
                    submesh: sub.label.clone(),
                    len: sub.indices.len(),
                });
            }
            if let Some(&index) = sub.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfBounds {
                    submesh: sub.label.clone(),
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
