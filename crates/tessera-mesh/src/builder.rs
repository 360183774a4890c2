//! Explicit mesh builder: one vertex buffer plus named triangle buffers.
//!
//! Generators push vertices and get their indices back, then emit quads into a
//! buffer identified by a [`SubmeshHandle`]. Nothing is shared implicitly
//! between stages; every write goes through the builder.

use crate::mesh::{Mesh, Submesh};
use crate::vertex::{MeshVertex, VertexAttributes};

/// A growable triangle-index buffer (3 indices per triangle).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleBuffer {
    indices: Vec<u32>,
}

impl TriangleBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with room for `quads` quads.
    pub fn with_quad_capacity(quads: usize) -> Self {
        Self {
            indices: Vec::with_capacity(quads * 6),
        }
    }

    /// Current write cursor: the number of indices written so far.
    pub fn cursor(&self) -> usize {
        self.indices.len()
    }

    /// Written indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Consumes the buffer, returning its indices.
    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }
}

/// Append one quad as two triangles and return the advanced cursor.
///
/// Corners are given in traversal order `(bottom_left, bottom_right, top_left,
/// top_right)`. The emitted triangles are `(bl, tl, br)` and `(tl, tr, br)`,
/// which wind counter-clockwise when the quad is seen from the side where
/// `bottom → top` × `left → right` points.
pub fn push_quad(
    buffer: &mut TriangleBuffer,
    bottom_left: u32,
    bottom_right: u32,
    top_left: u32,
    top_right: u32,
) -> usize {
    buffer.indices.extend_from_slice(&[
        bottom_left,
        top_left,
        bottom_right,
        top_left,
        top_right,
        bottom_right,
    ]);
    buffer.cursor()
}

/// Identifies a triangle buffer owned by a [`MeshBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmeshHandle(usize);

impl SubmeshHandle {
    /// Position of this submesh in the built mesh.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Accumulates vertices and triangle buffers, then assembles a [`Mesh`].
#[derive(Debug)]
pub struct MeshBuilder {
    name: String,
    attributes: VertexAttributes,
    vertices: Vec<MeshVertex>,
    submeshes: Vec<(String, TriangleBuffer)>,
}

impl MeshBuilder {
    /// Starts a mesh whose vertices populate `attributes`.
    pub fn new(name: impl Into<String>, attributes: VertexAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            vertices: Vec::new(),
            submeshes: Vec::new(),
        }
    }

    /// Reserves room for `additional` more vertices.
    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    /// Adds an empty triangle buffer, sized for `quad_capacity` quads.
    pub fn add_submesh(&mut self, label: impl Into<String>, quad_capacity: usize) -> SubmeshHandle {
        self.submeshes.push((
            label.into(),
            TriangleBuffer::with_quad_capacity(quad_capacity),
        ));
        SubmeshHandle(self.submeshes.len() - 1)
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: MeshVertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Number of vertices pushed so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Emits a quad into the buffer identified by `handle`. See [`push_quad`].
    pub fn push_quad(
        &mut self,
        handle: SubmeshHandle,
        bottom_left: u32,
        bottom_right: u32,
        top_left: u32,
        top_right: u32,
    ) -> usize {
        debug_assert!(
            [bottom_left, bottom_right, top_left, top_right]
                .iter()
                .all(|&i| (i as usize) < self.vertices.len()),
            "quad references a vertex that has not been pushed"
        );
        push_quad(
            &mut self.submeshes[handle.0].1,
            bottom_left,
            bottom_right,
            top_left,
            top_right,
        )
    }

    /// Read access to a triangle buffer.
    pub fn triangles(&self, handle: SubmeshHandle) -> &TriangleBuffer {
        &self.submeshes[handle.0].1
    }

    /// Assembles the mesh. Submeshes keep the order they were added in.
    pub fn build(self) -> Mesh {
        Mesh {
            name: self.name,
            vertices: self.vertices,
            attributes: self.attributes,
            submeshes: self
                .submeshes
                .into_iter()
                .map(|(label, buffer)| Submesh {
                    label,
                    indices: buffer.into_indices(),
                })
                .collect(),
        }
    }
}
