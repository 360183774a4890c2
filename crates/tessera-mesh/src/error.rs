//! Mesh generation and validation errors.

/// Errors produced when generating or validating a mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A generation parameter is outside its accepted range.
    ///
    /// Reported before any buffer is allocated; no partial mesh exists.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as seen by the caller.
        name: &'static str,
        /// What was wrong with the supplied value.
        reason: String,
    },

    /// A submesh references a vertex past the end of the vertex buffer.
    #[error("submesh `{submesh}` references vertex {index} but the mesh has {vertex_count}")]
    IndexOutOfBounds {
        /// Label of the offending submesh.
        submesh: String,
        /// The out-of-range index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A submesh index buffer length is not a multiple of three.
    #[error("submesh `{submesh}` has {len} indices, not a whole number of triangles")]
    IncompleteTriangle {
        /// Label of the offending submesh.
        submesh: String,
        /// Number of indices in the submesh.
        len: usize,
    },
}

impl MeshError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MeshError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
