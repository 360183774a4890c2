//! Flat rectangular grid generation.

use glam::{Vec2, Vec3, Vec4};
use tracing::debug;

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::vertex::{MeshVertex, VertexAttributes};

/// Tangent shared by every grid vertex: +X with a negative bitangent sign.
const GRID_TANGENT: Vec4 = Vec4::new(1.0, 0.0, 0.0, -1.0);

/// Largest vertex count a flat grid may have, about 870 MB of vertex data.
pub const MAX_GRID_VERTICES: u64 = 1 << 24;

/// Validated grid dimensions, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams {
    width: u32,
    height: u32,
}

impl GridParams {
    /// Validate grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] if either dimension is zero or the
    /// grid would have more than [`MAX_GRID_VERTICES`] vertices.
    pub fn new(width: u32, height: u32) -> Result<Self, MeshError> {
        if width == 0 {
            return Err(MeshError::invalid("width", "must be at least 1"));
        }
        if height == 0 {
            return Err(MeshError::invalid("height", "must be at least 1"));
        }
        let vertices = (u64::from(width) + 1) * (u64::from(height) + 1);
        if vertices > MAX_GRID_VERTICES {
            return Err(MeshError::invalid(
                "width x height",
                format!("{width}x{height} grid needs {vertices} vertices, limit is {MAX_GRID_VERTICES}"),
            ));
        }
        Ok(Self { width, height })
    }

    /// Number of cells along X.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells along Y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width + 1) * (height + 1)`.
    pub fn vertex_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }

    /// Index of the vertex at grid coordinate `(col, row)`.
    #[inline]
    pub fn vertex_index(&self, col: u32, row: u32) -> u32 {
        row * (self.width + 1) + col
    }
}

/// Generate a `width × height` grid in the XY plane.
///
/// Vertex `(col, row)` sits at `(col, row, 0)` with UV `(col / width, row / height)`.
/// Each cell becomes two triangles; normals are derived from the triangles.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for a zero dimension or a grid with
/// more than [`MAX_GRID_VERTICES`] vertices.
pub fn generate_flat_grid(width: u32, height: u32) -> Result<Mesh, MeshError> {
    let params = GridParams::new(width, height)?;
    Ok(build_grid(&params))
}

fn build_grid(params: &GridParams) -> Mesh {
    let (width, height) = (params.width, params.height);
    let mut builder = MeshBuilder::new(
        "Procedural Grid",
        VertexAttributes {
            uv: true,
            tangent: true,
            color: false,
        },
    );
    builder.reserve_vertices(params.vertex_count());

    for row in 0..=height {
        for col in 0..=width {
            builder.push_vertex(
                MeshVertex::at(Vec3::new(col as f32, row as f32, 0.0))
                    .with_uv(Vec2::new(
                        col as f32 / width as f32,
                        row as f32 / height as f32,
                    ))
                    .with_tangent(GRID_TANGENT),
            );
        }
    }

    let cells = width as usize * height as usize;
    let surface = builder.add_submesh("surface", cells);
    for y in 0..height {
        for x in 0..width {
            builder.push_quad(
                surface,
                params.vertex_index(x, y),
                params.vertex_index(x + 1, y),
                params.vertex_index(x, y + 1),
                params.vertex_index(x + 1, y + 1),
            );
        }
    }

    let mut mesh = builder.build();
    mesh.recalculate_normals();
    debug!(
        width,
        height,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated flat grid"
    );
    mesh
}
