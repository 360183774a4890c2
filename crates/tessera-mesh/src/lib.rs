//! Procedural mesh generation: flat grids and cube spheres built from closed-form
//! index arithmetic over a shared vertex buffer, plus the mesh container they fill.

pub mod builder;
pub mod cube_sphere;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod obj;
pub mod vertex;

pub use builder::{MeshBuilder, SubmeshHandle, TriangleBuffer, push_quad};
pub use cube_sphere::{CubeSphereParams, cube_sphere_vertex_count, generate_cube_sphere};
pub use error::MeshError;
pub use grid::{GridParams, MAX_GRID_VERTICES, generate_flat_grid};
pub use mesh::{BoundingSphere, Mesh, Submesh};
pub use obj::{write_obj, write_obj_to};
pub use vertex::{MeshVertex, VertexAttributes};
