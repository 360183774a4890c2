//! Cube-sphere geometry: lattice coordinates on a subdivided cube, the cube axes
//! that partition its faces, and the Everitt cube-to-sphere warp.

mod cube_axis;
mod lattice;
mod projection;

pub use cube_axis::CubeAxis;
pub use lattice::{LatticeCoord, MAX_GRID_SIZE};
pub use projection::{cube_to_sphere_everitt, lattice_to_cube_point, lattice_to_sphere};
