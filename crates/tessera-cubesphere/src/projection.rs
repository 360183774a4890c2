//! Cube-to-sphere projection.
//!
//! Lattice coordinates are first mapped onto the `[-1, 1]` cube and then warped
//! onto the unit sphere with the Everitt/Mathworld mapping, which keeps cell
//! areas far more uniform near cube edges and corners than plain normalisation.

use glam::DVec3;

use crate::LatticeCoord;

/// Analytic cube-to-sphere using the Everitt/Mathworld mapping.
///
/// Given a point on the cube surface (one coordinate is `±1`), compute the
/// corresponding unit sphere point with minimal area distortion:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(cube_point: DVec3) -> DVec3 {
    let x2 = cube_point.x * cube_point.x;
    let y2 = cube_point.y * cube_point.y;
    let z2 = cube_point.z * cube_point.z;

    DVec3::new(
        cube_point.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        cube_point.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        cube_point.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}

/// Map a lattice coordinate of a `grid_size` cube into `[-1, 1]³`.
///
/// `grid_size` must be non-zero.
#[inline]
#[must_use]
pub fn lattice_to_cube_point(coord: LatticeCoord, grid_size: u32) -> DVec3 {
    debug_assert!(grid_size > 0);
    coord.as_dvec3() * 2.0 / f64::from(grid_size) - DVec3::ONE
}

/// Convenience: lattice coordinate → unit sphere using the Everitt mapping.
#[inline]
#[must_use]
pub fn lattice_to_sphere(coord: LatticeCoord, grid_size: u32) -> DVec3 {
    cube_to_sphere_everitt(lattice_to_cube_point(coord, grid_size))
}
