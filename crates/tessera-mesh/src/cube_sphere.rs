//! Cube-sphere generation.
//!
//! A cube subdivided into `grid_size × grid_size` cells per face is laid out in
//! one shared vertex buffer and then warped onto a sphere.
//!
//! # Vertex layout
//!
//! The four side faces are stored as `grid_size + 1` horizontal *rings* of
//! `4 * grid_size` vertices each, walking the perimeter front → right → back →
//! left at one height. Consecutive ring steps are horizontally adjacent and the
//! same step on the next ring is vertically adjacent, so side quads come straight
//! from index arithmetic. The interiors of the top and bottom caps follow the
//! rings, top first, each row-major in `(z, x)`.
//!
//! # Submeshes
//!
//! Triangles are split by the axis their face is orthogonal to, in material slot
//! order `z`, `x`, `y` (see [`CubeAxis::SUBMESH_ORDER`]).

use tessera_cubesphere::{CubeAxis, LatticeCoord, MAX_GRID_SIZE, lattice_to_sphere};
use tracing::debug;

use crate::builder::{MeshBuilder, SubmeshHandle};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::vertex::{MeshVertex, VertexAttributes};

/// Validated cube-sphere parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeSphereParams {
    grid_size: u32,
    radius: f32,
}

impl CubeSphereParams {
    /// Validate cube-sphere parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] if `grid_size` is outside
    /// `1..=255` or `radius` is not a positive finite number.
    pub fn new(grid_size: u32, radius: f32) -> Result<Self, MeshError> {
        if grid_size == 0 {
            return Err(MeshError::invalid("grid_size", "must be at least 1"));
        }
        if grid_size > MAX_GRID_SIZE {
            return Err(MeshError::invalid(
                "grid_size",
                format!("{grid_size} exceeds {MAX_GRID_SIZE}, the largest lattice coordinate a colour channel can hold"),
            ));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MeshError::invalid(
                "radius",
                format!("must be positive and finite, got {radius}"),
            ));
        }
        Ok(Self { grid_size, radius })
    }

    /// Subdivisions per cube edge.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Number of vertices in a cube sphere: 8 corners, `12(g - 1)` edge vertices
/// and `6(g - 1)²` face-interior vertices, i.e. `6g² + 2`.
pub fn cube_sphere_vertex_count(grid_size: u32) -> usize {
    let g = grid_size as usize;
    6 * g * g + 2
}

/// Generate a cube sphere of `grid_size` subdivisions per edge.
///
/// Every vertex lies on the sphere of the given `radius`; its normal is the
/// warped unit direction and its colour channel holds the lattice coordinate.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for `grid_size` outside `1..=255`
/// or a non-positive or non-finite `radius`.
pub fn generate_cube_sphere(grid_size: u32, radius: f32) -> Result<Mesh, MeshError> {
    let params = CubeSphereParams::new(grid_size, radius)?;
    Ok(build_cube_sphere(&params))
}

/// One of the two faces orthogonal to Y, which are not part of the rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cap {
    Top,
    Bottom,
}

impl Cap {
    const ALL: [Cap; 2] = [Cap::Top, Cap::Bottom];
}

/// Closed-form index arithmetic over the cube-sphere vertex buffer.
#[derive(Clone, Copy, Debug)]
struct SphereIndexing {
    g: u32,
}

impl SphereIndexing {
    fn ring_len(self) -> u32 {
        4 * self.g
    }

    /// Vertex index of `step` on the ring at height `level`. Steps wrap.
    fn ring_index(self, level: u32, step: u32) -> u32 {
        level * self.ring_len() + step % self.ring_len()
    }

    /// Lattice coordinate of `step` on the ring at height `level`.
    fn ring_lattice(self, level: u32, step: u32) -> LatticeCoord {
        let g = self.g;
        let (x, z) = match step / g {
            0 => (step, 0),
            1 => (g, step - g),
            2 => (3 * g - step, g),
            _ => (0, 4 * g - step),
        };
        LatticeCoord::from_u32(x, level, z)
    }

    /// Ring step of the border lattice position `(x, z)`. Inverse of the
    /// perimeter walk in [`SphereIndexing::ring_lattice`].
    fn perimeter_step(self, x: u32, z: u32) -> u32 {
        let g = self.g;
        if z == 0 && x < g {
            x
        } else if x == g && z < g {
            g + z
        } else if z == g && x > 0 {
            3 * g - x
        } else {
            4 * g - z
        }
    }

    fn cap_level(self, cap: Cap) -> u32 {
        match cap {
            Cap::Top => self.g,
            Cap::Bottom => 0,
        }
    }

    /// First vertex of the cap's `(g - 1)²` interior block.
    fn cap_interior_base(self, cap: Cap) -> u32 {
        let rings_end = (self.g + 1) * self.ring_len();
        let interior = (self.g - 1) * (self.g - 1);
        match cap {
            Cap::Top => rings_end,
            Cap::Bottom => rings_end + interior,
        }
    }

    /// Vertex index of lattice position `(x, z)` on a cap.
    ///
    /// Border positions resolve into the ring at the cap's height; interior
    /// positions resolve into the cap's own block with a stride of `g - 1`.
    fn cap_index(self, cap: Cap, x: u32, z: u32) -> u32 {
        let g = self.g;
        if x > 0 && x < g && z > 0 && z < g {
            self.cap_interior_base(cap) + (z - 1) * (g - 1) + (x - 1)
        } else {
            self.ring_index(self.cap_level(cap), self.perimeter_step(x, z))
        }
    }
}

fn build_cube_sphere(params: &CubeSphereParams) -> Mesh {
    let g = params.grid_size;
    let layout = SphereIndexing { g };
    let mut builder = MeshBuilder::new(
        "Procedural Cube Sphere",
        VertexAttributes {
            uv: false,
            tangent: false,
            color: true,
        },
    );
    builder.reserve_vertices(cube_sphere_vertex_count(g));

    create_vertices(&mut builder, layout, params.radius);
    debug_assert_eq!(builder.vertex_count(), cube_sphere_vertex_count(g));

    let quads_per_axis = 2 * (g as usize) * (g as usize);
    let handles = CubeAxis::SUBMESH_ORDER
        .map(|axis| builder.add_submesh(axis.label(), quads_per_axis));
    let handle = |axis: CubeAxis| handles[axis.submesh_slot()];

    triangulate_sides(&mut builder, layout, handle(CubeAxis::Z), handle(CubeAxis::X));
    for cap in Cap::ALL {
        triangulate_cap(&mut builder, layout, handle(CubeAxis::Y), cap);
    }

    let mesh = builder.build();
    debug!(
        grid_size = g,
        radius = params.radius,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated cube sphere"
    );
    mesh
}

fn create_vertices(builder: &mut MeshBuilder, layout: SphereIndexing, radius: f32) {
    let g = layout.g;
    for level in 0..=g {
        for step in 0..layout.ring_len() {
            push_lattice_vertex(builder, layout.ring_lattice(level, step), g, radius);
        }
    }
    for cap in Cap::ALL {
        let y = layout.cap_level(cap);
        for z in 1..g {
            for x in 1..g {
                push_lattice_vertex(builder, LatticeCoord::from_u32(x, y, z), g, radius);
            }
        }
    }
}

fn push_lattice_vertex(
    builder: &mut MeshBuilder,
    lattice: LatticeCoord,
    grid_size: u32,
    radius: f32,
) {
    let unit = lattice_to_sphere(lattice, grid_size);
    builder.push_vertex(
        MeshVertex::at((unit * f64::from(radius)).as_vec3())
            .with_normal(unit.as_vec3())
            .with_color(lattice.to_color()),
    );
}

/// Quads between each ring and the one above it. Front and back runs of the
/// ring go to the Z buffer, right and left runs to the X buffer.
fn triangulate_sides(
    builder: &mut MeshBuilder,
    layout: SphereIndexing,
    z_faces: SubmeshHandle,
    x_faces: SubmeshHandle,
) {
    let g = layout.g;
    for level in 0..g {
        for step in 0..layout.ring_len() {
            let handle = if (step / g) % 2 == 0 { z_faces } else { x_faces };
            // The last step's right-hand neighbour wraps to step 0, closing the ring.
            builder.push_quad(
                handle,
                layout.ring_index(level, step),
                layout.ring_index(level, step + 1),
                layout.ring_index(level + 1, step),
                layout.ring_index(level + 1, step + 1),
            );
        }
    }
}

/// Row-by-row sweep over a cap. The first and last column of every row, and
/// the first and last row, touch the cap border and so pull two of their
/// corners from the ring instead of the interior block.
fn triangulate_cap(
    builder: &mut MeshBuilder,
    layout: SphereIndexing,
    handle: SubmeshHandle,
    cap: Cap,
) {
    let g = layout.g;
    let at = |x: u32, z: u32| layout.cap_index(cap, x, z);
    for z in 0..g {
        for x in 0..g {
            let (near, far) = match cap {
                Cap::Top => (z, z + 1),
                // Rows swapped: the bottom cap is seen from -Y.
                Cap::Bottom => (z + 1, z),
            };
            builder.push_quad(handle, at(x, near), at(x + 1, near), at(x, far), at(x + 1, far));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn sphere(g: u32) -> Mesh {
        generate_cube_sphere(g, 1.0).unwrap()
    }

    fn lattice_of(mesh: &Mesh, index: u32) -> LatticeCoord {
        LatticeCoord::from_color(mesh.vertices[index as usize].color)
    }

    fn caps(mesh: &Mesh) -> (&[u32], &[u32]) {
        let y = &mesh.submesh("y").unwrap().indices;
        y.split_at(y.len() / 2)
    }

    #[test]
    fn test_vertex_count() {
        for g in 1..=8 {
            assert_eq!(sphere(g).vertex_count(), cube_sphere_vertex_count(g));
        }
        assert_eq!(cube_sphere_vertex_count(1), 8);
        assert_eq!(cube_sphere_vertex_count(2), 26);
        assert_eq!(cube_sphere_vertex_count(3), 56);
    }

    #[test]
    fn test_vertices_lie_on_sphere() {
        for g in 1..=8 {
            let radius = 2.5;
            let mesh = generate_cube_sphere(g, radius).unwrap();
            for v in &mesh.vertices {
                let len = v.position().length();
                assert!(
                    (len - radius).abs() < EPSILON * radius,
                    "g={g}: vertex {:?} has length {len}",
                    v.position()
                );
            }
        }
    }

    #[test]
    fn test_normals_are_radial_unit_vectors() {
        let radius = 3.0;
        let mesh = generate_cube_sphere(4, radius).unwrap();
        for v in &mesh.vertices {
            assert!((v.normal().length() - 1.0).abs() < EPSILON);
            assert!((v.normal() * radius - v.position()).length() < EPSILON * radius);
        }
    }

    #[test]
    fn test_three_submeshes_in_slot_order() {
        let mesh = sphere(3);
        let labels: Vec<&str> = mesh.submeshes.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_each_axis_has_two_faces_of_triangles() {
        for g in 1..=6 {
            let mesh = sphere(g);
            for sub in &mesh.submeshes {
                assert_eq!(
                    sub.triangle_count(),
                    (4 * g * g) as usize,
                    "g={g}: submesh {} has the wrong size",
                    sub.label
                );
            }
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        for g in 1..=8 {
            assert_eq!(sphere(g).validate(), Ok(()), "g={g}");
        }
    }

    #[test]
    fn test_closed_manifold_with_euler_characteristic_two() {
        for g in 1..=6 {
            let mesh = sphere(g);
            let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
            let mut unique_tris = HashSet::new();
            for [a, b, c] in mesh.triangles() {
                let mut key = [a, b, c];
                key.sort_unstable();
                assert!(unique_tris.insert(key), "g={g}: duplicate triangle {key:?}");
                for edge in [(a, b), (b, c), (c, a)] {
                    *directed.entry(edge).or_default() += 1;
                }
            }
            for (&(a, b), &count) in &directed {
                assert_eq!(count, 1, "g={g}: edge {a}->{b} used {count} times");
                assert!(
                    directed.contains_key(&(b, a)),
                    "g={g}: edge {a}->{b} has no opposite, the surface is open or misoriented"
                );
            }
            let v = mesh.vertex_count() as i64;
            let e = (directed.len() / 2) as i64;
            let f = mesh.triangle_count() as i64;
            assert_eq!(v - e + f, 2, "g={g}: V={v} E={e} F={f}");
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        for g in 1..=6 {
            let mesh = sphere(g);
            for tri in mesh.triangles() {
                let [a, b, c] = mesh.triangle_positions(tri);
                let n = (b - a).cross(c - a);
                let centroid = (a + b + c) / 3.0;
                assert!(n.dot(centroid) > 0.0, "g={g}: triangle {tri:?} faces inward");
            }
        }
    }

    #[test]
    fn test_submesh_triangles_stay_on_their_axis() {
        let g = 4;
        let mesh = sphere(g);
        for axis in CubeAxis::ALL {
            let sub = &mesh.submeshes[axis.submesh_slot()];
            for tri in sub.triangles() {
                let coords = tri.map(|i| lattice_of(&mesh, i));
                let component = |lc: LatticeCoord| match axis {
                    CubeAxis::X => lc.x,
                    CubeAxis::Y => lc.y,
                    CubeAxis::Z => lc.z,
                };
                let first = component(coords[0]);
                assert!(
                    (first == 0 || u32::from(first) == g)
                        && coords.iter().all(|&lc| component(lc) == first),
                    "{axis:?} submesh triangle {tri:?} leaves its face: {coords:?}"
                );
            }
        }
    }

    #[test]
    fn test_ring_walk_order() {
        let g = 3;
        let mesh = sphere(g);
        let expect = [
            (0, LatticeCoord::new(0, 0, 0)),
            (3, LatticeCoord::new(3, 0, 0)),
            (6, LatticeCoord::new(3, 0, 3)),
            (9, LatticeCoord::new(0, 0, 3)),
            (11, LatticeCoord::new(0, 0, 1)),
            (12, LatticeCoord::new(0, 1, 0)),
            (36, LatticeCoord::new(0, 3, 0)),
            (47, LatticeCoord::new(0, 3, 1)),
        ];
        for (index, lattice) in expect {
            assert_eq!(lattice_of(&mesh, index), lattice, "vertex {index}");
        }
    }

    #[test]
    fn test_cap_interiors_follow_rings() {
        let g = 3;
        let mesh = sphere(g);
        // Rings occupy 4 * 3 * 4 = 48 vertices; each cap interior has 2 * 2.
        assert_eq!(lattice_of(&mesh, 48), LatticeCoord::new(1, 3, 1));
        assert_eq!(lattice_of(&mesh, 49), LatticeCoord::new(2, 3, 1));
        assert_eq!(lattice_of(&mesh, 51), LatticeCoord::new(2, 3, 2));
        assert_eq!(lattice_of(&mesh, 52), LatticeCoord::new(1, 0, 1));
        assert_eq!(lattice_of(&mesh, 55), LatticeCoord::new(2, 0, 2));
    }

    #[test]
    fn test_lattice_coordinates_unique_and_on_surface() {
        for g in 1..=6 {
            let mesh = sphere(g);
            let mut seen = HashSet::new();
            for v in &mesh.vertices {
                let lc = LatticeCoord::from_color(v.color);
                assert!(lc.is_on_surface(g), "g={g}: {lc:?} is not on the cube surface");
                assert!(seen.insert(lc), "g={g}: {lc:?} generated twice");
                assert_eq!(v.color[3], 0);
            }
        }
    }

    #[test]
    fn test_lattice_round_trip_reproduces_positions() {
        for g in [1, 2, 5, 9] {
            let radius = 1.75;
            let mesh = generate_cube_sphere(g, radius).unwrap();
            for v in &mesh.vertices {
                let lc = LatticeCoord::from_color(v.color);
                let unit = lattice_to_sphere(lc, g);
                assert_eq!((unit * f64::from(radius)).as_vec3(), v.position());
                assert_eq!(unit.as_vec3(), v.normal());
            }
        }
    }

    #[test]
    fn test_side_faces_single_cell() {
        let mesh = sphere(1);
        assert_eq!(
            mesh.submesh("z").unwrap().indices,
            vec![0, 4, 1, 4, 5, 1, 2, 6, 3, 6, 7, 3]
        );
        assert_eq!(
            mesh.submesh("x").unwrap().indices,
            vec![1, 5, 2, 5, 6, 2, 3, 7, 0, 7, 4, 0]
        );
    }

    #[test]
    fn test_wrap_quad_closes_ring() {
        let g = 2;
        let mesh = sphere(g);
        let x = &mesh.submesh("x").unwrap().indices;
        // Level 0 visits steps 2, 3, 6 and 7 for X; step 7 wraps back to step 0.
        assert_eq!(&x[18..24], &[7, 15, 0, 15, 8, 0]);
    }

    #[test]
    fn test_caps_single_cell() {
        let mesh = sphere(1);
        let (top, bottom) = caps(&mesh);
        assert_eq!(top, &[4, 7, 5, 7, 6, 5]);
        assert_eq!(bottom, &[3, 0, 2, 0, 1, 2]);
    }

    #[test]
    fn test_caps_grid_size_two() {
        let mesh = sphere(2);
        let (top, bottom) = caps(&mesh);
        assert_eq!(
            top,
            &[
                16, 23, 17, 23, 24, 17, //
                17, 24, 18, 24, 19, 18, //
                23, 22, 24, 22, 21, 24, //
                24, 21, 19, 21, 20, 19,
            ]
        );
        assert_eq!(
            bottom,
            &[
                7, 0, 25, 0, 1, 25, //
                25, 1, 3, 1, 2, 3, //
                6, 7, 5, 7, 25, 5, //
                5, 25, 4, 25, 3, 4,
            ]
        );
    }

    #[test]
    fn test_caps_grid_size_three() {
        let mesh = sphere(3);
        let (top, bottom) = caps(&mesh);
        assert_eq!(
            top,
            &[
                36, 47, 37, 47, 48, 37, //
                37, 48, 38, 48, 49, 38, //
                38, 49, 39, 49, 40, 39, //
                47, 46, 48, 46, 50, 48, //
                48, 50, 49, 50, 51, 49, //
                49, 51, 40, 51, 41, 40, //
                46, 45, 50, 45, 44, 50, //
                50, 44, 51, 44, 43, 51, //
                51, 43, 41, 43, 42, 41,
            ]
        );
        assert_eq!(
            bottom,
            &[
                11, 0, 52, 0, 1, 52, //
                52, 1, 53, 1, 2, 53, //
                53, 2, 4, 2, 3, 4, //
                10, 11, 54, 11, 52, 54, //
                54, 52, 55, 52, 53, 55, //
                55, 53, 5, 53, 4, 5, //
                9, 10, 8, 10, 54, 8, //
                8, 54, 7, 54, 55, 7, //
                7, 55, 6, 55, 5, 6,
            ]
        );
    }

    #[test]
    fn test_bounding_sphere_matches_radius() {
        let mesh = generate_cube_sphere(6, 4.0).unwrap();
        let bounds = mesh.bounding_sphere().unwrap();
        assert!(bounds.center.length() < EPSILON);
        assert!((bounds.radius - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_only_color_channel_is_populated() {
        let mesh = sphere(2);
        assert!(mesh.attributes.color);
        assert!(!mesh.attributes.uv);
        assert!(!mesh.attributes.tangent);
    }

    #[test]
    fn test_max_grid_size_accepted() {
        assert!(CubeSphereParams::new(MAX_GRID_SIZE, 1.0).is_ok());
    }

    #[test]
    fn test_invalid_grid_size_rejected() {
        for g in [0, MAX_GRID_SIZE + 1] {
            assert!(matches!(
                generate_cube_sphere(g, 1.0),
                Err(MeshError::InvalidParameter { name: "grid_size", .. })
            ));
        }
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for r in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(
                    generate_cube_sphere(4, r),
                    Err(MeshError::InvalidParameter { name: "radius", .. })
                ),
                "radius {r} was accepted"
            );
        }
    }

    #[test]
    fn test_radius_scales_positions() {
        let small = generate_cube_sphere(3, 1.0).unwrap();
        let large = generate_cube_sphere(3, 10.0).unwrap();
        for (a, b) in small.vertices.iter().zip(&large.vertices) {
            assert!((a.position() * 10.0 - b.position()).length() < 1e-4);
            assert_eq!(a.color, b.color);
        }
        assert_eq!(small.submeshes, large.submeshes);
    }
}
