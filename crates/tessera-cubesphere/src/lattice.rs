//! Integer lattice coordinates on the surface of a subdivided cube.

use glam::DVec3;

/// Largest subdivision count whose lattice coordinates still fit in one byte.
pub const MAX_GRID_SIZE: u32 = u8::MAX as u32;

/// The pre-warp integer position of a cube-sphere vertex.
///
/// Each component is in `[0, grid_size]`. A lattice coordinate is assigned once
/// when its vertex is generated and is carried through to the mesh as an RGBA8
/// colour `(x, y, z, 0)` for shaders that need the undistorted cube position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeCoord {
    /// Position along X.
    pub x: u8,
    /// Position along Y.
    pub y: u8,
    /// Position along Z.
    pub z: u8,
}

impl LatticeCoord {
    /// Construct a lattice coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Construct from wide components. Caller guarantees each is `<= 255`.
    #[must_use]
    pub fn from_u32(x: u32, y: u32, z: u32) -> Self {
        debug_assert!(x <= MAX_GRID_SIZE && y <= MAX_GRID_SIZE && z <= MAX_GRID_SIZE);
        Self {
            x: x as u8,
            y: y as u8,
            z: z as u8,
        }
    }

    /// Pack into an RGBA8 colour with a zero alpha channel.
    #[must_use]
    pub fn to_color(self) -> [u8; 4] {
        [self.x, self.y, self.z, 0]
    }

    /// Recover a lattice coordinate from its packed colour. Alpha is ignored.
    #[must_use]
    pub fn from_color(color: [u8; 4]) -> Self {
        Self::new(color[0], color[1], color[2])
    }

    /// Components as a double-precision vector.
    #[must_use]
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// `true` if at least one component lies on a face of a `grid_size` cube.
    #[must_use]
    pub fn is_on_surface(self, grid_size: u32) -> bool {
        let on = |c: u8| c == 0 || u32::from(c) == grid_size;
        self.within(grid_size) && (on(self.x) || on(self.y) || on(self.z))
    }

    /// `true` if every component is `<= grid_size`.
    #[must_use]
    pub fn within(self, grid_size: u32) -> bool {
        u32::from(self.x) <= grid_size
            && u32::from(self.y) <= grid_size
            && u32::from(self.z) <= grid_size
    }
}
