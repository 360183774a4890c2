//! The three cube axes that partition a cube sphere's faces into submeshes.

use glam::DVec3;

/// A coordinate axis of the cube.
///
/// Each axis owns the pair of opposite faces orthogonal to it: [`CubeAxis::X`]
/// owns the left and right faces, [`CubeAxis::Y`] the top and bottom caps and
/// [`CubeAxis::Z`] the front and back faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeAxis {
    /// Faces at `x = 0` and `x = grid_size`.
    X = 0,
    /// Faces at `y = 0` and `y = grid_size`.
    Y = 1,
    /// Faces at `z = 0` and `z = grid_size`.
    Z = 2,
}

impl CubeAxis {
    /// All three axes in coordinate order.
    pub const ALL: [CubeAxis; 3] = [CubeAxis::X, CubeAxis::Y, CubeAxis::Z];

    /// Axes in material slot order: front/back, left/right, then the caps.
    pub const SUBMESH_ORDER: [CubeAxis; 3] = [CubeAxis::Z, CubeAxis::X, CubeAxis::Y];

    /// Index of this axis' triangle buffer within a cube-sphere mesh.
    #[must_use]
    pub fn submesh_slot(self) -> usize {
        match self {
            CubeAxis::Z => 0,
            CubeAxis::X => 1,
            CubeAxis::Y => 2,
        }
    }

    /// Short label used to name the submesh.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeAxis::X => "x",
            CubeAxis::Y => "y",
            CubeAxis::Z => "z",
        }
    }

    /// Positive unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> DVec3 {
        match self {
            CubeAxis::X => DVec3::X,
            CubeAxis::Y => DVec3::Y,
            CubeAxis::Z => DVec3::Z,
        }
    }

    /// The axis with the largest absolute component of `dir`.
    ///
    /// Ties are broken by a fixed priority: X > Y > Z.
    #[must_use]
    pub fn dominant(dir: DVec3) -> CubeAxis {
        let a = dir.abs();
        if a.x >= a.y && a.x >= a.z {
            CubeAxis::X
        } else if a.y >= a.z {
            CubeAxis::Y
        } else {
            CubeAxis::Z
        }
    }
}
