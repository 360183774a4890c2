//! Evaluation of chained cubic Bezier segments.
//!
//! A chain of `k` segments has `3k + 1` control points; every third point is an
//! endpoint shared by the segment before and after it.

use glam::Vec3;

use crate::bezier::{cubic_derivative, cubic_point};
use crate::error::SplineError;

/// Position and tangent of a spline at one parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineSample {
    /// Point on the curve.
    pub position: Vec3,
    /// First derivative with respect to the segment-local parameter.
    pub velocity: Vec3,
    /// Unit tangent direction, or zero where the velocity vanishes.
    pub direction: Vec3,
}

/// Number of cubic segments in a chain of `points`.
///
/// # Errors
///
/// [`SplineError::TooFewControlPoints`] below four points,
/// [`SplineError::MalformedChain`] if the count is not `3k + 1`.
pub fn segment_count(points: &[Vec3]) -> Result<usize, SplineError> {
    let n = points.len();
    if n < 4 {
        return Err(SplineError::TooFewControlPoints(n));
    }
    if (n - 1) % 3 != 0 {
        return Err(SplineError::MalformedChain(n));
    }
    Ok((n - 1) / 3)
}

/// Evaluate a chain at the global parameter `t`, clamped to `[0, 1]`.
///
/// The segment is `floor(t * segments)` with the remainder as its local
/// parameter. At `t = 1` the last segment is evaluated at local `1.0`.
///
/// # Errors
///
/// Returns an error if `points` is not a valid chain or `t` is not finite.
pub fn evaluate_chain(points: &[Vec3], t: f32) -> Result<SplineSample, SplineError> {
    let segments = segment_count(points)?;
    if !t.is_finite() {
        return Err(SplineError::NonFiniteParameter(t));
    }
    Ok(evaluate_valid(points, segments, t))
}

/// Maps a global parameter onto `(first control point index, local t)`.
pub(crate) fn locate(segments: usize, t: f32) -> (usize, f32) {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return ((segments - 1) * 3, 1.0);
    }
    let scaled = t * segments as f32;
    // Rounding in `scaled` can land exactly on `segments` for t just below 1.
    let segment = (scaled.floor() as usize).min(segments - 1);
    (segment * 3, scaled - segment as f32)
}

/// Evaluates a chain already known to hold `segments` segments.
pub(crate) fn evaluate_valid(points: &[Vec3], segments: usize, t: f32) -> SplineSample {
    let (i, local) = locate(segments, t);
    let [p0, p1, p2, p3] = [points[i], points[i + 1], points[i + 2], points[i + 3]];
    let velocity = cubic_derivative(p0, p1, p2, p3, local);
    SplineSample {
        position: cubic_point(p0, p1, p2, p3, local),
        velocity,
        direction: velocity.normalize_or_zero(),
    }
}
