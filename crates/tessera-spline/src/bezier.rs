//! Cubic Bezier basis.

use glam::Vec3;

/// Point on the cubic Bezier curve `p0..p3` at `t`, clamped to `[0, 1]`.
///
/// ```text
/// B(t) = (1-t)³ p0 + 3(1-t)² t p1 + 3(1-t) t² p2 + t³ p3
/// ```
#[inline]
#[must_use]
pub fn cubic_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// First derivative (velocity) of the cubic Bezier curve `p0..p3` at `t`.
///
/// ```text
/// B'(t) = 3(1-t)² (p1-p0) + 6(1-t) t (p2-p1) + 3t² (p3-p2)
/// ```
#[inline]
#[must_use]
pub fn cubic_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn control() -> [Vec3; 4] {
        [
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_endpoints_interpolated() {
        let [p0, p1, p2, p3] = control();
        assert_eq!(cubic_point(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_point(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_midpoint() {
        let [p0, p1, p2, p3] = control();
        // (p0 + 3p1 + 3p2 + p3) / 8
        let expected = Vec3::new(2.0, 1.5, 0.0);
        assert!((cubic_point(p0, p1, p2, p3, 0.5) - expected).length() < EPSILON);
    }

    #[test]
    fn test_parameter_clamped() {
        let [p0, p1, p2, p3] = control();
        assert_eq!(cubic_point(p0, p1, p2, p3, -2.0), p0);
        assert_eq!(cubic_point(p0, p1, p2, p3, 3.0), p3);
    }

    #[test]
    fn test_derivative_at_endpoints_follows_handles() {
        let [p0, p1, p2, p3] = control();
        assert!((cubic_derivative(p0, p1, p2, p3, 0.0) - 3.0 * (p1 - p0)).length() < EPSILON);
        assert!((cubic_derivative(p0, p1, p2, p3, 1.0) - 3.0 * (p3 - p2)).length() < EPSILON);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let [p0, p1, p2, p3] = control();
        let t = 0.3;
        let h = 1e-3;
        let numeric =
            (cubic_point(p0, p1, p2, p3, t + h) - cubic_point(p0, p1, p2, p3, t - h)) / (2.0 * h);
        let analytic = cubic_derivative(p0, p1, p2, p3, t);
        assert!(
            (numeric - analytic).length() < 1e-2,
            "numeric {numeric:?} vs analytic {analytic:?}"
        );
    }
}
