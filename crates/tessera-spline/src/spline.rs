//! An editable chain of cubic Bezier curves.

use glam::Vec3;

use crate::chain::{SplineSample, evaluate_valid};
use crate::error::SplineError;

/// A spline made of cubic Bezier curves joined end to end.
///
/// Always holds `3k + 1` control points with `k >= 1`, so evaluation can only
/// fail on a non-finite parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSpline {
    points: Vec<Vec3>,
}

impl Default for BezierSpline {
    /// A single straight curve from `(1, 0, 0)` to `(4, 0, 0)`.
    fn default() -> Self {
        Self {
            points: vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
            ],
        }
    }
}

impl BezierSpline {
    /// Builds a spline from an existing control-point chain.
    ///
    /// # Errors
    ///
    /// Returns an error unless `points` holds `3k + 1` points with `k >= 1`.
    pub fn from_points(points: Vec<Vec3>) -> Result<Self, SplineError> {
        crate::chain::segment_count(&points)?;
        Ok(Self { points })
    }

    /// Immutable snapshot of the control points.
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of control points.
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cubic curves.
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Control point at `index`.
    pub fn control_point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    /// Moves a control point, returning its previous position.
    ///
    /// # Errors
    ///
    /// [`SplineError::ControlPointOutOfRange`] if `index` is past the end.
    pub fn set_control_point(&mut self, index: usize, point: Vec3) -> Result<Vec3, SplineError> {
        let count = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(SplineError::ControlPointOutOfRange { index, count })?;
        Ok(std::mem::replace(slot, point))
    }

    /// Appends a curve continuing from the last point in unit steps along +X.
    ///
    /// Returns the three points that were added.
    pub fn add_curve(&mut self) -> [Vec3; 3] {
        let last = self.points[self.points.len() - 1];
        let added = [
            last + Vec3::X,
            last + 2.0 * Vec3::X,
            last + 3.0 * Vec3::X,
        ];
        self.append_curve(added);
        added
    }

    /// Appends a curve with explicit control points after the current end.
    pub fn append_curve(&mut self, points: [Vec3; 3]) {
        self.points.extend_from_slice(&points);
    }

    /// Removes the final curve, returning its three trailing points.
    ///
    /// # Errors
    ///
    /// [`SplineError::LastCurve`] if the spline has a single curve.
    pub fn remove_last_curve(&mut self) -> Result<[Vec3; 3], SplineError> {
        if self.curve_count() < 2 {
            return Err(SplineError::LastCurve);
        }
        let n = self.points.len();
        let removed = [self.points[n - 3], self.points[n - 2], self.points[n - 1]];
        self.points.truncate(n - 3);
        Ok(removed)
    }

    /// Evaluates the spline at `t` in `[0, 1]` (clamped).
    ///
    /// # Errors
    ///
    /// [`SplineError::NonFiniteParameter`] for NaN or infinite `t`.
    pub fn sample(&self, t: f32) -> Result<SplineSample, SplineError> {
        if !t.is_finite() {
            return Err(SplineError::NonFiniteParameter(t));
        }
        Ok(evaluate_valid(&self.points, self.curve_count(), t))
    }

    /// Point on the spline at `t`. See [`BezierSpline::sample`].
    ///
    /// # Errors
    ///
    /// [`SplineError::NonFiniteParameter`] for NaN or infinite `t`.
    pub fn point(&self, t: f32) -> Result<Vec3, SplineError> {
        self.sample(t).map(|s| s.position)
    }

    /// Velocity of the spline at `t`. See [`BezierSpline::sample`].
    ///
    /// # Errors
    ///
    /// [`SplineError::NonFiniteParameter`] for NaN or infinite `t`.
    pub fn velocity(&self, t: f32) -> Result<Vec3, SplineError> {
        self.sample(t).map(|s| s.velocity)
    }

    /// Unit direction of the spline at `t`. See [`BezierSpline::sample`].
    ///
    /// # Errors
    ///
    /// [`SplineError::NonFiniteParameter`] for NaN or infinite `t`.
    pub fn direction(&self, t: f32) -> Result<Vec3, SplineError> {
        self.sample(t).map(|s| s.direction)
    }

    /// Samples `steps_per_curve` evenly spaced points per curve, excluding the
    /// end point. Useful for drawing direction markers along the spline.
    pub fn sample_directions(&self, steps_per_curve: u32) -> Vec<SplineSample> {
        let steps = steps_per_curve as usize * self.curve_count();
        (0..steps)
            .map(|i| evaluate_valid(&self.points, self.curve_count(), i as f32 / steps as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_is_straight_single_curve() {
        let spline = BezierSpline::default();
        assert_eq!(spline.control_point_count(), 4);
        assert_eq!(spline.curve_count(), 1);
        let mid = spline.point(0.5).unwrap();
        assert!((mid - Vec3::new(2.5, 0.0, 0.0)).length() < EPSILON);
        assert!((spline.direction(0.3).unwrap() - Vec3::X).length() < EPSILON);
    }

    #[test]
    fn test_add_curve_extends_along_x() {
        let mut spline = BezierSpline::default();
        let added = spline.add_curve();
        assert_eq!(added, [
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(7.0, 0.0, 0.0),
        ]);
        assert_eq!(spline.curve_count(), 2);
        assert_eq!(spline.point(1.0).unwrap(), Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(spline.point(0.5).unwrap(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_set_control_point_returns_previous() {
        let mut spline = BezierSpline::default();
        let prev = spline.set_control_point(2, Vec3::new(3.0, 1.0, 0.0)).unwrap();
        assert_eq!(prev, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(spline.control_point(2), Some(Vec3::new(3.0, 1.0, 0.0)));
    }

    #[test]
    fn test_set_control_point_out_of_range() {
        let mut spline = BezierSpline::default();
        assert_eq!(
            spline.set_control_point(4, Vec3::ZERO),
            Err(SplineError::ControlPointOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_remove_last_curve() {
        let mut spline = BezierSpline::default();
        assert_eq!(spline.remove_last_curve(), Err(SplineError::LastCurve));
        let added = spline.add_curve();
        assert_eq!(spline.remove_last_curve(), Ok(added));
        assert_eq!(spline, BezierSpline::default());
    }

    #[test]
    fn test_from_points_validates() {
        assert!(BezierSpline::from_points(vec![Vec3::ZERO; 7]).is_ok());
        assert_eq!(
            BezierSpline::from_points(vec![Vec3::ZERO; 6]),
            Err(SplineError::MalformedChain(6))
        );
    }

    #[test]
    fn test_sample_directions_count_and_start() {
        let mut spline = BezierSpline::default();
        spline.add_curve();
        let samples = spline.sample_directions(10);
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0].position, Vec3::new(1.0, 0.0, 0.0));
        assert!(samples.iter().all(|s| (s.direction - Vec3::X).length() < EPSILON));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let spline = BezierSpline::default();
        assert!(spline.point(f32::NAN).is_err());
    }
}
