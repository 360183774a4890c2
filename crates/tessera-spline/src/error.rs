//! Spline errors.

/// Errors raised when evaluating or editing a spline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplineError {
    /// A chain needs at least one full cubic segment.
    #[error("a spline chain needs at least 4 control points, got {0}")]
    TooFewControlPoints(usize),

    /// Segments share endpoints, so a chain has `3k + 1` control points.
    #[error("{0} control points do not form a chain of cubic segments (expected 3k + 1)")]
    MalformedChain(usize),

    /// A control point index past the end of the spline.
    #[error("control point {index} out of range for a spline with {count} points")]
    ControlPointOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of control points.
        count: usize,
    },

    /// The curve parameter was NaN or infinite.
    #[error("spline parameter must be finite, got {0}")]
    NonFiniteParameter(f32),

    /// Removing the only curve would leave an empty spline.
    #[error("cannot remove the last remaining curve")]
    LastCurve,
}
