//! Cubic Bezier splines: chain evaluation over an immutable control-point
//! snapshot, an editable spline, and an undoable edit history.

mod bezier;
mod chain;
mod error;
mod history;
mod spline;

pub use bezier::{cubic_derivative, cubic_point};
pub use chain::{SplineSample, evaluate_chain, segment_count};
pub use error::SplineError;
pub use history::{EditHistory, SplineEdit};
pub use spline::BezierSpline;
