//! Spline evaluation and editing demonstrations.

use glam::Vec3;
use tessera_config::Config;
use tessera_spline::{BezierSpline, EditHistory, SplineError, evaluate_chain};
use tracing::info;

/// Samples direction markers along a two-curve spline, the way an editor would
/// draw them.
pub(crate) fn demonstrate_spline_sampling(config: &Config) -> Result<(), SplineError> {
    info!("Starting spline sampling demonstration");

    let spline = BezierSpline::from_points(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 2.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(5.0, -2.0, 0.0),
        Vec3::new(7.0, -2.0, 1.0),
        Vec3::new(8.0, 0.0, 1.0),
    ])?;

    let steps = config.spline.steps_per_curve;
    let scale = config.spline.direction_scale;
    let samples = spline.sample_directions(steps);
    let path_length: f32 = samples
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .sum();
    info!(
        "Sampled {} markers over {} curves (approx. length {path_length:.3})",
        samples.len(),
        spline.curve_count()
    );
    if let Some(first) = samples.first() {
        let tip = first.position + first.direction * scale;
        info!("  first marker: {:?} -> {:?}", first.position, tip);
    }

    let end = evaluate_chain(spline.control_points(), 1.0)?;
    info!(
        "  end point {:?}, direction {:?}",
        end.position, end.direction
    );
    Ok(())
}

/// Runs a short edit session with undo and redo.
pub(crate) fn demonstrate_edit_history() -> Result<(), SplineError> {
    info!("Starting spline edit history demonstration");

    let mut spline = BezierSpline::default();
    let mut history = EditHistory::with_limit(32);

    history.add_curve(&mut spline);
    history.move_point(&mut spline, 2, Vec3::new(3.0, 1.5, 0.0))?;
    info!(
        "After edits: {} curves, midpoint {:?}",
        spline.curve_count(),
        spline.point(0.5)?
    );

    while history.undo(&mut spline)? {}
    info!(
        "Undone to {} curve(s), dirty: {}",
        spline.curve_count(),
        history.is_dirty()
    );

    history.redo(&mut spline)?;
    history.mark_clean();
    info!(
        "Redid one edit: {} curves, can redo: {}",
        spline.curve_count(),
        history.can_redo()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_demonstrations_succeed() {
        demonstrate_spline_sampling(&Config::default()).unwrap();
        demonstrate_edit_history().unwrap();
    }
}
