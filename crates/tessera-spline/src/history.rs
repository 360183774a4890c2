//! Undoable edit history for a [`BezierSpline`].
//!
//! Edits are recorded with enough state to be reversed. The history lives next
//! to the spline rather than inside it; evaluation never sees it.

use glam::Vec3;

use crate::error::SplineError;
use crate::spline::BezierSpline;

/// A reversible change to a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplineEdit {
    /// A control point moved from `from` to `to`.
    MovePoint {
        /// Control point index.
        index: usize,
        /// Position before the edit.
        from: Vec3,
        /// Position after the edit.
        to: Vec3,
    },
    /// A curve with these three trailing control points was appended.
    AddCurve {
        /// The appended points.
        points: [Vec3; 3],
    },
}

impl SplineEdit {
    fn apply(&self, spline: &mut BezierSpline) -> Result<(), SplineError> {
        match *self {
            SplineEdit::MovePoint { index, to, .. } => {
                spline.set_control_point(index, to)?;
            }
            SplineEdit::AddCurve { points } => spline.append_curve(points),
        }
        Ok(())
    }

    fn revert(&self, spline: &mut BezierSpline) -> Result<(), SplineError> {
        match *self {
            SplineEdit::MovePoint { index, from, .. } => {
                spline.set_control_point(index, from)?;
            }
            SplineEdit::AddCurve { .. } => {
                spline.remove_last_curve()?;
            }
        }
        Ok(())
    }
}

/// Undo/redo stacks plus tracking of the last saved state.
#[derive(Clone, Debug)]
pub struct EditHistory {
    undo: Vec<SplineEdit>,
    redo: Vec<SplineEdit>,
    limit: Option<usize>,
    /// Steps from the current state back to the saved one.
    ///
    /// - `Some(0)`: the spline is in the saved state.
    /// - `Some(n)`, `n > 0`: `n` undos reach the saved state.
    /// - `Some(n)`, `n < 0`: `|n|` redos reach the saved state.
    /// - `None`: the saved state can no longer be reached.
    save_distance: Option<i64>,
}

impl Default for EditHistory {
    /// An empty history whose starting state counts as saved.
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: None,
            save_distance: Some(0),
        }
    }
}

impl EditHistory {
    /// An unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that keeps at most `limit` undo steps, dropping the oldest.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Applies `edit` to `spline` and records it.
    ///
    /// For [`SplineEdit::MovePoint`] the recorded `from` is the point's actual
    /// position before the move, whatever the caller passed.
    ///
    /// # Errors
    ///
    /// [`SplineError::ControlPointOutOfRange`] if a move targets a missing
    /// point; nothing is recorded.
    pub fn apply(
        &mut self,
        spline: &mut BezierSpline,
        edit: SplineEdit,
    ) -> Result<(), SplineError> {
        let recorded = match edit {
            SplineEdit::MovePoint { index, to, .. } => {
                let from = spline.set_control_point(index, to)?;
                SplineEdit::MovePoint { index, from, to }
            }
            SplineEdit::AddCurve { points } => {
                spline.append_curve(points);
                edit
            }
        };
        self.record(recorded);
        Ok(())
    }

    /// Moves a control point and records the edit.
    ///
    /// # Errors
    ///
    /// [`SplineError::ControlPointOutOfRange`] if `index` is past the end; the
    /// history is left untouched.
    pub fn move_point(
        &mut self,
        spline: &mut BezierSpline,
        index: usize,
        to: Vec3,
    ) -> Result<(), SplineError> {
        let from = spline.set_control_point(index, to)?;
        self.record(SplineEdit::MovePoint { index, from, to });
        Ok(())
    }

    /// Appends a curve and records the edit.
    pub fn add_curve(&mut self, spline: &mut BezierSpline) {
        let points = spline.add_curve();
        self.record(SplineEdit::AddCurve { points });
    }

    /// Reverts the most recent edit. Returns `false` if there was nothing to undo.
    ///
    /// # Errors
    ///
    /// Fails if the spline was changed outside this history so the edit no
    /// longer applies; the edit is kept on the undo stack.
    pub fn undo(&mut self, spline: &mut BezierSpline) -> Result<bool, SplineError> {
        let Some(edit) = self.undo.last().copied() else {
            return Ok(false);
        };
        edit.revert(spline)?;
        self.undo.pop();
        self.redo.push(edit);
        if let Some(d) = &mut self.save_distance {
            *d -= 1;
        }
        Ok(true)
    }

    /// Re-applies the most recently undone edit. Returns `false` if there was
    /// nothing to redo.
    ///
    /// # Errors
    ///
    /// Fails if the spline was changed outside this history so the edit no
    /// longer applies; the edit is kept on the redo stack.
    pub fn redo(&mut self, spline: &mut BezierSpline) -> Result<bool, SplineError> {
        let Some(edit) = self.redo.last().copied() else {
            return Ok(false);
        };
        edit.apply(spline)?;
        self.redo.pop();
        self.undo.push(edit);
        if let Some(d) = &mut self.save_distance {
            *d += 1;
        }
        Ok(true)
    }

    /// The edit that [`EditHistory::undo`] would revert next.
    pub fn last_edit(&self) -> Option<&SplineEdit> {
        self.undo.last()
    }

    /// `true` if an edit can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// `true` if an undone edit can be re-applied.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// `true` unless the spline is in the state last marked with
    /// [`EditHistory::mark_clean`]. Undoing and redoing back to that state
    /// makes the history clean again; a new edit after undoing past it, or
    /// the limit dropping it, loses it for good.
    pub fn is_dirty(&self) -> bool {
        self.save_distance != Some(0)
    }

    /// Marks the current state as saved.
    pub fn mark_clean(&mut self) {
        self.save_distance = Some(0);
    }

    fn record(&mut self, edit: SplineEdit) {
        // A saved state reachable only by redo is discarded with the redo stack.
        self.redo.clear();
        if let Some(d) = self.save_distance
            && d < 0
        {
            self.save_distance = None;
        }

        self.undo.push(edit);
        if let Some(d) = &mut self.save_distance {
            *d += 1;
        }

        if let Some(limit) = self.limit
            && self.undo.len() > limit
        {
            let excess = self.undo.len() - limit;
            self.undo.drain(..excess);
            if let Some(d) = self.save_distance
                && d > self.undo.len() as i64
            {
                self.save_distance = None;
            }
        }
    }
}
