// Pan translation state shared by the mouse and touch input paths.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Cumulative pan offset plus the reference point of the gesture in progress.
///
/// `translate_x`/`translate_y` are the authoritative visual offset in CSS
/// pixels. They only change while `active` is true, by exactly the delta
/// between consecutive reported positions.
#[derive(Default, Debug, Clone)]
pub struct DragState {
    pub active: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl DragState {
    /// Begin a drag at the given pointer position.
    pub fn start_drag(&mut self, x: f64, y: f64) {
        self.active = true;
        self.start_x = x;
        self.start_y = y;
    }

    /// Accumulate the delta from the previous position, then re-reference.
    ///
    /// Each move folds `(x, y) - (start_x, start_y)` into the translation and
    /// makes `(x, y)` the new reference point, so the result is the same no
    /// matter how many intermediate positions the browser skipped.
    pub fn on_drag_move(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        self.translate_x += x - self.start_x;
        self.translate_y += y - self.start_y;
        self.start_x = x;
        self.start_y = y;
    }

    /// End the drag. The accumulated translation persists after release.
    pub fn end_drag(&mut self) {
        self.active = false;
    }

    /// Zero the translation. Does not touch `active`.
    pub fn reset_position(&mut self) {
        self.translate_x = 0.0;
        self.translate_y = 0.0;
    }
}
