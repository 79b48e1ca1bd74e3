// Touch gesture classification: one finger pans, two fingers pinch.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::state::drag::DragState;

/// A single contact point in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn distance_to(self, other: TouchPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// The gesture in progress, carrying the snapshots taken at its start.
///
/// One variant is active at a time, so a pan and a pinch can never overlap.
#[derive(Debug, Clone, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// One-finger pan. Translation is re-derived from the gesture origin on
    /// every move rather than accumulated, so jittery or dropped touch events
    /// cannot make the image drift.
    Panning {
        start_x: f64,
        start_y: f64,
        start_translate_x: f64,
        start_translate_y: f64,
    },
    /// Two-finger pinch. `center_x`/`center_y` record the midpoint of the two
    /// contacts at pinch start (kept for pivot-aware zoom; unused so far).
    Pinching {
        start_distance: f64,
        start_scale: f64,
        #[allow(dead_code)]
        center_x: f64,
        #[allow(dead_code)]
        center_y: f64,
    },
}

/// Classifies raw touch contacts into pan vs. pinch and applies the result.
///
/// The pan branch writes into the same [`DragState`] translation sink the
/// mouse path writes into; the pinch branch writes a clamped scale through the
/// caller-supplied reference. Driving both paths with mouse and touch at once
/// is unsupported.
#[derive(Debug, Clone)]
pub struct TouchGesture {
    pub phase: GesturePhase,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl TouchGesture {
    /// `min_scale` and `max_scale` bound every scale value this gesture emits.
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        debug_assert!(min_scale <= max_scale);
        Self {
            phase: GesturePhase::Idle,
            min_scale,
            max_scale,
        }
    }

    /// Re-classify on every touch-start: exactly one contact begins a pan,
    /// exactly two begin a pinch, any other count leaves the phase untouched.
    ///
    /// A second finger landing mid-pan switches straight to pinch; the pan
    /// snapshot is discarded.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint], current_scale: f64, drag: &DragState) {
        match touches {
            [t] => {
                self.phase = GesturePhase::Panning {
                    start_x: t.x,
                    start_y: t.y,
                    start_translate_x: drag.translate_x,
                    start_translate_y: drag.translate_y,
                };
            }
            [a, b] => {
                let start_distance = a.distance_to(*b);
                log::debug!("pinch start: distance {start_distance:.1}");
                self.phase = GesturePhase::Pinching {
                    start_distance,
                    start_scale: current_scale,
                    center_x: (a.x + b.x) / 2.0,
                    center_y: (a.y + b.y) / 2.0,
                };
            }
            _ => {}
        }
    }

    /// Apply a touch-move to whichever gesture is active.
    ///
    /// Pan writes `start_translate + (current - start)` into the drag state.
    /// Pinch writes `clamp(start_scale * current_distance / start_distance)`
    /// through `scale`. A pinch that started with both fingers on the same
    /// point has no usable reference distance and leaves the scale alone.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint], drag: &mut DragState, scale: &mut f64) {
        match (&self.phase, touches) {
            (
                GesturePhase::Panning {
                    start_x,
                    start_y,
                    start_translate_x,
                    start_translate_y,
                },
                [t],
            ) => {
                drag.translate_x = start_translate_x + (t.x - start_x);
                drag.translate_y = start_translate_y + (t.y - start_y);
            }
            (
                GesturePhase::Pinching {
                    start_distance,
                    start_scale,
                    ..
                },
                [a, b],
            ) if *start_distance > 0.0 => {
                let ratio = a.distance_to(*b) / start_distance;
                *scale = (start_scale * ratio).clamp(self.min_scale, self.max_scale);
            }
            _ => {}
        }
    }

    /// Touch-end/cancel returns to idle unconditionally. A finger surviving a
    /// two-finger gesture must re-enter through a fresh touch-start; there is
    /// no seamless two-to-one continuation.
    pub fn on_touch_end(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, GesturePhase::Pinching { .. })
    }
}
