//! Touch synthesis for the drag-selection gesture.
//!
//! Touch input has no per-cell "pointer enter" events, so moves are
//! resolved against the rendered cells through the `HitTest` trait. Touch
//! drawing and touch scrolling are mutually exclusive on the same surface,
//! so gestures are only honored while draw mode is armed; with draw mode
//! off every touch is left alone and native scrolling wins.

use egui::{Pos2, Rect};

#[cfg(test)]
use mockall::automock;

use super::day_labels::DayLabels;
use super::selection::SelectionState;
use super::CellRef;

/// Resolves a screen coordinate to the grid cell rendered there.
///
/// Implemented by the UI layer from the cell rects recorded during the
/// current frame; mocked in tests.
#[cfg_attr(test, automock)]
pub trait HitTest {
    fn cell_at(&self, pos: Pos2) -> Option<CellRef>;
}

/// Routes touch events into the shared [`SelectionState`].
#[derive(Debug, Clone, Default)]
pub struct TouchAdapter {
    draw_mode: bool,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, enabled: bool) {
        self.draw_mode = enabled;
    }

    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = !self.draw_mode;
    }

    /// Touch landed on `cell`. Starts a gesture only while draw mode is
    /// armed; otherwise the touch is ignored entirely.
    pub fn touch_start(&self, state: &mut SelectionState, cell: CellRef) {
        if !self.draw_mode {
            return;
        }
        state.begin_gesture(cell);
    }

    /// Finger moved to screen position `pos`. Hit-tests the position and
    /// extends the rectangle; a miss (finger outside the grid) is an
    /// ignored move.
    pub fn touch_move(
        &self,
        state: &mut SelectionState,
        labels: &DayLabels,
        hit_test: &dyn HitTest,
        pos: Pos2,
    ) {
        if !self.draw_mode || !state.is_selecting() {
            return;
        }
        if let Some(cell) = hit_test.cell_at(pos) {
            state.extend_to(cell, labels);
        }
    }

    /// Finger lifted at screen position `pos`. Ends the gesture exactly
    /// like a pointer release.
    pub fn touch_end(&self, state: &mut SelectionState, pos: Pos2, container: Option<Rect>) {
        state.end_gesture(pos, container);
    }
}
