//! Drag-selection state machine for the weekly board.
//!
//! Three observable states:
//! - Idle: no anchor, empty selection.
//! - Selecting: anchor set, gesture in progress, selection tracks the
//!   rectangle between the anchor and the last visited cell.
//! - Pending-Edit: gesture ended, selection retained, menu position set.
//!
//! Every anomaly (unknown date, stray gesture end) degrades to a no-op so
//! the grid can never reach a contradictory state.

use egui::{Pos2, Rect};

use super::day_labels::DayLabels;
use super::menu::menu_position;
use super::CellRef;

/// Explicit selection state shared by the pointer and touch paths.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Vec<CellRef>,
    anchor: Option<CellRef>,
    menu_pos: Option<Pos2>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture at `cell`.
    ///
    /// Always discards any previous selection, so starting a drag while a
    /// menu is open resets to the singleton start cell.
    pub fn begin_gesture(&mut self, cell: CellRef) {
        self.anchor = Some(cell);
        self.selected = vec![cell];
        self.menu_pos = None;
    }

    /// Extend the active gesture to `cell`, replacing the selection with
    /// the rectangle spanned by the anchor and `cell`.
    ///
    /// No-op when no gesture is active or either date is outside the
    /// visible week.
    pub fn extend_to(&mut self, cell: CellRef, labels: &DayLabels) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let rect = rectangle(labels, anchor, cell);
        if !rect.is_empty() {
            self.selected = rect;
        }
    }

    /// End the active gesture at screen position `pointer`, keeping the
    /// selection and placing the edit menu.
    ///
    /// A stray end with no active anchor changes nothing.
    pub fn end_gesture(&mut self, pointer: Pos2, container: Option<Rect>) {
        if self.anchor.is_none() {
            return;
        }
        self.anchor = None;
        self.menu_pos = Some(menu_position(pointer, container));
    }

    /// Dismiss the selection and menu (edit committed or menu closed).
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
        self.menu_pos = None;
    }

    /// Membership query used by the renderer per cell. Linear scan over at
    /// most 168 cells.
    pub fn is_selected(&self, cell: CellRef) -> bool {
        self.selected.contains(&cell)
    }

    /// Whether a gesture is currently in progress.
    pub fn is_selecting(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn selected(&self) -> &[CellRef] {
        &self.selected
    }

    pub fn first_selected(&self) -> Option<CellRef> {
        self.selected.first().copied()
    }

    /// Menu anchor, present only in Pending-Edit.
    pub fn menu_pos(&self) -> Option<Pos2> {
        if self.anchor.is_none() && !self.selected.is_empty() {
            self.menu_pos
        } else {
            None
        }
    }

    /// Take the selected cells, transitioning to Idle.
    pub(crate) fn take_selected(&mut self) -> Vec<CellRef> {
        let cells = std::mem::take(&mut self.selected);
        self.anchor = None;
        self.menu_pos = None;
        cells
    }
}

/// The contiguous rectangular block of cells spanned by two corner cells,
/// in column-major order.
///
/// Both corners map to day columns through `labels`; a failed lookup
/// yields an empty result rather than an error. Handles all four drag
/// directions by normalizing to min/max column and hour.
pub fn rectangle(labels: &DayLabels, a: CellRef, b: CellRef) -> Vec<CellRef> {
    let (Some(col_a), Some(col_b)) = (labels.column_index(a.date), labels.column_index(b.date))
    else {
        return Vec::new();
    };

    let (min_col, max_col) = (col_a.min(col_b), col_a.max(col_b));
    let (min_hour, max_hour) = (a.hour.min(b.hour), a.hour.max(b.hour));

    let mut cells = Vec::with_capacity((max_col - min_col + 1) * (max_hour - min_hour + 1) as usize);
    for col in min_col..=max_col {
        let Some(date) = labels.date_at(col) else {
            continue;
        };
        for hour in min_hour..=max_hour {
            cells.push(CellRef::new(date, hour));
        }
    }
    cells
}
