//! Grid interaction core for the weekly board.
//!
//! Owns the drag-selection state machine, the day-column mapping, touch
//! synthesis, edit-menu placement, and bulk application of slot edits.
//! Presentation-free: the egui layer feeds events in and reads state out.

pub mod day_labels;
pub mod editor;
pub mod menu;
pub mod selection;
pub mod touch;

pub use day_labels::{DayLabel, DayLabels};
pub use selection::SelectionState;
pub use touch::{HitTest, TouchAdapter};

use chrono::NaiveDate;

pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of the 7-day x 24-hour board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub date: NaiveDate,
    pub hour: u32,
}

impl CellRef {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }
}
