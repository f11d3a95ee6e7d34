//! Ordered day labels for the visible week.
//!
//! Supplies the positional column index <-> date translation that the
//! selection rectangle is computed in. Index 0 is always the week's Monday.

use chrono::{Datelike, NaiveDate};

use super::DAYS_PER_WEEK;
use crate::utils::date::{week_dates, weekday_short_name};

/// Header entry for one day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub date: NaiveDate,
    pub display_name: String,
    pub day_of_month: u32,
}

/// The ordered 7-entry sequence of day columns currently on screen.
///
/// Regenerated (never mutated) whenever the week anchor changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabels {
    labels: Vec<DayLabel>,
}

impl DayLabels {
    /// Build labels for the Monday-starting week containing `anchor`.
    pub fn for_week(anchor: NaiveDate) -> Self {
        let labels: Vec<DayLabel> = week_dates(anchor)
            .into_iter()
            .map(|date| DayLabel {
                date,
                display_name: weekday_short_name(date).to_string(),
                day_of_month: date.day(),
            })
            .collect();
        debug_assert_eq!(labels.len(), DAYS_PER_WEEK);
        Self { labels }
    }

    /// 0-based column index of `date` in the visible week, or `None`
    /// when the date is not part of it.
    pub fn column_index(&self, date: NaiveDate) -> Option<usize> {
        self.labels.iter().position(|label| label.date == date)
    }

    /// Date shown in column `index`.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.labels.get(index).map(|label| label.date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
