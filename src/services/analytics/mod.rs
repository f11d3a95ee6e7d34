// Analytics service
// Read-only aggregation of a week snapshot for the stats panel

use chrono::NaiveDate;

use crate::models::slot::SlotCategory;
use crate::services::slot::WeekData;
use crate::utils::date::{week_dates, weekday_short_name};

/// Per-day productive/unproductive hour counts for the focus chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTally {
    pub date: NaiveDate,
    pub name: &'static str,
    pub productive: u32,
    pub unproductive: u32,
}

/// Aggregated weekly statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub days: Vec<DayTally>,
    pub productive_hours: u32,
    pub unproductive_hours: u32,
    pub sleep_hours: u32,
    /// Productive share of tracked focus time, 0..=100. Zero when nothing
    /// is tracked.
    pub health: f32,
    /// Mean of all recorded ratings, when any exist.
    pub average_rating: Option<f32>,
}

impl WeekSummary {
    /// Day with the most productive hours, when any were tracked.
    pub fn most_productive_day(&self) -> Option<&DayTally> {
        self.days
            .iter()
            .filter(|d| d.productive > 0)
            .max_by_key(|d| d.productive)
    }
}

/// Summarize the Monday-starting week containing `anchor`.
pub fn summarize_week(data: &WeekData, anchor: NaiveDate) -> WeekSummary {
    let mut days = Vec::with_capacity(7);
    let mut sleep_hours = 0;
    let mut rating_sum = 0u32;
    let mut rating_count = 0u32;

    for date in week_dates(anchor) {
        let mut tally = DayTally {
            date,
            name: weekday_short_name(date),
            productive: 0,
            unproductive: 0,
        };
        if let Some(hours) = data.get(&date) {
            for slot in hours.values() {
                match slot.category {
                    SlotCategory::Productive => tally.productive += 1,
                    SlotCategory::Unproductive => tally.unproductive += 1,
                    SlotCategory::Sleep => sleep_hours += 1,
                    SlotCategory::Untracked => {}
                }
                if let Some(r) = slot.rating {
                    rating_sum += u32::from(r);
                    rating_count += 1;
                }
            }
        }
        days.push(tally);
    }

    let productive_hours: u32 = days.iter().map(|d| d.productive).sum();
    let unproductive_hours: u32 = days.iter().map(|d| d.unproductive).sum();
    let tracked = productive_hours + unproductive_hours;
    let health = if tracked == 0 {
        0.0
    } else {
        productive_hours as f32 / tracked as f32 * 100.0
    };
    let average_rating = if rating_count == 0 {
        None
    } else {
        Some(rating_sum as f32 / rating_count as f32)
    };

    WeekSummary {
        days,
        productive_hours,
        unproductive_hours,
        sleep_hours,
        health,
        average_rating,
    }
}
