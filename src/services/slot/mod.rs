// Slot service
// Single source of truth for the sparse (date, hour) -> TimeSlot store

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::slot::{SlotCategory, TimeSlot};
use crate::services::database::Database;
use crate::utils::date::week_dates;

/// Sparse in-memory snapshot of tracked hours, date -> hour -> slot.
/// Absence of an entry reads as untracked.
pub type WeekData = HashMap<NaiveDate, HashMap<u32, TimeSlot>>;

pub struct SlotService<'a> {
    db: &'a Database,
}

impl<'a> SlotService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Read one cell. A missing row is an untracked slot.
    pub fn get(&self, date: NaiveDate, hour: u32) -> Result<TimeSlot> {
        let conn = self.db.connection();
        let row = conn
            .query_row(
                "SELECT category, rating FROM time_slots WHERE date = ?1 AND hour = ?2",
                rusqlite::params![date, hour],
                |row| {
                    let category: String = row.get(0)?;
                    let rating: Option<u8> = row.get(1)?;
                    Ok((category, rating))
                },
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })
            .context("Failed to read time slot")?;

        match row {
            Some((category, rating)) => {
                let category = SlotCategory::parse(&category)
                    .map_err(|e| anyhow::anyhow!("Corrupt time slot row: {}", e))?;
                Ok(TimeSlot { category, rating })
            }
            None => Ok(TimeSlot::default()),
        }
    }

    /// Write one cell. Untracked slots delete the row so the store stays
    /// compact; reads treat absence as untracked either way.
    pub fn set(&self, date: NaiveDate, hour: u32, slot: TimeSlot) -> Result<()> {
        slot.validate()
            .map_err(|e| anyhow::anyhow!("Invalid time slot: {}", e))?;

        let conn = self.db.connection();
        if slot.is_untracked() {
            conn.execute(
                "DELETE FROM time_slots WHERE date = ?1 AND hour = ?2",
                rusqlite::params![date, hour],
            )
            .context("Failed to clear time slot")?;
            return Ok(());
        }

        // Ratings only carry meaning for ratable categories
        let rating = if slot.category.is_ratable() {
            slot.rating
        } else {
            None
        };

        conn.execute(
            "INSERT INTO time_slots (date, hour, category, rating)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (date, hour) DO UPDATE
             SET category = excluded.category,
                 rating = excluded.rating,
                 updated_at = CURRENT_TIMESTAMP",
            rusqlite::params![date, hour, slot.category.as_str(), rating],
        )
        .context("Failed to write time slot")?;

        Ok(())
    }

    /// Snapshot of the Monday-starting week containing `anchor`.
    pub fn week_data(&self, anchor: NaiveDate) -> Result<WeekData> {
        let dates = week_dates(anchor);
        let (start, end) = (dates[0], dates[6]);

        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT date, hour, category, rating FROM time_slots
                 WHERE date >= ?1 AND date <= ?2
                 ORDER BY date, hour",
            )
            .context("Failed to prepare week query")?;

        let rows = stmt
            .query_map(rusqlite::params![start, end], |row| {
                let date: NaiveDate = row.get(0)?;
                let hour: u32 = row.get(1)?;
                let category: String = row.get(2)?;
                let rating: Option<u8> = row.get(3)?;
                Ok((date, hour, category, rating))
            })
            .context("Failed to query week slots")?;

        let mut data = WeekData::new();
        for row in rows {
            let (date, hour, category, rating) = row.context("Failed to read week slot row")?;
            let category = match SlotCategory::parse(&category) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("Skipping corrupt slot row for {} {}: {}", date, hour, e);
                    continue;
                }
            };
            data.entry(date)
                .or_default()
                .insert(hour, TimeSlot { category, rating });
        }
        Ok(data)
    }
}

/// Read a cell out of an in-memory week snapshot.
pub fn slot_at(data: &WeekData, date: NaiveDate, hour: u32) -> TimeSlot {
    data.get(&date)
        .and_then(|hours| hours.get(&hour))
        .copied()
        .unwrap_or_default()
}
