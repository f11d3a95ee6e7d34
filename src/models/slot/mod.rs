// Slot module
// One hour-cell's recorded activity category and optional quality rating

use serde::{Deserialize, Serialize};

/// Activity category recorded for a single hour cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotCategory {
    Productive,
    Unproductive,
    Sleep,
    #[default]
    Untracked,
}

impl SlotCategory {
    /// Stable string form used for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Productive => "PRODUCTIVE",
            SlotCategory::Unproductive => "UNPRODUCTIVE",
            SlotCategory::Sleep => "SLEEP",
            SlotCategory::Untracked => "UNTRACKED",
        }
    }

    /// Parse the stored string form back into a category.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "PRODUCTIVE" => Ok(SlotCategory::Productive),
            "UNPRODUCTIVE" => Ok(SlotCategory::Unproductive),
            "SLEEP" => Ok(SlotCategory::Sleep),
            "UNTRACKED" => Ok(SlotCategory::Untracked),
            other => Err(format!("Unknown slot category: {}", other)),
        }
    }

    /// Whether a quality rating is meaningful for this category.
    /// Sleep and untracked hours carry no rating semantics.
    pub fn is_ratable(&self) -> bool {
        matches!(self, SlotCategory::Productive | SlotCategory::Unproductive)
    }
}

/// One hour-cell of the weekly board.
///
/// A missing entry in the store reads as `Untracked`, so `TimeSlot::default()`
/// is the canonical "empty" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "type")]
    pub category: SlotCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl TimeSlot {
    /// Create a slot with validation of the rating range.
    ///
    /// # Examples
    /// ```
    /// use chronos_board::models::slot::{SlotCategory, TimeSlot};
    ///
    /// let slot = TimeSlot::new(SlotCategory::Productive, Some(4)).unwrap();
    /// assert_eq!(slot.rating, Some(4));
    /// ```
    pub fn new(category: SlotCategory, rating: Option<u8>) -> Result<Self, String> {
        if let Some(r) = rating {
            if !(1..=5).contains(&r) {
                return Err(format!("Rating must be between 1 and 5, got {}", r));
            }
        }
        Ok(Self { category, rating })
    }

    /// Shorthand for an unrated slot of the given category.
    pub fn of(category: SlotCategory) -> Self {
        Self {
            category,
            rating: None,
        }
    }

    /// Whether this slot is semantically empty (equivalent to absence).
    pub fn is_untracked(&self) -> bool {
        self.category == SlotCategory::Untracked
    }

    /// Validate the slot invariants.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(r) = self.rating {
            if !(1..=5).contains(&r) {
                return Err(format!("Rating must be between 1 and 5, got {}", r));
            }
        }
        Ok(())
    }
}
