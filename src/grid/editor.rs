//! Bulk application of slot edits to the current selection.
//!
//! The store is mutated exclusively through the injected per-cell write
//! callback; every selected cell receives the identical value and the
//! selection is cleared afterwards (Pending-Edit -> Idle).

use crate::models::slot::{SlotCategory, TimeSlot};

use super::selection::SelectionState;
use super::CellRef;

/// Apply `category` and `rating` to every selected cell, then clear the
/// selection. A no-op when nothing is selected.
pub fn apply(
    state: &mut SelectionState,
    category: SlotCategory,
    rating: Option<u8>,
    mut write: impl FnMut(CellRef, TimeSlot),
) {
    if state.selected().is_empty() {
        return;
    }
    let slot = TimeSlot { category, rating };
    for cell in state.take_selected() {
        write(cell, slot);
    }
}

/// Rating-only adjustment.
///
/// The first selected cell's existing category decides the result for the
/// whole selection: untracked or sleep cells coerce to productive at the
/// chosen rating, any other category is preserved with the new rating.
/// A mixed selection always normalizes to the first cell's category.
pub fn apply_rating(
    state: &mut SelectionState,
    rating: u8,
    read: impl Fn(CellRef) -> TimeSlot,
    write: impl FnMut(CellRef, TimeSlot),
) {
    let Some(first) = state.first_selected() else {
        return;
    };
    let current = read(first);
    let target = match current.category {
        SlotCategory::Untracked | SlotCategory::Sleep => SlotCategory::Productive,
        other => other,
    };
    apply(state, target, Some(rating), write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::day_labels::DayLabels;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn selection_of_nine() -> SelectionState {
        let labels = DayLabels::for_week(date(3));
        let mut state = SelectionState::new();
        state.begin_gesture(CellRef::new(date(3), 9));
        state.extend_to(CellRef::new(date(5), 11), &labels);
        state.end_gesture(egui::pos2(0.0, 0.0), None);
        state
    }

    #[test]
    fn test_apply_writes_every_cell_identically() {
        let mut state = selection_of_nine();
        let mut written: HashMap<CellRef, TimeSlot> = HashMap::new();

        apply(&mut state, SlotCategory::Sleep, None, |cell, slot| {
            written.insert(cell, slot);
        });

        assert_eq!(written.len(), 9);
        assert!(written
            .values()
            .all(|slot| *slot == TimeSlot::of(SlotCategory::Sleep)));
        assert!(state.selected().is_empty());
        assert_eq!(state.menu_pos(), None);
    }

    #[test]
    fn test_apply_single_cell_scenario() {
        let labels = DayLabels::for_week(date(3));
        let mut state = SelectionState::new();
        state.begin_gesture(CellRef::new(date(3), 9));
        state.extend_to(CellRef::new(date(3), 9), &labels);
        state.end_gesture(egui::pos2(0.0, 0.0), None);

        let mut written = Vec::new();
        apply(&mut state, SlotCategory::Productive, Some(3), |cell, slot| {
            written.push((cell, slot));
        });

        assert_eq!(
            written,
            vec![(
                CellRef::new(date(3), 9),
                TimeSlot::new(SlotCategory::Productive, Some(3)).unwrap()
            )]
        );
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_apply_empty_selection_is_noop() {
        let mut state = SelectionState::new();
        let mut calls = 0;
        apply(&mut state, SlotCategory::Productive, Some(3), |_, _| {
            calls += 1;
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_apply_overwrites_prior_rating() {
        let mut state = selection_of_nine();
        let mut written = Vec::new();
        apply(&mut state, SlotCategory::Unproductive, None, |_, slot| {
            written.push(slot);
        });
        assert!(written.iter().all(|slot| slot.rating.is_none()));
    }

    #[test]
    fn test_rating_on_untracked_first_cell_coerces_to_productive() {
        let mut state = selection_of_nine();
        let mut written = Vec::new();

        apply_rating(
            &mut state,
            4,
            |_| TimeSlot::default(),
            |cell, slot| written.push((cell, slot)),
        );

        assert_eq!(written.len(), 9);
        assert!(written.iter().all(|(_, slot)| {
            slot.category == SlotCategory::Productive && slot.rating == Some(4)
        }));
    }

    #[test]
    fn test_rating_on_sleep_first_cell_coerces_to_productive() {
        let mut state = selection_of_nine();
        let mut written = Vec::new();

        apply_rating(
            &mut state,
            2,
            |_| TimeSlot::of(SlotCategory::Sleep),
            |_, slot| written.push(slot),
        );

        assert!(written
            .iter()
            .all(|slot| slot.category == SlotCategory::Productive));
    }

    #[test]
    fn test_rating_preserves_existing_ratable_category() {
        let mut state = selection_of_nine();
        let mut written = Vec::new();

        apply_rating(
            &mut state,
            5,
            |_| TimeSlot::new(SlotCategory::Unproductive, Some(1)).unwrap(),
            |_, slot| written.push(slot),
        );

        assert!(written.iter().all(|slot| {
            slot.category == SlotCategory::Unproductive && slot.rating == Some(5)
        }));
    }

    #[test]
    fn test_mixed_selection_normalizes_to_first_cell() {
        let mut state = selection_of_nine();
        let first = state.first_selected().unwrap();
        let mut written = Vec::new();

        // Only the first cell is productive; the rest are sleep. The whole
        // selection still lands on the first cell's category.
        apply_rating(
            &mut state,
            3,
            |cell| {
                if cell == first {
                    TimeSlot::new(SlotCategory::Productive, Some(2)).unwrap()
                } else {
                    TimeSlot::of(SlotCategory::Sleep)
                }
            },
            |_, slot| written.push(slot),
        );

        assert_eq!(written.len(), 9);
        assert!(written
            .iter()
            .all(|slot| slot.category == SlotCategory::Productive && slot.rating == Some(3)));
    }

    #[test]
    fn test_rating_empty_selection_is_noop() {
        let mut state = SelectionState::new();
        let mut calls = 0;
        apply_rating(
            &mut state,
            3,
            |_| TimeSlot::default(),
            |_, _| calls += 1,
        );
        assert_eq!(calls, 0);
    }
}
