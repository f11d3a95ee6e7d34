// Integration tests for slot and settings persistence
use chrono::NaiveDate;
use chronos_board::models::slot::{SlotCategory, TimeSlot};
use chronos_board::services::database::Database;
use chronos_board::services::settings::SettingsService;
use chronos_board::services::slot::{slot_at, SlotService};
use serial_test::serial;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_database(dir: &TempDir) -> Database {
    let path = dir.path().join("chronos_test.db");
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

#[test]
#[serial]
fn test_slot_persistence_across_reopen() {
    let dir = TempDir::new().unwrap();
    let monday = date(2024, 6, 3);

    // First session: paint a morning block
    {
        let db = open_database(&dir);
        let slots = SlotService::new(&db);
        for hour in 9..12 {
            slots
                .set(
                    monday,
                    hour,
                    TimeSlot::new(SlotCategory::Productive, Some(4)).unwrap(),
                )
                .expect("Failed to write slot");
        }
        slots
            .set(monday, 23, TimeSlot::of(SlotCategory::Sleep))
            .expect("Failed to write slot");
    }

    // Second session: everything survives the reopen
    {
        let db = open_database(&dir);
        let slots = SlotService::new(&db);
        let week = slots.week_data(monday).expect("Failed to load week");

        for hour in 9..12 {
            assert_eq!(
                slot_at(&week, monday, hour),
                TimeSlot::new(SlotCategory::Productive, Some(4)).unwrap()
            );
        }
        assert_eq!(
            slot_at(&week, monday, 23),
            TimeSlot::of(SlotCategory::Sleep)
        );
        assert!(slot_at(&week, monday, 8).is_untracked());
    }
}

#[test]
#[serial]
fn test_clearing_slots_compacts_storage() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let slots = SlotService::new(&db);
    let monday = date(2024, 6, 3);

    slots
        .set(
            monday,
            9,
            TimeSlot::new(SlotCategory::Unproductive, Some(2)).unwrap(),
        )
        .unwrap();
    slots.set(monday, 9, TimeSlot::default()).unwrap();

    let remaining: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM time_slots", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
    assert!(slots.get(monday, 9).unwrap().is_untracked());
}

#[test]
#[serial]
fn test_settings_persistence() {
    let dir = TempDir::new().unwrap();

    {
        let db = open_database(&dir);
        let settings_service = SettingsService::new(&db);

        let mut settings = settings_service.get().expect("Failed to get settings");
        assert_eq!(settings.theme, "dark");
        assert!(settings.show_analytics);

        settings.theme = "light".to_string();
        settings.show_analytics = false;
        settings_service
            .update(&settings)
            .expect("Failed to update settings");
    }

    {
        let db = open_database(&dir);
        let loaded = SettingsService::new(&db).get().expect("Failed to load settings");
        assert_eq!(loaded.theme, "light");
        assert!(!loaded.show_analytics);
    }
}

#[test]
#[serial]
fn test_bulk_edit_round_trip() {
    // Full flow: drag a rectangle, apply a category, read it back
    use chronos_board::grid::{editor, CellRef, DayLabels, SelectionState};

    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let slots = SlotService::new(&db);
    let monday = date(2024, 6, 3);
    let labels = DayLabels::for_week(monday);

    let mut selection = SelectionState::new();
    selection.begin_gesture(CellRef::new(monday, 9));
    selection.extend_to(CellRef::new(date(2024, 6, 5), 11), &labels);
    selection.end_gesture(egui::pos2(0.0, 0.0), None);
    assert_eq!(selection.selected().len(), 9);

    editor::apply(
        &mut selection,
        SlotCategory::Productive,
        Some(3),
        |cell, slot| {
            slots.set(cell.date, cell.hour, slot).unwrap();
        },
    );
    assert!(selection.selected().is_empty());

    let week = slots.week_data(monday).unwrap();
    for d in 3..=5 {
        for hour in 9..=11 {
            assert_eq!(
                slot_at(&week, date(2024, 6, d), hour),
                TimeSlot::new(SlotCategory::Productive, Some(3)).unwrap()
            );
        }
    }
}
