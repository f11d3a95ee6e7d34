//! Weekly board rendering and gesture wiring.
//!
//! Paints the 7-column x 24-row grid, records every cell rect into a
//! frame-local hit-test, and routes pointer/touch input into the shared
//! selection state. Touch frames bypass the pointer path entirely so that
//! draw mode can decide whether a touch draws or scrolls.

use chrono::Local;
use egui::{pos2, vec2, Align2, Event, FontId, Pos2, Rect, Sense, Stroke, TouchPhase};

use super::palette::BoardPalette;
use crate::grid::{CellRef, DayLabels, HitTest, SelectionState, TouchAdapter, HOURS_PER_DAY};
use crate::services::slot::{slot_at, WeekData};

pub const HOUR_LABEL_WIDTH: f32 = 50.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const CELL_HEIGHT: f32 = 22.0;
pub const CELL_SPACING: f32 = 2.0;

/// Frame-local mapping from rendered cell rects to board cells.
#[derive(Default)]
pub struct GridHitTest {
    cells: Vec<(Rect, CellRef)>,
}

impl GridHitTest {
    fn record(&mut self, rect: Rect, cell: CellRef) {
        self.cells.push((rect, cell));
    }
}

impl HitTest for GridHitTest {
    fn cell_at(&self, pos: Pos2) -> Option<CellRef> {
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, cell)| *cell)
    }
}

/// Render the full weekly board and feed this frame's input into the
/// selection state. Returns the board's container rect, which anchors the
/// floating edit menu.
pub fn render_week_grid(
    ui: &mut egui::Ui,
    labels: &DayLabels,
    week: &WeekData,
    selection: &mut SelectionState,
    touch: &TouchAdapter,
    palette: &BoardPalette,
    time_format: &str,
) -> Rect {
    let width = ui.available_width();
    let height = HEADER_HEIGHT + HOURS_PER_DAY as f32 * (CELL_HEIGHT + CELL_SPACING);
    let (grid_rect, _response) =
        ui.allocate_exact_size(vec2(width, height), Sense::click_and_drag());

    let painter = ui.painter_at(grid_rect);
    painter.rect_filled(grid_rect, 8.0, palette.grid_bg);

    let col_width =
        (grid_rect.width() - HOUR_LABEL_WIDTH - CELL_SPACING * 7.0) / labels.len().max(1) as f32;
    let today = Local::now().date_naive();

    // Header row: short weekday name over day-of-month
    for (col, label) in labels.iter().enumerate() {
        let x = grid_rect.left() + HOUR_LABEL_WIDTH + CELL_SPACING + col as f32 * (col_width + CELL_SPACING);
        let center = pos2(x + col_width / 2.0, grid_rect.top() + HEADER_HEIGHT / 2.0);
        let color = if label.date == today {
            palette.today_text
        } else {
            palette.header_text
        };
        painter.text(
            center - vec2(0.0, 7.0),
            Align2::CENTER_CENTER,
            &label.display_name,
            FontId::proportional(11.0),
            color,
        );
        painter.text(
            center + vec2(0.0, 8.0),
            Align2::CENTER_CENTER,
            label.day_of_month.to_string(),
            FontId::proportional(12.0),
            color,
        );
    }

    // Cell grid, one row per hour with the hour label on the left
    let mut hit_test = GridHitTest::default();
    for hour in 0..HOURS_PER_DAY {
        let y = grid_rect.top() + HEADER_HEIGHT + hour as f32 * (CELL_HEIGHT + CELL_SPACING);

        painter.text(
            pos2(grid_rect.left() + HOUR_LABEL_WIDTH - 6.0, y + CELL_HEIGHT / 2.0),
            Align2::RIGHT_CENTER,
            format_hour(hour, time_format),
            FontId::monospace(10.0),
            palette.hour_text,
        );

        for (col, label) in labels.iter().enumerate() {
            let x = grid_rect.left()
                + HOUR_LABEL_WIDTH
                + CELL_SPACING
                + col as f32 * (col_width + CELL_SPACING);
            let cell_rect = Rect::from_min_size(pos2(x, y), vec2(col_width, CELL_HEIGHT));
            let cell = CellRef::new(label.date, hour);
            hit_test.record(cell_rect, cell);

            let slot = slot_at(week, cell.date, cell.hour);
            painter.rect(
                cell_rect,
                3.0,
                palette.slot_color(slot),
                Stroke::new(1.0, palette.cell_border),
            );

            if selection.is_selected(cell) {
                painter.rect(
                    cell_rect,
                    3.0,
                    palette.selection_fill,
                    Stroke::new(1.5, palette.selection_border),
                );
            }
        }
    }

    handle_input(ui, grid_rect, &hit_test, labels, selection, touch);
    grid_rect
}

/// Hour label honoring the persisted time format setting.
fn format_hour(hour: u32, time_format: &str) -> String {
    if time_format == "12h" {
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let display = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{} {}", display, meridiem)
    } else {
        format!("{:02}:00", hour)
    }
}

/// Route this frame's input into the selection state machine.
fn handle_input(
    ui: &egui::Ui,
    grid_rect: Rect,
    hit_test: &GridHitTest,
    labels: &DayLabels,
    selection: &mut SelectionState,
    touch: &TouchAdapter,
) {
    let any_touch = ui.input(|i| i.any_touches());

    if any_touch {
        let events: Vec<Event> = ui.input(|i| i.events.clone());
        for event in events {
            let Event::Touch { phase, pos, .. } = event else {
                continue;
            };
            match phase {
                TouchPhase::Start => {
                    if let Some(cell) = hit_test.cell_at(pos) {
                        touch.touch_start(selection, cell);
                    }
                }
                TouchPhase::Move => touch.touch_move(selection, labels, hit_test, pos),
                TouchPhase::End => touch.touch_end(selection, pos, Some(grid_rect)),
                TouchPhase::Cancel => {}
            }
        }
        return;
    }

    let (pressed, down, released, pointer_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });
    let Some(pos) = pointer_pos else {
        return;
    };

    // A floating layer over the board (the open edit menu) owns presses and
    // drags at its position; only releases stay global.
    let foreign_layer = ui
        .ctx()
        .layer_id_at(pos)
        .is_some_and(|layer| layer != ui.layer_id());
    if foreign_layer && !released {
        return;
    }

    if pressed {
        // Presses outside the grid miss the hit-test and start nothing
        if let Some(cell) = hit_test.cell_at(pos) {
            selection.begin_gesture(cell);
        }
    } else if down && selection.is_selecting() {
        // Dragging over a gap or outside the grid leaves the rectangle as-is
        if let Some(cell) = hit_test.cell_at(pos) {
            selection.extend_to(cell, labels);
        }
    } else if released {
        // Release anywhere ends the gesture, like the original global mouseup
        selection.end_gesture(pos, Some(grid_rect));
    }
}
