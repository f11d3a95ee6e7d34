//! Floating edit menu shown over the board after a selection gesture.
//!
//! Pure rendering: emits an [`EditMenuAction`] and leaves the actual store
//! mutation to the app, which routes it through the bulk editor.

use egui::{pos2, Color32, Rect, RichText, Stroke};

use crate::grid::menu::MENU_WIDTH;
use crate::grid::SelectionState;
use crate::models::slot::SlotCategory;

/// What the user chose in the edit menu this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMenuAction {
    None,
    /// Category button: identical slot for every selected cell.
    Apply {
        category: SlotCategory,
        rating: Option<u8>,
    },
    /// Rating-only button: resulting category follows the first selected
    /// cell (see the bulk editor's coercion rule).
    ApplyRating(u8),
    Dismiss,
}

/// Render the menu anchored at the selection's menu position, relative to
/// `grid_rect`. Returns the chosen action; `None` while the menu stays open.
pub fn render_edit_menu(
    ctx: &egui::Context,
    grid_rect: Rect,
    selection: &SelectionState,
) -> EditMenuAction {
    let Some(menu_pos) = selection.menu_pos() else {
        return EditMenuAction::None;
    };

    let screen_pos = pos2(
        grid_rect.left() + menu_pos.x,
        grid_rect.top() + menu_pos.y + 10.0,
    );
    let count = selection.selected().len();
    let mut action = EditMenuAction::None;

    let area = egui::Area::new(egui::Id::new("slot_edit_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen_pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .stroke(Stroke::new(1.0, Color32::from_rgb(63, 63, 70)))
                .show(ui, |ui| {
                    ui.set_width(MENU_WIDTH - 20.0);

                    let heading = if count > 1 {
                        format!("{} Cells", count)
                    } else {
                        let hour = selection.first_selected().map(|c| c.hour).unwrap_or(0);
                        format!("{:02}:00 HRS", hour)
                    };
                    ui.label(
                        RichText::new(if count > 1 { "EDIT MULTIPLE" } else { "EDIT SLOT" })
                            .size(9.0)
                            .color(Color32::from_rgb(16, 185, 129)),
                    );
                    ui.heading(heading);
                    ui.separator();

                    ui.horizontal(|ui| {
                        if ui.button("✨ Deep").clicked() {
                            action = EditMenuAction::Apply {
                                category: SlotCategory::Productive,
                                rating: Some(3),
                            };
                        }
                        if ui.button("⊘ Leak").clicked() {
                            action = EditMenuAction::Apply {
                                category: SlotCategory::Unproductive,
                                rating: Some(3),
                            };
                        }
                        if ui.button("🌙 Rest").clicked() {
                            action = EditMenuAction::Apply {
                                category: SlotCategory::Sleep,
                                rating: Some(3),
                            };
                        }
                        if ui.button("Clear").clicked() {
                            action = EditMenuAction::Apply {
                                category: SlotCategory::Untracked,
                                rating: None,
                            };
                        }
                    });

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Focus Level").size(9.0).weak());
                        ui.label(RichText::new("1 - 5").size(9.0).weak());
                    });
                    ui.horizontal(|ui| {
                        for rating in 1..=5u8 {
                            if ui.button(rating.to_string()).clicked() {
                                action = EditMenuAction::ApplyRating(rating);
                            }
                        }
                    });
                });
        });

    // Click anywhere outside the menu dismisses it (backdrop behavior)
    if action == EditMenuAction::None {
        let menu_rect = area.response.rect;
        let clicked_outside = ctx.input(|i| {
            i.pointer.any_pressed()
                && i.pointer
                    .interact_pos()
                    .map(|pos| !menu_rect.contains(pos))
                    .unwrap_or(false)
        });
        if clicked_outside {
            action = EditMenuAction::Dismiss;
        }
    }

    action
}

/// Small helper used by the draw-mode toggle to explain the trade-off.
pub fn draw_mode_hint(enabled: bool) -> &'static str {
    if enabled {
        "Draw mode on: drag to select, scrolling disabled"
    } else {
        "Draw mode off: touch scrolls the page"
    }
}
