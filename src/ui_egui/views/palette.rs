use egui::Color32;

use crate::models::slot::{SlotCategory, TimeSlot};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the weekly board cells.
///
/// Productive and unproductive hours deepen with their rating (index 0 is
/// the unrated shade); sleep and untracked are flat.
#[derive(Clone, Copy)]
pub(crate) struct BoardPalette {
    pub grid_bg: Color32,
    pub cell_border: Color32,
    pub header_text: Color32,
    pub hour_text: Color32,
    pub selection_border: Color32,
    pub selection_fill: Color32,
    pub today_text: Color32,
    productive: [Color32; 6],
    unproductive: [Color32; 6],
    sleep: Color32,
    untracked: Color32,
}

impl BoardPalette {
    pub fn dark() -> Self {
        Self {
            grid_bg: Color32::from_rgb(12, 12, 14),
            cell_border: Color32::from_rgb(39, 39, 42),
            header_text: Color32::from_rgb(161, 161, 170),
            hour_text: Color32::GRAY,
            selection_border: Color32::WHITE,
            selection_fill: with_alpha(Color32::WHITE, 26),
            today_text: Color32::from_rgb(16, 185, 129),
            productive: [
                Color32::from_rgb(39, 39, 42),
                with_alpha(Color32::from_rgb(2, 44, 34), 140),
                with_alpha(Color32::from_rgb(6, 78, 59), 180),
                with_alpha(Color32::from_rgb(4, 120, 87), 210),
                Color32::from_rgb(5, 150, 105),
                Color32::from_rgb(16, 185, 129),
            ],
            unproductive: [
                Color32::from_rgb(39, 39, 42),
                with_alpha(Color32::from_rgb(76, 5, 25), 140),
                with_alpha(Color32::from_rgb(136, 19, 55), 180),
                with_alpha(Color32::from_rgb(190, 18, 60), 210),
                Color32::from_rgb(225, 29, 72),
                Color32::from_rgb(244, 63, 94),
            ],
            sleep: with_alpha(Color32::from_rgb(99, 102, 241), 200),
            untracked: Color32::TRANSPARENT,
        }
    }

    pub fn light() -> Self {
        Self {
            grid_bg: Color32::from_rgb(250, 250, 250),
            cell_border: Color32::from_rgb(212, 212, 216),
            header_text: Color32::from_rgb(82, 82, 91),
            hour_text: Color32::from_rgb(113, 113, 122),
            selection_border: Color32::BLACK,
            selection_fill: with_alpha(Color32::BLACK, 20),
            today_text: Color32::from_rgb(5, 150, 105),
            productive: [
                Color32::from_rgb(228, 228, 231),
                Color32::from_rgb(209, 250, 229),
                Color32::from_rgb(167, 243, 208),
                Color32::from_rgb(110, 231, 183),
                Color32::from_rgb(52, 211, 153),
                Color32::from_rgb(16, 185, 129),
            ],
            unproductive: [
                Color32::from_rgb(228, 228, 231),
                Color32::from_rgb(255, 228, 230),
                Color32::from_rgb(254, 205, 211),
                Color32::from_rgb(253, 164, 175),
                Color32::from_rgb(251, 113, 133),
                Color32::from_rgb(244, 63, 94),
            ],
            sleep: Color32::from_rgb(129, 140, 248),
            untracked: Color32::TRANSPARENT,
        }
    }

    pub fn from_theme(theme: &str) -> Self {
        if theme == "light" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Fill color for a cell, rating-ramped where the category supports it.
    pub fn slot_color(&self, slot: TimeSlot) -> Color32 {
        let ramp_index = slot.rating.map(usize::from).unwrap_or(0).min(5);
        match slot.category {
            SlotCategory::Productive => self.productive[ramp_index],
            SlotCategory::Unproductive => self.unproductive[ramp_index],
            SlotCategory::Sleep => self.sleep,
            SlotCategory::Untracked => self.untracked,
        }
    }
}
