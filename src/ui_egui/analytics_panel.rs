//! Read-only weekly stats panel under the board.

use egui::{vec2, Color32, Rect, RichText, Rounding, Sense, Stroke};

use crate::services::analytics::WeekSummary;

const BAR_MAX_HOURS: f32 = 16.0;

pub fn render_analytics_panel(ui: &mut egui::Ui, summary: &WeekSummary) {
    ui.heading("Weekly Stats");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        stat(ui, "Focus", format!("{}h", summary.productive_hours));
        stat(ui, "Distractions", format!("{}h", summary.unproductive_hours));
        stat(ui, "Sleep", format!("{}h", summary.sleep_hours));
        stat(ui, "Health", format!("{:.0}%", summary.health));
        if let Some(avg) = summary.average_rating {
            stat(ui, "Avg rating", format!("{:.1}", avg));
        }
        if let Some(best) = summary.most_productive_day() {
            stat(ui, "Best day", best.name.to_string());
        }
    });

    ui.add_space(8.0);

    // One focus/distraction bar pair per day
    for day in &summary.days {
        ui.horizontal(|ui| {
            ui.label(RichText::new(day.name).monospace().size(10.0));
            bar(ui, day.productive, Color32::from_rgb(16, 185, 129));
            bar(ui, day.unproductive, Color32::from_rgb(244, 63, 94));
        });
    }
}

fn stat(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).size(9.0).weak());
        ui.label(RichText::new(value).strong());
    });
    ui.add_space(16.0);
}

fn bar(ui: &mut egui::Ui, hours: u32, color: Color32) {
    let full_width = 120.0;
    let width = (hours as f32 / BAR_MAX_HOURS).min(1.0) * full_width;
    let (rect, _) = ui.allocate_exact_size(vec2(full_width, 10.0), Sense::hover());
    ui.painter().rect(
        rect,
        Rounding::same(2.0),
        Color32::from_gray(30),
        Stroke::NONE,
    );
    if width > 0.0 {
        let fill = Rect::from_min_size(rect.min, vec2(width, rect.height()));
        ui.painter().rect_filled(fill, Rounding::same(2.0), color);
    }
}
