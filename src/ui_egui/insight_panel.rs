//! AI critique panel: request button, in-flight spinner, and the
//! score/critique/recommendations result with a retryable error message.

use egui::{Color32, RichText};

use crate::models::insight::AiInsight;

/// What the insight panel asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightPanelAction {
    None,
    RequestInsight,
}

pub struct InsightPanelState {
    pub in_flight: bool,
    pub insight: Option<AiInsight>,
    pub error: Option<String>,
}

impl InsightPanelState {
    pub fn new() -> Self {
        Self {
            in_flight: false,
            insight: None,
            error: None,
        }
    }
}

impl Default for InsightPanelState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_insight_panel(ui: &mut egui::Ui, state: &InsightPanelState) -> InsightPanelAction {
    let mut action = InsightPanelAction::None;

    ui.heading("AI Audit");
    ui.add_space(4.0);

    if state.in_flight {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Analyzing your week…");
        });
        return action;
    }

    if let Some(error) = &state.error {
        ui.colored_label(Color32::from_rgb(244, 63, 94), error);
        if ui.button("Retry").clicked() {
            action = InsightPanelAction::RequestInsight;
        }
        return action;
    }

    match &state.insight {
        Some(insight) => {
            ui.label(
                RichText::new(format!("Score: {}/100", insight.score))
                    .strong()
                    .size(18.0),
            );
            ui.add_space(4.0);
            ui.label(&insight.critique);
            ui.add_space(4.0);
            for recommendation in &insight.recommendations {
                ui.label(format!("• {}", recommendation));
            }
            ui.add_space(6.0);
            if ui.button("Run again").clicked() {
                action = InsightPanelAction::RequestInsight;
            }
        }
        None => {
            ui.label(RichText::new("Get a tough-love critique of this week.").weak());
            if ui.button("🤖 Run AI audit").clicked() {
                action = InsightPanelAction::RequestInsight;
            }
        }
    }

    action
}
