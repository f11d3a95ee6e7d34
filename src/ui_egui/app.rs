//! eframe application shell for the weekly board.

use std::sync::mpsc;

use chrono::{Duration, Local, NaiveDate};

use crate::grid::{editor, DayLabels, SelectionState, TouchAdapter};
use crate::models::insight::AiInsight;
use crate::models::settings::Settings;
use crate::services::analytics::summarize_week;
use crate::services::database::Database;
use crate::services::insight::{spawn_insight_request, InsightError, InsightService};
use crate::services::settings::SettingsService;
use crate::services::slot::{slot_at, SlotService, WeekData};
use crate::utils::date::monday_of_week;

use super::analytics_panel::render_analytics_panel;
use super::edit_menu::{draw_mode_hint, render_edit_menu, EditMenuAction};
use super::insight_panel::{render_insight_panel, InsightPanelAction, InsightPanelState};
use super::views::palette::BoardPalette;
use super::views::week_grid::render_week_grid;

pub struct ChronosApp {
    database: Database,
    settings: Settings,
    /// Monday anchoring the visible week.
    anchor: NaiveDate,
    labels: DayLabels,
    week: WeekData,
    selection: SelectionState,
    touch: TouchAdapter,
    insight_state: InsightPanelState,
    insight_rx: Option<mpsc::Receiver<Result<AiInsight, InsightError>>>,
}

impl ChronosApp {
    pub fn new(cc: &eframe::CreationContext<'_>, database: Database) -> Self {
        let settings = SettingsService::new(&database).get().unwrap_or_else(|err| {
            log::error!("Failed to load settings, using defaults: {}", err);
            Settings::default()
        });
        apply_theme(&cc.egui_ctx, &settings.theme);

        let anchor = monday_of_week(Local::now().date_naive());
        let labels = DayLabels::for_week(anchor);
        let week = load_week(&database, anchor);

        Self {
            database,
            settings,
            anchor,
            labels,
            week,
            selection: SelectionState::new(),
            touch: TouchAdapter::new(),
            insight_state: InsightPanelState::new(),
            insight_rx: None,
        }
    }

    fn reload_week(&mut self) {
        self.week = load_week(&self.database, self.anchor);
    }

    /// Move the visible week and regenerate the day labels. Any pending
    /// selection belongs to the old week and is discarded.
    fn navigate_weeks(&mut self, weeks: i64) {
        self.anchor = self.anchor + Duration::weeks(weeks);
        self.after_navigation();
    }

    fn go_to_today(&mut self) {
        self.anchor = monday_of_week(Local::now().date_naive());
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        self.labels = DayLabels::for_week(self.anchor);
        self.selection.clear();
        self.reload_week();
    }

    fn handle_edit_action(&mut self, action: EditMenuAction) {
        match action {
            EditMenuAction::None => return,
            EditMenuAction::Dismiss => {
                self.selection.clear();
                return;
            }
            EditMenuAction::Apply { category, rating } => {
                let service = SlotService::new(&self.database);
                editor::apply(&mut self.selection, category, rating, |cell, slot| {
                    if let Err(err) = service.set(cell.date, cell.hour, slot) {
                        log::error!("Failed to save slot {} {:02}:00: {}", cell.date, cell.hour, err);
                    }
                });
            }
            EditMenuAction::ApplyRating(rating) => {
                let snapshot = self.week.clone();
                let service = SlotService::new(&self.database);
                editor::apply_rating(
                    &mut self.selection,
                    rating,
                    |cell| slot_at(&snapshot, cell.date, cell.hour),
                    |cell, slot| {
                        if let Err(err) = service.set(cell.date, cell.hour, slot) {
                            log::error!(
                                "Failed to save slot {} {:02}:00: {}",
                                cell.date,
                                cell.hour,
                                err
                            );
                        }
                    },
                );
            }
        }
        self.reload_week();
    }

    fn request_insight(&mut self) {
        match InsightService::from_env() {
            Ok(service) => {
                self.insight_state.in_flight = true;
                self.insight_state.error = None;
                self.insight_rx = Some(spawn_insight_request(service, self.week.clone()));
            }
            Err(err) => {
                self.insight_state.error = Some(err.to_string());
            }
        }
    }

    fn poll_insight(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.insight_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(insight)) => {
                self.insight_state.in_flight = false;
                self.insight_state.insight = Some(insight);
                self.insight_rx = None;
            }
            Ok(Err(err)) => {
                self.insight_state.in_flight = false;
                self.insight_state.error = Some(format!("Failed to fetch AI insights: {}", err));
                self.insight_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {
                // Keep repainting while the worker runs
                ctx.request_repaint();
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.insight_state.in_flight = false;
                self.insight_state.error = Some("Insight worker stopped unexpectedly".to_string());
                self.insight_rx = None;
            }
        }
    }

    fn save_settings(&self) {
        if let Err(err) = SettingsService::new(&self.database).update(&self.settings) {
            log::error!("Failed to save settings: {}", err);
        }
    }

    fn render_nav_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("CHRONOS");
            ui.separator();

            if ui.button("◀").clicked() {
                self.navigate_weeks(-1);
            }
            if ui.button("Today").clicked() {
                self.go_to_today();
            }
            if ui.button("▶").clicked() {
                self.navigate_weeks(1);
            }
            let week_end = self.anchor + Duration::days(6);
            ui.label(format!(
                "{} – {}",
                self.anchor.format("%b %-d"),
                week_end.format("%b %-d, %Y")
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut draw_mode = self.touch.draw_mode();
                if ui
                    .toggle_value(&mut draw_mode, "✏ Draw")
                    .on_hover_text(draw_mode_hint(self.touch.draw_mode()))
                    .changed()
                {
                    self.touch.set_draw_mode(draw_mode);
                }

                let theme_label = if self.settings.theme == "dark" { "☀" } else { "🌙" };
                if ui.button(theme_label).clicked() {
                    self.settings.theme = if self.settings.theme == "dark" {
                        "light".to_string()
                    } else {
                        "dark".to_string()
                    };
                    apply_theme(ctx, &self.settings.theme);
                    self.save_settings();
                }

                let format_label = if self.settings.time_format == "24h" { "24h" } else { "12h" };
                if ui.button(format_label).on_hover_text("Hour label format").clicked() {
                    self.settings.time_format = if self.settings.time_format == "24h" {
                        "12h".to_string()
                    } else {
                        "24h".to_string()
                    };
                    self.save_settings();
                }

                let mut show_analytics = self.settings.show_analytics;
                if ui.toggle_value(&mut show_analytics, "📊").changed() {
                    self.settings.show_analytics = show_analytics;
                    self.save_settings();
                }
            });
        });
    }
}

impl eframe::App for ChronosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_insight(ctx);

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            self.render_nav_bar(ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let palette = BoardPalette::from_theme(&self.settings.theme);
                let grid_rect = render_week_grid(
                    ui,
                    &self.labels,
                    &self.week,
                    &mut self.selection,
                    &self.touch,
                    &palette,
                    &self.settings.time_format,
                );

                let edit_action = render_edit_menu(ctx, grid_rect, &self.selection);
                self.handle_edit_action(edit_action);

                if self.settings.show_analytics {
                    ui.add_space(16.0);
                    render_analytics_panel(ui, &summarize_week(&self.week, self.anchor));
                }

                ui.add_space(16.0);
                if render_insight_panel(ui, &self.insight_state) == InsightPanelAction::RequestInsight
                {
                    self.request_insight();
                }
            });
        });

        // Rectangle updates should track the pointer without waiting for
        // the next input event
        if self.selection.is_selecting() {
            ctx.request_repaint();
        }
    }
}

fn load_week(database: &Database, anchor: NaiveDate) -> WeekData {
    SlotService::new(database)
        .week_data(anchor)
        .unwrap_or_else(|err| {
            log::error!("Failed to load week of {}: {}", anchor, err);
            WeekData::new()
        })
}

fn apply_theme(ctx: &egui::Context, theme: &str) {
    if theme == "light" {
        ctx.set_visuals(egui::Visuals::light());
    } else {
        ctx.set_visuals(egui::Visuals::dark());
    }
}
